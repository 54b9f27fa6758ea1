//! Promotions Data

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::domain::{dishes::records::DishUuid, promotions::records::PromotionUuid};

/// New Promotion Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPromotion {
    pub uuid: PromotionUuid,
    pub dish_uuid: DishUuid,
    pub start_at: Timestamp,
    pub end_at: Timestamp,
    pub cost: Decimal,
}
