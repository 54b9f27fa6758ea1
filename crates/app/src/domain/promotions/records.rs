//! Promotions Records

use jiff::Timestamp;
use lunchline::windows::{PromotionWindow, WindowError};
use rust_decimal::Decimal;

use crate::{domain::dishes::records::DishUuid, uuids::TypedUuid};

/// Promotion UUID
pub type PromotionUuid = TypedUuid<PromotionRecord>;

/// Promotion Record
#[derive(Debug, Clone)]
pub struct PromotionRecord {
    pub uuid: PromotionUuid,
    pub dish_uuid: DishUuid,
    pub start_at: Timestamp,
    pub end_at: Timestamp,
    pub cost: Decimal,
    pub created_at: Timestamp,
}

impl PromotionRecord {
    /// Validity window of this promotion.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored window is empty or the cost negative.
    pub fn window(&self) -> Result<PromotionWindow, WindowError> {
        PromotionWindow::new(self.start_at, self.end_at, self.cost)
    }
}
