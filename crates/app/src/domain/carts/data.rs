//! Cart Data

use crate::domain::dishes::records::DishUuid;

/// New Cart Line Data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewCartLine {
    pub dish_uuid: DishUuid,
    pub quantity: u32,
}
