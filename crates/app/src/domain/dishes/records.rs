//! Dish Records

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::uuids::TypedUuid;

/// Dish UUID
pub type DishUuid = TypedUuid<DishRecord>;

/// Dish Record
#[derive(Debug, Clone)]
pub struct DishRecord {
    pub uuid: DishUuid,
    pub name: String,
    pub description: String,
    pub cost: Decimal,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Cost of a dish at a given instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentCost {
    pub dish_uuid: DishUuid,
    pub name: String,
    pub cost: Decimal,

    /// Whether `cost` comes from an active promotion.
    pub promoted: bool,
}

/// Dish together with its cost at the time it was read.
#[derive(Debug, Clone)]
pub struct DishWithCost {
    pub dish: DishRecord,
    pub current: CurrentCost,
}
