//! Dish Data

use rust_decimal::Decimal;

use crate::domain::dishes::records::DishUuid;

/// New Dish Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDish {
    pub uuid: DishUuid,
    pub name: String,
    pub description: String,
    pub cost: Decimal,
}

/// Dish Update Data. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DishUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub cost: Option<Decimal>,
}
