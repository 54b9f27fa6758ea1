//! Order Data

use jiff::{Timestamp, civil::Date};
use lunchline::pricing::{PricedLine, Totals};
use rust_decimal::Decimal;

use crate::domain::{
    dishes::records::{CurrentCost, DishUuid},
    orders::records::OrderUuid,
    users::records::UserUuid,
};

/// New Order Line Data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewOrderLine {
    pub dish_uuid: DishUuid,
    pub quantity: u32,
}

/// Order listing filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderFilter {
    /// Only orders delivered on this day.
    pub day: Option<Date>,
}

/// Order row to be inserted.
#[derive(Debug, Clone)]
pub(crate) struct OrderDraft {
    pub uuid: OrderUuid,
    pub user_uuid: UserUuid,
    pub delivery_at: Timestamp,
    pub delivery_date: Date,
    pub totals: Totals,
    pub subvention: Decimal,
}

/// A line priced at write time, ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FrozenLine {
    pub dish_uuid: DishUuid,
    pub name: String,
    pub cost_unit: Decimal,
    pub quantity: u32,
}

impl FrozenLine {
    pub(crate) fn new(current: CurrentCost, quantity: u32) -> Self {
        Self {
            dish_uuid: current.dish_uuid,
            name: current.name,
            cost_unit: current.cost,
            quantity,
        }
    }
}

impl PricedLine for FrozenLine {
    fn quantity(&self) -> u32 {
        self.quantity
    }

    fn unit_cost(&self) -> Decimal {
        self.cost_unit
    }
}
