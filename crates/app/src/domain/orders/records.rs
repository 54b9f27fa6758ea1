//! Order Records

use jiff::{Timestamp, civil::Date};
use lunchline::pricing::PricedLine;
use rust_decimal::Decimal;

use crate::{
    domain::{dishes::records::DishUuid, users::records::UserUuid},
    uuids::TypedUuid,
};

/// Order UUID
pub type OrderUuid = TypedUuid<OrderRecord>;

/// Order Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRecord {
    pub uuid: OrderUuid,
    pub user_uuid: UserUuid,
    pub delivery_at: Timestamp,

    /// Kitchen-local day the order is delivered on.
    pub delivery_date: Date,
    pub cost_total: Decimal,
    pub cost_to_pay: Decimal,

    /// Subvention granted to this order when it was placed.
    pub subvention: Decimal,
    pub lines: Vec<OrderLineRecord>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Order Line UUID
pub type OrderLineUuid = TypedUuid<OrderLineRecord>;

/// A frozen order line. `name` and `cost_unit` are copied from the dish when
/// the line is written and never follow later catalog changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLineRecord {
    pub uuid: OrderLineUuid,
    pub order_uuid: OrderUuid,
    pub dish_uuid: Option<DishUuid>,
    pub name: String,
    pub cost_unit: Decimal,
    pub quantity: u32,
}

impl PricedLine for OrderLineRecord {
    fn quantity(&self) -> u32 {
        self.quantity
    }

    fn unit_cost(&self) -> Decimal {
        self.cost_unit
    }
}
