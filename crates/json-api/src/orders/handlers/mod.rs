//! Order Handlers

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use lunchline_app::domain::orders::records::{OrderLineRecord, OrderRecord};

use crate::money::format_money;

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod subvention;

/// Order Line Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderLineResponse {
    pub uuid: Uuid,
    /// Absent once the dish has been removed from the catalog
    pub dish_uuid: Option<Uuid>,
    /// Dish name when the line was ordered
    pub name: String,
    /// Unit cost when the line was ordered
    pub cost_unit: String,
    pub quantity: u32,
}

impl From<OrderLineRecord> for OrderLineResponse {
    fn from(line: OrderLineRecord) -> Self {
        OrderLineResponse {
            uuid: line.uuid.into(),
            dish_uuid: line.dish_uuid.map(Into::into),
            name: line.name,
            cost_unit: format_money(line.cost_unit),
            quantity: line.quantity,
        }
    }
}

/// Order Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderResponse {
    pub uuid: Uuid,
    pub user_uuid: Uuid,
    /// RFC 3339 delivery instant
    pub delivery_at: String,
    /// Kitchen-local delivery day, `YYYY-MM-DD`
    pub delivery_date: String,
    pub cost_total: String,
    pub cost_to_pay: String,
    pub subvention: String,
    pub lines: Vec<OrderLineResponse>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<OrderRecord> for OrderResponse {
    fn from(order: OrderRecord) -> Self {
        OrderResponse {
            uuid: order.uuid.into(),
            user_uuid: order.user_uuid.into(),
            delivery_at: order.delivery_at.to_string(),
            delivery_date: order.delivery_date.to_string(),
            cost_total: format_money(order.cost_total),
            cost_to_pay: format_money(order.cost_to_pay),
            subvention: format_money(order.subvention),
            lines: order.lines.into_iter().map(Into::into).collect(),
            created_at: order.created_at.to_string(),
            updated_at: order.updated_at.to_string(),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use jiff::{Timestamp, civil::date};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use lunchline_app::domain::{
        dishes::records::DishUuid,
        orders::records::{OrderLineRecord, OrderLineUuid, OrderRecord, OrderUuid},
    };

    use crate::test_helpers::TEST_USER;

    /// Order of two 4.50 dishes with a 2.00 subvention.
    pub(crate) fn make_order(uuid: OrderUuid) -> OrderRecord {
        let delivery_at = Timestamp::from_second(1_772_456_400).unwrap_or(Timestamp::UNIX_EPOCH);

        OrderRecord {
            uuid,
            user_uuid: TEST_USER.user_uuid,
            delivery_at,
            delivery_date: date(2026, 3, 2),
            cost_total: dec!(9.00),
            cost_to_pay: dec!(7.00),
            subvention: dec!(2.00),
            lines: vec![OrderLineRecord {
                uuid: OrderLineUuid::new(),
                order_uuid: uuid,
                dish_uuid: Some(DishUuid::new()),
                name: "Lentil Soup".to_string(),
                cost_unit: dec!(4.5),
                quantity: 2,
            }],
            created_at: delivery_at,
            updated_at: delivery_at,
        }
    }

    /// Order without lines or subvention.
    pub(crate) fn make_empty_order(uuid: OrderUuid) -> OrderRecord {
        OrderRecord {
            cost_total: Decimal::ZERO,
            cost_to_pay: Decimal::ZERO,
            subvention: Decimal::ZERO,
            lines: Vec::new(),
            ..make_order(uuid)
        }
    }
}
