//! Dish Handlers

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use lunchline_app::domain::dishes::records::DishRecord;

use crate::money::format_money;

pub(crate) mod create;
pub(crate) mod get;
pub(crate) mod update;

/// Dish Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DishResponse {
    pub uuid: Uuid,
    pub name: String,
    pub description: String,
    /// Base cost, ignoring promotions
    pub cost: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<DishRecord> for DishResponse {
    fn from(dish: DishRecord) -> Self {
        DishResponse {
            uuid: dish.uuid.into(),
            name: dish.name,
            description: dish.description,
            cost: format_money(dish.cost),
            created_at: dish.created_at.to_string(),
            updated_at: dish.updated_at.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use rust_decimal::Decimal;

    use lunchline_app::domain::dishes::records::{DishRecord, DishUuid};

    pub(super) fn make_dish(uuid: DishUuid, name: &str, cost: Decimal) -> DishRecord {
        DishRecord {
            uuid,
            name: name.to_string(),
            description: String::new(),
            cost,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }
}
