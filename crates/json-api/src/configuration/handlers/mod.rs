//! Configuration Handlers

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use lunchline_app::domain::configuration::records::ConfigurationRecord;

use crate::money::format_money;

pub(crate) mod get;
pub(crate) mod update;

/// Configuration Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ConfigurationResponse {
    /// Kitchen-local delivery time, `HH:MM`
    pub delivery_time: String,
    /// Kitchen-local cutoff for placing and changing orders, `HH:MM`
    pub changes_time: String,
    /// Amount deducted from the first order of each day
    pub subvention: String,
    pub updated_at: String,
}

impl From<ConfigurationRecord> for ConfigurationResponse {
    fn from(record: ConfigurationRecord) -> Self {
        ConfigurationResponse {
            delivery_time: record.delivery_time.strftime("%H:%M").to_string(),
            changes_time: record.changes_time.strftime("%H:%M").to_string(),
            subvention: format_money(record.subvention),
            updated_at: record.updated_at.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::{Timestamp, civil::time};
    use rust_decimal_macros::dec;

    use lunchline_app::domain::configuration::records::ConfigurationRecord;

    pub(super) fn make_configuration() -> ConfigurationRecord {
        ConfigurationRecord {
            delivery_time: time(13, 0, 0, 0),
            changes_time: time(10, 30, 0, 0),
            subvention: dec!(2),
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }
}
