//! Configuration Records

use jiff::{Timestamp, civil::Time};
use lunchline::schedule::KitchenPolicy;
use rust_decimal::Decimal;

/// Configuration Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationRecord {
    pub delivery_time: Time,
    pub changes_time: Time,
    pub subvention: Decimal,
    pub updated_at: Timestamp,
}

impl ConfigurationRecord {
    /// Kitchen policy described by this configuration.
    #[must_use]
    pub fn policy(&self) -> KitchenPolicy {
        KitchenPolicy::new(self.delivery_time, self.changes_time, self.subvention)
    }
}
