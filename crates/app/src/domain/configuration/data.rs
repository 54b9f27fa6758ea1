//! Configuration Data

use jiff::civil::Time;
use rust_decimal::Decimal;

/// Partial configuration update. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigurationUpdate {
    pub delivery_time: Option<Time>,
    pub changes_time: Option<Time>,
    pub subvention: Option<Decimal>,
}

impl ConfigurationUpdate {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.delivery_time.is_none() && self.changes_time.is_none() && self.subvention.is_none()
    }
}
