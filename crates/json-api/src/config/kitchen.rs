//! Kitchen Config

use clap::Args;
use jiff::tz::TimeZone;

/// Kitchen clock settings.
#[derive(Debug, Args)]
pub struct KitchenConfig {
    /// IANA time zone the kitchen's cutoff and delivery times are in
    #[arg(long, env = "KITCHEN_TIME_ZONE", default_value = "UTC")]
    pub kitchen_time_zone: String,
}

impl KitchenConfig {
    /// Resolve the configured time zone.
    ///
    /// # Errors
    ///
    /// Returns an error if the zone is unknown to the tz database.
    pub fn time_zone(&self) -> Result<TimeZone, jiff::Error> {
        TimeZone::get(&self.kitchen_time_zone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_zone_is_rejected() {
        let config = KitchenConfig {
            kitchen_time_zone: "Mars/Olympus_Mons".to_string(),
        };

        assert!(config.time_zone().is_err(), "unknown zones must not resolve");
    }

    #[test]
    fn utc_resolves() {
        let config = KitchenConfig {
            kitchen_time_zone: "UTC".to_string(),
        };

        assert!(config.time_zone().is_ok(), "UTC must always resolve");
    }
}
