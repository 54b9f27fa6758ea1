//! Clock
//!
//! Services never read the system time directly; they ask a [`Clock`] for the
//! current instant in the kitchen's time zone.

use std::fmt::Debug;

use jiff::{Timestamp, Zoned, tz::TimeZone};

pub trait Clock: Debug + Send + Sync {
    /// Current instant in the kitchen time zone.
    fn now(&self) -> Zoned;
}

/// Wall clock in a fixed kitchen time zone.
#[derive(Debug, Clone)]
pub struct SystemClock {
    time_zone: TimeZone,
}

impl SystemClock {
    #[must_use]
    pub fn new(time_zone: TimeZone) -> Self {
        Self { time_zone }
    }

    #[must_use]
    pub fn time_zone(&self) -> &TimeZone {
        &self.time_zone
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new(TimeZone::system())
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Zoned {
        Timestamp::now().to_zoned(self.time_zone.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_reports_configured_zone() {
        let clock = SystemClock::new(TimeZone::UTC);

        assert_eq!(
            clock.now().time_zone(),
            &TimeZone::UTC,
            "clock should report instants in its kitchen zone"
        );
    }
}
