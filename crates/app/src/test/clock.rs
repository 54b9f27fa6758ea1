//! Test Clock

use std::sync::RwLock;

use jiff::{Span, Zoned, civil::date, tz::TimeZone};

use crate::clock::Clock;

/// Kitchen-local instant on the default test day (2026-03-02, UTC).
///
/// # Panics
///
/// Panics if `hour` or `minute` are out of range.
pub(crate) fn kitchen_time(hour: i8, minute: i8) -> Zoned {
    date(2026, 3, 2)
        .at(hour, minute, 0, 0)
        .to_zoned(TimeZone::UTC)
        .expect("test instant should be representable")
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub(crate) struct FixedClock {
    now: RwLock<Zoned>,
}

impl FixedClock {
    pub(crate) fn new(now: Zoned) -> Self {
        Self {
            now: RwLock::new(now),
        }
    }

    pub(crate) fn set(&self, now: Zoned) {
        *self.now.write().expect("clock lock poisoned") = now;
    }

    pub(crate) fn advance(&self, span: Span) {
        let mut now = self.now.write().expect("clock lock poisoned");

        *now = now.checked_add(span).expect("clock advanced out of range");
    }
}

impl Default for FixedClock {
    fn default() -> Self {
        Self::new(kitchen_time(10, 0))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Zoned {
        self.now.read().expect("clock lock poisoned").clone()
    }
}
