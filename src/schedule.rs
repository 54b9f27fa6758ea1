//! Kitchen Schedule

use jiff::{
    Zoned,
    civil::{Date, DateTime, Time},
    tz::TimeZone,
};
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised when checking the kitchen schedule.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// Changes are no longer accepted for today.
    #[error("kitchen is closed, changes are not allowed after {}", .cutoff.strftime("%H:%M"))]
    KitchenClosed {
        /// Today's cutoff instant.
        cutoff: Zoned,
    },

    /// The cutoff or delivery instant could not be built in the kitchen time zone.
    #[error(transparent)]
    Time(#[from] jiff::Error),
}

/// Daily ordering policy: when food is delivered, when changes stop, and how
/// much of the first order of the day is subsidised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KitchenPolicy {
    /// Time of day orders are delivered.
    pub delivery_time: Time,

    /// Time of day after which orders can no longer be placed or changed.
    pub changes_time: Time,

    /// Flat amount taken off the first order of the day.
    pub subvention: Decimal,
}

impl KitchenPolicy {
    /// Create a new policy.
    #[must_use]
    pub const fn new(delivery_time: Time, changes_time: Time, subvention: Decimal) -> Self {
        Self {
            delivery_time,
            changes_time,
            subvention,
        }
    }

    /// Subvention granted to the first order of a day.
    #[must_use]
    pub const fn subvention_amount(&self) -> Decimal {
        self.subvention
    }

    /// The cutoff instant on `now`'s calendar day.
    ///
    /// Only the hour and minute of `changes_time` are used.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::Time`] if the instant cannot be represented in
    /// `now`'s time zone.
    pub fn cutoff(&self, now: &Zoned) -> Result<Zoned, ScheduleError> {
        self.cutoff_on(now.date(), now.time_zone())
    }

    /// The cutoff instant on `date` in `time_zone`.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::Time`] if the instant cannot be represented in
    /// `time_zone`.
    pub fn cutoff_on(&self, date: Date, time_zone: &TimeZone) -> Result<Zoned, ScheduleError> {
        at_hour_minute(date, time_zone, self.changes_time)
    }

    /// Check whether orders may still be placed or changed at `now`.
    ///
    /// The kitchen closes strictly after the cutoff: a change at exactly the
    /// cutoff minute is still accepted.
    ///
    /// # Errors
    ///
    /// - [`ScheduleError::KitchenClosed`]: `now` is past today's cutoff.
    /// - [`ScheduleError::Time`]: the cutoff could not be computed.
    pub fn changes_allowed(&self, now: &Zoned) -> Result<(), ScheduleError> {
        let cutoff = self.cutoff(now)?;

        if now.timestamp() > cutoff.timestamp() {
            return Err(ScheduleError::KitchenClosed { cutoff });
        }

        Ok(())
    }

    /// Today's delivery instant.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::Time`] if the instant cannot be represented in
    /// `now`'s time zone.
    pub fn today_delivery(&self, now: &Zoned) -> Result<Zoned, ScheduleError> {
        at_hour_minute(now.date(), now.time_zone(), self.delivery_time)
    }

    /// Check whether an order delivered on `delivery_date` may still change.
    ///
    /// Only orders for today can change, and only until today's cutoff. An
    /// order for another day reports that day's cutoff.
    ///
    /// # Errors
    ///
    /// - [`ScheduleError::KitchenClosed`]: the order is not for today, or
    ///   `now` is past today's cutoff.
    /// - [`ScheduleError::Time`]: the cutoff could not be computed.
    pub fn order_changes_allowed(
        &self,
        delivery_date: Date,
        now: &Zoned,
    ) -> Result<(), ScheduleError> {
        if delivery_date != now.date() {
            return Err(ScheduleError::KitchenClosed {
                cutoff: self.cutoff_on(delivery_date, now.time_zone())?,
            });
        }

        self.changes_allowed(now)
    }
}

fn at_hour_minute(date: Date, time_zone: &TimeZone, time: Time) -> Result<Zoned, ScheduleError> {
    let at = DateTime::from_parts(date, Time::new(time.hour(), time.minute(), 0, 0)?);

    Ok(at.to_zoned(time_zone.clone())?)
}
