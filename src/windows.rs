//! Promotion Windows
//!
//! A promotion overrides a dish's base cost for a half-open interval of time.

use jiff::Timestamp;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised when building a promotion window.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WindowError {
    /// The window ends at or before it starts.
    #[error("promotion must end after it starts ({start} >= {end})")]
    Empty {
        /// Requested start.
        start: Timestamp,

        /// Requested end.
        end: Timestamp,
    },

    /// The override cost is negative.
    #[error("promotion cost cannot be negative, got {0}")]
    NegativeCost(Decimal),
}

/// A half-open validity window `[start, end)` with an override cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromotionWindow {
    start: Timestamp,
    end: Timestamp,
    cost: Decimal,
}

impl PromotionWindow {
    /// Create a new window.
    ///
    /// # Errors
    ///
    /// - [`WindowError::Empty`]: `end` is not after `start`.
    /// - [`WindowError::NegativeCost`]: `cost` is below zero.
    pub fn new(start: Timestamp, end: Timestamp, cost: Decimal) -> Result<Self, WindowError> {
        if start >= end {
            return Err(WindowError::Empty { start, end });
        }

        if cost.is_sign_negative() && !cost.is_zero() {
            return Err(WindowError::NegativeCost(cost));
        }

        Ok(Self { start, end, cost })
    }

    /// First instant the promotion applies.
    pub const fn start(&self) -> Timestamp {
        self.start
    }

    /// First instant the promotion no longer applies.
    pub const fn end(&self) -> Timestamp {
        self.end
    }

    /// Override cost.
    pub const fn cost(&self) -> Decimal {
        self.cost
    }

    /// Whether the promotion applies at `at`.
    pub fn contains(&self, at: Timestamp) -> bool {
        self.start <= at && at < self.end
    }

    /// Whether the two windows share at least one instant.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// The first window containing `at`, if any.
pub fn active_window<'a, I>(windows: I, at: Timestamp) -> Option<&'a PromotionWindow>
where
    I: IntoIterator<Item = &'a PromotionWindow>,
{
    windows.into_iter().find(|window| window.contains(at))
}

/// Unit cost of a dish at `at`: the cost of the window containing `at`, or
/// `base` when none does.
pub fn resolve_cost<'a, I>(base: Decimal, windows: I, at: Timestamp) -> Decimal
where
    I: IntoIterator<Item = &'a PromotionWindow>,
{
    active_window(windows, at).map_or(base, PromotionWindow::cost)
}

#[cfg(test)]
mod tests {
    use jiff::ToSpan;
    use rust_decimal_macros::dec;
    use testresult::TestResult;

    use super::*;

    fn ts(s: &str) -> Result<Timestamp, jiff::Error> {
        s.parse()
    }

    #[test]
    fn window_is_half_open() -> TestResult {
        let start = ts("2026-03-02T00:00:00Z")?;
        let end = ts("2026-03-03T00:00:00Z")?;
        let window = PromotionWindow::new(start, end, dec!(3.00))?;

        assert!(window.contains(start), "start is inclusive");
        assert!(window.contains(end - 1.nanosecond()), "just before end is inside");
        assert!(!window.contains(end), "end is exclusive");
        assert!(!window.contains(start - 1.nanosecond()), "before start is outside");

        Ok(())
    }

    #[test]
    fn empty_window_is_rejected() -> TestResult {
        let at = ts("2026-03-02T12:00:00Z")?;

        assert_eq!(
            PromotionWindow::new(at, at, dec!(1.00)),
            Err(WindowError::Empty { start: at, end: at })
        );

        Ok(())
    }

    #[test]
    fn negative_cost_is_rejected() -> TestResult {
        let start = ts("2026-03-02T00:00:00Z")?;
        let end = ts("2026-03-03T00:00:00Z")?;

        assert_eq!(
            PromotionWindow::new(start, end, dec!(-1)),
            Err(WindowError::NegativeCost(dec!(-1)))
        );

        Ok(())
    }

    #[test]
    fn adjacent_windows_do_not_overlap() -> TestResult {
        let a = PromotionWindow::new(
            ts("2026-03-01T00:00:00Z")?,
            ts("2026-03-02T00:00:00Z")?,
            dec!(1.00),
        )?;
        let b = PromotionWindow::new(
            ts("2026-03-02T00:00:00Z")?,
            ts("2026-03-03T00:00:00Z")?,
            dec!(2.00),
        )?;

        assert!(!a.overlaps(&b), "touching windows are disjoint");
        assert!(!b.overlaps(&a), "overlap is symmetric");

        Ok(())
    }

    #[test]
    fn nested_windows_overlap() -> TestResult {
        let outer = PromotionWindow::new(
            ts("2026-03-01T00:00:00Z")?,
            ts("2026-03-10T00:00:00Z")?,
            dec!(1.00),
        )?;
        let inner = PromotionWindow::new(
            ts("2026-03-04T00:00:00Z")?,
            ts("2026-03-05T00:00:00Z")?,
            dec!(2.00),
        )?;

        assert!(outer.overlaps(&inner), "inner lies within outer");
        assert!(inner.overlaps(&outer), "overlap is symmetric");

        Ok(())
    }

    #[test]
    fn active_promotion_overrides_base_cost() -> TestResult {
        let windows = [PromotionWindow::new(
            ts("2026-03-02T00:00:00Z")?,
            ts("2026-03-03T00:00:00Z")?,
            dec!(3.00),
        )?];

        assert_eq!(
            resolve_cost(dec!(4.50), &windows, ts("2026-03-02T11:00:00Z")?),
            dec!(3.00),
            "promotion cost should win while active"
        );

        assert_eq!(
            resolve_cost(dec!(4.50), &windows, ts("2026-03-03T00:00:00Z")?),
            dec!(4.50),
            "base cost should return once the promotion expires"
        );

        Ok(())
    }
}
