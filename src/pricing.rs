//! Pricing
//!
//! Order totals are computed from frozen lines and the subvention granted to
//! the order. All arithmetic is exact decimal arithmetic; amounts are kept at
//! [`MONEY_SCALE`] fractional digits.

use rust_decimal::Decimal;
use thiserror::Error;

/// Number of fractional digits carried by monetary amounts.
pub const MONEY_SCALE: u32 = 2;

/// Errors that can occur while pricing an order.
#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    /// A line carried a negative unit cost (line index, cost).
    #[error("line {0} has a negative unit cost of {1}")]
    NegativeUnitCost(usize, Decimal),

    /// The subvention amount was negative.
    #[error("subvention cannot be negative, got {0}")]
    NegativeSubvention(Decimal),

    /// A line or running total overflowed the decimal range.
    #[error("order total overflowed")]
    Overflow,
}

/// A line that can be priced: a quantity of something at a unit cost.
pub trait PricedLine {
    /// Number of units on the line.
    fn quantity(&self) -> u32;

    /// Cost of a single unit, captured when the line was written.
    fn unit_cost(&self) -> Decimal;
}

/// A plain quantity/unit cost pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCost {
    /// Number of units.
    pub quantity: u32,

    /// Cost of a single unit.
    pub unit_cost: Decimal,
}

impl LineCost {
    /// Create a new line cost.
    #[must_use]
    pub const fn new(quantity: u32, unit_cost: Decimal) -> Self {
        Self {
            quantity,
            unit_cost,
        }
    }
}

impl PricedLine for LineCost {
    fn quantity(&self) -> u32 {
        self.quantity
    }

    fn unit_cost(&self) -> Decimal {
        self.unit_cost
    }
}

/// Totals of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    /// Sum of `quantity * unit_cost` over every line.
    pub cost_total: Decimal,

    /// Amount left to pay once the subvention has been applied. Never negative.
    pub cost_to_pay: Decimal,
}

impl Totals {
    /// Totals of an order with no lines.
    pub const ZERO: Self = Self {
        cost_total: Decimal::ZERO,
        cost_to_pay: Decimal::ZERO,
    };
}

/// Round an amount to [`MONEY_SCALE`] fractional digits.
#[must_use]
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp(MONEY_SCALE)
}

/// Compute the total and payable amounts for the given lines.
///
/// `cost_to_pay` is `cost_total - subvention`, floored at zero.
///
/// # Errors
///
/// - [`PricingError::NegativeSubvention`]: the subvention was below zero.
/// - [`PricingError::NegativeUnitCost`]: a line had a unit cost below zero.
/// - [`PricingError::Overflow`]: the total does not fit in a [`Decimal`].
pub fn compute_totals<L: PricedLine>(
    lines: &[L],
    subvention: Decimal,
) -> Result<Totals, PricingError> {
    if subvention.is_sign_negative() && !subvention.is_zero() {
        return Err(PricingError::NegativeSubvention(subvention));
    }

    let cost_total = lines
        .iter()
        .enumerate()
        .try_fold(Decimal::ZERO, |acc, (i, line)| {
            let unit_cost = line.unit_cost();

            if unit_cost.is_sign_negative() && !unit_cost.is_zero() {
                return Err(PricingError::NegativeUnitCost(i, unit_cost));
            }

            unit_cost
                .checked_mul(Decimal::from(line.quantity()))
                .and_then(|line_total| acc.checked_add(line_total))
                .ok_or(PricingError::Overflow)
        })?;

    let cost_to_pay = cost_total
        .checked_sub(subvention)
        .ok_or(PricingError::Overflow)?
        .max(Decimal::ZERO);

    Ok(Totals {
        cost_total: round_money(cost_total),
        cost_to_pay: round_money(cost_to_pay),
    })
}
