//! Monetary Arithmetic Module
//!
//! Revenue amounts are summed as exact decimals and rounded once to
//! currency precision before any conversion to a display type. Summing
//! already-rounded floats can drift by fractions of a cent across many
//! records; this module keeps the whole computation in decimal space.

use rust_decimal::{Decimal, RoundingStrategy};

// == Round To Currency ==
/// Rounds an exact decimal amount to two fractional digits.
///
/// Uses round-half-up semantics: a value exactly at the midpoint of two
/// cent values rounds away from zero (999.995 becomes 1000.00, 999.994
/// becomes 999.99). The output always carries exactly two fractional
/// digits.
pub fn round_to_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

// == Sum Amounts ==
/// Sums reservation amounts in exact decimal form.
///
/// Amounts are never passed through binary floating point, so sub-cent
/// line items cannot accumulate drift.
pub fn sum_amounts<I>(amounts: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    amounts.into_iter().sum()
}
