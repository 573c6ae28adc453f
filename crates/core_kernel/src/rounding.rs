//! Rounding helpers
//!
//! Published figures follow two conventions: whole-unit amounts round halves
//! toward positive infinity, while fixed-decimal figures (percentages, cents)
//! round halves away from zero.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::error::CoreError;

/// Rounds to whole units, halves toward positive infinity
///
/// `2.5` becomes `3`, `-2.5` becomes `-2`. Safe at the edges of the decimal
/// range.
pub fn round_half_up(value: Decimal) -> Decimal {
    let strategy = if value.is_sign_negative() {
        RoundingStrategy::MidpointTowardZero
    } else {
        RoundingStrategy::MidpointAwayFromZero
    };
    value.round_dp_with_strategy(0, strategy)
}

/// Rounds to `dp` decimal places, halves away from zero
pub fn round_dp(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds up to the next whole unit
pub fn ceil(value: Decimal) -> Decimal {
    value.ceil()
}

/// Share of `part` in `whole` as a percentage with one decimal place
///
/// Returns zero when `whole` is zero.
///
/// # Errors
///
/// Returns `CoreError::Overflow` when the share does not fit a decimal.
pub fn percentage(part: Decimal, whole: Decimal) -> Result<Decimal, CoreError> {
    if whole.is_zero() {
        return Ok(Decimal::ZERO);
    }
    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(dec!(100)))
        .map(|share| round_dp(share, 1))
        .ok_or_else(|| CoreError::overflow(format!("share of {} in {}", part, whole)))
}

/// Renders a number without trailing zeros (`45.0` → `45`)
pub fn display_number(value: Decimal) -> String {
    value.normalize().to_string()
}
