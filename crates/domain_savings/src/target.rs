//! Contribution needed to reach a goal by a date

use chrono::{DateTime, Utc};
use core_kernel::rounding::ceil;
use core_kernel::temporal::{months_until, parse_instant};
use core_kernel::{CoreError, Rate};
use rust_decimal::Decimal;

use crate::error::SavingsError;

/// Furthest target date accepted, in months from now
pub const MAX_TARGET_MONTHS: u32 = 1200;

/// Parses a target date and returns the whole months left until it
///
/// # Errors
///
/// - `SavingsError::InvalidTargetDate` if the date cannot be parsed
/// - `SavingsError::PastTargetDate` if it is not after `now`
/// - `SavingsError::DistantTargetDate` if it is more than
///   `MAX_TARGET_MONTHS` away
pub fn months_to_target(target: &str, now: DateTime<Utc>) -> Result<u32, SavingsError> {
    let instant = parse_instant(target).map_err(|_| SavingsError::InvalidTargetDate(target.to_string()))?;
    if instant <= now {
        return Err(SavingsError::PastTargetDate);
    }
    let months = months_until(now, instant).map_err(|_| SavingsError::DistantTargetDate {
        max_months: MAX_TARGET_MONTHS,
    })?;
    if months > MAX_TARGET_MONTHS {
        return Err(SavingsError::DistantTargetDate {
            max_months: MAX_TARGET_MONTHS,
        });
    }
    Ok(months)
}

/// Monthly deposit that grows `remaining` over `months`, rounded up
///
/// With a positive rate this solves `remaining × r / (1 − (1 + r)^−n)`,
/// falling back to the even split when the denominator vanishes.
pub fn required_contribution(remaining: Decimal, months: u32, annual_rate: Decimal) -> Result<Decimal, CoreError> {
    let even_split = || remaining / Decimal::from(months.max(1));

    if annual_rate <= Decimal::ZERO {
        return Ok(ceil(even_split()));
    }

    let monthly_rate = Rate::from_percentage(annual_rate).monthly();
    let denominator = Decimal::ONE - monthly_rate.discount_factor(months)?;
    let payment = if denominator.is_zero() {
        even_split()
    } else {
        remaining
            .checked_mul(monthly_rate.as_decimal())
            .and_then(|v| v.checked_div(denominator))
            .ok_or_else(|| CoreError::overflow("required contribution"))?
    };
    Ok(ceil(payment))
}
