//! Time handling for date-dependent calculations
//!
//! Loan payoff dates and savings target dates depend on "now". Calculators
//! never read the system clock themselves; callers pass a `Clock` so results
//! are reproducible in tests.

use chrono::{DateTime, Months, NaiveDate, NaiveTime, TimeZone, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::fmt;

use crate::error::CoreError;

/// Average number of days in a month used for date differences
pub const AVERAGE_DAYS_PER_MONTH: Decimal = dec!(30.44);

const MILLIS_PER_DAY: Decimal = dec!(86400000);

/// Source of the current instant
pub trait Clock: Send + Sync + fmt::Debug {
    /// Returns the current instant in UTC
    fn now(&self) -> DateTime<Utc>;

    /// Returns the current calendar date in UTC
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Clock backed by the operating system
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a single instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    /// Creates a clock frozen at midnight UTC of the given date
    pub fn at_date(date: NaiveDate) -> Self {
        Self(start_of_day(date))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Midnight UTC at the start of `date`
pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
}

/// Parses a date supplied by a caller
///
/// Accepts a plain `YYYY-MM-DD` date (interpreted as midnight UTC) or an
/// RFC 3339 timestamp.
pub fn parse_instant(value: &str) -> Result<DateTime<Utc>, CoreError> {
    let trimmed = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(start_of_day(date));
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| CoreError::invalid_date(format!("'{}' is not an ISO 8601 date", value)))
}

/// Adds calendar months to a date
///
/// The day is clamped to the last day of the target month (Jan 31 + 1 month
/// is Feb 28 or 29).
pub fn add_months(date: NaiveDate, months: u32) -> Result<NaiveDate, CoreError> {
    date.checked_add_months(Months::new(months))
        .ok_or_else(|| CoreError::invalid_date(format!("{} plus {} months is out of range", date, months)))
}

/// Number of average-length months from `from` until `to`, rounded up
///
/// Returns zero when `to` is not after `from`.
pub fn months_until(from: DateTime<Utc>, to: DateTime<Utc>) -> Result<u32, CoreError> {
    let millis = (to - from).num_milliseconds();
    if millis <= 0 {
        return Ok(0);
    }
    let months = (Decimal::from(millis) / (MILLIS_PER_DAY * AVERAGE_DAYS_PER_MONTH)).ceil();
    months
        .to_u32()
        .ok_or_else(|| CoreError::invalid_date(format!("{} months is out of range", months)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock::at_date(date(2024, 3, 15));
        assert_eq!(clock.today(), date(2024, 3, 15));
        assert_eq!(clock.now(), Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_instant_plain_date() {
        let parsed = parse_instant("2025-06-01").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_instant_rfc3339() {
        let parsed = parse_instant("2025-06-01T12:30:00+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 6, 1, 10, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_instant_rejects_garbage() {
        assert!(matches!(parse_instant("next tuesday"), Err(CoreError::InvalidDate(_))));
    }

    #[test]
    fn test_add_months_clamps_day() {
        assert_eq!(add_months(date(2024, 1, 31), 1).unwrap(), date(2024, 2, 29));
        assert_eq!(add_months(date(2024, 1, 15), 360).unwrap(), date(2054, 1, 15));
    }

    #[test]
    fn test_months_until() {
        let from = start_of_day(date(2024, 1, 1));
        assert_eq!(months_until(from, start_of_day(date(2025, 1, 1))).unwrap(), 13);
        assert_eq!(months_until(from, start_of_day(date(2024, 1, 31))).unwrap(), 1);
        assert_eq!(months_until(from, from).unwrap(), 0);
    }
}
