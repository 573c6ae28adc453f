//! Unit tests for the temporal module
//!
//! Tests cover clocks, date parsing, calendar month arithmetic and
//! average-month differences.

use chrono::{NaiveDate, TimeZone, Utc};
use core_kernel::temporal::{add_months, months_until, parse_instant, start_of_day};
use core_kernel::{Clock, FixedClock, SystemClock};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

mod clocks {
    use super::*;

    #[test]
    fn test_fixed_clock_is_stable() {
        let instant = Utc.with_ymd_and_hms(2024, 7, 4, 9, 30, 0).unwrap();
        let clock = FixedClock::new(instant);
        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.today(), date(2024, 7, 4));
    }

    #[test]
    fn test_system_clock_moves_forward() {
        let clock = SystemClock;
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }
}

mod month_arithmetic {
    use super::*;

    #[test]
    fn test_add_months_across_year_end() {
        assert_eq!(add_months(date(2024, 11, 15), 3).unwrap(), date(2025, 2, 15));
    }

    #[test]
    fn test_add_months_end_of_month() {
        assert_eq!(add_months(date(2023, 3, 31), 1).unwrap(), date(2023, 4, 30));
    }

    #[test]
    fn test_add_zero_months() {
        assert_eq!(add_months(date(2024, 2, 29), 0).unwrap(), date(2024, 2, 29));
    }

    #[test]
    fn test_months_until_rounds_up() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let target = start_of_day(date(2024, 1, 2));
        assert_eq!(months_until(now, target).unwrap(), 1);
    }

    #[test]
    fn test_months_until_past_is_zero() {
        let now = start_of_day(date(2024, 6, 1));
        let target = start_of_day(date(2024, 1, 1));
        assert_eq!(months_until(now, target).unwrap(), 0);
    }

    #[test]
    fn test_parse_instant_trims_whitespace() {
        assert_eq!(parse_instant(" 2030-01-01 ").unwrap(), start_of_day(date(2030, 1, 1)));
    }
}
