//! Loan amortization tests
//!
//! Covers the level payment, the sparse schedule, payoff dating, extra-payment
//! savings, validation and the ordering of recommendations.

use chrono::NaiveDate;
use core_kernel::{Currency, Rate};
use domain_loan::{calculate_loan, level_payment, LoanError, LoanInput, LoanType};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use test_utils::{InputFixtures, TemporalFixtures};

fn today() -> NaiveDate {
    TemporalFixtures::reference_date()
}

// ============================================================================
// Payment Tests
// ============================================================================

mod payment_tests {
    use super::*;

    #[test]
    fn test_standard_mortgage() {
        let result = calculate_loan(&InputFixtures::mortgage(), today(), Currency::INR).unwrap();

        assert_eq!(result.monthly_payment, dec!(599.55));
        assert_eq!(result.total_payment, dec!(215838.19));
        assert_eq!(result.total_interest, dec!(115838.19));
    }

    #[test]
    fn test_zero_rate_divides_evenly() {
        let input = LoanInput::new(dec!(24000), Decimal::ZERO, dec!(2)).with_type(LoanType::Auto);
        let result = calculate_loan(&input, today(), Currency::INR).unwrap();

        assert_eq!(result.monthly_payment, dec!(1000));
        assert_eq!(result.total_interest, Decimal::ZERO);
        assert!(result
            .amortization_schedule
            .iter()
            .all(|entry| entry.interest == Decimal::ZERO && entry.principal == dec!(1000)));
    }

    #[test]
    fn test_down_payment_reduces_principal() {
        let input = LoanInput::new(dec!(125000), dec!(6), dec!(30)).with_down_payment(dec!(25000));
        let result = calculate_loan(&input, today(), Currency::INR).unwrap();

        assert_eq!(result.monthly_payment, dec!(599.55));
    }
}

// ============================================================================
// Schedule Tests
// ============================================================================

mod schedule_tests {
    use super::*;

    #[test]
    fn test_sparse_yearly_rows() {
        let result = calculate_loan(&InputFixtures::mortgage(), today(), Currency::INR).unwrap();
        let schedule = &result.amortization_schedule;

        assert_eq!(schedule.len(), 31);
        assert_eq!(schedule[0].period, 1);
        assert_eq!(schedule[0].interest, dec!(500.00));
        assert_eq!(schedule[0].principal, dec!(99.55));
        assert_eq!(schedule[1].period, 12);
        assert_eq!(schedule[30].period, 360);
        assert_eq!(schedule[30].balance, Decimal::ZERO);
    }

    #[test]
    fn test_odd_term_reports_final_month() {
        let input = LoanInput::new(dec!(5000), dec!(9), dec!(1.5));
        let result = calculate_loan(&input, today(), Currency::INR).unwrap();

        let periods: Vec<u32> = result.amortization_schedule.iter().map(|e| e.period).collect();
        assert_eq!(periods, vec![1, 12, 18]);
    }

    #[test]
    fn test_payoff_date() {
        let result = calculate_loan(&InputFixtures::mortgage(), today(), Currency::INR).unwrap();
        assert_eq!(result.payoff_date, NaiveDate::from_ymd_opt(2054, 1, 1).unwrap());

        let month_end = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let input = LoanInput::new(dec!(1000), dec!(5), dec!(0.25));
        let result = calculate_loan(&input, month_end, Currency::INR).unwrap();
        assert_eq!(result.payoff_date, NaiveDate::from_ymd_opt(2024, 4, 30).unwrap());
    }

    #[test]
    fn test_payoff_date_serializes_as_iso_date() {
        let result = calculate_loan(&InputFixtures::mortgage(), today(), Currency::INR).unwrap();
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["payoffDate"], "2054-01-01");
        assert!(json.get("interestSavings").is_none());
        assert!(json.get("timeShortened").is_none());
    }
}

// ============================================================================
// Extra Payment Tests
// ============================================================================

mod extra_payment_tests {
    use super::*;

    #[test]
    fn test_extra_two_hundred() {
        let input = InputFixtures::mortgage().with_extra_payment(dec!(200));
        let result = calculate_loan(&input, today(), Currency::INR).unwrap();

        assert_eq!(result.time_shortened, Some(163));
        let savings = result.interest_savings.unwrap();
        assert!((savings - dec!(58451.36)).abs() <= dec!(0.01));
        assert!(result.recommendations.contains(
            &"By making an extra payment of ₹200 each month, you'll save approximately ₹58,451 in interest and pay off your loan 13 years and 7 months earlier."
                .to_string()
        ));
    }

    #[test]
    fn test_zero_rate_extra_payment_saves_time_only() {
        let input = LoanInput::new(dec!(1200), Decimal::ZERO, dec!(1)).with_extra_payment(dec!(100));
        let result = calculate_loan(&input, today(), Currency::INR).unwrap();

        assert_eq!(result.time_shortened, Some(6));
        assert_eq!(result.interest_savings, None);
    }
}

// ============================================================================
// Validation Tests
// ============================================================================

mod validation_tests {
    use super::*;

    #[test]
    fn test_rejects_non_positive_amount() {
        let input = LoanInput::new(Decimal::ZERO, dec!(5), dec!(10));
        assert_eq!(calculate_loan(&input, today(), Currency::INR), Err(LoanError::NonPositiveAmount));
    }

    #[test]
    fn test_rejects_negative_rate() {
        let input = LoanInput::new(dec!(1000), dec!(-1), dec!(10));
        assert_eq!(calculate_loan(&input, today(), Currency::INR), Err(LoanError::NegativeRate));
    }

    #[test]
    fn test_rejects_term_beyond_limit() {
        let input = LoanInput::new(dec!(1000), dec!(5), dec!(101));
        let err = calculate_loan(&input, today(), Currency::INR).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Loan term must be a whole number of months between 1 and 1200");
    }

    #[test]
    fn test_unrepresentable_extra_payment_is_computation_error() {
        let input = InputFixtures::mortgage().with_extra_payment(Decimal::MAX);
        let err = calculate_loan(&input, today(), Currency::INR).unwrap_err();

        assert!(matches!(err, LoanError::Computation(_)));
        assert!(!err.is_validation());
    }

    #[test]
    fn test_rejects_negative_extra_payment() {
        let input = InputFixtures::mortgage().with_extra_payment(dec!(-5));
        assert_eq!(
            calculate_loan(&input, today(), Currency::INR),
            Err(LoanError::NegativeExtraPayment)
        );
    }
}

// ============================================================================
// Recommendation Tests
// ============================================================================

mod recommendation_tests {
    use super::*;

    #[test]
    fn test_expensive_long_mortgage() {
        let input = LoanInput::new(dec!(300000), dec!(7), dec!(30));
        let result = calculate_loan(&input, today(), Currency::INR).unwrap();

        assert_eq!(result.recommendations.len(), 3);
        assert!(result.recommendations[0].starts_with("Your mortgage interest rate is relatively high"));
        assert!(result.recommendations[1].starts_with("While a longer-term mortgage"));
        assert!(result.recommendations[2].starts_with("Consider making extra payments"));
    }

    #[test]
    fn test_education_loan() {
        let input = LoanInput::new(dec!(40000), dec!(5), dec!(10)).with_type(LoanType::Education);
        let result = calculate_loan(&input, today(), Currency::INR).unwrap();

        assert_eq!(result.recommendations.len(), 2);
        assert!(result.recommendations[1].starts_with("Education loans may have special repayment options"));
    }

    #[test]
    fn test_short_mortgage_gets_autopay_tip() {
        let input = LoanInput::new(dec!(100000), dec!(5), dec!(15));
        let result = calculate_loan(&input, today(), Currency::INR).unwrap();

        assert_eq!(result.recommendations.len(), 2);
        assert!(result.recommendations[1].starts_with("Setting up automatic payments"));
    }
}

// ============================================================================
// Property Tests
// ============================================================================

mod proptests {
    use super::*;
    use domain_loan::amortization::schedule;
    use proptest::prelude::*;
    use test_utils::{annual_rate_strategy, loan_type_strategy, positive_amount_strategy, years_strategy};

    proptest! {
        #[test]
        fn level_payment_clears_balance(
            principal in 1_000i64..5_000_000i64,
            rate_bp in 0i64..2_000i64,
            periods in 1u32..=480u32,
        ) {
            let principal = Decimal::from(principal);
            let rate = Rate::from_percentage(Decimal::new(rate_bp, 2)).monthly();
            let payment = level_payment(principal, rate, periods).unwrap();
            let walk = schedule(principal, rate, periods, payment).unwrap();

            prop_assert!(walk.closing_balance.abs() < dec!(0.01));
        }

        #[test]
        fn extra_payment_never_costs_more(
            principal in positive_amount_strategy(),
            rate in annual_rate_strategy(),
            years in years_strategy(),
            extra in 1i64..5_000i64,
            loan_type in loan_type_strategy(),
        ) {
            let input = LoanInput::new(principal, rate, Decimal::from(years))
                .with_type(loan_type)
                .with_extra_payment(Decimal::from(extra));
            let result = calculate_loan(&input, today(), Currency::INR).unwrap();

            prop_assert!(result.time_shortened.is_some());
            prop_assert!(result.interest_savings.unwrap_or_default() >= Decimal::ZERO);
        }
    }
}
