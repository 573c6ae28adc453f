//! Savings planning tests
//!
//! Covers time to goal with and without interest, target-date contributions,
//! the ten-year baseline, validation and the wire shape of the horizon.

use chrono::{DateTime, Utc};
use core_kernel::Currency;
use domain_savings::{plan_savings, GoalHorizon, SavingsError, SavingsInput};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use test_utils::{InputFixtures, TemporalFixtures};

fn now() -> DateTime<Utc> {
    TemporalFixtures::reference_instant()
}

// ============================================================================
// Goal Tests
// ============================================================================

mod goal_tests {
    use super::*;

    #[test]
    fn test_interest_shortens_goal() {
        let result = plan_savings(&InputFixtures::savings_goal(), now(), Currency::INR).unwrap();

        let Some(GoalHorizon::Months(months)) = result.time_to_goal else {
            panic!("goal should be reachable, got {:?}", result.time_to_goal);
        };
        // 29000 left at 500 a month takes 58 months without interest
        assert!(months > 0 && months < 58);
        let milestones = result.monthly_milestones.unwrap();
        assert_eq!(milestones.first().map(|m| m.month), Some(1));
        assert_eq!(milestones.last().map(|m| m.month), Some(months));
        assert!(result.interest_earned > Decimal::ZERO);
    }

    #[test]
    fn test_unreachable_precision_is_computation_error() {
        let input = SavingsInput::new(Decimal::ZERO, dec!(0.000000001))
            .with_goal(dec!(100000000000000000000000));
        let err = plan_savings(&input, now(), Currency::INR).unwrap_err();

        assert!(matches!(err, SavingsError::Computation(_)));
        assert!(!err.is_validation());
    }

    #[test]
    fn test_simple_goal_without_interest() {
        let input = SavingsInput::new(dec!(1000), dec!(500)).with_goal(dec!(10000));
        let result = plan_savings(&input, now(), Currency::INR).unwrap();

        assert_eq!(result.time_to_goal, Some(GoalHorizon::Months(18)));
        assert!(result.monthly_milestones.is_none());
        assert_eq!(result.recommendations.len(), 1);
        assert!(result.recommendations[0].starts_with("Consider setting up automatic transfers"));
    }

    #[test]
    fn test_compounding_reaches_goal_sooner() {
        let input = SavingsInput::new(dec!(1000), dec!(500))
            .with_goal(dec!(30000))
            .with_interest_rate(dec!(8));
        let result = plan_savings(&input, now(), Currency::INR).unwrap();

        assert_eq!(result.time_to_goal, Some(GoalHorizon::Months(49)));
        let milestones = result.monthly_milestones.unwrap();
        assert_eq!(milestones.len(), 10);
        assert_eq!(milestones[0].month, 1);
        assert_eq!(milestones[9].month, 49);
        assert_eq!(milestones[9].savings, dec!(24500));
        assert!(milestones[9].total >= dec!(30000));

        assert_eq!(result.recommendations.len(), 2);
        assert_eq!(
            result.recommendations[0],
            "With a 8% annual interest rate, you'll reach your goal 9 months sooner than without interest."
        );
        assert_eq!(
            result.recommendations[1],
            "Over 10 years, you'll earn approximately ₹32,693 in interest at the current rate."
        );
    }

    #[test]
    fn test_zero_deposit_never_reaches_goal() {
        let input = SavingsInput::new(dec!(1000), Decimal::ZERO).with_goal(dec!(5000));
        let result = plan_savings(&input, now(), Currency::INR).unwrap();

        assert_eq!(result.time_to_goal, Some(GoalHorizon::Unreachable));
        assert!(result.recommendations[0].starts_with("Your monthly savings amount is too low"));

        let json = serde_json::to_value(&result).unwrap();
        assert!(json["timeToGoal"].is_null());
        assert!(json.as_object().unwrap().contains_key("timeToGoal"));
    }

    #[test]
    fn test_long_and_short_horizons() {
        let slow = SavingsInput::new(dec!(0), dec!(100)).with_goal(dec!(10000));
        let result = plan_savings(&slow, now(), Currency::INR).unwrap();
        assert!(result.recommendations[0].starts_with("It will take over 5 years"));

        let fast = SavingsInput::new(dec!(0), dec!(1000)).with_goal(dec!(5000));
        let result = plan_savings(&fast, now(), Currency::INR).unwrap();
        assert_eq!(result.recommendations[0], "You're on track to reach your goal within a year. Great job!");
    }

    #[test]
    fn test_no_goal_omits_horizon() {
        let result = plan_savings(&SavingsInput::new(dec!(1000), dec!(100)), now(), Currency::INR).unwrap();
        let json = serde_json::to_value(&result).unwrap();

        assert!(result.time_to_goal.is_none());
        assert!(json.get("timeToGoal").is_none());
        assert!(json.get("monthlyAmountNeeded").is_none());
        assert!(json.get("monthlyMilestones").is_none());
    }
}

// ============================================================================
// Target Date Tests
// ============================================================================

mod target_date_tests {
    use super::*;

    #[test]
    fn test_shortfall_by_target_date() {
        let input = SavingsInput::new(dec!(1000), dec!(500))
            .with_goal(dec!(10000))
            .with_target_date("2025-01-01");
        let result = plan_savings(&input, now(), Currency::INR).unwrap();

        // 9000 over 13 months
        assert_eq!(result.monthly_amount_needed, Some(dec!(693)));
        assert!(result.recommendations.contains(
            &"To reach your goal by the target date, you need to increase your monthly savings by ₹193.".to_string()
        ));
    }

    #[test]
    fn test_on_track_for_target_date() {
        let input = SavingsInput::new(dec!(1000), dec!(1000))
            .with_goal(dec!(10000))
            .with_target_date("2025-06-01T00:00:00Z");
        let result = plan_savings(&input, now(), Currency::INR).unwrap();

        assert!(result
            .recommendations
            .contains(&"You're on track to reach your savings goal by the target date. Keep it up!".to_string()));
    }

    #[test]
    fn test_target_without_goal_needs_nothing() {
        let input = SavingsInput::new(dec!(1000), dec!(100)).with_target_date("2026-01-01");
        let result = plan_savings(&input, now(), Currency::INR).unwrap();

        assert!(result.monthly_amount_needed.is_none());
    }

    #[test]
    fn test_past_target_rejected_even_with_valid_goal() {
        let input = SavingsInput::new(dec!(1000), dec!(500))
            .with_goal(dec!(10000))
            .with_interest_rate(dec!(3))
            .with_target_date("2023-12-31");
        let err = plan_savings(&input, now(), Currency::INR).unwrap_err();

        assert_eq!(err, SavingsError::PastTargetDate);
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Target date must be in the future");
    }

    #[test]
    fn test_invalid_target_rejected() {
        let input = SavingsInput::new(dec!(1000), dec!(500)).with_target_date("31/12/2030");
        assert!(matches!(
            plan_savings(&input, now(), Currency::INR),
            Err(SavingsError::InvalidTargetDate(_))
        ));
    }
}

// ============================================================================
// Projection Tests
// ============================================================================

mod projection_tests {
    use super::*;

    #[test]
    fn test_ten_year_baseline() {
        let input = SavingsInput::new(Decimal::ZERO, dec!(200)).with_interest_rate(dec!(4));
        let result = plan_savings(&input, now(), Currency::USD).unwrap();

        assert_eq!(result.projected_savings, dec!(24000));
        assert_eq!(result.savings_with_interest, dec!(29449.96));
        assert_eq!(result.interest_earned, dec!(5449.96));
        assert_eq!(
            result.recommendations[0],
            "Over 10 years, you'll earn approximately $5,450 in interest at the current rate."
        );
    }

    #[test]
    fn test_no_interest_means_no_gain() {
        let result = plan_savings(&SavingsInput::new(dec!(500), dec!(50)), now(), Currency::INR).unwrap();

        assert_eq!(result.projected_savings, dec!(6500));
        assert_eq!(result.savings_with_interest, dec!(6500));
        assert_eq!(result.interest_earned, Decimal::ZERO);
    }

    #[test]
    fn test_deserialize_camel_case_input() {
        let input: SavingsInput = serde_json::from_str(
            r#"{"currentSavings": 2500, "monthlySavings": 300, "savingsGoal": 12000, "targetDate": "2027-03-01"}"#,
        )
        .unwrap();

        assert_eq!(input.savings_goal, Some(dec!(12000)));
        assert_eq!(input.interest_rate, Decimal::ZERO);
        assert_eq!(input.target_date.as_deref(), Some("2027-03-01"));
    }
}

// ============================================================================
// Property Tests
// ============================================================================

mod proptests {
    use super::*;
    use proptest::prelude::*;
    use test_utils::{annual_rate_strategy, currency_strategy};

    proptest! {
        #[test]
        fn non_positive_deposit_is_unreachable(
            current in 0i64..100_000i64,
            deposit in -1_000i64..=0i64,
            goal in 1i64..1_000_000i64,
            rate in annual_rate_strategy(),
            currency in currency_strategy(),
        ) {
            let input = SavingsInput::new(Decimal::from(current), Decimal::from(deposit))
                .with_goal(Decimal::from(goal))
                .with_interest_rate(rate);
            let result = plan_savings(&input, now(), currency).unwrap();

            prop_assert_eq!(result.time_to_goal, Some(GoalHorizon::Unreachable));
            prop_assert!(result.recommendations[0].starts_with("Your monthly savings amount is too low"));
        }

        #[test]
        fn zero_rate_never_has_milestones(
            current in 0i64..100_000i64,
            deposit in 1i64..10_000i64,
            goal in 1i64..1_000_000i64,
        ) {
            let input = SavingsInput::new(Decimal::from(current), Decimal::from(deposit))
                .with_goal(Decimal::from(goal));
            let result = plan_savings(&input, now(), Currency::INR).unwrap();

            prop_assert!(result.monthly_milestones.is_none());
            prop_assert!(result.time_to_goal.map_or(false, |h| h.is_reachable()));
        }
    }
}
