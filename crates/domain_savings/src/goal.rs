//! Time to reach a savings goal

use core_kernel::rounding::{ceil, round_dp};
use core_kernel::{CoreError, Rate};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::horizon::GoalHorizon;

/// Cap on the compounding simulation, 50 years
pub const MAX_SIMULATED_MONTHS: u32 = 600;

const MILESTONE_INTERVAL: u32 = 6;

/// Snapshot of the balance on the way to a goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub month: u32,
    /// Deposits made so far, excluding the starting balance
    pub savings: Decimal,
    /// Interest accrued so far
    pub interest: Decimal,
    pub total: Decimal,
}

/// How a goal is reached
#[derive(Debug, Clone, PartialEq)]
pub struct GoalProjection {
    pub horizon: GoalHorizon,
    /// Months needed from deposits alone
    pub simple_months: Option<u32>,
    /// Months needed with compounding, when a positive rate was given
    pub compounded_months: Option<u32>,
    pub milestones: Option<Vec<Milestone>>,
}

/// Adds one month of interest on `balance` plus a deposit
pub(crate) fn accrue(balance: Decimal, deposit: Decimal, monthly_rate: Rate) -> Result<Decimal, CoreError> {
    let interest = monthly_rate.interest_on(balance)?;
    balance
        .checked_add(deposit)
        .and_then(|b| b.checked_add(interest))
        .ok_or_else(|| CoreError::overflow("savings balance"))
}

fn whole_months(value: Decimal) -> Result<u32, CoreError> {
    ceil(value)
        .to_u32()
        .ok_or_else(|| CoreError::overflow(format!("{} months to goal", value)))
}

/// Projects when `goal` is reached from `current` with a fixed deposit
///
/// A non-positive deposit never reaches the goal. With a positive rate the
/// balance is compounded month by month, recording a milestone in the first
/// month, every sixth month and the month the goal is reached.
pub fn project_goal(
    current: Decimal,
    monthly: Decimal,
    goal: Decimal,
    annual_rate: Decimal,
) -> Result<GoalProjection, CoreError> {
    if monthly <= Decimal::ZERO {
        return Ok(GoalProjection {
            horizon: GoalHorizon::Unreachable,
            simple_months: None,
            compounded_months: None,
            milestones: None,
        });
    }

    let remaining = goal
        .checked_sub(current)
        .ok_or_else(|| CoreError::overflow("amount left to save"))?
        .max(Decimal::ZERO);
    let simple_months = remaining
        .checked_div(monthly)
        .ok_or_else(|| CoreError::overflow(format!("{} left at {} a month", remaining, monthly)))
        .and_then(whole_months)?;

    if annual_rate <= Decimal::ZERO {
        return Ok(GoalProjection {
            horizon: GoalHorizon::Months(simple_months),
            simple_months: Some(simple_months),
            compounded_months: None,
            milestones: None,
        });
    }

    let monthly_rate = Rate::from_percentage(annual_rate).monthly();
    let mut balance = current;
    let mut month = 0u32;
    let mut milestones = Vec::new();

    while balance < goal && month < MAX_SIMULATED_MONTHS {
        balance = accrue(balance, monthly, monthly_rate)?;
        month += 1;

        if month % MILESTONE_INTERVAL == 0 || month == 1 || balance >= goal {
            let deposits = monthly
                .checked_mul(Decimal::from(month))
                .ok_or_else(|| CoreError::overflow("deposits to date"))?;
            let interest = balance
                .checked_sub(current)
                .and_then(|growth| growth.checked_sub(deposits))
                .ok_or_else(|| CoreError::overflow("interest to date"))?;
            milestones.push(Milestone {
                month,
                savings: round_dp(deposits, 2),
                interest: round_dp(interest, 2),
                total: round_dp(balance, 2),
            });
        }
    }

    Ok(GoalProjection {
        horizon: GoalHorizon::Months(month),
        simple_months: Some(simple_months),
        compounded_months: Some(month),
        milestones: Some(milestones),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_no_deposit_is_unreachable() {
        let projection = project_goal(dec!(100), Decimal::ZERO, dec!(1000), dec!(5)).unwrap();
        assert_eq!(projection.horizon, GoalHorizon::Unreachable);
        assert!(projection.milestones.is_none());
    }

    #[test]
    fn test_simple_months_round_up() {
        let projection = project_goal(dec!(0), dec!(300), dec!(1000), Decimal::ZERO).unwrap();
        assert_eq!(projection.horizon, GoalHorizon::Months(4));
        assert!(projection.milestones.is_none());
    }

    #[test]
    fn test_goal_already_met() {
        let projection = project_goal(dec!(5000), dec!(100), dec!(1000), dec!(4)).unwrap();
        assert_eq!(projection.horizon, GoalHorizon::Months(0));
        assert_eq!(projection.simple_months, Some(0));
        assert_eq!(projection.milestones, Some(Vec::new()));
    }

    #[test]
    fn test_milestone_months() {
        let projection = project_goal(dec!(0), dec!(100), dec!(1500), dec!(6)).unwrap();
        let months: Vec<u32> = projection
            .milestones
            .unwrap()
            .iter()
            .map(|m| m.month)
            .collect();
        // 100 × (1.005^k − 1) / 0.005 first passes 1500 at k = 15
        assert_eq!(months, vec![1, 6, 12, 15]);
        assert_eq!(projection.horizon, GoalHorizon::Months(15));
    }

    #[test]
    fn test_tiny_deposit_against_huge_goal_overflows() {
        let err = project_goal(dec!(0), dec!(0.000000001), dec!(100000000000000000000000), dec!(0)).unwrap_err();
        assert!(matches!(err, CoreError::Overflow(_)));
    }

    #[test]
    fn test_unrepresentable_gap_overflows() {
        let err = project_goal(Decimal::MIN, dec!(100), Decimal::MAX, dec!(0)).unwrap_err();
        assert!(matches!(err, CoreError::Overflow(_)));
    }

    #[test]
    fn test_simulation_capped_at_fifty_years() {
        let projection = project_goal(dec!(0), dec!(1), dec!(100000000), dec!(1)).unwrap();
        assert_eq!(projection.horizon, GoalHorizon::Months(MAX_SIMULATED_MONTHS));
    }
}
