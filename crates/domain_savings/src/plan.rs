//! Savings plan

use chrono::{DateTime, Utc};
use core_kernel::rounding::round_dp;
use core_kernel::{CoreError, Currency, Rate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SavingsError;
use crate::goal::{accrue, project_goal, GoalProjection, Milestone};
use crate::horizon::{deserialize_present, GoalHorizon};
use crate::recommendations::{SavingsMetrics, SAVINGS_RULES};
use crate::target::{months_to_target, required_contribution};

/// Length of the baseline projection, ten years
pub const PROJECTION_MONTHS: u32 = 120;

/// Input for a savings plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsInput {
    pub current_savings: Decimal,
    pub monthly_savings: Decimal,
    #[serde(default)]
    pub savings_goal: Option<Decimal>,
    /// `YYYY-MM-DD` or an RFC 3339 timestamp
    #[serde(default)]
    pub target_date: Option<String>,
    /// Annual rate in percent
    #[serde(default)]
    pub interest_rate: Decimal,
}

impl SavingsInput {
    pub fn new(current_savings: Decimal, monthly_savings: Decimal) -> Self {
        Self {
            current_savings,
            monthly_savings,
            savings_goal: None,
            target_date: None,
            interest_rate: Decimal::ZERO,
        }
    }

    pub fn with_goal(mut self, goal: Decimal) -> Self {
        self.savings_goal = Some(goal);
        self
    }

    pub fn with_target_date(mut self, date: impl Into<String>) -> Self {
        self.target_date = Some(date.into());
        self
    }

    pub fn with_interest_rate(mut self, rate: Decimal) -> Self {
        self.interest_rate = rate;
        self
    }

    /// The goal, when one was given and is positive
    fn goal(&self) -> Option<Decimal> {
        self.savings_goal.filter(|goal| *goal > Decimal::ZERO)
    }
}

/// Result of a savings plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsResult {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_present"
    )]
    pub time_to_goal: Option<GoalHorizon>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_amount_needed: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_milestones: Option<Vec<Milestone>>,
    /// Ten-year balance from deposits alone
    pub projected_savings: Decimal,
    /// Ten-year balance with monthly compounding
    pub savings_with_interest: Decimal,
    pub interest_earned: Decimal,
    pub recommendations: Vec<String>,
}

/// Balance after `months` of deposits with monthly compounding
fn compound_balance(current: Decimal, monthly: Decimal, annual_rate: Decimal, months: u32) -> Result<Decimal, CoreError> {
    let monthly_rate = Rate::from_percentage(annual_rate).monthly();
    (0..months).try_fold(current, |balance, _| accrue(balance, monthly, monthly_rate))
}

/// Builds a savings plan as of `now`
///
/// # Errors
///
/// Returns a validation variant of `SavingsError` for a target date that is
/// unparseable, not in the future or too far away, and
/// `SavingsError::Computation` if a balance overflows.
pub fn plan_savings(input: &SavingsInput, now: DateTime<Utc>, currency: Currency) -> Result<SavingsResult, SavingsError> {
    let months_left = input
        .target_date
        .as_deref()
        .map(|date| months_to_target(date, now))
        .transpose()?;

    let goal_projection = input
        .goal()
        .map(|goal| project_goal(input.current_savings, input.monthly_savings, goal, input.interest_rate))
        .transpose()?;

    let monthly_amount_needed = match (input.goal(), months_left) {
        (Some(goal), Some(months)) => {
            let remaining = goal
                .checked_sub(input.current_savings)
                .ok_or_else(|| CoreError::overflow("amount left to save"))?
                .max(Decimal::ZERO);
            Some(required_contribution(remaining, months, input.interest_rate)?)
        }
        _ => None,
    };

    let projected_savings = input
        .monthly_savings
        .checked_mul(Decimal::from(PROJECTION_MONTHS))
        .and_then(|deposits| deposits.checked_add(input.current_savings))
        .ok_or_else(|| CoreError::overflow("projected savings"))?;
    let savings_with_interest = compound_balance(
        input.current_savings,
        input.monthly_savings,
        input.interest_rate,
        PROJECTION_MONTHS,
    )?;
    let interest_earned = savings_with_interest
        .checked_sub(projected_savings)
        .ok_or_else(|| CoreError::overflow("interest earned"))?;

    let (time_to_goal, simple_months, compounded_months, milestones) = match goal_projection {
        Some(GoalProjection {
            horizon,
            simple_months,
            compounded_months,
            milestones,
        }) => (Some(horizon), simple_months, compounded_months, milestones),
        None => (None, None, None, None),
    };

    let metrics = SavingsMetrics {
        horizon: time_to_goal,
        simple_months,
        compounded_months,
        interest_rate: input.interest_rate,
        monthly_savings: input.monthly_savings,
        monthly_amount_needed,
        interest_earned,
        currency,
    };
    let recommendations = SAVINGS_RULES.evaluate(&metrics);

    debug!(
        goal = ?input.savings_goal,
        time_to_goal = ?time_to_goal,
        months_left = ?months_left,
        interest_earned = %interest_earned,
        "Savings planned"
    );

    Ok(SavingsResult {
        time_to_goal,
        monthly_amount_needed,
        monthly_milestones: milestones,
        projected_savings,
        savings_with_interest: round_dp(savings_with_interest, 2),
        interest_earned: round_dp(interest_earned, 2),
        recommendations,
    })
}
