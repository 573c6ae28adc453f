//! Savings recommendations

use core_kernel::rounding::{display_number, round_half_up};
use core_kernel::{Currency, Rule, RuleSet};
use rust_decimal::Decimal;

use crate::horizon::GoalHorizon;

/// Figures the savings rules look at
#[derive(Debug, Clone)]
pub struct SavingsMetrics {
    pub horizon: Option<GoalHorizon>,
    pub simple_months: Option<u32>,
    pub compounded_months: Option<u32>,
    pub interest_rate: Decimal,
    pub monthly_savings: Decimal,
    pub monthly_amount_needed: Option<Decimal>,
    /// Ten-year interest, unrounded
    pub interest_earned: Decimal,
    pub currency: Currency,
}

fn deposit_too_low(m: &SavingsMetrics) -> Option<String> {
    (m.horizon == Some(GoalHorizon::Unreachable)).then(|| {
        "Your monthly savings amount is too low. Consider increasing your monthly savings to reach your goal.".to_string()
    })
}

fn compounding_gain(m: &SavingsMetrics) -> Option<String> {
    let simple = m.simple_months?;
    let compounded = m.compounded_months?;
    (compounded < simple).then(|| {
        format!(
            "With a {}% annual interest rate, you'll reach your goal {} months sooner than without interest.",
            display_number(m.interest_rate),
            simple - compounded
        )
    })
}

fn goal_horizon(m: &SavingsMetrics) -> Option<String> {
    let months = m.horizon?.months()?;
    if months > 60 {
        Some("It will take over 5 years to reach your goal. Consider increasing your monthly savings or exploring investment options with higher returns.".to_string())
    } else if months < 12 {
        Some("You're on track to reach your goal within a year. Great job!".to_string())
    } else {
        None
    }
}

fn target_pace(m: &SavingsMetrics) -> Option<String> {
    let needed = m.monthly_amount_needed?;
    if needed > m.monthly_savings {
        Some(format!(
            "To reach your goal by the target date, you need to increase your monthly savings by {}.",
            m.currency.format_amount(needed.saturating_sub(m.monthly_savings))
        ))
    } else {
        Some("You're on track to reach your savings goal by the target date. Keep it up!".to_string())
    }
}

fn interest_earned(m: &SavingsMetrics) -> Option<String> {
    (m.interest_earned > Decimal::ZERO).then(|| {
        format!(
            "Over 10 years, you'll earn approximately {} in interest at the current rate.",
            m.currency.format_amount(round_half_up(m.interest_earned))
        )
    })
}

const CHECKS: &[Rule<SavingsMetrics>] = &[
    deposit_too_low,
    compounding_gain,
    goal_horizon,
    target_pace,
    interest_earned,
];

/// Savings rules in evaluation order
pub const SAVINGS_RULES: RuleSet<SavingsMetrics> = RuleSet::new(
    CHECKS,
    "Consider setting up automatic transfers to your savings account to maintain consistent savings habits.",
);
