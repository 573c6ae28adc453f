//! Spending recommendations

use core_kernel::rounding::display_number;
use core_kernel::{Rule, RuleSet};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::analysis::CategoryShare;

/// Share of total spending above which the top category is flagged
pub const TOP_CATEGORY_THRESHOLD: Decimal = dec!(30);

/// Savings rate below which saving more is suggested
pub const LOW_SAVINGS_RATE: Decimal = dec!(10);

/// Savings rate above which investing the surplus is suggested
pub const HIGH_SAVINGS_RATE: Decimal = dec!(30);

/// Figures the spending rules look at
#[derive(Debug, Clone)]
pub struct ExpenseMetrics {
    pub top_category: Option<CategoryShare>,
    /// Over-budget categories with their percent used, in limit order
    pub over_budget: Vec<(String, Decimal)>,
    pub savings_rate: Option<Decimal>,
}

fn dominant_category(m: &ExpenseMetrics) -> Option<String> {
    let top = m.top_category.as_ref()?;
    (top.percentage > TOP_CATEGORY_THRESHOLD).then(|| {
        format!(
            "Your {} expenses account for {}% of your total spending. Consider reducing this by 10-15% to improve your financial balance.",
            top.category,
            display_number(top.percentage)
        )
    })
}

fn exceeded_budget(m: &ExpenseMetrics) -> Option<String> {
    let (category, percent_used) = m.over_budget.first()?;
    Some(format!(
        "You've exceeded your {} budget by {:.1}%. Try to adjust your spending in this category for the rest of the month.",
        category,
        *percent_used - dec!(100)
    ))
}

fn savings_rate(m: &ExpenseMetrics) -> Option<String> {
    let rate = m.savings_rate?;
    if rate < LOW_SAVINGS_RATE {
        Some(format!(
            "Your current savings rate is {}%, which is below the recommended 15-20%. Consider increasing your savings to build a stronger financial foundation.",
            display_number(rate)
        ))
    } else if rate > HIGH_SAVINGS_RATE {
        Some(format!(
            "Your savings rate of {}% is excellent! You might consider investing some of your savings for long-term growth.",
            display_number(rate)
        ))
    } else {
        None
    }
}

const CHECKS: &[Rule<ExpenseMetrics>] = &[dominant_category, exceeded_budget, savings_rate];

/// Spending rules in evaluation order
pub const EXPENSE_RULES: RuleSet<ExpenseMetrics> = RuleSet::new(
    CHECKS,
    "Track your expenses consistently to identify patterns and opportunities for saving.",
);
