//! Expense aggregation

use core_kernel::rounding::{percentage, round_dp};
use core_kernel::CoreError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ExpenseError;
use crate::expense::{CategoryMap, ExpenseAnalysisInput};
use crate::recommendations::{ExpenseMetrics, EXPENSE_RULES};

/// Number of categories reported in `top_categories`
pub const TOP_CATEGORY_LIMIT: usize = 5;

/// A category with its total and share of all spending
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryShare {
    pub category: String,
    pub amount: Decimal,
    pub percentage: Decimal,
}

/// Spending against a budget limit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetStatus {
    pub limit: Decimal,
    pub spent: Decimal,
    /// Unspent part of the limit, never negative
    pub remaining: Decimal,
    pub percent_used: Decimal,
}

impl BudgetStatus {
    fn new(limit: Decimal, spent: Decimal) -> Result<Self, CoreError> {
        let remaining = limit
            .checked_sub(spent)
            .ok_or_else(|| CoreError::overflow("budget remaining"))?;
        Ok(Self {
            limit,
            spent,
            remaining: remaining.max(Decimal::ZERO),
            percent_used: percentage(spent, limit)?,
        })
    }

    pub fn is_over_budget(&self) -> bool {
        self.percent_used > dec!(100)
    }
}

/// Result of an expense analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseAnalysis {
    pub total_expenses: Decimal,
    pub category_breakdown: CategoryMap<Decimal>,
    pub category_percentages: CategoryMap<Decimal>,
    pub top_categories: Vec<CategoryShare>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_status: Option<CategoryMap<BudgetStatus>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub savings_rate: Option<Decimal>,
    pub recommendations: Vec<String>,
}

fn savings_rate_for(total_expenses: Decimal, income: Decimal) -> Result<Decimal, CoreError> {
    total_expenses
        .checked_div(income)
        .and_then(|spent| Decimal::ONE.checked_sub(spent))
        .and_then(|kept| kept.checked_mul(dec!(100)))
        .map(|rate| round_dp(rate, 1))
        .ok_or_else(|| CoreError::overflow("savings rate"))
}

/// Analyzes a list of expenses
///
/// # Errors
///
/// - `ExpenseError::NoExpenses` if the list is empty
/// - `ExpenseError::NonPositiveLimit` if a budget limit is zero or negative
/// - `ExpenseError::Computation` if a total or share overflows
pub fn analyze_expenses(input: &ExpenseAnalysisInput) -> Result<ExpenseAnalysis, ExpenseError> {
    if input.expenses.is_empty() {
        return Err(ExpenseError::NoExpenses);
    }
    if let Some(limits) = &input.budget_limits {
        if let Some((category, _)) = limits.iter().find(|(_, limit)| **limit <= Decimal::ZERO) {
            return Err(ExpenseError::NonPositiveLimit(category.clone()));
        }
    }

    let mut total_expenses = Decimal::ZERO;
    let mut category_breakdown: CategoryMap<Decimal> = CategoryMap::new();
    for expense in &input.expenses {
        total_expenses = total_expenses
            .checked_add(expense.amount)
            .ok_or_else(|| CoreError::overflow("total expenses"))?;
        let spent = category_breakdown.entry(expense.category_key()).or_insert(Decimal::ZERO);
        *spent = spent
            .checked_add(expense.amount)
            .ok_or_else(|| CoreError::overflow(format!("{} expenses", expense.category_key())))?;
    }

    let category_percentages = category_breakdown
        .iter()
        .map(|(category, amount)| Ok((category.clone(), percentage(*amount, total_expenses)?)))
        .collect::<Result<CategoryMap<Decimal>, CoreError>>()?;

    let mut top_categories: Vec<CategoryShare> = category_breakdown
        .iter()
        .map(|(category, amount)| CategoryShare {
            category: category.clone(),
            amount: *amount,
            percentage: category_percentages.get(category).copied().unwrap_or_default(),
        })
        .collect();
    top_categories.sort_by(|a, b| b.amount.cmp(&a.amount));
    top_categories.truncate(TOP_CATEGORY_LIMIT);

    let budget_status = input
        .budget_limits
        .as_ref()
        .map(|limits| {
            limits
                .iter()
                .map(|(category, limit)| {
                    let spent = category_breakdown
                        .get(&category.to_lowercase())
                        .copied()
                        .unwrap_or_default();
                    Ok((category.clone(), BudgetStatus::new(*limit, spent)?))
                })
                .collect::<Result<CategoryMap<BudgetStatus>, CoreError>>()
        })
        .transpose()?;

    let savings_rate = input
        .monthly_income
        .filter(|income| *income > Decimal::ZERO)
        .map(|income| savings_rate_for(total_expenses, income))
        .transpose()?;

    let metrics = ExpenseMetrics {
        top_category: top_categories.first().cloned(),
        over_budget: budget_status
            .iter()
            .flat_map(|statuses| statuses.iter())
            .filter(|(_, status)| status.is_over_budget())
            .map(|(category, status)| (category.clone(), status.percent_used))
            .collect(),
        savings_rate,
    };
    let recommendations = EXPENSE_RULES.evaluate(&metrics);

    debug!(
        records = input.expenses.len(),
        categories = category_breakdown.len(),
        total = %total_expenses,
        "Expenses analyzed"
    );

    Ok(ExpenseAnalysis {
        total_expenses,
        category_breakdown,
        category_percentages,
        top_categories,
        budget_status,
        savings_rate,
        recommendations,
    })
}
