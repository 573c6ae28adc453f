//! Income allocation

use core_kernel::rounding::round_half_up;
use core_kernel::CoreError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::category::BudgetCategory;
use crate::error::BudgetError;

/// Caller-supplied shares that replace the defaults, as fractions of income
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomAllocation {
    pub housing: Option<Decimal>,
    pub savings: Option<Decimal>,
    pub food: Option<Decimal>,
    pub transportation: Option<Decimal>,
    pub entertainment: Option<Decimal>,
    pub utilities: Option<Decimal>,
    pub insurance: Option<Decimal>,
    pub miscellaneous: Option<Decimal>,
}

impl CustomAllocation {
    /// Returns the override for a category, if one was given
    pub fn share_for(&self, category: BudgetCategory) -> Option<Decimal> {
        match category {
            BudgetCategory::Housing => self.housing,
            BudgetCategory::Savings => self.savings,
            BudgetCategory::Food => self.food,
            BudgetCategory::Transportation => self.transportation,
            BudgetCategory::Entertainment => self.entertainment,
            BudgetCategory::Utilities => self.utilities,
            BudgetCategory::Insurance => self.insurance,
            BudgetCategory::Miscellaneous => self.miscellaneous,
        }
    }

    /// Effective share for a category
    pub fn resolve(&self, category: BudgetCategory) -> Decimal {
        self.share_for(category).unwrap_or_else(|| category.default_share())
    }
}

/// Input for a budget allocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetInput {
    pub monthly_income: Decimal,
    #[serde(default)]
    pub custom_allocation: CustomAllocation,
}

impl BudgetInput {
    pub fn new(monthly_income: Decimal) -> Self {
        Self {
            monthly_income,
            custom_allocation: CustomAllocation::default(),
        }
    }

    pub fn with_allocation(mut self, allocation: CustomAllocation) -> Self {
        self.custom_allocation = allocation;
        self
    }
}

/// Whole-unit amount per category plus totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetResult {
    pub housing: Decimal,
    pub savings: Decimal,
    pub food: Decimal,
    pub transportation: Decimal,
    pub entertainment: Decimal,
    pub utilities: Decimal,
    pub insurance: Decimal,
    pub miscellaneous: Decimal,
    /// Sum of the rounded category amounts
    pub total_allocated: Decimal,
    /// Income minus `total_allocated`; negative when overrides exceed 100%
    pub remaining: Decimal,
}

impl BudgetResult {
    pub fn amount_for(&self, category: BudgetCategory) -> Decimal {
        match category {
            BudgetCategory::Housing => self.housing,
            BudgetCategory::Savings => self.savings,
            BudgetCategory::Food => self.food,
            BudgetCategory::Transportation => self.transportation,
            BudgetCategory::Entertainment => self.entertainment,
            BudgetCategory::Utilities => self.utilities,
            BudgetCategory::Insurance => self.insurance,
            BudgetCategory::Miscellaneous => self.miscellaneous,
        }
    }
}

/// Splits monthly income into category amounts
///
/// Each amount is `round(income × share)`; totals are taken over the rounded
/// amounts.
///
/// # Errors
///
/// Returns `BudgetError::NonPositiveIncome` when income is zero or negative,
/// and `BudgetError::Computation` when an amount overflows.
///
/// # Example
///
/// ```rust
/// use domain_budget::{allocate_budget, BudgetInput};
/// use rust_decimal_macros::dec;
///
/// let result = allocate_budget(&BudgetInput::new(dec!(10000))).unwrap();
/// assert_eq!(result.housing, dec!(3000));
/// assert_eq!(result.remaining, dec!(0));
/// ```
pub fn allocate_budget(input: &BudgetInput) -> Result<BudgetResult, BudgetError> {
    let income = input.monthly_income;
    if income <= Decimal::ZERO {
        return Err(BudgetError::NonPositiveIncome);
    }

    let amount = |category: BudgetCategory| -> Result<Decimal, CoreError> {
        income
            .checked_mul(input.custom_allocation.resolve(category))
            .map(round_half_up)
            .ok_or_else(|| CoreError::overflow(format!("{} allocation", category.name())))
    };

    let mut result = BudgetResult {
        housing: amount(BudgetCategory::Housing)?,
        savings: amount(BudgetCategory::Savings)?,
        food: amount(BudgetCategory::Food)?,
        transportation: amount(BudgetCategory::Transportation)?,
        entertainment: amount(BudgetCategory::Entertainment)?,
        utilities: amount(BudgetCategory::Utilities)?,
        insurance: amount(BudgetCategory::Insurance)?,
        miscellaneous: amount(BudgetCategory::Miscellaneous)?,
        total_allocated: Decimal::ZERO,
        remaining: Decimal::ZERO,
    };

    result.total_allocated = BudgetCategory::ALL
        .iter()
        .try_fold(Decimal::ZERO, |total, c| total.checked_add(result.amount_for(*c)))
        .ok_or_else(|| CoreError::overflow("total allocated"))?;
    result.remaining = income
        .checked_sub(result.total_allocated)
        .ok_or_else(|| CoreError::overflow("remaining income"))?;

    debug!(
        income = %income,
        total_allocated = %result.total_allocated,
        remaining = %result.remaining,
        "Budget allocated"
    );

    Ok(result)
}
