//! Expense records and analysis input

use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Category-keyed figures in first-seen order
pub type CategoryMap<V> = IndexMap<String, V>;

/// A single spending entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRecord {
    /// Free-text category; grouped case-insensitively
    pub category: String,
    pub amount: Decimal,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ExpenseRecord {
    pub fn new(category: impl Into<String>, amount: Decimal, date: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            amount,
            date: date.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Grouping key for this record
    pub fn category_key(&self) -> String {
        self.category.to_lowercase()
    }
}

/// Input for an expense analysis
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseAnalysisInput {
    pub expenses: Vec<ExpenseRecord>,
    #[serde(default)]
    pub monthly_income: Option<Decimal>,
    /// Spending limits keyed by category, in the caller's order
    #[serde(default)]
    pub budget_limits: Option<CategoryMap<Decimal>>,
}

impl ExpenseAnalysisInput {
    pub fn new(expenses: Vec<ExpenseRecord>) -> Self {
        Self {
            expenses,
            monthly_income: None,
            budget_limits: None,
        }
    }

    pub fn with_income(mut self, income: Decimal) -> Self {
        self.monthly_income = Some(income);
        self
    }

    pub fn with_limit(mut self, category: impl Into<String>, limit: Decimal) -> Self {
        self.budget_limits
            .get_or_insert_with(CategoryMap::new)
            .insert(category.into(), limit);
        self
    }
}
