//! Budget categories and their default shares

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A spending or saving bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BudgetCategory {
    Housing,
    Savings,
    Food,
    Transportation,
    Entertainment,
    Utilities,
    Insurance,
    Miscellaneous,
}

impl BudgetCategory {
    /// All categories in reporting order
    pub const ALL: [BudgetCategory; 8] = [
        BudgetCategory::Housing,
        BudgetCategory::Savings,
        BudgetCategory::Food,
        BudgetCategory::Transportation,
        BudgetCategory::Entertainment,
        BudgetCategory::Utilities,
        BudgetCategory::Insurance,
        BudgetCategory::Miscellaneous,
    ];

    /// Share of income assigned when the caller does not override it
    pub fn default_share(&self) -> Decimal {
        match self {
            BudgetCategory::Housing => dec!(0.30),
            BudgetCategory::Savings => dec!(0.20),
            BudgetCategory::Food => dec!(0.15),
            BudgetCategory::Transportation => dec!(0.10),
            BudgetCategory::Entertainment => dec!(0.10),
            BudgetCategory::Utilities => dec!(0.05),
            BudgetCategory::Insurance => dec!(0.05),
            BudgetCategory::Miscellaneous => dec!(0.05),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BudgetCategory::Housing => "housing",
            BudgetCategory::Savings => "savings",
            BudgetCategory::Food => "food",
            BudgetCategory::Transportation => "transportation",
            BudgetCategory::Entertainment => "entertainment",
            BudgetCategory::Utilities => "utilities",
            BudgetCategory::Insurance => "insurance",
            BudgetCategory::Miscellaneous => "miscellaneous",
        }
    }
}

impl fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
