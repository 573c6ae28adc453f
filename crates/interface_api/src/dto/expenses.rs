//! Expense DTOs

use domain_expense::{CategoryMap, ExpenseAnalysisInput, ExpenseError, ExpenseRecord};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{ApiError, Calculator};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRequest {
    /// Kept untyped so a non-list is reported as a missing list
    pub expenses: Option<Value>,
    pub monthly_income: Option<Decimal>,
    pub budget_limits: Option<CategoryMap<Decimal>>,
}

impl ExpenseRequest {
    /// Builds the analysis input
    ///
    /// A missing or non-list `expenses` is rejected as a missing list; a list
    /// holding malformed records is a processing failure.
    pub fn into_input(self) -> Result<ExpenseAnalysisInput, ApiError> {
        let expenses = match self.expenses {
            Some(list @ Value::Array(_)) => serde_json::from_value::<Vec<ExpenseRecord>>(list)
                .map_err(|err| ApiError::computation(Calculator::Expenses, err))?,
            _ => return Err(ExpenseError::NoExpenses.into()),
        };
        Ok(ExpenseAnalysisInput {
            expenses,
            monthly_income: self.monthly_income,
            budget_limits: self.budget_limits,
        })
    }
}
