//! Budget DTOs

use domain_budget::{BudgetError, BudgetInput, CustomAllocation};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetRequest {
    pub monthly_income: Option<Decimal>,
    pub custom_allocation: Option<CustomAllocation>,
}

impl BudgetRequest {
    pub fn into_input(self) -> Result<BudgetInput, ApiError> {
        let income = self
            .monthly_income
            .ok_or_else(|| ApiError::validation(BudgetError::NonPositiveIncome.to_string()))?;
        Ok(BudgetInput::new(income).with_allocation(self.custom_allocation.unwrap_or_default()))
    }
}
