//! Savings DTOs

use domain_savings::SavingsInput;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsRequest {
    pub current_savings: Option<Decimal>,
    pub monthly_savings: Option<Decimal>,
    pub savings_goal: Option<Decimal>,
    pub target_date: Option<String>,
    pub interest_rate: Option<Decimal>,
}

impl SavingsRequest {
    pub fn into_input(self) -> Result<SavingsInput, ApiError> {
        let (Some(current_savings), Some(monthly_savings)) = (self.current_savings, self.monthly_savings) else {
            return Err(ApiError::validation("Current savings and monthly savings are required"));
        };

        Ok(SavingsInput {
            current_savings,
            monthly_savings,
            savings_goal: self.savings_goal,
            target_date: self.target_date,
            interest_rate: self.interest_rate.unwrap_or_default(),
        })
    }
}
