//! Investment DTOs

use domain_investment::{AssetAllocation, CustomReturns, InvestmentInput, RiskProfile};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentRequest {
    pub initial_investment: Option<Decimal>,
    pub monthly_contribution: Option<Decimal>,
    pub years: Option<Decimal>,
    pub risk_profile: Option<RiskProfile>,
    pub allocation: Option<AssetAllocation>,
    pub custom_returns: Option<CustomReturns>,
}

impl InvestmentRequest {
    pub fn into_input(self) -> Result<InvestmentInput, ApiError> {
        let (Some(initial_investment), Some(monthly_contribution), Some(years)) =
            (self.initial_investment, self.monthly_contribution, self.years)
        else {
            return Err(ApiError::validation(
                "Initial investment, monthly contribution, and years are required",
            ));
        };

        Ok(InvestmentInput {
            initial_investment,
            monthly_contribution,
            years,
            risk_profile: self.risk_profile.unwrap_or_default(),
            allocation: self.allocation,
            custom_returns: self.custom_returns.unwrap_or_default(),
        })
    }
}
