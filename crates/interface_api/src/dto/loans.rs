//! Loan DTOs

use domain_loan::{LoanInput, LoanType};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanRequest {
    pub loan_amount: Option<Decimal>,
    pub interest_rate: Option<Decimal>,
    pub loan_term: Option<Decimal>,
    pub loan_type: Option<LoanType>,
    pub down_payment: Option<Decimal>,
    pub extra_payment: Option<Decimal>,
}

impl LoanRequest {
    pub fn into_input(self) -> Result<LoanInput, ApiError> {
        let (Some(loan_amount), Some(interest_rate), Some(loan_term)) =
            (self.loan_amount, self.interest_rate, self.loan_term)
        else {
            return Err(ApiError::validation(
                "Loan amount, interest rate, and loan term are required",
            ));
        };

        Ok(LoanInput {
            loan_amount,
            interest_rate,
            loan_term,
            loan_type: self.loan_type.unwrap_or_default(),
            down_payment: self.down_payment.unwrap_or_default(),
            extra_payment: self.extra_payment.unwrap_or_default(),
        })
    }
}
