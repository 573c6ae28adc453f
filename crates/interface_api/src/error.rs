//! API error handling

use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain_budget::BudgetError;
use domain_expense::ExpenseError;
use domain_investment::InvestmentError;
use domain_loan::LoanError;
use domain_savings::SavingsError;
use serde::Serialize;
use thiserror::Error;

/// The calculator a request was addressed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Calculator {
    Budget,
    Expenses,
    Investments,
    Loans,
    Savings,
}

impl Calculator {
    /// Message returned when a request fails for reasons other than input
    pub fn failure_message(&self) -> &'static str {
        match self {
            Calculator::Budget => "Failed to process budget calculation",
            Calculator::Expenses => "Failed to process expense analysis",
            Calculator::Investments => "Failed to process investment calculation",
            Calculator::Loans => "Failed to process loan calculation",
            Calculator::Savings => "Failed to process savings calculation",
        }
    }
}

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Computation error in {calculator:?}: {detail}")]
    Computation { calculator: Calculator, detail: String },
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    pub fn computation(calculator: Calculator, detail: impl fmt::Display) -> Self {
        ApiError::Computation {
            calculator,
            detail: detail.to_string(),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, "validation_error", msg.clone()),
            ApiError::Computation { calculator, detail } => {
                tracing::error!(calculator = ?calculator, detail = %detail, "Calculation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "computation_error",
                    calculator.failure_message().to_string(),
                )
            }
        };

        let body = ErrorResponse {
            success: false,
            error: error_type.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<BudgetError> for ApiError {
    fn from(err: BudgetError) -> Self {
        if err.is_validation() {
            ApiError::Validation(err.to_string())
        } else {
            ApiError::computation(Calculator::Budget, err)
        }
    }
}

impl From<ExpenseError> for ApiError {
    fn from(err: ExpenseError) -> Self {
        if err.is_validation() {
            ApiError::Validation(err.to_string())
        } else {
            ApiError::computation(Calculator::Expenses, err)
        }
    }
}

impl From<InvestmentError> for ApiError {
    fn from(err: InvestmentError) -> Self {
        if err.is_validation() {
            ApiError::Validation(err.to_string())
        } else {
            ApiError::computation(Calculator::Investments, err)
        }
    }
}

impl From<LoanError> for ApiError {
    fn from(err: LoanError) -> Self {
        if err.is_validation() {
            ApiError::Validation(err.to_string())
        } else {
            ApiError::computation(Calculator::Loans, err)
        }
    }
}

impl From<SavingsError> for ApiError {
    fn from(err: SavingsError) -> Self {
        if err.is_validation() {
            ApiError::Validation(err.to_string())
        } else {
            ApiError::computation(Calculator::Savings, err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::CoreError;

    #[test]
    fn test_domain_validation_maps_to_validation() {
        let err: ApiError = LoanError::NegativeRate.into();
        assert!(matches!(err, ApiError::Validation(msg) if msg == "Interest rate cannot be negative"));
    }

    #[test]
    fn test_overflow_maps_to_computation() {
        let err: ApiError = InvestmentError::Computation(CoreError::overflow("portfolio value")).into();
        assert!(matches!(
            err,
            ApiError::Computation {
                calculator: Calculator::Investments,
                ..
            }
        ));
    }

    #[test]
    fn test_budget_and_expense_overflow_map_to_computation() {
        let budget: ApiError = BudgetError::Computation(CoreError::overflow("total allocated")).into();
        assert!(matches!(
            budget,
            ApiError::Computation {
                calculator: Calculator::Budget,
                ..
            }
        ));

        let expense: ApiError = ExpenseError::Computation(CoreError::overflow("total expenses")).into();
        assert!(matches!(
            expense,
            ApiError::Computation {
                calculator: Calculator::Expenses,
                ..
            }
        ));

        let empty: ApiError = ExpenseError::NoExpenses.into();
        assert!(matches!(empty, ApiError::Validation(msg) if msg == "Valid expenses array is required"));
    }

    #[test]
    fn test_computation_response_hides_detail() {
        let response = ApiError::computation(Calculator::Loans, "secret detail").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
