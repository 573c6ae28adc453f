//! Loan domain errors

use core_kernel::CoreError;
use thiserror::Error;

/// Errors that can occur in the loan domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoanError {
    #[error("Loan amount must be a positive number")]
    NonPositiveAmount,

    #[error("Interest rate cannot be negative")]
    NegativeRate,

    #[error("Loan term must be a whole number of months between 1 and {max_months}")]
    InvalidTerm { max_months: u32 },

    #[error("Down payment must be zero or more and less than the loan amount")]
    InvalidDownPayment,

    #[error("Extra payment cannot be negative")]
    NegativeExtraPayment,

    #[error("Loan calculation failed: {0}")]
    Computation(#[from] CoreError),
}

impl LoanError {
    /// True when the caller supplied unusable input
    pub fn is_validation(&self) -> bool {
        !matches!(self, LoanError::Computation(_))
    }
}
