//! Expense domain errors

use core_kernel::CoreError;
use thiserror::Error;

/// Errors that can occur in the expense domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExpenseError {
    #[error("Valid expenses array is required")]
    NoExpenses,

    #[error("Budget limit for '{0}' must be a positive number")]
    NonPositiveLimit(String),

    #[error("Expense analysis failed: {0}")]
    Computation(#[from] CoreError),
}

impl ExpenseError {
    /// Whether the caller supplied unusable input
    pub fn is_validation(&self) -> bool {
        !matches!(self, ExpenseError::Computation(_))
    }
}
