//! Budget domain errors

use core_kernel::CoreError;
use thiserror::Error;

/// Errors that can occur in the budget domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BudgetError {
    #[error("Monthly income must be a positive number")]
    NonPositiveIncome,

    #[error("Budget allocation failed: {0}")]
    Computation(#[from] CoreError),
}

impl BudgetError {
    /// Whether the caller supplied unusable input
    pub fn is_validation(&self) -> bool {
        !matches!(self, BudgetError::Computation(_))
    }
}
