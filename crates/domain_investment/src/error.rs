//! Investment domain errors

use core_kernel::CoreError;
use thiserror::Error;

/// Errors that can occur in the investment domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvestmentError {
    #[error("Years must be a whole number between 1 and {max}")]
    InvalidYears { max: u32 },

    #[error("Allocation percentages must not all be zero")]
    EmptyAllocation,

    #[error("Projection failed: {0}")]
    Computation(#[from] CoreError),
}

impl InvestmentError {
    /// True when the caller supplied unusable input
    pub fn is_validation(&self) -> bool {
        !matches!(self, InvestmentError::Computation(_))
    }
}
