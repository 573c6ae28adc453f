//! Savings domain errors

use core_kernel::CoreError;
use thiserror::Error;

/// Errors that can occur in the savings domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SavingsError {
    #[error("Target date '{0}' is not a valid date")]
    InvalidTargetDate(String),

    #[error("Target date must be in the future")]
    PastTargetDate,

    #[error("Target date must be within {max_months} months")]
    DistantTargetDate { max_months: u32 },

    #[error("Savings calculation failed: {0}")]
    Computation(#[from] CoreError),
}

impl SavingsError {
    /// True when the caller supplied unusable input
    pub fn is_validation(&self) -> bool {
        !matches!(self, SavingsError::Computation(_))
    }
}
