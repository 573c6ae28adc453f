//! Core error types used across the system

use thiserror::Error;

/// Core error type for the kernel
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Arithmetic overflow: {0}")]
    Overflow(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl CoreError {
    pub fn overflow(context: impl Into<String>) -> Self {
        CoreError::Overflow(context.into())
    }

    pub fn invalid_date(message: impl Into<String>) -> Self {
        CoreError::InvalidDate(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        CoreError::Validation(message.into())
    }
}
