//! Request and response DTOs

pub mod budget;
pub mod expenses;
pub mod investments;
pub mod loans;
pub mod savings;

use serde::Serialize;

/// Successful response envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self { success: true, data }
    }
}
