//! Budget handlers

use axum::{extract::rejection::JsonRejection, Json};
use domain_budget::{allocate_budget, BudgetResult};

use crate::dto::{budget::BudgetRequest, ApiResponse};
use crate::error::{ApiError, Calculator};

/// Splits a monthly income into category amounts
pub async fn allocate(
    payload: Result<Json<BudgetRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<BudgetResult>>, ApiError> {
    let Json(request) = payload.map_err(|rej| ApiError::computation(Calculator::Budget, rej.body_text()))?;
    let input = request.into_input()?;

    let result = allocate_budget(&input)?;
    Ok(Json(ApiResponse::ok(result)))
}
