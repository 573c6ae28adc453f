//! Expense handlers

use axum::{extract::rejection::JsonRejection, Json};
use domain_expense::{analyze_expenses, ExpenseAnalysis};

use crate::dto::{expenses::ExpenseRequest, ApiResponse};
use crate::error::{ApiError, Calculator};

/// Aggregates expense records and checks them against budget limits
pub async fn analyze(
    payload: Result<Json<ExpenseRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<ExpenseAnalysis>>, ApiError> {
    let Json(request) = payload.map_err(|rej| ApiError::computation(Calculator::Expenses, rej.body_text()))?;

    let analysis = analyze_expenses(&request.into_input()?)?;
    Ok(Json(ApiResponse::ok(analysis)))
}
