//! Loan handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use domain_loan::{calculate_loan, LoanResult};

use crate::dto::{loans::LoanRequest, ApiResponse};
use crate::error::{ApiError, Calculator};
use crate::AppState;

/// Computes the level payment and amortization schedule
///
/// The payoff date is counted from the state clock's current date.
pub async fn amortize(
    State(state): State<AppState>,
    payload: Result<Json<LoanRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<LoanResult>>, ApiError> {
    let Json(request) = payload.map_err(|rej| ApiError::computation(Calculator::Loans, rej.body_text()))?;
    let input = request.into_input()?;

    let result = calculate_loan(&input, state.clock.today(), state.config.currency)?;
    Ok(Json(ApiResponse::ok(result)))
}
