//! Savings handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use domain_savings::{plan_savings, SavingsResult};

use crate::dto::{savings::SavingsRequest, ApiResponse};
use crate::error::{ApiError, Calculator};
use crate::AppState;

/// Projects savings growth and the time or contribution needed for a goal
pub async fn plan(
    State(state): State<AppState>,
    payload: Result<Json<SavingsRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<SavingsResult>>, ApiError> {
    let Json(request) = payload.map_err(|rej| ApiError::computation(Calculator::Savings, rej.body_text()))?;
    let input = request.into_input()?;

    let result = plan_savings(&input, state.clock.now(), state.config.currency)?;
    Ok(Json(ApiResponse::ok(result)))
}
