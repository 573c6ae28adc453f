//! Investment handlers

use axum::{extract::rejection::JsonRejection, Json};
use domain_investment::{project_investment, InvestmentResult};

use crate::dto::{investments::InvestmentRequest, ApiResponse};
use crate::error::{ApiError, Calculator};

/// Projects portfolio growth year by year
pub async fn project(
    payload: Result<Json<InvestmentRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<InvestmentResult>>, ApiError> {
    let Json(request) =
        payload.map_err(|rej| ApiError::computation(Calculator::Investments, rej.body_text()))?;
    let input = request.into_input()?;

    let result = project_investment(&input)?;
    Ok(Json(ApiResponse::ok(result)))
}
