//! HTTP API Layer
//!
//! This crate exposes the five planning calculators as a JSON API using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: one per calculator plus a liveness probe
//! - **DTOs**: request payloads with required-field checks, and the response
//!   envelope
//! - **Middleware**: request IDs, tracing spans, CORS, request logging
//! - **Error Handling**: validation failures map to 400, computation faults
//!   to 500 with a generic message
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use core_kernel::SystemClock;
//! use interface_api::{config::ApiConfig, create_router};
//!
//! let app = create_router(ApiConfig::default(), Arc::new(SystemClock));
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
    middleware as axum_middleware,
};
use core_kernel::Clock;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::middleware::request_logging;
use crate::handlers::{budget, expenses, health, investments, loans, savings};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    /// Source of "now" for payoff dates and target-date math
    pub clock: Arc<dyn Clock>,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `config` - API configuration
/// * `clock` - Clock used by the date-dependent calculators
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(config: ApiConfig, clock: Arc<dyn Clock>) -> Router {
    let state = AppState { config, clock };

    let api_routes = Router::new()
        .route("/budget", post(budget::allocate))
        .route("/expenses", post(expenses::analyze))
        .route("/investments", post(investments::project))
        .route("/loans", post(loans::amortize))
        .route("/savings", post(savings::plan));

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", api_routes)
        .layer(axum_middleware::from_fn(request_logging))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}
