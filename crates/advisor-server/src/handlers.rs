//! HTTP Handlers

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use advisor_core::AdvisorError;
use advisor_session::{run_review, ReviewInput, ReviewOutcome};

use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub risk_levels: usize,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        risk_levels: state.reference.len(),
    })
}

/// Single-shot portfolio review endpoint
///
/// Validation failures are the caller's problem (422); configuration
/// failures mean the review cannot proceed at all (500). Neither is retried.
pub async fn review_handler(
    State(state): State<AppState>,
    Json(payload): Json<ReviewInput>,
) -> Result<Json<ReviewOutcome>, (StatusCode, Json<ErrorResponse>)> {
    run_review(&payload, &state.reference, state.tolerance)
        .map(Json)
        .map_err(reject)
}

fn reject(err: AdvisorError) -> (StatusCode, Json<ErrorResponse>) {
    let (status, code) = if err.is_validation() {
        (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR")
    } else {
        (StatusCode::INTERNAL_SERVER_ERROR, "CONFIGURATION_ERROR")
    };
    tracing::warn!("review rejected: {err}");

    (
        status,
        Json(ErrorResponse {
            error: err.user_message(),
            code: code.into(),
        }),
    )
}
