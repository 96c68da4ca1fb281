//! portfolio-advisor HTTP Server
//!
//! Axum-based server exposing the allocation decision engine as a stateless,
//! single-shot review endpoint. Each request carries a full set of inputs and
//! leaves nothing behind; timeouts and cancellation belong to the transport.

mod handlers;
mod state;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use advisor_core::DEFAULT_TOLERANCE;
use advisor_session::ReferenceBook;

use crate::handlers::{health_check, review_handler};
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    // Reference allocations are mandatory; refuse to start without them.
    let reference = Arc::new(ReferenceBook::from_env()?);
    tracing::info!("✓ Loaded reference allocations for {} risk levels", reference.len());

    let tolerance = match std::env::var("TOLERANCE_PCT") {
        Ok(raw) => raw
            .parse()
            .map_err(|_| anyhow::anyhow!("TOLERANCE_PCT must be a number, got {raw:?}"))?,
        Err(_) => DEFAULT_TOLERANCE,
    };
    tracing::info!("Deviation tolerance: {tolerance} percentage points");

    let state = AppState {
        reference,
        tolerance,
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        .route("/health", get(health_check))
        .route("/api/review", post(review_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("portfolio-advisor server running on http://{}", addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health      - Health check");
    tracing::info!("  POST /api/review  - Single-shot portfolio review");

    axum::serve(listener, app).await?;

    Ok(())
}
