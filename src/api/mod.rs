//! Coilyard REST API
//!
//! HTTP API layer for the coil inventory, built with Axum.
//!
//! # Endpoints
//!
//! ## Coils
//! - `POST /api/v1/coils` - Register an arriving coil
//! - `GET /api/v1/coils` - Range-filtered search
//! - `GET /api/v1/coils/:id` - Point lookup
//! - `DELETE /api/v1/coils/:id` - Soft delete
//!
//! ## Range variants (backward compatibility)
//! - `GET /api/v1/coils/id` - Filter by id range
//! - `GET /api/v1/coils/length` - Filter by length range
//! - `GET /api/v1/coils/weight` - Filter by weight range
//! - `GET /api/v1/coils/add_date` - Filter by arrival date range
//! - `GET /api/v1/coils/delete_date` - Filter by removal date range
//!
//! ## Statistics
//! - `GET /api/v1/coils/stats` - Interval report
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route(
            "/coils",
            post(routes::coils::create_coil).get(routes::coils::list_coils),
        )
        // Static segments take priority over the :id capture below.
        .route("/coils/stats", get(routes::stats::interval_stats))
        .route("/coils/id", get(routes::ranges::coils_by_id))
        .route("/coils/length", get(routes::ranges::coils_by_length))
        .route("/coils/weight", get(routes::ranges::coils_by_weight))
        .route("/coils/add_date", get(routes::ranges::coils_by_add_date))
        .route(
            "/coils/delete_date",
            get(routes::ranges::coils_by_delete_date),
        )
        .route(
            "/coils/:id",
            get(routes::coils::get_coil).delete(routes::coils::delete_coil),
        );

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| ApiError::Internal(format!("failed to bind {}: {}", addr, e)))?;

    tracing::info!("Coilyard API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Coilyard API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
