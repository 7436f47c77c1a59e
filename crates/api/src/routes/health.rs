use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` when the database answers, `degraded` otherwise.
    pub status: &'static str,
    /// Crate name, so one probe can tell wikkit apart from its neighbours.
    pub service: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the database answered `SELECT 1`.
    pub db_healthy: bool,
    /// Open connections currently held by the pool.
    pub db_pool_size: u32,
    /// How many of those are idle.
    pub db_pool_idle: usize,
}

/// GET /health -- service identity plus database reachability and pool stats.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = wikkit_db::health_check(&state.pool).await.is_ok();

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        db_pool_size: state.pool.size(),
        db_pool_idle: state.pool.num_idle(),
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v2`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
