use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// Handlers receive their dependencies exclusively through this struct; there
/// is no process-global client anywhere.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: wikkit_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// HTTP client for the external file-share service.
    pub http: reqwest::Client,
}
