use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the pool is reference counted internally).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, created at startup and closed on shutdown.
    pub pool: sakila_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
