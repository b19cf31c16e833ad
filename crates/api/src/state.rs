use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Cheaply cloneable; the pool is internally reference-counted. Handlers
/// receive the store capability through this injected handle rather than a
/// process-wide global, which keeps the repositories testable against any
/// pool they are handed.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: combovault_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
