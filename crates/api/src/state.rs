use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Holds configuration only; scene generation itself is stateless.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}
