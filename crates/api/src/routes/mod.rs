pub mod categories;
pub mod health;
pub mod scenes;

use axum::Router;

use crate::state::AppState;

/// All `/api/v1` routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Scene card generation and text classification.
        .nest("/scenes", scenes::router())
        // Fixed category tables.
        .nest("/categories", categories::router())
}
