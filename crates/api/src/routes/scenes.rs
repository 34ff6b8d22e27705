//! Route definitions for scene card generation.
//!
//! ```text
//! POST   /            generate_scenes
//! POST   /classify    classify_text
//! ```

use axum::routing::post;
use axum::Router;

use crate::handlers::scenes;
use crate::state::AppState;

/// Scene routes -- mounted at `/scenes`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(scenes::generate_scenes))
        .route("/classify", post(scenes::classify_text))
}
