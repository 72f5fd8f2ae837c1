//! Stateless normalization and compilation routes.

use axum::routing::post;
use axum::Router;

use crate::handlers::compile;
use crate::state::AppState;

/// ```text
/// POST /normalize   -> normalize_record
/// POST /compile     -> compile_scene
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/normalize", post(compile::normalize_record))
        .route("/compile", post(compile::compile_scene))
}
