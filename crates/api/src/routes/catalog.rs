//! Route definitions for option catalogs and preset listings.

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// ```text
/// GET /catalogs              -> list_catalogs
/// GET /catalogs/{category}   -> get_catalog
/// GET /presets/{kind}        -> list_presets
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/catalogs", get(catalog::list_catalogs))
        .route("/catalogs/{category}", get(catalog::get_catalog))
        .route("/presets/{kind}", get(catalog::list_presets))
}
