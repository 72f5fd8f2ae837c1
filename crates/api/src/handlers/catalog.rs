//! Handlers for option catalogs and preset listings.

use axum::extract::Path;
use axum::response::IntoResponse;
use axum::Json;
use scenecraft_core::catalog::{CatalogOption, Category};
use scenecraft_core::error::CoreError;
use serde::Serialize;

use crate::error::AppResult;
use crate::handlers::parse_preset_kind;
use crate::response::DataResponse;

/// One category catalog as returned to clients.
#[derive(Debug, Serialize)]
pub struct CatalogView {
    pub category: Category,
    pub group: &'static str,
    pub default_value: &'static str,
    pub options: &'static [CatalogOption],
}

impl From<Category> for CatalogView {
    fn from(category: Category) -> Self {
        Self {
            category,
            group: category.group(),
            default_value: category.default_value(),
            options: category.options(),
        }
    }
}

/// GET /api/v1/catalogs
pub async fn list_catalogs() -> AppResult<impl IntoResponse> {
    let catalogs: Vec<CatalogView> = Category::ALL.iter().copied().map(Into::into).collect();
    Ok(Json(DataResponse { data: catalogs }))
}

/// GET /api/v1/catalogs/{category}
pub async fn get_catalog(Path(category): Path<String>) -> AppResult<impl IntoResponse> {
    let category: Category = category.parse().map_err(|_| CoreError::NotFound {
        entity: "Category",
        id: category.clone(),
    })?;
    Ok(Json(DataResponse {
        data: CatalogView::from(category),
    }))
}

/// GET /api/v1/presets/{kind}
pub async fn list_presets(Path(kind): Path<String>) -> AppResult<impl IntoResponse> {
    let kind = parse_preset_kind(&kind)?;
    Ok(Json(DataResponse {
        data: kind.presets(),
    }))
}
