//! Stateless endpoints: normalize a record or compile a one-off scene
//! without creating a storyboard.

use axum::response::IntoResponse;
use axum::Json;
use scenecraft_core::cost::CostInputs;
use scenecraft_core::identity::{IdentityPackage, ReferenceImage};
use scenecraft_core::product::ProductAsset;
use scenecraft_core::scene::{ModeFlags, Scene};
use scenecraft_core::{normalize, ConfigurationRecord};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::response::DataResponse;

/// Base64-encoded reference image as sent by clients.
#[derive(Debug, Deserialize)]
pub struct ReferenceImageInput {
    pub data: String,
    pub mime_type: String,
}

impl ReferenceImageInput {
    pub fn decode(&self) -> AppResult<ReferenceImage> {
        Ok(ReferenceImage::from_base64(&self.data, &self.mime_type)?)
    }
}

#[derive(Debug, Deserialize)]
pub struct CompileRequest {
    #[serde(default)]
    pub configuration: ConfigurationRecord,
    pub reference_image: Option<ReferenceImageInput>,
    #[serde(default)]
    pub products: Vec<ProductAsset>,
    #[serde(default)]
    pub modes: ModeFlags,
}

#[derive(Debug, Serialize)]
pub struct CompileResponse {
    pub prompt: String,
    pub configuration: ConfigurationRecord,
    pub cost_inputs: CostInputs,
}

/// POST /api/v1/normalize
pub async fn normalize_record(
    Json(record): Json<ConfigurationRecord>,
) -> AppResult<impl IntoResponse> {
    Ok(Json(DataResponse {
        data: normalize(record),
    }))
}

/// POST /api/v1/compile
pub async fn compile_scene(Json(input): Json<CompileRequest>) -> AppResult<impl IntoResponse> {
    let reference = input
        .reference_image
        .as_ref()
        .map(ReferenceImageInput::decode)
        .transpose()?;

    let configuration = normalize(input.configuration);
    let mut scene = Scene::new(0, "Preview");
    scene.identity = IdentityPackage::derive(&configuration, reference, false);
    scene.configuration = configuration;
    scene.mode_flags = input.modes;

    let prompt = scene.compile(&input.products);
    tracing::debug!(
        products = input.products.len(),
        chars = prompt.len(),
        "One-off scene compiled"
    );

    Ok(Json(DataResponse {
        data: CompileResponse {
            prompt,
            cost_inputs: scene.cost_inputs(),
            configuration: scene.configuration,
        },
    }))
}
