//! Integration tests for the stateless normalize and compile endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, post_json};
use scenecraft_core::compiler::phrases;
use serde_json::json;

// ---------------------------------------------------------------------------
// Test: POST /normalize reconciles legacy aliases
// ---------------------------------------------------------------------------

#[tokio::test]
async fn normalize_promotes_legacy_fields() {
    let app = build_test_app();
    let response = post_json(
        app,
        "/api/v1/normalize",
        json!({
            "content_style": "product_only",
            "shot_type": "fullbody",
            "location": "kitchen",
            "model_age": "none"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let record = &body_json(response).await["data"];
    assert_eq!(record["content_style"], "product");
    assert_eq!(record["camera_shot"], "full_body");
    assert_eq!(record["shot_type"], "full_body");
    assert_eq!(record["setting"], "kitchen");
    assert_eq!(record["location"], "kitchen");
    assert_eq!(record["age_group"], "no_person");
    assert_eq!(record["model_age"], "no_person");
}

// ---------------------------------------------------------------------------
// Test: POST /compile
// ---------------------------------------------------------------------------

#[tokio::test]
async fn compile_product_scene_excludes_people() {
    let app = build_test_app();
    let response = post_json(
        app,
        "/api/v1/compile",
        json!({ "configuration": { "content_style": "product" } }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = &body_json(response).await["data"];
    let prompt = data["prompt"].as_str().unwrap();
    assert!(prompt.contains(phrases::NO_PERSON_DIRECTIVE));
    assert_eq!(data["cost_inputs"]["has_person"], false);
    assert_eq!(data["cost_inputs"]["mode"], "simple");
}

#[tokio::test]
async fn compile_with_reference_uses_preserve_sentence() {
    let app = build_test_app();
    let response = post_json(
        app,
        "/api/v1/compile",
        json!({
            "configuration": { "gender": "female" },
            "reference_image": { "data": "iVBORw==", "mime_type": "image/png" },
            "modes": { "pro_mode": true }
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = &body_json(response).await["data"];
    let prompt = data["prompt"].as_str().unwrap();
    assert!(prompt.contains(phrases::PRESERVE_REFERENCE));
    assert!(!prompt.contains("Gender:"));
    assert!(prompt.contains("Technical:"));
    assert_eq!(data["cost_inputs"]["has_reference_identity"], true);
    assert_eq!(data["cost_inputs"]["mode"], "studio");
}

#[tokio::test]
async fn compile_rejects_unsupported_reference_type() {
    let app = build_test_app();
    let response = post_json(
        app,
        "/api/v1/compile",
        json!({
            "reference_image": { "data": "iVBORw==", "mime_type": "image/gif" }
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}
