//! Integration tests for the storyboard endpoints: scene lifecycle, edits,
//! identity linking, presets, compilation and snapshot restore.

mod common;

use axum::http::StatusCode;
use axum::Router;
use common::{body_json, build_test_app, create_storyboard, delete, get, post_json, put_json};
use scenecraft_core::compiler::phrases;
use serde_json::{json, Value};

/// Add scenes until the storyboard holds `total`.
async fn grow_to(app: &Router, id: &str, total: usize) -> Value {
    let mut storyboard = body_json(get(app.clone(), &format!("/api/v1/storyboards/{id}")).await)
        .await["data"]
        .clone();
    while storyboard["scenes"].as_array().unwrap().len() < total {
        let response = post_json(app.clone(), &format!("/api/v1/storyboards/{id}/scenes"), json!({})).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        storyboard = body_json(response).await["data"].clone();
    }
    storyboard
}

async fn edit(app: &Router, id: &str, category: &str, value: &str) -> Value {
    let response = post_json(
        app.clone(),
        &format!("/api/v1/storyboards/{id}/edits"),
        json!({ "category": category, "value": value }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["data"].clone()
}

async fn select(app: &Router, id: &str, scene_id: u64) {
    let response = put_json(
        app.clone(),
        &format!("/api/v1/storyboards/{id}/active"),
        json!({ "scene_id": scene_id }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Test: create and fetch
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_storyboard_starts_with_one_unlinked_scene() {
    let app = build_test_app();
    let response = post_json(app.clone(), "/api/v1/storyboards", json!({})).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let data = &body_json(response).await["data"];
    assert!(data["id"].is_string());
    assert_eq!(data["scenes"].as_array().unwrap().len(), 1);
    assert_eq!(data["active_index"], 0);
    assert_eq!(data["link"]["state"], "unlinked");

    let id = data["id"].as_str().unwrap();
    let response = get(app, &format!("/api/v1/storyboards/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["id"], id);
}

#[tokio::test]
async fn get_unknown_storyboard_returns_404() {
    let app = build_test_app();
    let id = "00000000-0000-0000-0000-000000000000";
    let response = get(app, &format!("/api/v1/storyboards/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["error"], format!("Storyboard with id {id} not found"));
}

// ---------------------------------------------------------------------------
// Test: scene count bounds
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fifth_scene_is_rejected() {
    let app = build_test_app();
    let id = create_storyboard(&app).await;
    grow_to(&app, &id, 4).await;

    let response = post_json(app, &format!("/api/v1/storyboards/{id}/scenes"), json!({})).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "CONFLICT");
}

#[tokio::test]
async fn deleting_the_only_scene_is_rejected() {
    let app = build_test_app();
    let id = create_storyboard(&app).await;

    let response = delete(app, &format!("/api/v1/storyboards/{id}/scenes/1")).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn duplicate_and_rename_scene() {
    let app = build_test_app();
    let id = create_storyboard(&app).await;

    let response = post_json(
        app.clone(),
        &format!("/api/v1/storyboards/{id}/scenes/1/duplicate"),
        json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let scenes = body_json(response).await["data"]["scenes"].clone();
    assert_eq!(scenes.as_array().unwrap().len(), 2);
    assert_eq!(scenes[1]["configuration"], scenes[0]["configuration"]);

    let scene_id = scenes[1]["id"].as_u64().unwrap();
    let response = put_json(
        app.clone(),
        &format!("/api/v1/storyboards/{id}/scenes/{scene_id}"),
        json!({ "label": "Close-up" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["scenes"][1]["label"], "Close-up");

    let response = put_json(
        app,
        &format!("/api/v1/storyboards/{id}/scenes/{scene_id}"),
        json!({ "label": "   " }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Test: identity linking over HTTP
// ---------------------------------------------------------------------------

#[tokio::test]
async fn linking_broadcasts_primary_identity() {
    let app = build_test_app();
    let id = create_storyboard(&app).await;
    grow_to(&app, &id, 3).await;
    select(&app, &id, 1).await;
    edit(&app, &id, "hair_color", "red").await;

    let response = put_json(
        app.clone(),
        &format!("/api/v1/storyboards/{id}/link"),
        json!({ "enabled": true }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let data = body_json(response).await["data"].clone();
    assert_eq!(data["linked"], true);
    assert_eq!(data["storyboard"]["link"]["state"], "linked");
    for scene in data["storyboard"]["scenes"].as_array().unwrap() {
        assert_eq!(scene["configuration"]["hair_color"], "red");
        assert_eq!(scene["identity"]["lock_enabled"], true);
    }

    let data = edit(&app, &id, "hair_color", "black").await;
    assert_eq!(data["outcome"], "broadcast");
    assert_eq!(data["scenes"], 2);

    select(&app, &id, 2).await;
    let data = edit(&app, &id, "hair_color", "blonde").await;
    assert_eq!(data["outcome"], "rejected");
    assert_eq!(data["storyboard"]["scenes"][1]["configuration"]["hair_color"], "black");

    let data = edit(&app, &id, "setting", "gym").await;
    assert_eq!(data["outcome"], "applied");
}

#[tokio::test]
async fn linking_a_product_only_board_is_a_noop() {
    let app = build_test_app();
    let id = create_storyboard(&app).await;
    edit(&app, &id, "age_group", "no_person").await;

    let response = put_json(
        app,
        &format!("/api/v1/storyboards/{id}/link"),
        json!({ "enabled": true }),
    )
    .await;
    let data = body_json(response).await["data"].clone();
    assert_eq!(data["linked"], false);
    assert_eq!(data["storyboard"]["link"]["state"], "unlinked");
}

#[tokio::test]
async fn reference_attach_validates_and_detaches() {
    let app = build_test_app();
    let id = create_storyboard(&app).await;
    let uri = format!("/api/v1/storyboards/{id}/reference");

    let response = put_json(
        app.clone(),
        &uri,
        json!({ "data": "iVBORw==", "mime_type": "application/pdf" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = put_json(
        app.clone(),
        &uri,
        json!({ "data": "iVBORw==", "mime_type": "image/png" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let data = body_json(response).await["data"].clone();
    assert_eq!(data["outcome"], "applied");
    assert_eq!(
        data["storyboard"]["scenes"][0]["identity"]["reference_image"]["data"],
        "iVBORw=="
    );

    let response = post_json(app.clone(), &format!("/api/v1/storyboards/{id}/compile"), json!({})).await;
    let prompt = body_json(response).await["data"]["prompt"].clone();
    assert!(prompt.as_str().unwrap().contains(phrases::PRESERVE_REFERENCE));

    let response = delete(app, &uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    let data = body_json(response).await["data"].clone();
    assert!(data["storyboard"]["scenes"][0]["identity"]["reference_image"].is_null());
}

// ---------------------------------------------------------------------------
// Test: presets
// ---------------------------------------------------------------------------

#[tokio::test]
async fn preview_then_apply_supplement_preset() {
    let app = build_test_app();
    let id = create_storyboard(&app).await;

    let response = get(
        app.clone(),
        &format!("/api/v1/storyboards/{id}/presets/supplement/bedside_wellness/preview"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let diffs = body_json(response).await["data"].clone();
    assert!(diffs
        .as_array()
        .unwrap()
        .iter()
        .any(|d| d["category"] == "setting" && d["preset_value"] == "bedroom"));

    let response = post_json(
        app.clone(),
        &format!("/api/v1/storyboards/{id}/presets/supplement/bedside_wellness"),
        json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let data = body_json(response).await["data"].clone();
    assert_eq!(data["preset_id"], "bedside_wellness");
    assert_eq!(data["skipped"], 0);
    assert_eq!(data["storyboard"]["scenes"][0]["configuration"]["setting"], "bedroom");

    let response = get(
        app,
        &format!("/api/v1/storyboards/{id}/presets/supplement/bedside_wellness/preview"),
    )
    .await;
    assert_eq!(body_json(response).await["data"], json!([]));
}

#[tokio::test]
async fn linked_secondary_scene_skips_identity_fields_of_preset() {
    let app = build_test_app();
    let id = create_storyboard(&app).await;
    grow_to(&app, &id, 2).await;
    put_json(
        app.clone(),
        &format!("/api/v1/storyboards/{id}/link"),
        json!({ "enabled": true }),
    )
    .await;
    select(&app, &id, 2).await;

    let response = post_json(
        app,
        &format!("/api/v1/storyboards/{id}/presets/supplement/gym_bag"),
        json!({}),
    )
    .await;
    let data = body_json(response).await["data"].clone();
    assert_eq!(data["skipped"], 1);
    assert_eq!(data["applied"], 6);
    assert_eq!(data["storyboard"]["scenes"][1]["configuration"]["setting"], "gym");
}

#[tokio::test]
async fn unknown_preset_returns_404() {
    let app = build_test_app();
    let id = create_storyboard(&app).await;

    let response = post_json(
        app,
        &format!("/api/v1/storyboards/{id}/presets/hero_pose/cartwheel"),
        json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: compile the active scene
// ---------------------------------------------------------------------------

#[tokio::test]
async fn compile_active_scene_with_modes_and_cues() {
    let app = build_test_app();
    let id = create_storyboard(&app).await;

    let response = put_json(
        app.clone(),
        &format!("/api/v1/storyboards/{id}/modes"),
        json!({ "pro_mode": true }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = put_json(
        app.clone(),
        &format!("/api/v1/storyboards/{id}/custom-cues"),
        json!({ "cues": "steam rising from the mug" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = post_json(
        app,
        &format!("/api/v1/storyboards/{id}/compile"),
        json!({
            "products": [{ "display_name": "Night Drops", "height_value": 10, "height_unit": "cm" }]
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = body_json(response).await["data"].clone();
    assert_eq!(data["scene_id"], 1);
    assert_eq!(data["cost_inputs"]["mode"], "studio");
    let prompt = data["prompt"].as_str().unwrap();
    assert!(prompt.contains("Night Drops"));
    assert!(prompt.contains("Technical:"));
    assert!(prompt.ends_with("Additional direction: steam rising from the mug"));
}

// ---------------------------------------------------------------------------
// Test: snapshot restore and deletion
// ---------------------------------------------------------------------------

#[tokio::test]
async fn snapshot_restores_into_a_new_storyboard() {
    let app = build_test_app();
    let id = create_storyboard(&app).await;
    grow_to(&app, &id, 2).await;
    edit(&app, &id, "ethnicity", "east_asian").await;
    put_json(
        app.clone(),
        &format!("/api/v1/storyboards/{id}/link"),
        json!({ "enabled": true }),
    )
    .await;

    let original = body_json(get(app.clone(), &format!("/api/v1/storyboards/{id}")).await).await
        ["data"]
        .clone();
    let snapshot = json!({
        "scenes": original["scenes"],
        "active_index": original["active_index"],
        "link": original["link"],
    });

    let response = post_json(app, "/api/v1/storyboards", json!({ "snapshot": snapshot })).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let restored = body_json(response).await["data"].clone();
    assert_ne!(restored["id"], original["id"]);
    assert_eq!(restored["scenes"], original["scenes"]);
    assert_eq!(restored["link"], original["link"]);
}

#[tokio::test]
async fn snapshot_with_too_many_scenes_is_rejected() {
    let app = build_test_app();
    let scenes: Vec<Value> = (1..=5)
        .map(|n| json!({ "id": n, "label": format!("Scene {n}"), "configuration": {} }))
        .collect();

    let response = post_json(
        app,
        "/api/v1/storyboards",
        json!({ "snapshot": { "scenes": scenes } }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn snapshot_with_bad_reference_or_exhausted_id_is_rejected() {
    let app = build_test_app();
    let gif = json!({
        "id": 1,
        "label": "Scene 1",
        "configuration": {},
        "identity": { "reference_image": { "data": "R0lGOA==", "mime_type": "image/gif" } },
    });
    let response = post_json(
        app.clone(),
        "/api/v1/storyboards",
        json!({ "snapshot": { "scenes": [gif] } }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let last = json!({ "id": u32::MAX, "label": "Scene 1", "configuration": {} });
    let response = post_json(
        app,
        "/api/v1/storyboards",
        json!({ "snapshot": { "scenes": [last] } }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_storyboard_then_404() {
    let app = build_test_app();
    let id = create_storyboard(&app).await;
    let uri = format!("/api/v1/storyboards/{id}");

    let response = delete(app.clone(), &uri).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app.clone(), &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete(app, &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
