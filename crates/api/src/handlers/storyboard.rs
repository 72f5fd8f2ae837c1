//! Handlers for storyboards: scene lifecycle, edits, identity linking,
//! presets and compilation of the active scene.
//!
//! Every mutation goes through [`StoryboardManager::update`], which holds the
//! storyboard's write lock until the edit and any identity fan-out finish.
//!
//! [`StoryboardManager::update`]: crate::manager::StoryboardManager::update

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use scenecraft_core::catalog::Category;
use scenecraft_core::cost::CostInputs;
use scenecraft_core::presets::OverrideDiff;
use scenecraft_core::product::ProductAsset;
use scenecraft_core::scene::ModeFlags;
use scenecraft_core::storyboard::PresetOutcome;
use scenecraft_core::types::SceneId;
use scenecraft_core::{ConfigEdit, EditOutcome, Storyboard, StoryboardSnapshot};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppResult;
use crate::handlers::compile::ReferenceImageInput;
use crate::handlers::parse_preset_kind;
use crate::manager::StoryboardView;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct CreateStoryboard {
    /// Restore from a previously exported snapshot instead of starting fresh.
    pub snapshot: Option<StoryboardSnapshot>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AddScene {
    pub label: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RenameScene {
    pub label: String,
}

#[derive(Debug, Deserialize)]
pub struct SelectScene {
    pub scene_id: SceneId,
}

#[derive(Debug, Deserialize)]
pub struct ApplyEdit {
    pub category: Category,
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct SetCustomCues {
    pub cues: String,
}

#[derive(Debug, Deserialize)]
pub struct SetLink {
    pub enabled: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct CompileActive {
    #[serde(default)]
    pub products: Vec<ProductAsset>,
}

/// An edit outcome together with the resulting storyboard.
#[derive(Debug, Serialize)]
pub struct EditResponse {
    #[serde(flatten)]
    pub outcome: EditOutcome,
    pub storyboard: StoryboardView,
}

#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub linked: bool,
    pub storyboard: StoryboardView,
}

#[derive(Debug, Serialize)]
pub struct PresetResponse {
    #[serde(flatten)]
    pub outcome: PresetOutcome,
    pub storyboard: StoryboardView,
}

#[derive(Debug, Serialize)]
pub struct CompiledScene {
    pub scene_id: SceneId,
    pub prompt: String,
    pub cost_inputs: CostInputs,
}

// ---------------------------------------------------------------------------
// Storyboards
// ---------------------------------------------------------------------------

/// POST /api/v1/storyboards
///
/// Create a storyboard with one default scene, or restore one from a
/// snapshot.
pub async fn create_storyboard(
    State(state): State<AppState>,
    Json(input): Json<CreateStoryboard>,
) -> AppResult<impl IntoResponse> {
    let restored = input.snapshot.is_some();
    let storyboard = match input.snapshot {
        Some(snapshot) => Storyboard::from_snapshot(snapshot)?,
        None => Storyboard::new(),
    };
    let view = state.storyboards.insert(storyboard).await?;

    tracing::info!(
        storyboard_id = %view.id,
        scenes = view.snapshot.scenes.len(),
        restored,
        "Storyboard created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: view })))
}

/// GET /api/v1/storyboards/{id}
pub async fn get_storyboard(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let view = state.storyboards.view(id).await?;
    Ok(Json(DataResponse { data: view }))
}

/// DELETE /api/v1/storyboards/{id}
pub async fn delete_storyboard(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    state.storyboards.remove(id).await?;
    tracing::info!(storyboard_id = %id, "Storyboard deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Scenes
// ---------------------------------------------------------------------------

/// POST /api/v1/storyboards/{id}/scenes
pub async fn add_scene(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<AddScene>,
) -> AppResult<impl IntoResponse> {
    let (scene_id, view) = state
        .storyboards
        .update(id, |board| {
            Ok(board.add_scene(input.label.as_deref())?.id)
        })
        .await?;

    tracing::info!(storyboard_id = %id, scene_id, "Scene added");
    Ok((StatusCode::CREATED, Json(DataResponse { data: view })))
}

/// POST /api/v1/storyboards/{id}/scenes/{scene_id}/duplicate
pub async fn duplicate_scene(
    State(state): State<AppState>,
    Path((id, scene_id)): Path<(Uuid, SceneId)>,
) -> AppResult<impl IntoResponse> {
    let (copy_id, view) = state
        .storyboards
        .update(id, |board| Ok(board.duplicate_scene(scene_id)?.id))
        .await?;

    tracing::info!(storyboard_id = %id, scene_id, copy_id, "Scene duplicated");
    Ok((StatusCode::CREATED, Json(DataResponse { data: view })))
}

/// PUT /api/v1/storyboards/{id}/scenes/{scene_id}
pub async fn rename_scene(
    State(state): State<AppState>,
    Path((id, scene_id)): Path<(Uuid, SceneId)>,
    Json(input): Json<RenameScene>,
) -> AppResult<impl IntoResponse> {
    let ((), view) = state
        .storyboards
        .update(id, |board| board.rename_scene(scene_id, &input.label))
        .await?;
    Ok(Json(DataResponse { data: view }))
}

/// DELETE /api/v1/storyboards/{id}/scenes/{scene_id}
pub async fn delete_scene(
    State(state): State<AppState>,
    Path((id, scene_id)): Path<(Uuid, SceneId)>,
) -> AppResult<impl IntoResponse> {
    let ((), view) = state
        .storyboards
        .update(id, |board| board.delete_scene(scene_id))
        .await?;

    tracing::info!(storyboard_id = %id, scene_id, "Scene deleted");
    Ok(Json(DataResponse { data: view }))
}

/// PUT /api/v1/storyboards/{id}/active
pub async fn select_scene(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<SelectScene>,
) -> AppResult<impl IntoResponse> {
    let ((), view) = state
        .storyboards
        .update(id, |board| board.select_scene(input.scene_id))
        .await?;
    Ok(Json(DataResponse { data: view }))
}

// ---------------------------------------------------------------------------
// Edits and identity
// ---------------------------------------------------------------------------

/// POST /api/v1/storyboards/{id}/edits
///
/// Apply one category edit to the active scene. A rejected identity edit is
/// still a 200; the outcome says what happened.
pub async fn apply_edit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<ApplyEdit>,
) -> AppResult<impl IntoResponse> {
    let edit = ConfigEdit::new(input.category, input.value);
    let (outcome, storyboard) = state
        .storyboards
        .update(id, |board| Ok(board.apply_edit(&edit)))
        .await?;

    tracing::debug!(
        storyboard_id = %id,
        category = %edit.category,
        outcome = ?outcome,
        "Edit applied",
    );
    Ok(Json(DataResponse {
        data: EditResponse {
            outcome,
            storyboard,
        },
    }))
}

/// PUT /api/v1/storyboards/{id}/custom-cues
pub async fn set_custom_cues(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<SetCustomCues>,
) -> AppResult<impl IntoResponse> {
    let ((), view) = state
        .storyboards
        .update(id, |board| {
            board.set_custom_cues(&input.cues);
            Ok(())
        })
        .await?;
    Ok(Json(DataResponse { data: view }))
}

/// PUT /api/v1/storyboards/{id}/link
///
/// Enabling is a silent no-op when the primary or active scene has no
/// person; `linked` reports the resulting state.
pub async fn set_link(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<SetLink>,
) -> AppResult<impl IntoResponse> {
    let (linked, storyboard) = state
        .storyboards
        .update(id, |board| Ok(board.set_linked(input.enabled)))
        .await?;

    tracing::info!(
        storyboard_id = %id,
        requested = input.enabled,
        linked,
        "Identity link updated",
    );
    Ok(Json(DataResponse {
        data: LinkResponse { linked, storyboard },
    }))
}

/// PUT /api/v1/storyboards/{id}/reference
pub async fn attach_reference(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<ReferenceImageInput>,
) -> AppResult<impl IntoResponse> {
    let image = input.decode()?;
    let bytes = image.data.len();
    let (outcome, storyboard) = state
        .storyboards
        .update(id, |board| Ok(board.attach_reference(image)))
        .await?;

    tracing::info!(storyboard_id = %id, bytes, outcome = ?outcome, "Reference image attached");
    Ok(Json(DataResponse {
        data: EditResponse {
            outcome,
            storyboard,
        },
    }))
}

/// DELETE /api/v1/storyboards/{id}/reference
pub async fn detach_reference(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let (outcome, storyboard) = state
        .storyboards
        .update(id, |board| Ok(board.detach_reference()))
        .await?;

    tracing::info!(storyboard_id = %id, outcome = ?outcome, "Reference image detached");
    Ok(Json(DataResponse {
        data: EditResponse {
            outcome,
            storyboard,
        },
    }))
}

/// PUT /api/v1/storyboards/{id}/modes
pub async fn set_modes(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(flags): Json<ModeFlags>,
) -> AppResult<impl IntoResponse> {
    let ((), view) = state
        .storyboards
        .update(id, |board| {
            board.set_mode_flags(flags);
            Ok(())
        })
        .await?;
    Ok(Json(DataResponse { data: view }))
}

// ---------------------------------------------------------------------------
// Presets
// ---------------------------------------------------------------------------

/// POST /api/v1/storyboards/{id}/presets/{kind}/{preset_id}
pub async fn apply_preset(
    State(state): State<AppState>,
    Path((id, kind, preset_id)): Path<(Uuid, String, String)>,
) -> AppResult<impl IntoResponse> {
    let kind = parse_preset_kind(&kind)?;
    let (outcome, storyboard) = state
        .storyboards
        .update(id, |board| board.apply_preset(kind, &preset_id))
        .await?;

    tracing::info!(
        storyboard_id = %id,
        kind = %kind,
        preset_id = %preset_id,
        applied = outcome.applied,
        skipped = outcome.skipped,
        "Preset applied",
    );
    Ok(Json(DataResponse {
        data: PresetResponse {
            outcome,
            storyboard,
        },
    }))
}

/// GET /api/v1/storyboards/{id}/presets/{kind}/{preset_id}/preview
pub async fn preview_preset(
    State(state): State<AppState>,
    Path((id, kind, preset_id)): Path<(Uuid, String, String)>,
) -> AppResult<impl IntoResponse> {
    let kind = parse_preset_kind(&kind)?;
    let diffs: Vec<OverrideDiff> = state
        .storyboards
        .read(id, |board| board.preview_preset(kind, &preset_id))
        .await??;
    Ok(Json(DataResponse { data: diffs }))
}

// ---------------------------------------------------------------------------
// Compilation
// ---------------------------------------------------------------------------

/// POST /api/v1/storyboards/{id}/compile
///
/// Compile the active scene. The prompt is regenerated on every call.
pub async fn compile_active(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<CompileActive>,
) -> AppResult<impl IntoResponse> {
    let compiled = state
        .storyboards
        .read(id, |board| CompiledScene {
            scene_id: board.active_scene().id,
            prompt: board.compile_active(&input.products),
            cost_inputs: board.cost_inputs_active(),
        })
        .await?;

    tracing::info!(
        storyboard_id = %id,
        scene_id = compiled.scene_id,
        has_person = compiled.cost_inputs.has_person,
        "Active scene compiled",
    );
    Ok(Json(DataResponse { data: compiled }))
}
