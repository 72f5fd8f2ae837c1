//! Route definitions for storyboards, mounted at `/storyboards`.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::storyboard;
use crate::state::AppState;

/// ```text
/// POST   /                                          -> create_storyboard
/// GET    /{id}                                      -> get_storyboard
/// DELETE /{id}                                      -> delete_storyboard
/// POST   /{id}/scenes                               -> add_scene
/// PUT    /{id}/scenes/{scene_id}                    -> rename_scene
/// DELETE /{id}/scenes/{scene_id}                    -> delete_scene
/// POST   /{id}/scenes/{scene_id}/duplicate          -> duplicate_scene
/// PUT    /{id}/active                               -> select_scene
/// POST   /{id}/edits                                -> apply_edit
/// PUT    /{id}/custom-cues                          -> set_custom_cues
/// PUT    /{id}/link                                 -> set_link
/// PUT    /{id}/reference                            -> attach_reference
/// DELETE /{id}/reference                            -> detach_reference
/// PUT    /{id}/modes                                -> set_modes
/// POST   /{id}/presets/{kind}/{preset_id}           -> apply_preset
/// GET    /{id}/presets/{kind}/{preset_id}/preview   -> preview_preset
/// POST   /{id}/compile                              -> compile_active
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(storyboard::create_storyboard))
        .route(
            "/{id}",
            get(storyboard::get_storyboard).delete(storyboard::delete_storyboard),
        )
        .route("/{id}/scenes", post(storyboard::add_scene))
        .route(
            "/{id}/scenes/{scene_id}",
            put(storyboard::rename_scene).delete(storyboard::delete_scene),
        )
        .route(
            "/{id}/scenes/{scene_id}/duplicate",
            post(storyboard::duplicate_scene),
        )
        .route("/{id}/active", put(storyboard::select_scene))
        .route("/{id}/edits", post(storyboard::apply_edit))
        .route("/{id}/custom-cues", put(storyboard::set_custom_cues))
        .route("/{id}/link", put(storyboard::set_link))
        .route(
            "/{id}/reference",
            put(storyboard::attach_reference).delete(storyboard::detach_reference),
        )
        .route("/{id}/modes", put(storyboard::set_modes))
        .route(
            "/{id}/presets/{kind}/{preset_id}",
            post(storyboard::apply_preset),
        )
        .route(
            "/{id}/presets/{kind}/{preset_id}/preview",
            get(storyboard::preview_preset),
        )
        .route("/{id}/compile", post(storyboard::compile_active))
}
