pub mod catalog;
pub mod compile;
pub mod health;
pub mod storyboard;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /catalogs                                        list every category catalog
/// /catalogs/{category}                             one category catalog
/// /presets/{kind}                                  list presets of a kind
///
/// /normalize                                       normalize a record (POST)
/// /compile                                         compile a one-off scene (POST)
///
/// /storyboards                                     create or restore (POST)
/// /storyboards/{id}                                get, delete
/// /storyboards/{id}/scenes                         add scene (POST)
/// /storyboards/{id}/scenes/{scene_id}              rename (PUT), delete
/// /storyboards/{id}/scenes/{scene_id}/duplicate    duplicate (POST)
/// /storyboards/{id}/active                         select scene (PUT)
/// /storyboards/{id}/edits                          apply edit (POST)
/// /storyboards/{id}/custom-cues                    replace custom cues (PUT)
/// /storyboards/{id}/link                           enable / disable linking (PUT)
/// /storyboards/{id}/reference                      attach (PUT), detach (DELETE)
/// /storyboards/{id}/modes                          replace mode flags (PUT)
/// /storyboards/{id}/presets/{kind}/{preset_id}     apply preset (POST)
/// /storyboards/{id}/presets/{kind}/{preset_id}/preview   override diff (GET)
/// /storyboards/{id}/compile                        compile active scene (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(catalog::router())
        .merge(compile::router())
        .nest("/storyboards", storyboard::router())
}
