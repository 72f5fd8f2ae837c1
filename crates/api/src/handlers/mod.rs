pub mod catalog;
pub mod compile;
pub mod storyboard;

use scenecraft_core::error::CoreError;
use scenecraft_core::presets::PresetKind;

use crate::error::{AppError, AppResult};

/// Parse a `{kind}` path segment. A malformed segment is a bad request, not
/// a domain validation failure.
pub(crate) fn parse_preset_kind(kind: &str) -> AppResult<PresetKind> {
    kind.parse().map_err(|e| match e {
        CoreError::Validation(msg) => AppError::BadRequest(msg),
        other => AppError::Core(other),
    })
}
