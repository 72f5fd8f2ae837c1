/// Failures of structural storyboard operations.
///
/// Prompt compilation and normalization never fail; missing or conflicting
/// choices are resolved by defaults and fixed precedence instead.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Unknown scene, preset, category or storyboard.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// Scene-count bounds and storyboard limits.
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
