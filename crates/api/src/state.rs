use std::sync::Arc;

use crate::config::ServerConfig;
use crate::manager::StoryboardManager;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// In-memory storyboard store.
    pub storyboards: Arc<StoryboardManager>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let storyboards = Arc::new(StoryboardManager::new(config.max_storyboards));
        Self {
            config: Arc::new(config),
            storyboards,
        }
    }
}
