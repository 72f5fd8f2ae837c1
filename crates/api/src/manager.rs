use std::collections::HashMap;

use chrono::{DateTime, Utc};
use scenecraft_core::error::CoreError;
use scenecraft_core::{Storyboard, StoryboardSnapshot};
use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

pub type Timestamp = DateTime<Utc>;

/// A storyboard plus bookkeeping timestamps.
pub struct StoredStoryboard {
    pub storyboard: Storyboard,
    /// When the storyboard was created or restored.
    pub created_at: Timestamp,
    /// Last successful mutation.
    pub updated_at: Timestamp,
}

/// Wire representation of a stored storyboard.
#[derive(Debug, Serialize)]
pub struct StoryboardView {
    pub id: Uuid,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(flatten)]
    pub snapshot: StoryboardSnapshot,
}

impl StoryboardView {
    fn new(id: Uuid, stored: &StoredStoryboard) -> Self {
        Self {
            id,
            created_at: stored.created_at,
            updated_at: stored.updated_at,
            snapshot: stored.storyboard.snapshot(),
        }
    }
}

/// Holds every live storyboard.
///
/// Thread-safe via interior `RwLock`; designed to be wrapped in `Arc` and
/// shared across the application. Each mutation holds the write lock for
/// its whole duration, so a storyboard sees one writer at a time.
pub struct StoryboardManager {
    storyboards: RwLock<HashMap<Uuid, StoredStoryboard>>,
    max_storyboards: usize,
}

impl StoryboardManager {
    /// Create a new, empty manager holding at most `max_storyboards`.
    pub fn new(max_storyboards: usize) -> Self {
        Self {
            storyboards: RwLock::new(HashMap::new()),
            max_storyboards,
        }
    }

    /// Store a storyboard under a fresh id.
    pub async fn insert(&self, storyboard: Storyboard) -> Result<StoryboardView, CoreError> {
        let mut storyboards = self.storyboards.write().await;
        if storyboards.len() >= self.max_storyboards {
            return Err(CoreError::Conflict(format!(
                "Storyboard limit reached ({})",
                self.max_storyboards
            )));
        }

        let id = Uuid::new_v4();
        let now = Utc::now();
        let stored = StoredStoryboard {
            storyboard,
            created_at: now,
            updated_at: now,
        };
        let view = StoryboardView::new(id, &stored);
        storyboards.insert(id, stored);
        Ok(view)
    }

    /// Read a storyboard through `f`.
    pub async fn read<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&Storyboard) -> T,
    ) -> Result<T, CoreError> {
        let storyboards = self.storyboards.read().await;
        let stored = storyboards.get(&id).ok_or_else(|| not_found(id))?;
        Ok(f(&stored.storyboard))
    }

    pub async fn view(&self, id: Uuid) -> Result<StoryboardView, CoreError> {
        let storyboards = self.storyboards.read().await;
        let stored = storyboards.get(&id).ok_or_else(|| not_found(id))?;
        Ok(StoryboardView::new(id, stored))
    }

    /// Mutate a storyboard through `f`. On success `updated_at` is bumped
    /// and the new view is returned alongside `f`'s result.
    pub async fn update<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut Storyboard) -> Result<T, CoreError>,
    ) -> Result<(T, StoryboardView), CoreError> {
        let mut storyboards = self.storyboards.write().await;
        let stored = storyboards.get_mut(&id).ok_or_else(|| not_found(id))?;
        let result = f(&mut stored.storyboard)?;
        stored.updated_at = Utc::now();
        Ok((result, StoryboardView::new(id, stored)))
    }

    pub async fn remove(&self, id: Uuid) -> Result<(), CoreError> {
        self.storyboards
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| not_found(id))
    }

    /// Number of stored storyboards.
    pub async fn count(&self) -> usize {
        self.storyboards.read().await.len()
    }
}

fn not_found(id: Uuid) -> CoreError {
    CoreError::NotFound {
        entity: "Storyboard",
        id: id.to_string(),
    }
}
