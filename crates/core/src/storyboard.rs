//! The scene store: an ordered storyboard of 1 to [`MAX_SCENES`] scenes with
//! one active scene and the identity link state.
//!
//! Every mutation runs synchronously; any identity fan-out has completed by
//! the time the call returns.

use serde::{Deserialize, Serialize};

use crate::config::ConfigEdit;
use crate::cost::CostInputs;
use crate::error::CoreError;
use crate::identity::ReferenceImage;
use crate::identity_sync::{
    is_eligible, is_identity_category, LinkEvent, LinkState, PRIMARY_SCENE_INDEX,
};
use crate::normalize::normalize;
use crate::presets::{compute_override_diff, find_preset, OverrideDiff, PresetKind};
use crate::product::ProductAsset;
use crate::scene::{validate_label, ModeFlags, Scene, MAX_SCENE_LABEL_LEN};
use crate::types::SceneId;

/// Maximum number of scenes in one storyboard.
pub const MAX_SCENES: usize = 4;

/// Result of an edit against the active scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum EditOutcome {
    /// Written to the active scene only.
    Applied,
    /// Written to the primary scene and fanned out to `scenes` other scenes.
    Broadcast { scenes: usize },
    /// Identity edit on a non-primary scene while linked. Nothing changed.
    Rejected,
}

/// Result of applying a preset to the active scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresetOutcome {
    pub kind: PresetKind,
    pub preset_id: &'static str,
    pub applied: usize,
    pub skipped: usize,
}

/// Serializable form of a storyboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryboardSnapshot {
    pub scenes: Vec<Scene>,
    #[serde(default)]
    pub active_index: usize,
    #[serde(default)]
    pub link: LinkState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Storyboard {
    scenes: Vec<Scene>,
    active: usize,
    link: LinkState,
    next_scene_id: SceneId,
}

impl Default for Storyboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Storyboard {
    /// A storyboard with one default scene, unlinked.
    pub fn new() -> Self {
        Self {
            scenes: vec![Scene::new(1, "Scene 1")],
            active: 0,
            link: LinkState::Unlinked,
            next_scene_id: 2,
        }
    }

    /// Restore from a snapshot. Records are normalized, identities re-derived,
    /// and a linked snapshot is re-linked from its primary scene.
    pub fn from_snapshot(snapshot: StoryboardSnapshot) -> Result<Self, CoreError> {
        let StoryboardSnapshot {
            mut scenes,
            active_index,
            link,
        } = snapshot;

        if scenes.is_empty() {
            return Err(CoreError::Validation(
                "Storyboard must contain at least one scene".to_string(),
            ));
        }
        if scenes.len() > MAX_SCENES {
            return Err(CoreError::Validation(format!(
                "Storyboard has too many scenes: {} (max {MAX_SCENES})",
                scenes.len()
            )));
        }
        for (i, scene) in scenes.iter().enumerate() {
            validate_label(&scene.label)?;
            if let Some(image) = &scene.identity.reference_image {
                image.validate()?;
            }
            if scenes[..i].iter().any(|s| s.id == scene.id) {
                return Err(CoreError::Validation(format!(
                    "Duplicate scene id {}",
                    scene.id
                )));
            }
        }

        for scene in &mut scenes {
            scene.label = scene.label.trim().to_string();
            scene.configuration = normalize(std::mem::take(&mut scene.configuration));
            scene.set_lock(false);
            scene.refresh_identity();
        }

        let next_scene_id = scenes
            .iter()
            .map(|s| s.id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or_else(|| {
                CoreError::Validation(format!("Scene id must be below {}", SceneId::MAX))
            })?;
        let mut storyboard = Self {
            active: active_index.min(scenes.len() - 1),
            scenes,
            link: LinkState::Unlinked,
            next_scene_id,
        };
        if link.is_linked() {
            storyboard.link = LinkState::Unlinked.transition(
                LinkEvent::Enable {
                    source: PRIMARY_SCENE_INDEX,
                },
                &mut storyboard.scenes,
            );
        }
        Ok(storyboard)
    }

    pub fn snapshot(&self) -> StoryboardSnapshot {
        StoryboardSnapshot {
            scenes: self.scenes.clone(),
            active_index: self.active,
            link: self.link.clone(),
        }
    }

    /* ---- accessors ---- */

    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_scene(&self) -> &Scene {
        &self.scenes[self.active]
    }

    pub fn link_state(&self) -> &LinkState {
        &self.link
    }

    pub fn is_linked(&self) -> bool {
        self.link.is_linked()
    }

    pub fn scene(&self, id: SceneId) -> Result<&Scene, CoreError> {
        let index = self.index_of(id)?;
        Ok(&self.scenes[index])
    }

    fn index_of(&self, id: SceneId) -> Result<usize, CoreError> {
        self.scenes
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| CoreError::NotFound {
                entity: "Scene",
                id: id.to_string(),
            })
    }

    fn allocate_id(&mut self) -> Result<SceneId, CoreError> {
        let id = self.next_scene_id;
        self.next_scene_id = id
            .checked_add(1)
            .ok_or_else(|| CoreError::Conflict("Scene ids exhausted".to_string()))?;
        Ok(id)
    }

    fn ensure_capacity(&self) -> Result<(), CoreError> {
        if self.scenes.len() >= MAX_SCENES {
            return Err(CoreError::Conflict(format!(
                "Storyboard already has the maximum of {MAX_SCENES} scenes"
            )));
        }
        Ok(())
    }

    /// Run a link transition; returns the number of scenes it wrote.
    fn fire(&mut self, event: LinkEvent) -> usize {
        let state = std::mem::take(&mut self.link);
        let (next, updated) = state.step(event, &mut self.scenes);
        self.link = next;
        updated
    }

    /* ---- scene lifecycle ---- */

    /// Append a default scene and make it active. While linked, an eligible
    /// new scene picks up the shared identity.
    pub fn add_scene(&mut self, label: Option<&str>) -> Result<&Scene, CoreError> {
        self.ensure_capacity()?;
        let label = match label {
            Some(label) => {
                validate_label(label)?;
                label.trim().to_string()
            }
            None => format!("Scene {}", self.scenes.len() + 1),
        };
        let id = self.allocate_id()?;
        self.scenes.push(Scene::new(id, label));
        let index = self.scenes.len() - 1;
        self.active = index;
        self.fire(LinkEvent::SceneJoined { index });
        tracing::debug!(scene_id = id, scenes = self.scenes.len(), "Scene added");
        Ok(&self.scenes[index])
    }

    /// Append a value copy of scene `id` and make it active.
    pub fn duplicate_scene(&mut self, id: SceneId) -> Result<&Scene, CoreError> {
        self.ensure_capacity()?;
        let source = self.index_of(id)?;
        let label: String = format!("{} (copy)", self.scenes[source].label)
            .chars()
            .take(MAX_SCENE_LABEL_LEN)
            .collect();
        let new_id = self.allocate_id()?;
        let copy = self.scenes[source].duplicate(new_id, label);
        self.scenes.push(copy);
        let index = self.scenes.len() - 1;
        self.active = index;
        self.fire(LinkEvent::SceneJoined { index });
        tracing::debug!(source_id = id, scene_id = new_id, "Scene duplicated");
        Ok(&self.scenes[index])
    }

    /// Remove scene `id`. The last remaining scene cannot be deleted.
    ///
    /// Deleting the primary while linked promotes the next scene; if that
    /// scene has no eligible person the storyboard is unlinked.
    pub fn delete_scene(&mut self, id: SceneId) -> Result<(), CoreError> {
        let index = self.index_of(id)?;
        if self.scenes.len() == 1 {
            return Err(CoreError::Conflict(
                "Cannot delete the only scene in a storyboard".to_string(),
            ));
        }
        self.scenes.remove(index);
        if self.active > index || self.active >= self.scenes.len() {
            self.active -= 1;
        }
        if index == PRIMARY_SCENE_INDEX
            && self.link.is_linked()
            && !is_eligible(&self.scenes[PRIMARY_SCENE_INDEX])
        {
            self.fire(LinkEvent::Disable);
        }
        tracing::debug!(scene_id = id, scenes = self.scenes.len(), "Scene deleted");
        Ok(())
    }

    pub fn select_scene(&mut self, id: SceneId) -> Result<(), CoreError> {
        self.active = self.index_of(id)?;
        Ok(())
    }

    pub fn rename_scene(&mut self, id: SceneId, label: &str) -> Result<(), CoreError> {
        validate_label(label)?;
        let index = self.index_of(id)?;
        self.scenes[index].label = label.trim().to_string();
        Ok(())
    }

    /* ---- edits ---- */

    /// Apply an edit to the active scene, honoring the identity lock.
    pub fn apply_edit(&mut self, edit: &ConfigEdit) -> EditOutcome {
        let index = self.active;
        let identity_edit = is_identity_category(edit.category);
        if identity_edit && !self.link.permits_identity_write(index) {
            tracing::debug!(
                scene_index = index,
                category = %edit.category,
                "Identity edit rejected: scene is not primary"
            );
            return EditOutcome::Rejected;
        }

        let was_eligible = is_eligible(&self.scenes[index]);
        self.scenes[index].apply_edit(edit);
        self.after_write(index, identity_edit, was_eligible)
    }

    /// Bind a reference image to the active scene.
    pub fn attach_reference(&mut self, image: ReferenceImage) -> EditOutcome {
        self.write_reference(Some(image))
    }

    pub fn detach_reference(&mut self) -> EditOutcome {
        self.write_reference(None)
    }

    fn write_reference(&mut self, image: Option<ReferenceImage>) -> EditOutcome {
        let index = self.active;
        if !self.link.permits_identity_write(index) {
            tracing::debug!(scene_index = index, "Reference edit rejected: scene is not primary");
            return EditOutcome::Rejected;
        }
        let was_eligible = is_eligible(&self.scenes[index]);
        self.scenes[index].set_reference(image);
        self.scenes[index].refresh_identity();
        self.after_write(index, true, was_eligible)
    }

    fn after_write(&mut self, index: usize, identity_edit: bool, was_eligible: bool) -> EditOutcome {
        if !self.link.is_linked() {
            return EditOutcome::Applied;
        }
        if index == PRIMARY_SCENE_INDEX {
            let regained = !was_eligible && is_eligible(&self.scenes[index]);
            if !identity_edit && !regained {
                return EditOutcome::Applied;
            }
            let scenes = self.fire(LinkEvent::PrimaryChanged);
            return EditOutcome::Broadcast { scenes };
        }
        if !was_eligible && is_eligible(&self.scenes[index]) {
            self.fire(LinkEvent::SceneJoined { index });
        }
        EditOutcome::Applied
    }

    /// Replace the active scene's free-text custom cues.
    pub fn set_custom_cues(&mut self, cues: &str) {
        let scene = &mut self.scenes[self.active];
        scene.configuration.custom_cues = cues.trim().to_string();
    }

    /// Turn identity linking on or off. Returns whether the storyboard is
    /// linked afterwards.
    pub fn set_linked(&mut self, enabled: bool) -> bool {
        let event = if enabled {
            LinkEvent::Enable {
                source: self.active,
            }
        } else {
            LinkEvent::Disable
        };
        self.fire(event);
        self.link.is_linked()
    }

    pub fn set_mode_flags(&mut self, flags: ModeFlags) {
        self.scenes[self.active].mode_flags = flags;
    }

    /* ---- presets ---- */

    /// Apply a preset to the active scene as a series of edits. Identity
    /// fields the lock rejects are counted as skipped.
    pub fn apply_preset(&mut self, kind: PresetKind, id: &str) -> Result<PresetOutcome, CoreError> {
        let preset = find_preset(kind, id)?;
        let mut applied = 0;
        let mut skipped = 0;
        for (category, value) in preset.fields {
            match self.apply_edit(&ConfigEdit::new(*category, *value)) {
                EditOutcome::Rejected => skipped += 1,
                _ => applied += 1,
            }
        }

        let state = &mut self.scenes[self.active].preset_state;
        match kind {
            PresetKind::Supplement => state.supplement_preset = Some(preset.id.to_string()),
            PresetKind::HeroPose => state.hero_pose_preset = Some(preset.id.to_string()),
        }
        tracing::debug!(kind = %kind, preset = preset.id, applied, skipped, "Preset applied");

        Ok(PresetOutcome {
            kind,
            preset_id: preset.id,
            applied,
            skipped,
        })
    }

    /// Fields a preset would change on the active scene.
    pub fn preview_preset(&self, kind: PresetKind, id: &str) -> Result<Vec<OverrideDiff>, CoreError> {
        let preset = find_preset(kind, id)?;
        Ok(compute_override_diff(&self.active_scene().configuration, preset))
    }

    /* ---- generation ---- */

    pub fn compile_active(&self, products: &[ProductAsset]) -> String {
        self.active_scene().compile(products)
    }

    pub fn cost_inputs_active(&self) -> CostInputs {
        self.active_scene().cost_inputs()
    }
}
