//! Scenes: one configuration record, its identity package and mode state.

use serde::{Deserialize, Serialize};

use crate::compiler::{self, CompileInput};
use crate::config::{ConfigEdit, ConfigurationRecord};
use crate::cost::CostInputs;
use crate::error::CoreError;
use crate::identity::{IdentityPackage, ReferenceImage};
use crate::normalize::normalize;
use crate::presets::ExpertPreset;
use crate::product::ProductAsset;
use crate::types::SceneId;

/// Maximum length of a scene label in characters.
pub const MAX_SCENE_LABEL_LEN: usize = 80;

// ---------------------------------------------------------------------------
// Mode flags
// ---------------------------------------------------------------------------

/// How visibly "unpolished" a UGC-real capture should look.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Imperfection {
    Subtle,
    #[default]
    Natural,
    Raw,
}

/// UGC-real mode: phone-captured authenticity overlay.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UgcRealSettings {
    pub enabled: bool,
    pub imperfection: Imperfection,
    pub handheld: bool,
}

/// Formulation-expert mode: present the person as a credentialed expert.
/// Blank `name` / `role` fall back to the preset's defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormulationExpertSettings {
    pub enabled: bool,
    pub preset: ExpertPreset,
    pub name: String,
    pub role: String,
}

/// Per-scene special modes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModeFlags {
    /// Studio mode: adds technical camera detail. Also a cost input.
    pub pro_mode: bool,
    pub hero_landing: bool,
    pub ugc_real: UgcRealSettings,
    pub formulation_expert: FormulationExpertSettings,
}

/// Last presets applied to a scene.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresetState {
    pub supplement_preset: Option<String>,
    pub hero_pose_preset: Option<String>,
}

// ---------------------------------------------------------------------------
// Scene
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    pub id: SceneId,
    pub label: String,
    pub configuration: ConfigurationRecord,
    #[serde(default)]
    pub identity: IdentityPackage,
    #[serde(default)]
    pub mode_flags: ModeFlags,
    #[serde(default)]
    pub preset_state: PresetState,
}

impl Scene {
    /// A scene with the default configuration.
    pub fn new(id: SceneId, label: impl Into<String>) -> Self {
        let configuration = ConfigurationRecord::new();
        let identity = IdentityPackage::derive(&configuration, None, false);
        Self {
            id,
            label: label.into(),
            configuration,
            identity,
            mode_flags: ModeFlags::default(),
            preset_state: PresetState::default(),
        }
    }

    /// Value copy under a new id and label.
    pub fn duplicate(&self, id: SceneId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            ..self.clone()
        }
    }

    /// Apply an edit, normalize, and re-derive the identity package.
    pub fn apply_edit(&mut self, edit: &ConfigEdit) {
        let record = std::mem::take(&mut self.configuration).apply(edit);
        self.configuration = normalize(record);
        self.refresh_identity();
    }

    /// Re-derive the identity package from the current record, keeping the
    /// bound reference image and lock flag.
    pub fn refresh_identity(&mut self) {
        let reference = self.identity.reference_image.take();
        self.identity =
            IdentityPackage::derive(&self.configuration, reference, self.identity.lock_enabled);
    }

    pub fn set_reference(&mut self, reference: Option<ReferenceImage>) {
        self.identity.reference_image = reference;
    }

    pub fn set_lock(&mut self, lock_enabled: bool) {
        self.identity.lock_enabled = lock_enabled;
    }

    /// Whether the compiled prompt for this scene will describe a person.
    ///
    /// Product-only content never has a person; a "no person" age group is
    /// overridden by a bound reference identity.
    pub fn has_person(&self) -> bool {
        compiler::subject_present(&self.configuration, &self.identity)
    }

    pub fn compile_input<'a>(&'a self, products: &'a [ProductAsset]) -> CompileInput<'a> {
        CompileInput {
            configuration: &self.configuration,
            identity: &self.identity,
            products,
            modes: &self.mode_flags,
        }
    }

    pub fn compile(&self, products: &[ProductAsset]) -> String {
        compiler::compile(&self.compile_input(products))
    }

    pub fn cost_inputs(&self) -> CostInputs {
        CostInputs::for_scene(self)
    }
}

/// Validate a scene label: non-empty after trimming and within length limit.
pub fn validate_label(label: &str) -> Result<(), CoreError> {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "Scene label must not be empty".to_string(),
        ));
    }
    if trimmed.chars().count() > MAX_SCENE_LABEL_LEN {
        return Err(CoreError::Validation(format!(
            "Scene label too long: {} chars (max {MAX_SCENE_LABEL_LEN})",
            trimmed.chars().count()
        )));
    }
    Ok(())
}
