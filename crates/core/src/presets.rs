//! Scene presets and override-diff utilities.
//!
//! Supplement and hero-pose presets are fixed bundles of category values
//! applied as a series of edits. [`compute_override_diff`] previews which
//! fields a preset would change on a given record.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::Category;
use crate::config::ConfigurationRecord;
use crate::error::CoreError;

/* --------------------------------------------------------------------------
   Preset tables
   -------------------------------------------------------------------------- */

/// A named bundle of category values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Preset {
    pub id: &'static str,
    pub label: &'static str,
    pub fields: &'static [(Category, &'static str)],
}

/// Staged supplement / wellness product setups.
pub const SUPPLEMENT_PRESETS: &[Preset] = &[
    Preset {
        id: "morning_routine",
        label: "Morning routine",
        fields: &[
            (Category::Setting, "kitchen"),
            (Category::MicroLocation, "kitchen_island"),
            (Category::Props, "coffee_mug"),
            (Category::Lighting, "natural_window"),
            (Category::TimeOfDay, "morning"),
            (Category::ProductPlacement, "on_surface"),
            (Category::ProductInteraction, "holding"),
        ],
    },
    Preset {
        id: "gym_bag",
        label: "Gym bag",
        fields: &[
            (Category::Setting, "gym"),
            (Category::MicroLocation, "gym_bench"),
            (Category::Props, "water_bottle"),
            (Category::Lighting, "studio_softbox"),
            (Category::Wardrobe, "activewear"),
            (Category::ProductPlacement, "in_hand"),
            (Category::ProductInteraction, "holding"),
        ],
    },
    Preset {
        id: "kitchen_counter",
        label: "Kitchen counter",
        fields: &[
            (Category::Setting, "kitchen"),
            (Category::MicroLocation, "kitchen_island"),
            (Category::Props, "plants"),
            (Category::ProductPlacement, "on_surface"),
            (Category::ProductSurface, "marble"),
            (Category::ProductInteraction, "none"),
        ],
    },
    Preset {
        id: "bedside_wellness",
        label: "Bedside wellness",
        fields: &[
            (Category::Setting, "bedroom"),
            (Category::MicroLocation, "bedside_table"),
            (Category::Props, "books"),
            (Category::TimeOfDay, "evening"),
            (Category::Lighting, "golden_hour"),
            (Category::ProductPlacement, "on_surface"),
            (Category::ProductSurface, "linen"),
        ],
    },
];

/// Hero poses that stage the person around the product.
pub const HERO_POSE_PRESETS: &[Preset] = &[
    Preset {
        id: "hold_to_camera",
        label: "Hold to camera",
        fields: &[
            (Category::Pose, "holding_up"),
            (Category::CameraShot, "half_body"),
            (Category::CameraAngle, "eye_level"),
            (Category::Gaze, "at_camera"),
            (Category::ProductInteraction, "showing_label"),
        ],
    },
    Preset {
        id: "over_shoulder",
        label: "Over the shoulder",
        fields: &[
            (Category::Pose, "over_shoulder"),
            (Category::CameraShot, "over_the_shoulder"),
            (Category::Gaze, "at_camera"),
            (Category::ProductInteraction, "holding"),
        ],
    },
    Preset {
        id: "point_at_product",
        label: "Point at product",
        fields: &[
            (Category::Pose, "pointing"),
            (Category::CameraShot, "half_body"),
            (Category::Gaze, "at_product"),
            (Category::ProductPlacement, "on_surface"),
            (Category::ProductInteraction, "none"),
        ],
    },
    Preset {
        id: "seated_showcase",
        label: "Seated showcase",
        fields: &[
            (Category::Pose, "seated_showcase"),
            (Category::CameraShot, "half_body"),
            (Category::CameraAngle, "high_angle"),
            (Category::ProductPlacement, "on_surface"),
            (Category::ProductInteraction, "showing_label"),
        ],
    },
];

/// Which preset table a preset id refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresetKind {
    Supplement,
    HeroPose,
}

impl PresetKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PresetKind::Supplement => "supplement",
            PresetKind::HeroPose => "hero_pose",
        }
    }

    pub fn presets(self) -> &'static [Preset] {
        match self {
            PresetKind::Supplement => SUPPLEMENT_PRESETS,
            PresetKind::HeroPose => HERO_POSE_PRESETS,
        }
    }
}

impl fmt::Display for PresetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PresetKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "supplement" => Ok(PresetKind::Supplement),
            "hero_pose" | "hero-pose" => Ok(PresetKind::HeroPose),
            _ => Err(CoreError::Validation(format!(
                "Invalid preset kind '{s}'. Must be one of: supplement, hero_pose"
            ))),
        }
    }
}

/// Look up a preset by kind and id.
pub fn find_preset(kind: PresetKind, id: &str) -> Result<&'static Preset, CoreError> {
    kind.presets()
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| CoreError::NotFound {
            entity: "Preset",
            id: format!("{kind}/{id}"),
        })
}

/* --------------------------------------------------------------------------
   Formulation expert presets
   -------------------------------------------------------------------------- */

/// Expert persona used by formulation-expert mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpertPreset {
    #[default]
    Dermatologist,
    Nutritionist,
    Pharmacist,
    CosmeticChemist,
}

impl ExpertPreset {
    pub fn default_name(self) -> &'static str {
        match self {
            ExpertPreset::Dermatologist => "Dr. Maya Chen",
            ExpertPreset::Nutritionist => "Jordan Ellis",
            ExpertPreset::Pharmacist => "Dr. Sam Patel",
            ExpertPreset::CosmeticChemist => "Dr. Lena Novak",
        }
    }

    pub fn default_role(self) -> &'static str {
        match self {
            ExpertPreset::Dermatologist => "board-certified dermatologist",
            ExpertPreset::Nutritionist => "registered nutritionist",
            ExpertPreset::Pharmacist => "licensed pharmacist",
            ExpertPreset::CosmeticChemist => "cosmetic formulation chemist",
        }
    }

    /// Visual credibility cue appended to the expert block.
    pub fn credibility(self) -> &'static str {
        match self {
            ExpertPreset::Dermatologist => "wearing a crisp white coat with a calm, authoritative presence",
            ExpertPreset::Nutritionist => "with an approachable, knowledgeable presence",
            ExpertPreset::Pharmacist => "wearing a neat pharmacist's coat",
            ExpertPreset::CosmeticChemist => {
                "wearing a lab coat with safety glasses pushed up on the head"
            }
        }
    }
}

/* --------------------------------------------------------------------------
   Override diff
   -------------------------------------------------------------------------- */

/// A single field a preset would change.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OverrideDiff {
    pub category: Category,
    pub current_value: String,
    pub preset_value: String,
}

/// Compare a record against a preset's fields and return the ones that
/// differ, sorted by category for deterministic output.
pub fn compute_override_diff(record: &ConfigurationRecord, preset: &Preset) -> Vec<OverrideDiff> {
    let mut diffs: Vec<OverrideDiff> = preset
        .fields
        .iter()
        .filter(|(category, value)| record.get(*category) != *value)
        .map(|(category, value)| OverrideDiff {
            category: *category,
            current_value: record.get(*category).to_string(),
            preset_value: value.to_string(),
        })
        .collect();

    diffs.sort_by(|a, b| a.category.cmp(&b.category));
    diffs
}

/* --------------------------------------------------------------------------
   Tests
   -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_preset_value_is_a_catalog_value() {
        for kind in [PresetKind::Supplement, PresetKind::HeroPose] {
            for preset in kind.presets() {
                for (category, value) in preset.fields {
                    assert!(
                        category.contains(value),
                        "{kind}/{}: '{value}' is not a {category} value",
                        preset.id
                    );
                }
            }
        }
    }

    #[test]
    fn find_preset_by_kind_and_id() {
        let preset = find_preset(PresetKind::HeroPose, "hold_to_camera").unwrap();
        assert_eq!(preset.label, "Hold to camera");

        let err = find_preset(PresetKind::Supplement, "hold_to_camera").unwrap_err();
        assert!(err.to_string().contains("supplement/hold_to_camera"));
    }

    #[test]
    fn preset_kind_parses_both_spellings() {
        assert_eq!("hero-pose".parse::<PresetKind>().unwrap(), PresetKind::HeroPose);
        assert_eq!("hero_pose".parse::<PresetKind>().unwrap(), PresetKind::HeroPose);
        assert_eq!("supplement".parse::<PresetKind>().unwrap(), PresetKind::Supplement);
        assert!("lighting".parse::<PresetKind>().is_err());
    }

    #[test]
    fn override_diff_lists_only_changed_fields() {
        let mut record = ConfigurationRecord::new();
        record.set(Category::Setting, "kitchen");

        let preset = find_preset(PresetKind::Supplement, "kitchen_counter").unwrap();
        let diffs = compute_override_diff(&record, preset);

        assert!(diffs.iter().all(|d| d.category != Category::Setting));
        let props = diffs
            .iter()
            .find(|d| d.category == Category::Props)
            .unwrap();
        assert_eq!(props.current_value, "none");
        assert_eq!(props.preset_value, "plants");
    }

    #[test]
    fn override_diff_is_sorted_and_empty_after_apply() {
        let preset = find_preset(PresetKind::HeroPose, "seated_showcase").unwrap();
        let record = ConfigurationRecord::new();
        let diffs = compute_override_diff(&record, preset);
        assert!(diffs.windows(2).all(|w| w[0].category < w[1].category));

        let mut applied = record;
        for (category, value) in preset.fields {
            applied.set(*category, *value);
        }
        assert!(compute_override_diff(&applied, preset).is_empty());
    }

    #[test]
    fn expert_presets_have_defaults() {
        for preset in [
            ExpertPreset::Dermatologist,
            ExpertPreset::Nutritionist,
            ExpertPreset::Pharmacist,
            ExpertPreset::CosmeticChemist,
        ] {
            assert!(!preset.default_name().is_empty());
            assert!(!preset.default_role().is_empty());
            assert!(!preset.credibility().is_empty());
        }
    }
}
