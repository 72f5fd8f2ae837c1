//! The configuration record: one value per [`Category`], plus legacy alias
//! fields and custom side fields.
//!
//! Records are plain values. Edits go through [`ConfigurationRecord::apply`],
//! which consumes the record and returns the edited one; callers run the
//! result through [`crate::normalize::normalize`] before storing it.

use serde::{Deserialize, Serialize};

use crate::catalog::{Category, AGE_GROUP_NO_PERSON, CONTENT_STYLE_PRODUCT};

/// Current configuration schema version. Bumped whenever a category, alias
/// or legacy value rename is introduced.
pub const CONFIG_SCHEMA_VERSION: u32 = 3;

/// Legacy alias field of a mirrored pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AliasField {
    ShotType,
    LightingStyle,
    Location,
    PlacementStyle,
    ModelAge,
    EyeDirection,
}

/// Mirrored pairs: (canonical category, legacy alias field). The canonical
/// field always wins; the alias is derived from it.
pub const MIRRORED_PAIRS: &[(Category, AliasField)] = &[
    (Category::CameraShot, AliasField::ShotType),
    (Category::Lighting, AliasField::LightingStyle),
    (Category::Setting, AliasField::Location),
    (Category::ProductPlacement, AliasField::PlacementStyle),
    (Category::AgeGroup, AliasField::ModelAge),
    (Category::Gaze, AliasField::EyeDirection),
];

/// A single-category edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigEdit {
    pub category: Category,
    pub value: String,
}

impl ConfigEdit {
    pub fn new(category: Category, value: impl Into<String>) -> Self {
        Self {
            category,
            value: value.into(),
        }
    }
}

/// The full set of scene choices.
///
/// `Default` yields a raw, all-empty record; [`ConfigurationRecord::new`]
/// yields the normalized default. Missing fields in serialized input
/// deserialize as empty and are filled in by the normalizer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigurationRecord {
    pub schema_version: u32,

    // Style
    pub content_style: String,
    pub composition_mode: String,
    pub aspect_ratio: String,
    pub creator_preset: String,
    pub platform: String,
    pub mood: String,
    pub image_quality: String,

    // Camera
    pub camera_device: String,
    pub camera_distance: String,
    pub camera_angle: String,
    pub camera_shot: String,
    pub lens: String,
    pub depth_of_field: String,

    // Lighting
    pub lighting: String,
    pub time_of_day: String,
    pub color_grade: String,

    // Setting
    pub setting: String,
    pub micro_location: String,
    pub props: String,
    pub weather: String,
    pub background: String,

    // Person
    pub age_group: String,
    pub gender: String,
    pub ethnicity: String,
    pub skin_tone: String,
    pub hair_color: String,
    pub hair_style: String,
    pub body_type: String,
    pub wardrobe: String,
    pub pose: String,
    pub gaze: String,
    pub expression: String,
    pub skin_realism: String,
    pub makeup: String,
    pub accessories: String,

    // Product
    pub product_placement: String,
    pub product_interaction: String,
    pub product_scale: String,
    pub product_surface: String,

    // Legacy aliases (derived, never edited downstream)
    pub shot_type: String,
    pub lighting_style: String,
    pub location: String,
    pub placement_style: String,
    pub model_age: String,
    pub eye_direction: String,

    // Free-text side fields
    pub custom_props: String,
    pub custom_micro_location: String,
    pub custom_cues: String,
}

impl ConfigurationRecord {
    /// The normalized default record.
    pub fn new() -> Self {
        crate::normalize::normalize(Self::default())
    }

    pub fn get(&self, category: Category) -> &str {
        self.slot(category)
    }

    pub fn set(&mut self, category: Category, value: impl Into<String>) {
        *self.slot_mut(category) = value.into();
    }

    pub fn alias(&self, field: AliasField) -> &str {
        match field {
            AliasField::ShotType => &self.shot_type,
            AliasField::LightingStyle => &self.lighting_style,
            AliasField::Location => &self.location,
            AliasField::PlacementStyle => &self.placement_style,
            AliasField::ModelAge => &self.model_age,
            AliasField::EyeDirection => &self.eye_direction,
        }
    }

    pub fn alias_mut(&mut self, field: AliasField) -> &mut String {
        match field {
            AliasField::ShotType => &mut self.shot_type,
            AliasField::LightingStyle => &mut self.lighting_style,
            AliasField::Location => &mut self.location,
            AliasField::PlacementStyle => &mut self.placement_style,
            AliasField::ModelAge => &mut self.model_age,
            AliasField::EyeDirection => &mut self.eye_direction,
        }
    }

    /// Free-text side field paired with a custom-capable category.
    pub fn custom_side_field(&self, category: Category) -> Option<&str> {
        match category {
            Category::Props => Some(self.custom_props.as_str()),
            Category::MicroLocation => Some(self.custom_micro_location.as_str()),
            _ => None,
        }
    }

    pub(crate) fn custom_side_field_mut(&mut self, category: Category) -> Option<&mut String> {
        match category {
            Category::Props => Some(&mut self.custom_props),
            Category::MicroLocation => Some(&mut self.custom_micro_location),
            _ => None,
        }
    }

    /// Reducer: return the record with `edit` applied.
    pub fn apply(mut self, edit: &ConfigEdit) -> Self {
        self.set(edit.category, edit.value.clone());
        self
    }

    /// Whether the content style and age group describe a scene with a person.
    /// Reference identities are not considered here.
    pub fn describes_person(&self) -> bool {
        self.content_style != CONTENT_STYLE_PRODUCT && self.age_group != AGE_GROUP_NO_PERSON
    }

    fn slot(&self, category: Category) -> &String {
        match category {
            Category::ContentStyle => &self.content_style,
            Category::CompositionMode => &self.composition_mode,
            Category::AspectRatio => &self.aspect_ratio,
            Category::CreatorPreset => &self.creator_preset,
            Category::Platform => &self.platform,
            Category::Mood => &self.mood,
            Category::ImageQuality => &self.image_quality,
            Category::CameraDevice => &self.camera_device,
            Category::CameraDistance => &self.camera_distance,
            Category::CameraAngle => &self.camera_angle,
            Category::CameraShot => &self.camera_shot,
            Category::Lens => &self.lens,
            Category::DepthOfField => &self.depth_of_field,
            Category::Lighting => &self.lighting,
            Category::TimeOfDay => &self.time_of_day,
            Category::ColorGrade => &self.color_grade,
            Category::Setting => &self.setting,
            Category::MicroLocation => &self.micro_location,
            Category::Props => &self.props,
            Category::Weather => &self.weather,
            Category::Background => &self.background,
            Category::AgeGroup => &self.age_group,
            Category::Gender => &self.gender,
            Category::Ethnicity => &self.ethnicity,
            Category::SkinTone => &self.skin_tone,
            Category::HairColor => &self.hair_color,
            Category::HairStyle => &self.hair_style,
            Category::BodyType => &self.body_type,
            Category::Wardrobe => &self.wardrobe,
            Category::Pose => &self.pose,
            Category::Gaze => &self.gaze,
            Category::Expression => &self.expression,
            Category::SkinRealism => &self.skin_realism,
            Category::Makeup => &self.makeup,
            Category::Accessories => &self.accessories,
            Category::ProductPlacement => &self.product_placement,
            Category::ProductInteraction => &self.product_interaction,
            Category::ProductScale => &self.product_scale,
            Category::ProductSurface => &self.product_surface,
        }
    }

    fn slot_mut(&mut self, category: Category) -> &mut String {
        match category {
            Category::ContentStyle => &mut self.content_style,
            Category::CompositionMode => &mut self.composition_mode,
            Category::AspectRatio => &mut self.aspect_ratio,
            Category::CreatorPreset => &mut self.creator_preset,
            Category::Platform => &mut self.platform,
            Category::Mood => &mut self.mood,
            Category::ImageQuality => &mut self.image_quality,
            Category::CameraDevice => &mut self.camera_device,
            Category::CameraDistance => &mut self.camera_distance,
            Category::CameraAngle => &mut self.camera_angle,
            Category::CameraShot => &mut self.camera_shot,
            Category::Lens => &mut self.lens,
            Category::DepthOfField => &mut self.depth_of_field,
            Category::Lighting => &mut self.lighting,
            Category::TimeOfDay => &mut self.time_of_day,
            Category::ColorGrade => &mut self.color_grade,
            Category::Setting => &mut self.setting,
            Category::MicroLocation => &mut self.micro_location,
            Category::Props => &mut self.props,
            Category::Weather => &mut self.weather,
            Category::Background => &mut self.background,
            Category::AgeGroup => &mut self.age_group,
            Category::Gender => &mut self.gender,
            Category::Ethnicity => &mut self.ethnicity,
            Category::SkinTone => &mut self.skin_tone,
            Category::HairColor => &mut self.hair_color,
            Category::HairStyle => &mut self.hair_style,
            Category::BodyType => &mut self.body_type,
            Category::Wardrobe => &mut self.wardrobe,
            Category::Pose => &mut self.pose,
            Category::Gaze => &mut self.gaze,
            Category::Expression => &mut self.expression,
            Category::SkinRealism => &mut self.skin_realism,
            Category::Makeup => &mut self.makeup,
            Category::Accessories => &mut self.accessories,
            Category::ProductPlacement => &mut self.product_placement,
            Category::ProductInteraction => &mut self.product_interaction,
            Category::ProductScale => &mut self.product_scale,
            Category::ProductSurface => &mut self.product_surface,
        }
    }
}
