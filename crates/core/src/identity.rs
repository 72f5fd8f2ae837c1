//! Identity packages: who the persona in a scene is.
//!
//! An [`IdentityPackage`] is derived from a scene's configuration record each
//! time the record changes. A bound [`ReferenceImage`] overrides the derived
//! attributes as far as the prompt compiler is concerned.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::catalog::Category;
use crate::config::ConfigurationRecord;
use crate::error::CoreError;

/// Accepted MIME types for reference images.
pub const VALID_REFERENCE_MIME_TYPES: &[&str] = &["image/png", "image/jpeg", "image/webp"];

/// Maximum decoded size of a reference image (10 MiB).
pub const MAX_REFERENCE_IMAGE_BYTES: usize = 10 * 1024 * 1024;

/// A bound reference photo of the persona.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceImage {
    /// Raw image bytes; base64 in JSON.
    #[serde(with = "base64_bytes")]
    pub data: Vec<u8>,
    pub mime_type: String,
}

impl ReferenceImage {
    /// Build a reference image from base64 text, validating type and size.
    pub fn from_base64(data: &str, mime_type: &str) -> Result<Self, CoreError> {
        validate_mime_type(mime_type)?;
        let bytes = STANDARD
            .decode(data.trim())
            .map_err(|e| CoreError::Validation(format!("Reference image is not valid base64: {e}")))?;
        let image = Self {
            data: bytes,
            mime_type: mime_type.to_string(),
        };
        image.validate()?;
        Ok(image)
    }

    /// Check type and size. Images restored from snapshots bypass
    /// [`ReferenceImage::from_base64`] and are checked here instead.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_mime_type(&self.mime_type)?;
        if self.data.is_empty() {
            return Err(CoreError::Validation(
                "Reference image must not be empty".to_string(),
            ));
        }
        if self.data.len() > MAX_REFERENCE_IMAGE_BYTES {
            return Err(CoreError::Validation(format!(
                "Reference image exceeds maximum size of {MAX_REFERENCE_IMAGE_BYTES} bytes (got {})",
                self.data.len()
            )));
        }
        Ok(())
    }
}

/// Validate that a reference image MIME type is supported.
pub fn validate_mime_type(mime_type: &str) -> Result<(), CoreError> {
    if VALID_REFERENCE_MIME_TYPES.contains(&mime_type) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid reference image type '{mime_type}'. Must be one of: {}",
            VALID_REFERENCE_MIME_TYPES.join(", ")
        )))
    }
}

/// Descriptive persona attributes, taken verbatim from the record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonAttributes {
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
}

impl PersonAttributes {
    pub fn from_record(record: &ConfigurationRecord) -> Self {
        Self {
            age_group: record.get(Category::AgeGroup).to_string(),
            gender: record.get(Category::Gender).to_string(),
            ethnicity: record.get(Category::Ethnicity).to_string(),
            skin_tone: record.get(Category::SkinTone).to_string(),
            hair_color: record.get(Category::HairColor).to_string(),
            hair_style: record.get(Category::HairStyle).to_string(),
            body_type: record.get(Category::BodyType).to_string(),
            wardrobe: record.get(Category::Wardrobe).to_string(),
            pose: record.get(Category::Pose).to_string(),
            gaze: record.get(Category::Gaze).to_string(),
        }
    }

    /// Attribute value by category, for the categories this struct carries.
    pub fn get(&self, category: Category) -> Option<&str> {
        let value = match category {
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
            _ => return None,
        };
        Some(value.as_str())
    }
}

/// Snapshot of the persona plus its lock flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityPackage {
    pub reference_image: Option<ReferenceImage>,
    pub lock_enabled: bool,
    /// Absent when the record describes no person.
    pub person_attributes: Option<PersonAttributes>,
}

impl IdentityPackage {
    /// Derive the package from a record, keeping the given reference and lock.
    pub fn derive(
        record: &ConfigurationRecord,
        reference_image: Option<ReferenceImage>,
        lock_enabled: bool,
    ) -> Self {
        let person_attributes = record
            .describes_person()
            .then(|| PersonAttributes::from_record(record));
        Self {
            reference_image,
            lock_enabled,
            person_attributes,
        }
    }

    pub fn has_reference(&self) -> bool {
        self.reference_image.is_some()
    }
}

/// Serde adapter storing byte buffers as standard base64 strings.
mod base64_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let text = String::deserialize(deserializer)?;
        STANDARD
            .decode(text.as_bytes())
            .map_err(serde::de::Error::custom)
    }
}
