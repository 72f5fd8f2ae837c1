//! Configuration normalizer.
//!
//! [`normalize`] reconciles legacy alias fields, migrates retired values,
//! classifies free text in custom-capable categories and fills defaults. It
//! is pure and idempotent: `normalize(normalize(x)) == normalize(x)`.

use crate::catalog::{Category, CUSTOM_VALUE};
use crate::config::{ConfigurationRecord, CONFIG_SCHEMA_VERSION, MIRRORED_PAIRS};

/// Categories whose free text is surfaced through a side field.
pub const CUSTOM_CAPABLE: &[Category] = &[Category::Props, Category::MicroLocation];

/// Retired values from earlier schema versions: (category, old, new).
/// Every `new` value is a catalog value; no `old` value is.
pub const LEGACY_VALUE_RENAMES: &[(Category, &str, &str)] = &[
    (Category::ContentStyle, "product_only", "product"),
    (Category::ContentStyle, "product-only", "product"),
    (Category::AgeGroup, "none", "no_person"),
    (Category::AgeGroup, "no-person", "no_person"),
    (Category::AgeGroup, "60+", "60_plus"),
    (Category::CompositionMode, "product_focus", "product_first"),
    (Category::CompositionMode, "model_focus", "model_first"),
    (Category::CompositionMode, "50_50", "fifty_fifty"),
    (Category::CameraShot, "fullbody", "full_body"),
    (Category::CameraShot, "closeup", "close_up"),
    (Category::CameraDistance, "extreme_close_up", "extreme_close"),
    (Category::Gaze, "camera", "at_camera"),
    (Category::Gaze, "product", "at_product"),
    (Category::Lighting, "window", "natural_window"),
    (Category::Lighting, "softbox", "studio_softbox"),
    (Category::ProductPlacement, "hand", "in_hand"),
];

/// Normalize a raw configuration record.
pub fn normalize(record: ConfigurationRecord) -> ConfigurationRecord {
    let mut record = record;

    trim_all(&mut record);
    migrate_legacy_values(&mut record);
    promote_aliases(&mut record);
    for category in CUSTOM_CAPABLE {
        classify_custom(&mut record, *category);
    }
    fill_defaults(&mut record);
    mirror_aliases(&mut record);
    record.schema_version = CONFIG_SCHEMA_VERSION;

    record
}

/// Whether every mirrored alias equals its canonical field.
pub fn aliases_in_sync(record: &ConfigurationRecord) -> bool {
    MIRRORED_PAIRS
        .iter()
        .all(|(canonical, alias)| record.get(*canonical) == record.alias(*alias))
}

fn trim_all(record: &mut ConfigurationRecord) {
    for category in Category::ALL {
        let trimmed = record.get(*category).trim();
        if trimmed.len() != record.get(*category).len() {
            let trimmed = trimmed.to_string();
            record.set(*category, trimmed);
        }
    }
    for (_, alias) in MIRRORED_PAIRS {
        let value = record.alias_mut(*alias);
        let trimmed = value.trim();
        if trimmed.len() != value.len() {
            *value = trimmed.to_string();
        }
    }
    for field in [
        &mut record.custom_props,
        &mut record.custom_micro_location,
        &mut record.custom_cues,
    ] {
        let trimmed = field.trim();
        if trimmed.len() != field.len() {
            *field = trimmed.to_string();
        }
    }
}

fn migrate_legacy_values(record: &mut ConfigurationRecord) {
    for (category, old, new) in LEGACY_VALUE_RENAMES {
        if record.get(*category) == *old {
            record.set(*category, *new);
        }
        if let Some((_, alias)) = MIRRORED_PAIRS.iter().find(|(c, _)| c == category) {
            let value = record.alias_mut(*alias);
            if value == old {
                *value = new.to_string();
            }
        }
    }
}

/// Canonical wins; an empty canonical is promoted from its alias.
fn promote_aliases(record: &mut ConfigurationRecord) {
    for (canonical, alias) in MIRRORED_PAIRS {
        if record.get(*canonical).is_empty() && !record.alias(*alias).is_empty() {
            let promoted = record.alias(*alias).to_string();
            record.set(*canonical, promoted);
        }
    }
}

/// Route free text between the catalog field and its side field.
///
/// Catalog matches (value or label) are stored as the catalog value with an
/// empty side field. Anything else is moved into the side field and the
/// catalog field becomes [`CUSTOM_VALUE`].
fn classify_custom(record: &mut ConfigurationRecord, category: Category) {
    let stored = record.get(category).to_string();
    let side = record
        .custom_side_field(category)
        .unwrap_or_default()
        .to_string();

    let is_marker = category
        .find_loose(&stored)
        .is_some_and(|option| option.value == CUSTOM_VALUE);

    let (value, custom) = if stored.is_empty() {
        (String::new(), String::new())
    } else if is_marker {
        match category.find_loose(&side) {
            Some(option) if option.value != CUSTOM_VALUE => (option.value.to_string(), String::new()),
            _ if side.is_empty() => (String::new(), String::new()),
            _ => (CUSTOM_VALUE.to_string(), side),
        }
    } else {
        match category.find_loose(&stored) {
            Some(option) => (option.value.to_string(), String::new()),
            None => (CUSTOM_VALUE.to_string(), stored),
        }
    };

    record.set(category, value);
    if let Some(field) = record.custom_side_field_mut(category) {
        *field = custom;
    }
}

fn fill_defaults(record: &mut ConfigurationRecord) {
    for category in Category::ALL {
        if record.get(*category).is_empty() {
            record.set(*category, category.default_value());
        }
    }
}

fn mirror_aliases(record: &mut ConfigurationRecord) {
    for (canonical, alias) in MIRRORED_PAIRS {
        let value = record.get(*canonical).to_string();
        let slot = record.alias_mut(*alias);
        if *slot != value {
            *slot = value;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
