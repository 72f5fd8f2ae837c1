//! Product context supplied by the asset collaborator.
//!
//! The compiler only reads these; it never mutates them.

use serde::{Deserialize, Serialize};

/// Centimetres per inch.
const CM_PER_INCH: f64 = 2.54;

/// Unit of a recorded physical product height.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeightUnit {
    #[default]
    Cm,
    Mm,
    In,
}

impl HeightUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            HeightUnit::Cm => "cm",
            HeightUnit::Mm => "mm",
            HeightUnit::In => "in",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductAsset {
    pub id: String,
    pub display_name: String,
    pub image_base64: String,
    pub mime_type: String,
    pub height_value: Option<f64>,
    pub height_unit: HeightUnit,
}

impl ProductAsset {
    /// Display name, falling back to a positional name when blank.
    pub fn name_or(&self, position: usize) -> String {
        let name = self.display_name.trim();
        if name.is_empty() {
            format!("Product {}", position + 1)
        } else {
            name.to_string()
        }
    }

    /// Recorded height, ignoring missing, non-finite and non-positive values.
    pub fn height(&self) -> Option<f64> {
        self.height_value.filter(|h| h.is_finite() && *h > 0.0)
    }

    /// `"<name> is N cm tall (~M in)"`, or `None` when no height is recorded.
    /// Metric heights are converted to inches; inch heights to centimetres.
    pub fn height_annotation(&self, position: usize) -> Option<String> {
        let height = self.height()?;
        let (converted, converted_unit) = match self.height_unit {
            HeightUnit::Cm => (height / CM_PER_INCH, HeightUnit::In),
            HeightUnit::Mm => (height / 10.0 / CM_PER_INCH, HeightUnit::In),
            HeightUnit::In => (height * CM_PER_INCH, HeightUnit::Cm),
        };
        Some(format!(
            "{} is {} {} tall (~{} {})",
            self.name_or(position),
            format_measure(height),
            self.height_unit.symbol(),
            format_measure(converted),
            converted_unit.symbol()
        ))
    }
}

/// Format with at most one decimal place, dropping a trailing `.0`.
fn format_measure(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{rounded:.1}")
    }
}
