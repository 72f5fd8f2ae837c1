//! Prompt compiler: turns one scene's choices into the instruction text sent
//! to the image generator.
//!
//! [`compile`] is pure and total. It normalizes a copy of the record, builds
//! the blocks in a fixed order, joins them with blank lines and runs the
//! result through [`scrub::scrub`]:
//!
//! 1. composition intro
//! 2. identity / appearance
//! 3. scene and environment
//! 4. product and camera
//! 5. special-mode overlays
//! 6. free-text custom cues

pub mod phrases;
pub mod scrub;

use crate::catalog::{
    Category, AGE_GROUP_NO_PERSON, CONTENT_STYLE_PRODUCT, CUSTOM_VALUE, PLACEMENT_IN_HAND,
};
use crate::config::ConfigurationRecord;
use crate::identity::{IdentityPackage, PersonAttributes};
use crate::normalize::normalize;
use crate::product::ProductAsset;
use crate::scene::ModeFlags;

/// Everything the compiler reads. Borrowed; nothing is mutated.
#[derive(Debug, Clone, Copy)]
pub struct CompileInput<'a> {
    pub configuration: &'a ConfigurationRecord,
    pub identity: &'a IdentityPackage,
    pub products: &'a [ProductAsset],
    pub modes: &'a ModeFlags,
}

/// Whether the scene has a person: never for product-only content, otherwise
/// when the age group describes one or a reference identity is bound.
pub fn subject_present(record: &ConfigurationRecord, identity: &IdentityPackage) -> bool {
    record.content_style != CONTENT_STYLE_PRODUCT
        && (record.age_group != AGE_GROUP_NO_PERSON || identity.has_reference())
}

/// Compile the prompt for one scene.
pub fn compile(input: &CompileInput<'_>) -> String {
    let record = normalize(input.configuration.clone());
    let ctx = Context {
        record: &record,
        identity: input.identity,
        products: input.products,
        modes: input.modes,
        person: subject_present(&record, input.identity),
    };

    let blocks = [
        ctx.composition_block(),
        ctx.identity_block(),
        ctx.environment_block(),
        ctx.product_camera_block(),
        ctx.overlay_block(),
        ctx.custom_cues_block(),
    ];
    let text = blocks
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join("\n\n");
    scrub::scrub(&text)
}

// ---------------------------------------------------------------------------
// Block assembly
// ---------------------------------------------------------------------------

/// Sentences of one block, joined with single spaces.
#[derive(Default)]
struct Block(Vec<String>);

impl Block {
    fn push(&mut self, sentence: impl Into<String>) {
        let sentence = sentence.into();
        if !sentence.trim().is_empty() {
            self.0.push(sentence);
        }
    }

    fn finish(self) -> Option<String> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0.join(" "))
        }
    }
}

struct Context<'a> {
    record: &'a ConfigurationRecord,
    identity: &'a IdentityPackage,
    products: &'a [ProductAsset],
    modes: &'a ModeFlags,
    person: bool,
}

impl Context<'_> {
    /// Catalog phrase of the stored value, or the value itself when it is
    /// free text.
    fn phrase(&self, category: Category) -> &str {
        let value = self.record.get(category);
        match category.find(value) {
            Some(option) => option.phrase,
            None => value,
        }
    }

    fn composition_block(&self) -> Option<String> {
        let mut block = Block::default();
        block.push(format!(
            "Create {} for {}.",
            self.phrase(Category::ImageQuality),
            self.phrase(Category::Platform)
        ));
        block.push(format!(
            "Style: {}, {} mood, {} format.",
            self.phrase(Category::ContentStyle),
            self.phrase(Category::Mood),
            self.phrase(Category::AspectRatio)
        ));
        let creator = self.phrase(Category::CreatorPreset);
        if !creator.is_empty() {
            block.push(format!("Styled with {creator}."));
        }
        if self.person {
            block.push(self.phrase(Category::CompositionMode));
        }
        block.finish()
    }

    fn identity_block(&self) -> Option<String> {
        if !self.person {
            return Some(phrases::NO_PERSON_DIRECTIVE.to_string());
        }

        let mut block = Block::default();
        if self.identity.has_reference() {
            block.push(phrases::PRESERVE_REFERENCE);
        } else {
            let derived;
            let attributes = match &self.identity.person_attributes {
                Some(attributes) => attributes,
                None => {
                    derived = PersonAttributes::from_record(self.record);
                    &derived
                }
            };
            describe_person(&mut block, attributes);
        }

        block.push(format!("Expression: {}.", self.phrase(Category::Expression)));
        block.push(format!("Skin: {}.", self.phrase(Category::SkinRealism)));
        block.push(format!("Makeup: {}.", self.phrase(Category::Makeup)));
        let accessories = self.phrase(Category::Accessories);
        if !accessories.is_empty() {
            block.push(format!("Accessories: {accessories}."));
        }
        block.finish()
    }

    fn environment_block(&self) -> Option<String> {
        let mut block = Block::default();
        block.push(format!("Setting: {}.", self.phrase(Category::Setting)));

        match self.custom_text(Category::MicroLocation) {
            Some(text) => block.push(format!(
                "Specific spot ({}): \"{text}\".",
                phrases::USER_DESCRIBED
            )),
            None => {
                let spot = self.phrase(Category::MicroLocation);
                if !spot.is_empty() {
                    block.push(format!("Position the scene {spot}."));
                }
            }
        }

        match self.custom_text(Category::Props) {
            Some(text) => block.push(format!("Props ({}): \"{text}\".", phrases::USER_DESCRIBED)),
            None => {
                let props = self.phrase(Category::Props);
                if !props.is_empty() {
                    block.push(format!("Props: {props}."));
                }
            }
        }

        let background = self.phrase(Category::Background);
        if !background.is_empty() {
            block.push(format!("Background: {background}."));
        }
        let weather = self.phrase(Category::Weather);
        if !weather.is_empty() {
            block.push(format!("Weather: {weather}."));
        }
        block.push(format!(
            "Lighting: {} {}, with {}.",
            self.phrase(Category::Lighting),
            self.phrase(Category::TimeOfDay),
            self.phrase(Category::ColorGrade)
        ));
        block.finish()
    }

    /// Free text of a custom-capable category, when it holds any.
    fn custom_text(&self, category: Category) -> Option<&str> {
        if self.record.get(category) != CUSTOM_VALUE {
            return None;
        }
        self.record
            .custom_side_field(category)
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }

    fn product_camera_block(&self) -> Option<String> {
        let mut block = Block::default();

        if !self.products.is_empty() {
            let names: Vec<String> = self
                .products
                .iter()
                .enumerate()
                .map(|(i, p)| p.name_or(i))
                .collect();
            let noun = if names.len() == 1 { "product" } else { "products" };
            block.push(format!("Feature the {noun}: {}.", names.join(", ")));
        }

        if self.modes.hero_landing {
            block.push(phrases::HERO_PLACEMENT);
        } else if !self.person && self.record.product_placement == PLACEMENT_IN_HAND {
            block.push(phrases::UNATTENDED_PLACEMENT);
        } else {
            block.push(format!(
                "Placement: {}.",
                self.phrase(Category::ProductPlacement)
            ));
        }
        if self.person {
            let interaction = self.phrase(Category::ProductInteraction);
            if !interaction.is_empty() {
                block.push(format!("Interaction: the person is {interaction}."));
            }
        }
        block.push(format!("Scale: {}.", self.phrase(Category::ProductScale)));
        let surface = self.phrase(Category::ProductSurface);
        if !surface.is_empty() {
            block.push(format!("Surface: {surface}."));
        }
        for (i, product) in self.products.iter().enumerate() {
            if let Some(annotation) = product.height_annotation(i) {
                block.push(format!("Size reference: {annotation}."));
            }
        }

        if self.person {
            block.push(format!(
                "Camera: {} {}, {}.",
                self.phrase(Category::CameraShot),
                self.phrase(Category::CameraDistance),
                self.phrase(Category::CameraAngle)
            ));
        } else {
            block.push(format!(
                "Camera: {}, {}.",
                self.phrase(Category::CameraDistance),
                self.phrase(Category::CameraAngle)
            ));
        }
        if self.modes.pro_mode {
            block.push(format!(
                "Technical: {} with {}, {}.",
                self.phrase(Category::CameraDevice),
                self.phrase(Category::Lens),
                self.phrase(Category::DepthOfField)
            ));
        }
        block.finish()
    }

    fn overlay_block(&self) -> Option<String> {
        let mut block = Block::default();

        if self.modes.hero_landing {
            block.push(phrases::HERO_LANDING_DIRECTIVES);
        } else if self.modes.ugc_real.enabled {
            block.push(phrases::imperfection(self.modes.ugc_real.imperfection));
            if self.modes.ugc_real.handheld {
                block.push(phrases::HANDHELD);
            }
        }

        let expert = &self.modes.formulation_expert;
        if expert.enabled && self.person {
            let name = non_blank(&expert.name).unwrap_or(expert.preset.default_name());
            let role = non_blank(&expert.role).unwrap_or(expert.preset.default_role());
            block.push(format!(
                "Present the person as {name}, a {role}, {}.",
                expert.preset.credibility()
            ));
        }
        block.finish()
    }

    fn custom_cues_block(&self) -> Option<String> {
        non_blank(&self.record.custom_cues)
            .map(|cues| format!("{} {cues}", phrases::CUSTOM_CUES_PREFIX))
    }
}

fn non_blank(text: &str) -> Option<&str> {
    let text = text.trim();
    (!text.is_empty()).then_some(text)
}

/// Phrase for a person attribute: the catalog phrase, the raw value when it
/// is free text, or `placeholder` when there is nothing to say.
fn attribute<'a>(category: Category, value: &'a str, placeholder: &'static str) -> &'a str {
    let value = value.trim();
    if value.is_empty() {
        return placeholder;
    }
    match category.find(value) {
        Some(option) if option.phrase.is_empty() => placeholder,
        Some(option) => option.phrase,
        None => value,
    }
}

fn describe_person(block: &mut Block, attributes: &PersonAttributes) {
    use phrases::{PLACEHOLDER_BALANCED, PLACEHOLDER_NATURAL, PLACEHOLDER_UNSPECIFIED};

    block.push(format!(
        "Feature one person with a consistent appearance. Age: {}. Gender: {}. Ethnicity: {}.",
        attribute(Category::AgeGroup, &attributes.age_group, PLACEHOLDER_UNSPECIFIED),
        attribute(Category::Gender, &attributes.gender, PLACEHOLDER_UNSPECIFIED),
        attribute(Category::Ethnicity, &attributes.ethnicity, PLACEHOLDER_UNSPECIFIED),
    ));
    block.push(format!(
        "Skin tone: {}. Hair: {} {}. Build: {}.",
        attribute(Category::SkinTone, &attributes.skin_tone, PLACEHOLDER_NATURAL),
        attribute(Category::HairStyle, &attributes.hair_style, PLACEHOLDER_NATURAL),
        attribute(Category::HairColor, &attributes.hair_color, PLACEHOLDER_NATURAL),
        attribute(Category::BodyType, &attributes.body_type, PLACEHOLDER_BALANCED),
    ));
    block.push(format!(
        "Wardrobe: {}. Pose: {}. Gaze: {}.",
        attribute(Category::Wardrobe, &attributes.wardrobe, PLACEHOLDER_NATURAL),
        attribute(Category::Pose, &attributes.pose, PLACEHOLDER_NATURAL),
        attribute(Category::Gaze, &attributes.gaze, PLACEHOLDER_NATURAL),
    ));
}
