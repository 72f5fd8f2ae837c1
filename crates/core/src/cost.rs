//! Inputs handed to the credit/cost collaborator. The core never prices a
//! generation itself.

use serde::Serialize;

use crate::scene::Scene;

/// Generation mode as seen by the cost collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationMode {
    Simple,
    Studio,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CostInputs {
    pub content_style: String,
    pub has_person: bool,
    pub has_reference_identity: bool,
    pub mode: GenerationMode,
}

impl CostInputs {
    pub fn for_scene(scene: &Scene) -> Self {
        Self {
            content_style: scene.configuration.content_style.clone(),
            has_person: scene.has_person(),
            has_reference_identity: scene.identity.has_reference(),
            mode: if scene.mode_flags.pro_mode {
                GenerationMode::Studio
            } else {
                GenerationMode::Simple
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, CONTENT_STYLE_PRODUCT};
    use crate::config::ConfigEdit;

    #[test]
    fn default_scene_inputs() {
        let scene = Scene::new(1, "Scene 1");
        let inputs = scene.cost_inputs();
        assert_eq!(inputs.content_style, "ugc");
        assert!(inputs.has_person);
        assert!(!inputs.has_reference_identity);
        assert_eq!(inputs.mode, GenerationMode::Simple);
    }

    #[test]
    fn product_only_studio_scene_inputs() {
        let mut scene = Scene::new(1, "Scene 1");
        scene.apply_edit(&ConfigEdit::new(Category::ContentStyle, CONTENT_STYLE_PRODUCT));
        scene.mode_flags.pro_mode = true;
        let inputs = scene.cost_inputs();
        assert!(!inputs.has_person);
        assert_eq!(inputs.mode, GenerationMode::Studio);
    }
}
