//! Identity synchronization across the scenes of a storyboard.
//!
//! [`LinkState`] is a two-state machine (`Unlinked` / `Linked`) driven by a
//! single transition function, [`LinkState::transition`]. While linked, the
//! primary scene (index 0) is the only writer of identity-bearing fields;
//! its changes are fanned out synchronously to every other eligible scene.

use serde::{Deserialize, Serialize};

use crate::catalog::Category;
use crate::identity::IdentityPackage;
use crate::normalize::normalize;
use crate::scene::Scene;

/// Index of the scene that owns identity while linked.
pub const PRIMARY_SCENE_INDEX: usize = 0;

/// Categories that carry the persona's identity.
pub const IDENTITY_CATEGORIES: &[Category] = &[
    Category::AgeGroup,
    Category::Gender,
    Category::Ethnicity,
    Category::SkinTone,
    Category::HairColor,
    Category::Pose,
    Category::Wardrobe,
];

pub fn is_identity_category(category: Category) -> bool {
    IDENTITY_CATEGORIES.contains(&category)
}

/// A scene takes part in identity sync when it is not product-only and its
/// age group is not "no person".
pub fn is_eligible(scene: &Scene) -> bool {
    scene.configuration.describes_person()
}

/// Inputs to [`LinkState::transition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkEvent {
    /// Turn linking on, snapshotting the identity of the scene at `source`.
    Enable { source: usize },
    /// Turn linking off. Scene values are left as they are.
    Disable,
    /// The primary scene changed an identity-bearing field or its reference.
    PrimaryChanged,
    /// The scene at `index` was added or may have become eligible.
    SceneJoined { index: usize },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LinkState {
    #[default]
    Unlinked,
    Linked { shared: IdentityPackage },
}

impl LinkState {
    pub fn is_linked(&self) -> bool {
        matches!(self, LinkState::Linked { .. })
    }

    pub fn shared(&self) -> Option<&IdentityPackage> {
        match self {
            LinkState::Linked { shared } => Some(shared),
            LinkState::Unlinked => None,
        }
    }

    /// Whether the scene at `scene_index` may write identity-bearing fields.
    pub fn permits_identity_write(&self, scene_index: usize) -> bool {
        match self {
            LinkState::Unlinked => true,
            LinkState::Linked { .. } => scene_index == PRIMARY_SCENE_INDEX,
        }
    }

    /// Apply `event` to the state, writing any fan-out into `scenes` before
    /// returning the next state.
    pub fn transition(self, event: LinkEvent, scenes: &mut [Scene]) -> LinkState {
        self.step(event, scenes).0
    }

    /// Like [`LinkState::transition`], also returning how many scenes other
    /// than the source were written.
    pub fn step(self, event: LinkEvent, scenes: &mut [Scene]) -> (LinkState, usize) {
        match (self, event) {
            (LinkState::Unlinked, LinkEvent::Enable { source }) => enable(scenes, source),
            (LinkState::Linked { .. }, LinkEvent::Disable) => {
                for scene in scenes.iter_mut() {
                    scene.set_lock(false);
                }
                tracing::debug!(scenes = scenes.len(), "Identity linking disabled");
                (LinkState::Unlinked, 0)
            }
            (LinkState::Linked { shared }, LinkEvent::PrimaryChanged) => {
                let Some(primary) = scenes.get_mut(PRIMARY_SCENE_INDEX) else {
                    return (LinkState::Unlinked, 0);
                };
                primary.set_lock(true);
                // A primary without a person has no identity to share; the
                // others keep the last shared persona until it has one again.
                if !is_eligible(primary) {
                    tracing::debug!("Primary has no person, identity broadcast held");
                    return (LinkState::Linked { shared }, 0);
                }
                let shared = primary.identity.clone();
                let updated = fan_out(scenes, PRIMARY_SCENE_INDEX);
                tracing::debug!(updated, "Primary identity re-broadcast");
                (LinkState::Linked { shared }, updated)
            }
            (LinkState::Linked { shared }, LinkEvent::SceneJoined { index }) => {
                if index != PRIMARY_SCENE_INDEX
                    && index < scenes.len()
                    && is_eligible(&scenes[index])
                    && is_eligible(&scenes[PRIMARY_SCENE_INDEX])
                {
                    let source = scenes[PRIMARY_SCENE_INDEX].clone();
                    propagate(&source, &mut scenes[index]);
                    tracing::debug!(index, "Scene joined linked identity");
                    return (LinkState::Linked { shared }, 1);
                }
                (LinkState::Linked { shared }, 0)
            }
            (state, _) => (state, 0),
        }
    }
}

fn enable(scenes: &mut [Scene], source: usize) -> (LinkState, usize) {
    let source_eligible = scenes.get(source).is_some_and(is_eligible);
    let primary_eligible = scenes.get(PRIMARY_SCENE_INDEX).is_some_and(is_eligible);
    if !source_eligible || !primary_eligible {
        tracing::debug!(source, "Identity linking ignored: no eligible person");
        return (LinkState::Unlinked, 0);
    }

    scenes[source].set_lock(true);
    let shared = scenes[source].identity.clone();
    let updated = fan_out(scenes, source);
    tracing::debug!(source, updated, "Identity linking enabled");
    (LinkState::Linked { shared }, updated)
}

/// Copy the identity of `scenes[source]` onto every other eligible scene.
/// Returns the number of scenes written.
pub fn fan_out(scenes: &mut [Scene], source: usize) -> usize {
    let Some(source_scene) = scenes.get(source).cloned() else {
        return 0;
    };
    let mut updated = 0;
    for (index, target) in scenes.iter_mut().enumerate() {
        if index == source || !is_eligible(target) {
            continue;
        }
        propagate(&source_scene, target);
        updated += 1;
    }
    updated
}

/// Write the identity-bearing fields and reference image of `source` onto
/// `target`, then lock it.
pub fn propagate(source: &Scene, target: &mut Scene) {
    let mut record = std::mem::take(&mut target.configuration);
    for category in IDENTITY_CATEGORIES {
        record.set(*category, source.configuration.get(*category));
    }
    target.configuration = normalize(record);
    target.set_reference(source.identity.reference_image.clone());
    target.set_lock(true);
    target.refresh_identity();
}
