//! Fixed prompt fragments used by the compiler.
//!
//! None of these may contain a phrase from
//! [`super::scrub::CONFLICTING_IDENTITY_PHRASES`]; the scrubber would strip it.

use crate::scene::Imperfection;

/// Emitted in place of every person block when the scene has no subject.
pub const NO_PERSON_DIRECTIVE: &str = "Do not include any people, faces, or hands.";

/// The whole identity block when a reference image is bound.
pub const PRESERVE_REFERENCE: &str = "Use the attached reference photo as the exact identity of the person. \
     Preserve their facial features, hair, skin tone and body proportions exactly as shown.";

/// Placeholder for an unknown identity attribute.
pub const PLACEHOLDER_UNSPECIFIED: &str = "unspecified";
/// Placeholder for an unknown skin, hair or styling attribute.
pub const PLACEHOLDER_NATURAL: &str = "natural";
/// Placeholder for an unknown build.
pub const PLACEHOLDER_BALANCED: &str = "balanced";

/// Replaces the product placement phrase in hero landing mode.
pub const HERO_PLACEMENT: &str =
    "Placement: the product stands upright in the foreground as the sharp hero of the frame.";

pub const HERO_LANDING_DIRECTIVES: &str = "Hero landing layout: align the product on a clean vertical axis, \
     ground it with a soft contact shadow, and keep its scale consistent with the surroundings. \
     Leave generous negative space for headline text.";

/// Replaces a hand-held placement when the scene has no person.
pub const UNATTENDED_PLACEMENT: &str =
    "Placement: the product stands on its own, resting on a nearby surface.";

pub const HANDHELD: &str = "Handheld framing with a slight natural tilt.";

pub fn imperfection(level: Imperfection) -> &'static str {
    match level {
        Imperfection::Subtle => {
            "UGC realism: subtle imperfections, with light grain and casual, unstaged framing."
        }
        Imperfection::Natural => {
            "UGC realism: a casual phone-camera look with natural grain, slightly imperfect framing and everyday clutter."
        }
        Imperfection::Raw => {
            "UGC realism: a raw, unedited phone snapshot with visible noise, mixed lighting and imperfect framing."
        }
    }
}

/// Prefix for free text the user typed into a custom-capable field.
pub const USER_DESCRIBED: &str = "user-described";

pub const CUSTOM_CUES_PREFIX: &str = "Additional direction:";
