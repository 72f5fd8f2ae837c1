/// Scene identifiers are allocated per storyboard and never reused within it.
pub type SceneId = u32;
