//! `scenecraft-core` library crate.
//!
//! Domain logic for compiling photographic scene choices into generation
//! prompts: option catalogs, the configuration record and its normalizer,
//! identity packages, the storyboard scene store with identity sync, and the
//! prompt compiler. Pure and synchronous; no I/O.

pub mod catalog;
pub mod compiler;
pub mod config;
pub mod cost;
pub mod error;
pub mod identity;
pub mod identity_sync;
pub mod normalize;
pub mod presets;
pub mod product;
pub mod scene;
pub mod storyboard;
pub mod types;

pub use compiler::{compile, CompileInput};
pub use config::{ConfigEdit, ConfigurationRecord};
pub use error::CoreError;
pub use normalize::normalize;
pub use storyboard::{EditOutcome, Storyboard, StoryboardSnapshot};
