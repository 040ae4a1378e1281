//! Animation module
//!
//! Sprite-sheet clips and the definition sheet they are built from.
//!
//! # Submodules
//!
//! - [`clip`] - Time-driven frame player
//! - [`definition`] - Serialized clip definitions and the per-catapult clip set

pub mod clip;
pub mod definition;

pub use clip::Animation;
pub use definition::{
    AnimationDefinition, AnimationSet, ClipName, default_definitions, load_definitions,
    parse_definitions,
};
