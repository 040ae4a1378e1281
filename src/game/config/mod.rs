//! Config Module
//!
//! Centralized configuration for the duel layout and gameplay parameters.

pub mod game_config;

pub use game_config::{CatapultPlacement, GameConfig};
