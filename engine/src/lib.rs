//! Catapult Wars Engine Library
//!
//! Turn engine for a two-catapult artillery duel: sprite-sheet clip
//! bookkeeping, boulder ballistics, the catapult state machine and the match
//! host. Drawing and sound playback stay with the embedding application; the
//! engine reports frame indices, positions and sound cues.
//!
//! # Modules
//!
//! - [`animation`] - Sprite-sheet clips and their JSON definitions
//! - [`audio`] - Sound cues and the injected [`audio::AudioSink`]
//! - [`physics`] - Projectile flight and hit tests
//! - [`error`] - Load-time errors
//! - [`game`] - Catapult state machine, battlefield and duel host
//!
//! # Example
//!
//! ```ignore
//! use catapult_wars_engine::animation::load_definitions;
//! use catapult_wars_engine::audio::LogAudio;
//! use catapult_wars_engine::game::{Duel, GameConfig};
//! use glam::Vec2;
//!
//! let definitions = load_definitions("assets/catapult_animations.json".as_ref())?;
//! let mut duel = Duel::new(GameConfig::default(), &definitions, 7)?;
//! let mut audio = LogAudio;
//!
//! duel.update(1.0 / 60.0, &mut audio)?;
//! duel.begin_drag(Vec2::new(100.0, 200.0))?;
//! duel.drag_to(Vec2::new(400.0, 260.0))?;
//! duel.release()?;
//! while !duel.is_game_over() {
//!     duel.update(1.0 / 60.0, &mut audio)?;
//! }
//! ```

pub mod animation;
pub mod audio;
pub mod error;
pub mod physics;

// Game-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

pub use error::{CatapultError, Result};
// Re-export the types most hosts touch
pub use animation::{AnimationDefinition, AnimationSet};
pub use audio::{AudioSink, SoundCue};
pub use game::{Duel, DuelEvent, GameConfig};
