//! Catapult Module
//!
//! Turn state machine for a single catapult and its boulder.

pub mod machine;
pub mod state;

pub use machine::{Catapult, EnemyView, Impact, StepOutcome, TickContext, aim_frame_for_strength};
pub use state::{CatapultEvent, CatapultState};
