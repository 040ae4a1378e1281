//! Game Module
//!
//! Contains the catapult duel built on top of the engine: the per-catapult
//! turn state machine, the battlefield that owns both sides, player
//! controllers and the match host.

pub mod battlefield;
pub mod catapult;
pub mod config;
pub mod duel;
pub mod ids;
pub mod players;

pub use battlefield::{Battlefield, Player, PlayerKind};
pub use catapult::{Catapult, CatapultEvent, CatapultState, EnemyView, Impact, StepOutcome, TickContext};
pub use catapult::aim_frame_for_strength;
pub use config::{CatapultPlacement, GameConfig};
pub use duel::{AI_NAME, Duel, DuelEvent, HUMAN_NAME};
pub use ids::{CatapultId, PlayerId};
pub use players::{AiController, HumanController};
