//! Computer opponent.
//!
//! The AI has no aiming model: at the start of its turn it picks a random
//! launch speed and lets the catapult pull back to the matching aim frame.

use rand::Rng;

use crate::game::catapult::{Catapult, CatapultState};
use crate::game::config::GameConfig;

/// Picks a random shot for the AI catapult once per turn.
#[derive(Debug, Clone, Copy, Default)]
pub struct AiController;

impl AiController {
    pub fn new() -> Self {
        Self
    }

    /// Run before the catapult's own tick. Returns the chosen launch speed on
    /// the tick a shot was picked.
    pub fn update<R: Rng>(
        &mut self,
        catapult: &mut Catapult,
        config: &GameConfig,
        rng: &mut R,
    ) -> Option<f32> {
        if catapult.state() != CatapultState::Aiming || catapult.is_animation_running() {
            return None;
        }

        let velocity = pick_shot_velocity(config, rng);
        catapult.set_shot_strength(velocity / config.max_shot_velocity);
        catapult.shot_velocity = velocity;
        log::debug!(
            "[AI] {} aims at {:.0} px/s (strength {:.2})",
            catapult.id(),
            velocity,
            catapult.shot_strength()
        );
        Some(velocity)
    }
}

/// Whole-number speed in `[min_shot_velocity, max_shot_velocity)`.
fn pick_shot_velocity<R: Rng>(config: &GameConfig, rng: &mut R) -> f32 {
    let min = config.min_shot_velocity as i32;
    let max = config.max_shot_velocity as i32;
    if max <= min {
        return min as f32;
    }
    rng.gen_range(min..max) as f32
}
