//! Drag-to-aim input for the human catapult.
//!
//! A drag starts aiming; its length sets the shot strength; releasing the
//! drag fires.

use glam::Vec2;

use crate::game::catapult::{Catapult, CatapultState};
use crate::game::config::GameConfig;

/// Drag gesture state for one human player.
#[derive(Debug, Clone, Default)]
pub struct HumanController {
    first_sample: Option<Vec2>,
    last_sample: Option<Vec2>,
}

impl HumanController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.first_sample.is_some()
    }

    /// Current drag vector, zero when not dragging.
    pub fn drag_delta(&self) -> Vec2 {
        match (self.first_sample, self.last_sample) {
            (Some(first), Some(last)) => last - first,
            _ => Vec2::ZERO,
        }
    }

    /// First drag sample: put the catapult into `Aiming`.
    pub fn begin_drag(&mut self, catapult: &mut Catapult, config: &GameConfig, position: Vec2) {
        self.first_sample = Some(position);
        catapult.set_state(CatapultState::Aiming);
        self.drag_to(catapult, config, position);
    }

    /// Later drag samples. Starts a drag if none is in progress.
    pub fn drag_to(&mut self, catapult: &mut Catapult, config: &GameConfig, position: Vec2) {
        if self.first_sample.is_none() {
            self.begin_drag(catapult, config, position);
            return;
        }
        self.last_sample = Some(position);
        let strength = if config.max_drag_distance > 0.0 {
            self.drag_delta().length() / config.max_drag_distance
        } else {
            0.0
        };
        catapult.set_shot_strength(strength);
    }

    /// End of the drag: fire with the strength reached, if a drag was active.
    ///
    /// Returns the launch speed when a shot was fired.
    pub fn release(&mut self, catapult: &mut Catapult, config: &GameConfig) -> Option<f32> {
        let fired = if self.is_dragging() {
            let velocity = config.shot_velocity_for_strength(catapult.shot_strength());
            catapult.aim_at_shot_strength();
            catapult.shot_velocity = velocity;
            catapult.fire(velocity);
            catapult.set_state(CatapultState::Firing);
            log::debug!("[Human] {} fires at {:.0} px/s", catapult.id(), velocity);
            Some(velocity)
        } else {
            None
        };
        self.reset_drag_state(catapult);
        fired
    }

    /// Forget the gesture and zero the catapult's shot strength.
    pub fn reset_drag_state(&mut self, catapult: &mut Catapult) {
        self.first_sample = None;
        self.last_sample = None;
        catapult.set_shot_strength(0.0);
    }
}
