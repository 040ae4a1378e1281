//! Projectile flight for catapult shots
//!
//! Flight is evaluated in closed form at the accumulated flight time, so the
//! trajectory is an exact parabola sampled once per update. Coordinates are
//! screen space: x grows to the right, y grows downward, gravity is positive.
//!
//! # Example
//!
//! ```ignore
//! use catapult_wars_engine::physics::ballistics::{BallisticsConfig, Projectile, ProjectileState};
//! use glam::Vec2;
//!
//! let config = BallisticsConfig::default();
//! let mut projectile = Projectile::new(Vec2::new(175.0, 340.0), 1.0, 60.0, 8.0);
//! projectile.fire(300.0);
//! projectile.launch();
//! while let ProjectileState::Flying = projectile.integrate(&config, 0.0, 1.0 / 60.0) {}
//! ```

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A catapult boulder.
///
/// Owned by its catapult for the whole match; [`Projectile::launch`] puts it
/// back at its start position for every new shot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    /// Where every shot starts (the catapult bucket)
    pub start_position: Vec2,
    /// Current position
    pub position: Vec2,
    /// Launch velocity. x is the horizontal speed before `direction` is
    /// applied, y is the upward speed.
    pub velocity: Vec2,
    /// +1.0 shoots to the right, -1.0 to the left (mirrored catapult)
    pub direction: f32,
    /// Extra depth below `ground_y` the boulder may sink before it counts
    /// as a ground hit (the height of the firing sprite)
    pub hit_offset: f32,
    /// Bounding sphere radius used for catapult hit checks
    pub radius: f32,
    /// Seconds since launch
    pub flight_time: f32,
    /// Spin, radians. Cosmetic only.
    pub rotation: f32,
    /// Where the last flight touched the ground
    pub hit_position: Option<Vec2>,
}

impl Default for Projectile {
    fn default() -> Self {
        Self::new(Vec2::ZERO, 1.0, 0.0, 8.0)
    }
}

impl Projectile {
    /// Create a resting projectile at its start position.
    pub fn new(start_position: Vec2, direction: f32, hit_offset: f32, radius: f32) -> Self {
        Self {
            start_position,
            position: start_position,
            velocity: Vec2::ZERO,
            direction: if direction < 0.0 { -1.0 } else { 1.0 },
            hit_offset,
            radius: radius.max(0.0),
            flight_time: 0.0,
            rotation: 0.0,
            hit_position: None,
        }
    }

    /// Arm the projectile with a launch speed.
    ///
    /// Catapults throw at 45 degrees, so the same speed is used for both axes.
    pub fn fire(&mut self, velocity: f32) {
        self.velocity = Vec2::new(velocity, velocity);
        self.flight_time = 0.0;
    }

    /// Release the armed projectile from its start position.
    pub fn launch(&mut self) {
        self.position = self.start_position;
        self.flight_time = 0.0;
        self.rotation = 0.0;
        self.hit_position = None;
    }

    /// Position on the trajectory `t` seconds after launch.
    pub fn position_at(&self, config: &BallisticsConfig, wind: f32, t: f32) -> Vec2 {
        Vec2::new(
            self.start_position.x
                + self.direction * self.velocity.x * t
                + 0.5 * (config.wind_scale * wind) * t * t,
            self.start_position.y - self.velocity.y * t + 0.5 * config.gravity * t * t,
        )
    }

    /// Advance the flight by `dt` seconds.
    ///
    /// When the boulder reaches the ground it is rolled back to its previous
    /// sample (so it stays above the ground line) and the hit position is
    /// recorded at ground level.
    pub fn integrate(&mut self, config: &BallisticsConfig, wind: f32, dt: f32) -> ProjectileState {
        self.flight_time += dt;

        let previous = self.position;
        self.position = self.position_at(config, wind, self.flight_time);
        self.rotation += (self.velocity.x * 0.5).to_radians();

        if self.position.y >= config.ground_y + self.hit_offset {
            self.position = previous;
            let hit = Vec2::new(previous.x, config.ground_y);
            self.hit_position = Some(hit);
            return ProjectileState::Hit { position: hit };
        }

        ProjectileState::Flying
    }

    /// Convenience wrapper returning only the ground-hit flag.
    pub fn update_flight(&mut self, config: &BallisticsConfig, wind: f32, dt: f32) -> bool {
        matches!(self.integrate(config, wind, dt), ProjectileState::Hit { .. })
    }
}

/// Playfield constants shared by every projectile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallisticsConfig {
    /// Downward acceleration (pixels/s²)
    pub gravity: f32,
    /// Screen y of the ground line
    pub ground_y: f32,
    /// Multiplier turning the wind scalar into horizontal acceleration
    pub wind_scale: f32,
}

impl Default for BallisticsConfig {
    fn default() -> Self {
        Self {
            gravity: 500.0,
            ground_y: 332.0,
            wind_scale: 8.0,
        }
    }
}

impl BallisticsConfig {
    /// Same playfield with a different gravity.
    pub fn with_gravity(gravity: f32) -> Self {
        Self {
            gravity,
            ..Self::default()
        }
    }
}

/// Result of one flight step.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ProjectileState {
    /// Still in the air
    #[default]
    Flying,
    /// Reached the ground this step
    Hit {
        /// Impact point at ground level
        position: Vec2,
    },
}
