//! Game Configuration
//!
//! Playfield layout and gameplay tuning for the catapult duel.
//! `Default` reproduces the stock Catapult Wars values; any field may be
//! overridden from a JSON file.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::{CatapultError, Result};
use crate::physics::BallisticsConfig;

/// Where one catapult stands and where its boulder starts.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatapultPlacement {
    /// Top-left corner of the catapult sprite
    pub position: Vec2,
    /// Boulder position at the moment of release
    pub projectile_start: Vec2,
}

/// Central configuration for a duel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Gravity, ground line and wind scale
    pub ballistics: BallisticsConfig,
    /// Score that ends the match
    pub win_score: u32,
    /// Update cycles the AI holds its aim before firing
    pub ai_stall_cycles: u32,
    /// Slowest launch speed (pixels/s)
    pub min_shot_velocity: f32,
    /// Fastest launch speed (pixels/s)
    pub max_shot_velocity: f32,
    /// Largest wind magnitude rolled at the start of a turn
    pub max_wind: u32,
    /// Drag length that maps to full shot strength
    pub max_drag_distance: f32,
    /// Bounding sphere radius of a boulder
    pub projectile_radius: f32,
    /// Left catapult (human)
    pub human: CatapultPlacement,
    /// Right, mirrored catapult (AI)
    pub ai: CatapultPlacement,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            ballistics: BallisticsConfig::default(),
            win_score: 5,
            ai_stall_cycles: 20,
            min_shot_velocity: 150.0,
            max_shot_velocity: 400.0,
            max_wind: 10,
            // Diagonal of a 480x800 screen
            max_drag_distance: Vec2::new(480.0, 800.0).length(),
            projectile_radius: 8.0,
            human: CatapultPlacement {
                position: Vec2::new(140.0, 332.0),
                projectile_start: Vec2::new(175.0, 340.0),
            },
            ai: CatapultPlacement {
                position: Vec2::new(600.0, 332.0),
                projectile_start: Vec2::new(630.0, 340.0),
            },
        }
    }
}

impl GameConfig {
    /// Parse a config from JSON. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| CatapultError::io(path, e))?;
        let config = Self::from_json_str(&text)?;
        log::info!("[Config] loaded game config from {}", path.display());
        Ok(config)
    }

    /// Launch speed for a normalized shot strength.
    pub fn shot_velocity_for_strength(&self, strength: f32) -> f32 {
        self.min_shot_velocity
            + strength.clamp(0.0, 1.0) * (self.max_shot_velocity - self.min_shot_velocity)
    }
}
