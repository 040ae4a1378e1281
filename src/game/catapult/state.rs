//! Catapult turn states and the events a tick reports.

use glam::Vec2;
use serde::Serialize;

use crate::game::ids::{CatapultId, PlayerId};

/// Where a catapult is in its turn cycle.
///
/// The firing swing and the boulder flight overlap; that overlap is its own
/// variant ([`CatapultState::FiringAndFlying`]) rather than a flag combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum CatapultState {
    /// Waiting for its turn
    #[default]
    Idle,
    /// Pulling the arm back
    Aiming,
    /// AI only: holding the aim for a few cycles before firing
    Stalling,
    /// Arm swinging, boulder still in the bucket
    Firing,
    /// Arm still swinging, boulder released
    FiringAndFlying,
    /// Swing finished, boulder in the air
    ProjectileFlying,
    /// Boulder on the ground; impact being resolved
    ProjectileHit,
    /// This catapult was destroyed
    Hit,
    /// Turn finished; the host hands control to the other side
    Reset,
}

impl CatapultState {
    pub fn as_str(&self) -> &'static str {
        match self {
            CatapultState::Idle => "Idle",
            CatapultState::Aiming => "Aiming",
            CatapultState::Stalling => "Stalling",
            CatapultState::Firing => "Firing",
            CatapultState::FiringAndFlying => "Firing|ProjectileFlying",
            CatapultState::ProjectileFlying => "ProjectileFlying",
            CatapultState::ProjectileHit => "ProjectileHit",
            CatapultState::Hit => "Hit",
            CatapultState::Reset => "Reset",
        }
    }

    /// States a boulder cannot hit (already destroyed or done for the turn).
    pub fn is_hit_immune(&self) -> bool {
        matches!(self, CatapultState::Hit | CatapultState::Reset)
    }
}

impl std::fmt::Display for CatapultState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Something that happened during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum CatapultEvent {
    StateChanged {
        catapult: CatapultId,
        from: CatapultState,
        to: CatapultState,
    },
    /// The firing swing reached its release frame
    ProjectileReleased {
        catapult: CatapultId,
        position: Vec2,
    },
    GroundHit {
        catapult: CatapultId,
        position: Vec2,
    },
    /// A catapult was destroyed and `scorer` earned a point
    CatapultHit {
        victim: CatapultId,
        scorer: PlayerId,
        score: u32,
        self_hit: bool,
    },
    /// The boulder landed without hitting anything
    Missed { catapult: CatapultId },
    /// The destroyed catapult's opponent reached the win score
    GameOver { catapult: CatapultId },
}

impl CatapultEvent {
    /// The tick ended a turn.
    pub fn is_turn_reset(&self) -> bool {
        matches!(
            self,
            CatapultEvent::StateChanged {
                to: CatapultState::Reset,
                ..
            }
        )
    }

    pub fn is_hit(&self) -> bool {
        matches!(self, CatapultEvent::CatapultHit { .. })
    }
}
