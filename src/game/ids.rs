//! Stable arena indices.
//!
//! Catapults and players reference each other through these ids instead of
//! pointers; the [`Battlefield`](crate::game::Battlefield) owns the entities.

use serde::Serialize;

/// Index of a player in its battlefield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PlayerId(pub usize);

/// Index of a catapult in its battlefield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CatapultId(pub usize);

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "player#{}", self.0)
    }
}

impl std::fmt::Display for CatapultId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "catapult#{}", self.0)
    }
}
