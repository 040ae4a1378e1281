//! Physics type re-exports from glam
//!
//! The catapult playfield is 2D screen space; everything uses `Vec2`.

pub use glam::Vec2;
