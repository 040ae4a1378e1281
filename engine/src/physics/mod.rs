//! Physics module for the catapult engine
//!
//! Just enough physics for a two-catapult artillery duel. No external physics
//! library; boulders follow a closed-form parabola under gravity and wind.
//!
//! # Unit System
//!
//! Screen pixels and seconds. y grows downward, so gravity is positive.
//!
//! # Submodules
//!
//! - [`types`] - Math types re-exported from glam
//! - [`ballistics`] - Projectile flight and ground-hit detection
//! - [`collision`] - Sphere vs AABB hit checks

pub mod ballistics;
pub mod collision;
pub mod types;

pub use ballistics::{BallisticsConfig, Projectile, ProjectileState};
pub use collision::{Aabb, BoundingSphere, sphere_aabb_intersect};
pub use types::Vec2;
