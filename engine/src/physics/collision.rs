//! Collision detection module
//!
//! Bounding volumes for catapult hit checks: a sphere around the boulder and
//! an axis-aligned box around each catapult sprite footprint. Everything lives
//! in the 2D screen plane.
//!
//! # Example
//!
//! ```ignore
//! use catapult_wars_engine::physics::collision::{Aabb, BoundingSphere};
//! use glam::Vec2;
//!
//! let catapult = Aabb::from_origin_size(Vec2::new(600.0, 332.0), Vec2::new(75.0, 60.0));
//! let boulder = BoundingSphere::new(Vec2::new(598.0, 350.0), 8.0);
//! assert!(boulder.intersects_aabb(&catapult));
//! ```

use glam::Vec2;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Box spanning `min` to `max`. Corners are reordered if swapped.
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    /// Box whose top-left corner is `origin` (sprite position) and extent `size`.
    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self::new(origin, origin + size)
    }

    /// Closest point inside the box to `point`.
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        point.clamp(self.min, self.max)
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

/// Bounding sphere (a circle in the screen plane).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    pub center: Vec2,
    pub radius: f32,
}

impl BoundingSphere {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
        }
    }

    /// Sphere-vs-box overlap test. Touching counts as intersecting.
    pub fn intersects_aabb(&self, aabb: &Aabb) -> bool {
        sphere_aabb_intersect(self.center, self.radius, aabb.min, aabb.max)
    }
}

/// Tests a sphere against an AABB using the closest-point method.
///
/// The closest point of the box to the sphere center is found by clamping,
/// and the shapes overlap when that point lies within `radius` of the center.
///
/// # Arguments
///
/// * `center` - Sphere center
/// * `radius` - Sphere radius (non-negative)
/// * `aabb_min` - Minimum corner of the AABB
/// * `aabb_max` - Maximum corner of the AABB
pub fn sphere_aabb_intersect(center: Vec2, radius: f32, aabb_min: Vec2, aabb_max: Vec2) -> bool {
    let closest = center.clamp(aabb_min, aabb_max);
    center.distance_squared(closest) <= radius * radius
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catapult_box() -> Aabb {
        Aabb::from_origin_size(Vec2::new(600.0, 332.0), Vec2::new(75.0, 60.0))
    }

    #[test]
    fn test_aabb_from_origin_size() {
        let b = catapult_box();
        assert_eq!(b.min, Vec2::new(600.0, 332.0));
        assert_eq!(b.max, Vec2::new(675.0, 392.0));
    }

    #[test]
    fn test_aabb_new_orders_corners() {
        let b = Aabb::new(Vec2::new(10.0, 10.0), Vec2::new(0.0, 0.0));
        assert_eq!(b.min, Vec2::ZERO);
        assert_eq!(b.max, Vec2::new(10.0, 10.0));
    }

    #[test]
    fn test_sphere_inside_box() {
        let sphere = BoundingSphere::new(Vec2::new(620.0, 350.0), 8.0);
        assert!(sphere.intersects_aabb(&catapult_box()));
    }

    #[test]
    fn test_sphere_overlapping_edge() {
        // Center 5 px left of the box, radius 8
        let sphere = BoundingSphere::new(Vec2::new(595.0, 350.0), 8.0);
        assert!(sphere.intersects_aabb(&catapult_box()));
    }

    #[test]
    fn test_sphere_touching_edge() {
        let sphere = BoundingSphere::new(Vec2::new(592.0, 350.0), 8.0);
        assert!(sphere.intersects_aabb(&catapult_box()));
    }

    #[test]
    fn test_sphere_missing_box() {
        let sphere = BoundingSphere::new(Vec2::new(500.0, 350.0), 8.0);
        assert!(!sphere.intersects_aabb(&catapult_box()));
    }

    #[test]
    fn test_sphere_near_corner_misses() {
        // Within radius on each axis separately but not diagonally
        let sphere = BoundingSphere::new(Vec2::new(594.0, 326.0), 8.0);
        assert!(!sphere.intersects_aabb(&catapult_box()));
    }

    #[test]
    fn test_closest_point_and_contains() {
        let b = catapult_box();
        assert_eq!(b.closest_point(Vec2::new(0.0, 0.0)), b.min);
        assert!(b.contains(Vec2::new(650.0, 360.0)));
        assert!(!b.contains(Vec2::new(650.0, 400.0)));
    }
}
