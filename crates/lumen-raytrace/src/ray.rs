//! Ray representation and specular reflection.

use lumen_math::{Point3, Vec3};

/// A ray in 3D space defined by a start point, a direction and a bounce depth.
///
/// The direction is not normalized. Shadow rays point exactly at their
/// light, so the light sits at parameter `t = 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point of the ray.
    pub start: Point3,
    /// Direction of the ray (any length).
    pub direction: Vec3,
    /// Number of reflections taken to reach this ray. Primary rays are 0.
    depth: u32,
}

impl Ray {
    /// Create a primary ray (depth 0).
    pub fn new(start: Point3, direction: Vec3) -> Self {
        Self {
            start,
            direction,
            depth: 0,
        }
    }

    /// The same ray with a different recursion depth.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Recursion depth of this ray.
    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Evaluate the ray at parameter `t`: `start + t * direction`.
    #[inline]
    pub fn at(&self, t: f64) -> Point3 {
        self.start + t * self.direction
    }

    /// Mirror this ray about `normal` at parameter `t`.
    ///
    /// The reflected ray starts at `self.at(t)` with direction
    /// `d - 2 (d . n) n` and the given depth. `normal` must be unit length;
    /// which side it faces does not matter.
    pub fn reflect(&self, normal: &Vec3, t: f64, depth: u32) -> Ray {
        let d = self.direction;
        let v = d - 2.0 * d.dot(normal) * normal;
        Ray::new(self.at(t), v).with_depth(depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Point3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 2.0, 0.0));
        let p = ray.at(2.5);
        assert_relative_eq!(p, Point3::new(1.0, 5.0, 0.0), epsilon = 1e-12);
        // negative parameters are allowed
        assert_relative_eq!(ray.at(-1.0), Point3::new(1.0, -2.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_new_ray_is_primary() {
        let ray = Ray::new(Point3::origin(), Vec3::z());
        assert_eq!(ray.depth(), 0);
        assert_eq!(ray.with_depth(2).depth(), 2);
    }

    #[test]
    fn test_reflect_off_floor() {
        let ray = Ray::new(Point3::new(-1.0, 1.0, 0.0), Vec3::new(1.0, -1.0, 0.0));
        let r = ray.reflect(&Vec3::y(), 1.0, 1);
        assert_relative_eq!(r.start, Point3::origin(), epsilon = 1e-12);
        assert_relative_eq!(r.direction, Vec3::new(1.0, 1.0, 0.0), epsilon = 1e-12);
        assert_eq!(r.depth(), 1);
    }

    #[test]
    fn test_reflect_ignores_normal_orientation() {
        let ray = Ray::new(Point3::origin(), Vec3::new(0.3, -0.7, 0.2));
        let n = Vec3::new(0.0, 1.0, 1.0).normalize();
        let up = ray.reflect(&n, 2.0, 1);
        let down = ray.reflect(&-n, 2.0, 1);
        assert_relative_eq!(up.direction, down.direction, epsilon = 1e-12);
    }

    #[test]
    fn test_double_reflection_restores_direction() {
        let ray = Ray::new(Point3::new(0.0, 0.0, 4.0), Vec3::new(0.2, 0.5, -1.0));
        let n = Vec3::new(1.0, 2.0, 3.0).normalize();
        let once = ray.reflect(&n, 1.5, 1);
        let twice = once.reflect(&-n, 0.5, 2);

        let original = ray.direction.normalize();
        let restored = twice.direction.normalize();
        assert!(original.cross(&restored).norm() < 1e-12);
        assert!(original.dot(&restored) > 0.0);
    }

    #[test]
    fn test_reflection_preserves_length() {
        let ray = Ray::new(Point3::origin(), Vec3::new(3.0, -4.0, 12.0));
        let n = Vec3::new(-1.0, 1.0, 0.0).normalize();
        let r = ray.reflect(&n, 1.0, 1);
        assert_relative_eq!(r.direction.norm(), 13.0, epsilon = 1e-12);
    }
}
