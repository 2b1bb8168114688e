//! Ray-sphere intersection in canonical space (quadratic equation).

use lumen_math::{Point3, Vec3};

use super::SphereHit;
use crate::{Ray, Sphere};

/// Intersect a ray with a transformed unit sphere.
///
/// The ray is mapped into the sphere's canonical space and solved against
/// `|start + t*dir|^2 = 1`. Both roots are reported, `t0 <= t1`, unless both
/// fall below `min_t`; a root behind the ray start is kept so the caller can
/// decide what to do with it. A zero-length direction never intersects.
pub fn intersect_sphere(ray: &Ray, sphere: &Sphere, min_t: f64) -> Option<SphereHit> {
    let inv = sphere.inverse_transform();
    let start = inv.apply_point(&ray.start).coords;
    let dir = inv.apply_vec(&ray.direction);

    // Quadratic: a t^2 + 2 b t + c = 0
    let a = dir.dot(&dir);
    let b = start.dot(&dir);
    let c = start.dot(&start) - 1.0;

    if a == 0.0 {
        return None;
    }

    let discriminant = b * b - a * c;
    let (t0, t1) = if discriminant < 0.0 {
        return None;
    } else if discriminant == 0.0 {
        let t = -b / a;
        (t, t)
    } else {
        let sqrt_disc = discriminant.sqrt();
        ((-b - sqrt_disc) / a, (-b + sqrt_disc) / a)
    };

    if t0 < min_t && t1 < min_t {
        return None;
    }

    Some(SphereHit { t0, t1 })
}

/// Unit surface normal of `sphere` where `ray` reaches parameter `t`.
///
/// The hit point is recomputed in canonical space, where the normal is just
/// the point itself, and carried back to world space by the transpose of the
/// inverse transform. This stays correct under non-uniform scale.
pub fn sphere_normal(ray: &Ray, sphere: &Sphere, t: f64) -> Vec3 {
    let inv = sphere.inverse_transform();
    let start = inv.apply_point(&ray.start);
    let dir = inv.apply_vec(&ray.direction);

    let canonical_point = start + t * dir;
    let canonical_normal = canonical_point - Point3::origin();

    inv.apply_transpose_vec(&canonical_normal).normalize()
}
