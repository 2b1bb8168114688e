//! Ray-sphere intersection and the nearest visible hit.
//!
//! [`intersect_sphere`] solves a single sphere. [`nearest_hit`] scans every
//! sphere in the scene, clips against the near plane, and reports which
//! surface the ray actually sees.

mod sphere;

pub use sphere::{intersect_sphere, sphere_normal};

use crate::{Ray, RenderSettings, Scene, Sphere};

/// Both roots of a ray-sphere intersection (before clipping).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereHit {
    /// Smaller root.
    pub t0: f64,
    /// Larger root.
    pub t1: f64,
}

/// The visible surface along a ray.
///
/// `inside` is set when the near side of the sphere was discarded (clipped by
/// the near plane, or behind the ray start) and the ray sees the inner wall
/// instead. The shader needs it to light the inside of the shell.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    /// Sphere that was hit.
    pub sphere: &'a Sphere,
    /// Ray parameter of the visible surface.
    pub t: f64,
    /// Whether the ray sees the inner wall of the sphere.
    pub inside: bool,
}

/// Find the nearest visible surface along `ray`.
///
/// For every sphere the near root is used unless its point lies at or in
/// front of the image plane (`z >= near_z`) or behind the ray start
/// (`t0 < min_t`). In that case the far root is used and the hit is marked
/// `inside`, unless the far point is clipped too. Only parameters in
/// `[min_t, max_t)` compete; the first sphere in scan order wins ties.
///
/// The `t0 < min_t` case is an addition to the classic near-plane rule: it
/// lets rays that start inside a sphere, such as reflections off an inner
/// wall, see the far side instead of a root behind them.
pub fn nearest_hit<'a>(ray: &Ray, scene: &'a Scene, settings: &RenderSettings) -> Option<Hit<'a>> {
    let near_z = scene.image_plane.near_z();
    let mut nearest: Option<Hit<'a>> = None;

    for sphere in &scene.spheres {
        let Some(SphereHit { t0, t1 }) = intersect_sphere(ray, sphere, settings.min_t) else {
            continue;
        };

        let (t, inside) = if ray.at(t0).z >= near_z || t0 < settings.min_t {
            if ray.at(t1).z >= near_z {
                continue;
            }
            (t1, true)
        } else {
            (t0, false)
        };

        let closest = nearest.map_or(settings.max_t, |h| h.t);
        if t < closest {
            nearest = Some(Hit { sphere, t, inside });
        }
    }

    nearest
}
