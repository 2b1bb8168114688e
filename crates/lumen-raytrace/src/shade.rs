//! Direct lighting: Phong diffuse and specular terms with hard shadows.

use lumen_math::{black, clamp_color, Color, Point3, Vec3};

use crate::intersect::intersect_sphere;
use crate::{Hit, Light, Ray, RenderSettings, Scene};

/// Light arriving at `point` from `light`, reflected toward the eye.
///
/// `normal` is the outward unit normal of the hit sphere at `point`. For an
/// inside hit the shadow test only looks at the hit sphere itself: the light
/// must lie within the shell, and the inner wall is lit with the normal
/// flipped. Otherwise any sphere crossing the shadow ray puts the point in
/// shadow. The result is clamped to at most 1 per channel.
pub fn shade(
    scene: &Scene,
    point: &Point3,
    light: &Light,
    hit: &Hit<'_>,
    normal: &Vec3,
    settings: &RenderSettings,
) -> Color {
    let light_dir = light.position - *point;
    let shadow = Ray::new(*point, light_dir);

    let n = if hit.inside {
        match intersect_sphere(&shadow, hit.sphere, settings.min_t) {
            None => return black(),
            // the light is outside the shell
            Some(h) if h.t1 < 1.0 => return black(),
            Some(_) => -normal,
        }
    } else {
        if in_shadow(&shadow, scene, settings) {
            return black();
        }
        *normal
    };

    // The eye sits at the origin.
    let v = (Point3::origin() - *point).normalize();
    let l = light_dir.normalize();
    let r = (2.0 * n.dot(&l) * n - l).normalize();

    let n_dot_l = n.dot(&l).max(0.0);
    let r_dot_v = r.dot(&v).max(0.0);

    let material = &hit.sphere.material;
    let specular = r_dot_v.powf(material.shininess);

    let diffuse = light.intensity.component_mul(&hit.sphere.color) * (material.kd * n_dot_l);
    let highlight = light.intensity * (material.ks * specular);

    clamp_color(diffuse + highlight)
}

/// Whether any sphere crosses the shadow ray.
///
/// Every reported intersection counts, including spheres beyond the light.
fn in_shadow(shadow: &Ray, scene: &Scene, settings: &RenderSettings) -> bool {
    scene
        .spheres
        .iter()
        .any(|sphere| intersect_sphere(shadow, sphere, settings.min_t).is_some())
}
