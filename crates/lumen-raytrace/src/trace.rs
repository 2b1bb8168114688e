//! The recursive tracer.

use lumen_math::{black, clamp_color, Color};

use crate::intersect::{nearest_hit, sphere_normal};
use crate::shade::shade;
use crate::{Ray, RenderSettings, Scene, MAX_DEPTH_LIMIT};

/// Recursive Whitted-style tracer over an immutable scene.
///
/// The tracer holds no per-ray state, so a single instance can trace any
/// number of rays.
#[derive(Debug, Clone, Copy)]
pub struct Tracer<'a> {
    scene: &'a Scene,
    settings: RenderSettings,
}

impl<'a> Tracer<'a> {
    /// Tracer with default settings.
    pub fn new(scene: &'a Scene) -> Self {
        Self::with_settings(scene, RenderSettings::default())
    }

    /// Tracer with explicit settings.
    ///
    /// `max_depth` is capped at [`MAX_DEPTH_LIMIT`] so recursion stays
    /// bounded even for settings that skipped validation.
    pub fn with_settings(scene: &'a Scene, mut settings: RenderSettings) -> Self {
        settings.max_depth = settings.max_depth.min(MAX_DEPTH_LIMIT);
        Self { scene, settings }
    }

    /// Color seen along `ray`.
    ///
    /// Rays deeper than `max_depth` are black. A primary ray that misses
    /// everything sees the background; a reflected ray that misses adds
    /// nothing. On a hit the local ambient + direct light is clamped, the
    /// reflection is added weighted by `kr`, and the sum is clamped again.
    pub fn trace(&self, ray: &Ray) -> Color {
        if ray.depth() > self.settings.max_depth {
            return black();
        }

        let Some(hit) = nearest_hit(ray, self.scene, &self.settings) else {
            return if ray.depth() == 0 {
                self.scene.background
            } else {
                black()
            };
        };

        let sphere = hit.sphere;
        let material = &sphere.material;

        let point = ray.at(hit.t);
        let normal = sphere_normal(ray, sphere, hit.t);

        let mut local = self.scene.ambient.component_mul(&sphere.color) * material.ka;
        for light in &self.scene.lights {
            local += shade(self.scene, &point, light, &hit, &normal, &self.settings);
        }
        let local = clamp_color(local);

        let reflected_ray = ray.reflect(&normal, hit.t, ray.depth() + 1);
        let reflected = self.trace(&reflected_ray);
        // no refraction term

        clamp_color(local + reflected * material.kr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ImagePlane, Light, Material, Sphere};
    use approx::assert_relative_eq;
    use lumen_math::{Point3, Vec3};

    fn empty_scene() -> Scene {
        let mut scene = Scene::new(ImagePlane::new(1.0, -1.0, 1.0, -1.0, 1.0));
        scene.background = Color::new(0.2, 0.3, 0.4);
        scene.ambient = Color::new(0.1, 0.1, 0.1);
        scene
    }

    fn red_scene() -> Scene {
        let mut scene = empty_scene();
        scene.spheres.push(Sphere::new(
            "red",
            Point3::new(0.0, 0.0, -3.0),
            Vec3::new(1.0, 1.0, 1.0),
            Color::new(1.0, 0.0, 0.0),
            Material::new(0.0, 1.0, 0.0, 0.0, 1.0),
        ));
        scene.lights.push(Light::new(
            "key",
            Point3::new(0.0, 0.0, 5.0),
            Color::new(1.0, 1.0, 1.0),
        ));
        scene
    }

    /// Two mirrors facing each other along x, well past the near plane.
    fn mirror_corridor() -> Scene {
        let mirror = |name: &str, x: f64| {
            Sphere::new(
                name,
                Point3::new(x, 0.0, -5.0),
                Vec3::new(1.0, 1.0, 1.0),
                Color::new(1.0, 1.0, 1.0),
                Material::new(1.0, 0.0, 0.0, 1.0, 1.0),
            )
        };
        let mut scene = empty_scene();
        scene.spheres = vec![mirror("left", -3.0), mirror("right", 3.0)];
        scene
    }

    fn down_the_corridor() -> Ray {
        Ray::new(Point3::new(0.0, 0.0, -5.0), Vec3::new(1.0, 0.0, 0.0))
    }

    #[test]
    fn test_near_pole_is_red() {
        let scene = red_scene();
        let tracer = Tracer::new(&scene);
        let c = tracer.trace(&Ray::new(Point3::origin(), Vec3::new(0.0, 0.0, -1.0)));
        assert_relative_eq!(c, Color::new(1.0, 0.0, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn test_primary_miss_is_background() {
        let scene = red_scene();
        let tracer = Tracer::new(&scene);
        let c = tracer.trace(&Ray::new(Point3::origin(), Vec3::new(0.0, 1.0, -0.1)));
        assert_eq!(c, scene.background);
    }

    #[test]
    fn test_secondary_miss_is_black() {
        let scene = red_scene();
        let tracer = Tracer::new(&scene);
        let ray = Ray::new(Point3::origin(), Vec3::new(0.0, 1.0, -0.1)).with_depth(1);
        assert_eq!(tracer.trace(&ray), Color::zeros());
    }

    #[test]
    fn test_too_deep_is_black() {
        let scene = red_scene();
        let tracer = Tracer::new(&scene);
        let hitting = Ray::new(Point3::origin(), Vec3::new(0.0, 0.0, -1.0));
        assert!(tracer.trace(&hitting).x > 0.0);
        assert_eq!(tracer.trace(&hitting.with_depth(4)), Color::zeros());
        assert_eq!(tracer.trace(&hitting.with_depth(u32::MAX)), Color::zeros());

        let missing = Ray::new(Point3::origin(), Vec3::new(0.0, 1.0, 0.0)).with_depth(4);
        assert_eq!(tracer.trace(&missing), Color::zeros());
    }

    #[test]
    fn test_ambient_only() {
        let mut scene = red_scene();
        scene.lights.clear();
        scene.spheres[0].material.ka = 0.5;
        let tracer = Tracer::new(&scene);
        let c = tracer.trace(&Ray::new(Point3::origin(), Vec3::new(0.0, 0.0, -1.0)));
        assert_relative_eq!(c, Color::new(0.05, 0.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_lights_summed_then_clamped() {
        let mut scene = red_scene();
        scene.spheres[0].material.kd = 0.6;
        scene.lights.push(Light::new(
            "fill",
            Point3::new(0.0, 0.0, 10.0),
            Color::new(1.0, 1.0, 1.0),
        ));
        let tracer = Tracer::new(&scene);
        let c = tracer.trace(&Ray::new(Point3::origin(), Vec3::new(0.0, 0.0, -1.0)));
        // 0.6 + 0.6 clamps to 1
        assert_relative_eq!(c, Color::new(1.0, 0.0, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn test_reflection_bounces_are_bounded() {
        // Each bounce adds ka * ambient = 0.1 and the ray never escapes, so
        // the result counts how many levels contributed.
        let scene = mirror_corridor();
        for max_depth in 0..=5u32 {
            let settings = RenderSettings {
                max_depth,
                ..Default::default()
            };
            let tracer = Tracer::with_settings(&scene, settings);
            let c = tracer.trace(&down_the_corridor());
            let expected = 0.1 * f64::from(max_depth + 1);
            assert_relative_eq!(c.x, expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_default_depth_allows_four_levels() {
        let scene = mirror_corridor();
        let c = Tracer::new(&scene).trace(&down_the_corridor());
        assert_relative_eq!(c, Color::new(0.4, 0.4, 0.4), epsilon = 1e-9);
    }

    #[test]
    fn test_reflection_does_not_reintroduce_background() {
        // A single mirror: the bounce escapes and contributes black, not the
        // background color.
        let mut scene = mirror_corridor();
        scene.spheres.truncate(1);
        let ray = Ray::new(Point3::new(0.0, 0.0, -5.0), Vec3::new(-1.0, 0.0, 0.0));
        let c = Tracer::new(&scene).trace(&ray);
        assert_relative_eq!(c, Color::new(0.1, 0.1, 0.1), epsilon = 1e-12);
    }

    #[test]
    fn test_unvalidated_depth_is_capped() {
        let scene = mirror_corridor();
        let settings = RenderSettings {
            max_depth: 10_000_000,
            ..Default::default()
        };
        let c = Tracer::with_settings(&scene, settings).trace(&down_the_corridor());
        assert_eq!(c, Color::new(1.0, 1.0, 1.0));
    }

    /// Green shell around the eye's line of sight, its near side cut away by
    /// the image plane at z = -1.
    fn cut_shell(light: Point3) -> Scene {
        let mut scene = empty_scene();
        scene.spheres.push(Sphere::new(
            "shell",
            Point3::new(0.0, 0.0, -2.0),
            Vec3::new(1.5, 1.5, 1.5),
            Color::new(0.0, 1.0, 0.0),
            Material::new(0.0, 1.0, 0.0, 0.0, 1.0),
        ));
        scene
            .lights
            .push(Light::new("bulb", light, Color::new(1.0, 1.0, 1.0)));
        scene
    }

    #[test]
    fn test_inner_wall_lit_by_light_inside_shell() {
        let scene = cut_shell(Point3::new(0.0, 0.0, -2.0));
        let c = Tracer::new(&scene).trace(&Ray::new(Point3::origin(), Vec3::new(0.0, 0.0, -1.0)));
        assert_relative_eq!(c, Color::new(0.0, 1.0, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn test_inner_wall_dark_with_light_outside_shell() {
        let scene = cut_shell(Point3::new(0.0, 0.0, 5.0));
        let c = Tracer::new(&scene).trace(&Ray::new(Point3::origin(), Vec3::new(0.0, 0.0, -1.0)));
        assert_eq!(c, Color::zeros());
    }

    #[test]
    fn test_output_is_clamped() {
        let mut scene = mirror_corridor();
        scene.ambient = Color::new(0.7, 0.7, 0.7);
        let c = Tracer::new(&scene).trace(&down_the_corridor());
        assert!(c.iter().all(|&channel| channel <= 1.0));
        assert_eq!(c, Color::new(1.0, 1.0, 1.0));
    }
}
