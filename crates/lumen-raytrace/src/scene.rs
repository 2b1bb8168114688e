//! Scene description: spheres, lights and the image plane.
//!
//! A [`Scene`] is assembled once by a loader and then only read while
//! rendering. Nothing in here mutates during a trace.

use lumen_math::{black, Color, Point3, Transform, Vec3};
use tracing::warn;

use crate::{RenderError, Result};

/// Phong material coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Material {
    /// Ambient coefficient.
    pub ka: f64,
    /// Diffuse coefficient.
    pub kd: f64,
    /// Specular coefficient.
    pub ks: f64,
    /// Reflection coefficient.
    pub kr: f64,
    /// Specular exponent.
    pub shininess: f64,
}

impl Material {
    /// Create a material from its five coefficients.
    pub fn new(ka: f64, kd: f64, ks: f64, kr: f64, shininess: f64) -> Self {
        Self {
            ka,
            kd,
            ks,
            kr,
            shininess,
        }
    }
}

/// The unit sphere placed in the world by an affine transform.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    /// Name from the scene description.
    pub name: String,
    /// Diffuse color.
    pub color: Color,
    /// Surface coefficients.
    pub material: Material,
    position: Point3,
    scale: Vec3,
    /// World to canonical (unit sphere) space.
    inverse: Transform,
}

impl Sphere {
    /// Create a sphere centered at `position` with per-axis `scale`.
    ///
    /// A zero scale component produces a meaningless sphere; callers are
    /// expected to pass validated scene data.
    pub fn new(
        name: impl Into<String>,
        position: Point3,
        scale: Vec3,
        color: Color,
        material: Material,
    ) -> Self {
        let inverse = Transform::scale(1.0 / scale.x, 1.0 / scale.y, 1.0 / scale.z)
            .then(&Transform::translation(-position.x, -position.y, -position.z));
        Self {
            name: name.into(),
            color,
            material,
            position,
            scale,
            inverse,
        }
    }

    /// Create a sphere from an arbitrary object-to-world transform.
    ///
    /// Rotation and shear are allowed. Fails if the transform is singular.
    pub fn from_transform(
        name: impl Into<String>,
        transform: &Transform,
        color: Color,
        material: Material,
    ) -> Result<Self> {
        let name = name.into();
        let inverse = match transform.inverse() {
            Some(inv) => inv,
            None => return Err(RenderError::SingularTransform(name)),
        };
        let position = transform.apply_point(&Point3::origin());
        let scale = Vec3::new(
            transform.apply_vec(&Vec3::x()).norm(),
            transform.apply_vec(&Vec3::y()).norm(),
            transform.apply_vec(&Vec3::z()).norm(),
        );
        Ok(Self {
            name,
            color,
            material,
            position,
            scale,
            inverse,
        })
    }

    /// World-space center.
    pub fn position(&self) -> Point3 {
        self.position
    }

    /// Length of each object axis in world space.
    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    /// World to canonical space transform.
    pub fn inverse_transform(&self) -> &Transform {
        &self.inverse
    }
}

/// A point light.
#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    /// Name from the scene description.
    pub name: String,
    /// Position in camera space.
    pub position: Point3,
    /// Per-channel intensity.
    pub intensity: Color,
}

impl Light {
    /// Create a light.
    pub fn new(name: impl Into<String>, position: Point3, intensity: Color) -> Self {
        Self {
            name: name.into(),
            position,
            intensity,
        }
    }
}

/// The image plane in front of the eye, which sits at the origin looking
/// down `-z`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImagePlane {
    /// Distance from the eye to the plane (positive).
    pub near: f64,
    /// Left bound of the plane.
    pub left: f64,
    /// Right bound of the plane.
    pub right: f64,
    /// Bottom bound of the plane.
    pub bottom: f64,
    /// Top bound of the plane.
    pub top: f64,
}

impl ImagePlane {
    /// Create an image plane.
    pub fn new(near: f64, left: f64, right: f64, bottom: f64, top: f64) -> Self {
        Self {
            near,
            left,
            right,
            bottom,
            top,
        }
    }

    /// Camera-space z of the plane. Anything with `z >= near_z()` is clipped.
    #[inline]
    pub fn near_z(&self) -> f64 {
        -self.near
    }
}

/// Everything the tracer reads.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Spheres in scan order. Ties in hit distance go to the earlier one.
    pub spheres: Vec<Sphere>,
    /// Point lights.
    pub lights: Vec<Light>,
    /// Color of primary rays that hit nothing.
    pub background: Color,
    /// Ambient light intensity.
    pub ambient: Color,
    /// Where the eye looks through.
    pub image_plane: ImagePlane,
}

impl Scene {
    /// An empty scene with black background and no ambient light.
    pub fn new(image_plane: ImagePlane) -> Self {
        Self {
            spheres: Vec::new(),
            lights: Vec::new(),
            background: black(),
            ambient: black(),
            image_plane,
        }
    }

    /// Check the preconditions the tracer relies on.
    pub fn validate(&self) -> Result<()> {
        let near = self.image_plane.near;
        if !(near.is_finite() && near > 0.0) {
            return Err(RenderError::InvalidNearPlane(near));
        }
        if self.spheres.is_empty() {
            return Err(RenderError::NoSpheres);
        }
        if self.lights.is_empty() {
            warn!("scene has no lights, only ambient and background will show");
        }
        Ok(())
    }
}
