#![warn(missing_docs)]

//! Recursive Phong ray tracing of transformed spheres.
//!
//! Every primitive is the unit sphere placed in the world by an affine
//! transform. Rays are intersected in each sphere's canonical space, shaded
//! with ambient, diffuse and specular terms under point lights with hard
//! shadows, and reflected recursively up to a fixed depth.
//!
//! # Architecture
//!
//! - [`Ray`] - Origin, direction and recursion depth
//! - [`scene`] - Spheres, lights and the image plane
//! - [`intersect`] - Ray-sphere intersection and the nearest-hit scan
//! - [`shade`] - Local Phong lighting with shadow rays
//! - [`Tracer`] - The recursive driver
//! - [`render`] - Primary rays and the pixel buffer
//!
//! # Example
//!
//! ```
//! use lumen_math::{Color, Point3, Vec3};
//! use lumen_raytrace::{render, ImagePlane, Light, Material, RenderSettings, Resolution, Scene, Sphere};
//!
//! let mut scene = Scene::new(ImagePlane::new(1.0, -1.0, 1.0, -1.0, 1.0));
//! scene.spheres.push(Sphere::new(
//!     "ball",
//!     Point3::new(0.0, 0.0, -5.0),
//!     Vec3::new(1.0, 1.0, 1.0),
//!     Color::new(1.0, 0.0, 0.0),
//!     Material::new(0.1, 0.9, 0.0, 0.0, 1.0),
//! ));
//! scene.lights.push(Light::new("key", Point3::new(0.0, 0.0, 5.0), Color::new(1.0, 1.0, 1.0)));
//!
//! let image = render(&scene, Resolution::new(8, 8), &RenderSettings::default()).unwrap();
//! assert_eq!(image.width(), 8);
//! ```

mod error;
mod ray;
mod settings;

pub mod intersect;
pub mod render;
pub mod scene;
pub mod shade;
pub mod trace;

pub use error::{RenderError, Result};
pub use intersect::Hit;
pub use ray::Ray;
pub use render::{render, PixelBuffer, Resolution};
pub use scene::{ImagePlane, Light, Material, Scene, Sphere};
pub use settings::{RenderSettings, MAX_DEPTH, MAX_DEPTH_LIMIT, MAX_T, MIN_T};
pub use trace::Tracer;
