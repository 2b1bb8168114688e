#![warn(missing_docs)]

//! Scene file loading and image output for the lumen ray tracer.
//!
//! The tracer itself only knows about in-memory scenes and pixel buffers.
//! This crate reads the text scene format into a [`SceneDescription`] and
//! writes finished buffers as PPM or PNG.
//!
//! # Example
//!
//! ```no_run
//! use lumen_io::{load_scene, save_image};
//! use lumen_raytrace::{render, RenderSettings};
//!
//! let desc = load_scene("scene.txt")?;
//! let image = render(&desc.scene, desc.resolution, &RenderSettings::default())?;
//! save_image(desc.output.as_deref().unwrap_or("out.ppm"), &image)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;

pub mod export;
pub mod scene_file;

pub use error::{FileError, Result};
pub use export::{save_image, save_png, write_ppm};
pub use scene_file::{load_scene, parse_scene, SceneDescription};
