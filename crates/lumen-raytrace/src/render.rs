//! Primary ray generation and the pixel loop.

use std::ops::Index;

use lumen_math::{black, Color, Point3, Vec3};
use tracing::{debug, info};

use crate::{ImagePlane, Ray, RenderError, RenderSettings, Result, Scene, Tracer};

/// Output image size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// Number of columns.
    pub width: u32,
    /// Number of rows.
    pub height: u32,
}

impl Resolution {
    /// Create a resolution.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Row-major grid of linear RGB colors.
///
/// Row 0 is the bottom of the image (`v = bottom`), column 0 the left.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl PixelBuffer {
    /// A black buffer of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![black(); width * height],
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixel at `(row, col)`, or `None` if out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<&Color> {
        if row < self.height && col < self.width {
            self.pixels.get(row * self.width + col)
        } else {
            None
        }
    }

    /// Overwrite the pixel at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of range.
    pub fn set(&mut self, row: usize, col: usize, color: Color) {
        assert!(
            row < self.height && col < self.width,
            "pixel ({row}, {col}) outside {}x{} buffer",
            self.width,
            self.height
        );
        self.pixels[row * self.width + col] = color;
    }

    /// Rows from bottom (row 0) to top.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[Color]> + ExactSizeIterator {
        self.pixels.chunks_exact(self.width.max(1))
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }
}

impl Index<(usize, usize)> for PixelBuffer {
    type Output = Color;

    fn index(&self, (row, col): (usize, usize)) -> &Color {
        match self.get(row, col) {
            Some(c) => c,
            None => panic!(
                "pixel ({row}, {col}) outside {}x{} buffer",
                self.width, self.height
            ),
        }
    }
}

/// The ray from the eye through pixel `(row, col)`.
///
/// `u = left + right * 2col / width`, `v = bottom + top * 2row / height`,
/// direction `(u, v, -near)`.
pub fn primary_ray(plane: &ImagePlane, resolution: Resolution, row: u32, col: u32) -> Ray {
    let u = plane.left + plane.right * ((2.0 * f64::from(col)) / f64::from(resolution.width));
    let v = plane.bottom + plane.top * ((2.0 * f64::from(row)) / f64::from(resolution.height));
    Ray::new(Point3::origin(), Vec3::new(u, v, -plane.near))
}

/// Render `scene` into a new pixel buffer.
///
/// Fails only on invalid inputs: zero resolution, an empty or malformed
/// scene, or out-of-range settings.
pub fn render(scene: &Scene, resolution: Resolution, settings: &RenderSettings) -> Result<PixelBuffer> {
    if resolution.width == 0 || resolution.height == 0 {
        return Err(RenderError::EmptyImage {
            width: resolution.width,
            height: resolution.height,
        });
    }
    scene.validate()?;
    settings.validate()?;

    info!(
        width = resolution.width,
        height = resolution.height,
        spheres = scene.spheres.len(),
        lights = scene.lights.len(),
        max_depth = settings.max_depth,
        "rendering"
    );

    let tracer = Tracer::with_settings(scene, *settings);
    let mut buffer = PixelBuffer::new(resolution.width as usize, resolution.height as usize);

    for row in 0..resolution.height {
        for col in 0..resolution.width {
            let ray = primary_ray(&scene.image_plane, resolution, row, col);
            buffer.set(row as usize, col as usize, tracer.trace(&ray));
        }
        debug!(row, "row done");
    }

    Ok(buffer)
}
