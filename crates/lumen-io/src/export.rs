//! Image output: binary PPM and PNG.
//!
//! The pixel buffer stores row 0 at the bottom of the image, so rows are
//! written in reverse to put the top of the image first.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage};
use lumen_math::color_to_rgb8;
use lumen_raytrace::PixelBuffer;
use tracing::info;

use crate::{FileError, Result};

/// Largest channel value written to PPM headers.
pub const MAX_COLOR_VALUE: u8 = 255;

/// Write `buffer` as a binary (P6) PPM.
pub fn write_ppm<W: Write>(mut writer: W, buffer: &PixelBuffer) -> Result<()> {
    write!(
        writer,
        "P6\n{} {}\n{}\n",
        buffer.width(),
        buffer.height(),
        MAX_COLOR_VALUE
    )?;
    for row in buffer.rows().rev() {
        for color in row {
            writer.write_all(&color_to_rgb8(color))?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Convert `buffer` to an 8-bit RGB image, top row first.
pub fn to_rgb_image(buffer: &PixelBuffer) -> RgbImage {
    let height = buffer.height();
    RgbImage::from_fn(buffer.width() as u32, height as u32, |x, y| {
        Rgb(color_to_rgb8(&buffer[(height - 1 - y as usize, x as usize)]))
    })
}

/// Write `buffer` as a PNG.
pub fn save_png(path: impl AsRef<Path>, buffer: &PixelBuffer) -> Result<()> {
    to_rgb_image(buffer).save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Write `buffer` to `path`, choosing the format from the extension
/// (`.ppm` or `.png`).
pub fn save_image(path: impl AsRef<Path>, buffer: &PixelBuffer) -> Result<()> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "ppm" => write_ppm(BufWriter::new(File::create(path)?), buffer)?,
        "png" => save_png(path, buffer)?,
        _ => return Err(FileError::UnsupportedFormat(ext)),
    }

    info!(path = %path.display(), "image written");
    Ok(())
}
