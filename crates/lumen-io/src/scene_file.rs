//! Line-oriented scene description format.
//!
//! Each non-blank line starts with a keyword followed by whitespace-separated
//! arguments:
//!
//! ```text
//! NEAR 1
//! LEFT -1
//! RIGHT 1
//! BOTTOM -1
//! TOP 1
//! RES 600 600
//! SPHERE s1 0 0 -10 2 4 2 0.5 0 0 1 1 0.9 0 50
//! LIGHT l1 0 0 0 0.9 0.9 0.9
//! BACK 1 1 1
//! AMBIENT 0.2 0.2 0.2
//! OUTPUT scene.ppm
//! ```
//!
//! `SPHERE` takes a name, position, scale, color, then `ka kd ks kr n`.
//! `LIGHT` takes a name, position and intensity. Unknown keywords are
//! skipped, and a repeated directive overrides the earlier one.

use std::fs;
use std::path::Path;

use lumen_math::{Color, Point3, Vec3};
use lumen_raytrace::{ImagePlane, Light, Material, Resolution, Scene, Sphere};
use tracing::{debug, trace};

use crate::{FileError, Result};

/// A parsed scene file: the scene, the image size, and where to write it.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneDescription {
    /// Everything the tracer needs.
    pub scene: Scene,
    /// Output image size.
    pub resolution: Resolution,
    /// Output file named by `OUTPUT`, if any.
    pub output: Option<String>,
}

/// Read and parse a scene file.
pub fn load_scene(path: impl AsRef<Path>) -> Result<SceneDescription> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| FileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = source.len(), "loaded scene file");
    parse_scene(&source)
}

/// Parse scene file text.
pub fn parse_scene(source: &str) -> Result<SceneDescription> {
    let mut near = None;
    let mut left = None;
    let mut right = None;
    let mut bottom = None;
    let mut top = None;
    let mut resolution = None;
    let mut spheres = Vec::new();
    let mut lights = Vec::new();
    let mut background = Color::zeros();
    let mut ambient = Color::zeros();
    let mut output = None;

    for (index, text) in source.lines().enumerate() {
        let mut tokens = text.split_whitespace();
        let Some(keyword) = tokens.next() else {
            continue;
        };
        let directive = Directive {
            line: index + 1,
            keyword,
            args: tokens.collect(),
        };

        match keyword {
            "NEAR" => near = Some(directive.float(0)?),
            "LEFT" => left = Some(directive.float(0)?),
            "RIGHT" => right = Some(directive.float(0)?),
            "BOTTOM" => bottom = Some(directive.float(0)?),
            "TOP" => top = Some(directive.float(0)?),
            "RES" => resolution = Some(Resolution::new(directive.uint(0)?, directive.uint(1)?)),
            "SPHERE" => spheres.push(directive.sphere()?),
            "LIGHT" => {
                directive.expect(7)?;
                lights.push(Light::new(directive.args[0], directive.point(1)?, directive.vec3(4)?));
            }
            "BACK" => background = directive.vec3(0)?,
            "AMBIENT" => ambient = directive.vec3(0)?,
            "OUTPUT" => {
                directive.expect(1)?;
                output = Some(directive.args[0].to_string());
            }
            _ => trace!(line = directive.line, keyword, "skipping unknown directive"),
        }
    }

    let image_plane = ImagePlane::new(
        near.ok_or(FileError::MissingDirective("NEAR"))?,
        left.ok_or(FileError::MissingDirective("LEFT"))?,
        right.ok_or(FileError::MissingDirective("RIGHT"))?,
        bottom.ok_or(FileError::MissingDirective("BOTTOM"))?,
        top.ok_or(FileError::MissingDirective("TOP"))?,
    );
    let resolution = resolution.ok_or(FileError::MissingDirective("RES"))?;

    let mut scene = Scene::new(image_plane);
    scene.spheres = spheres;
    scene.lights = lights;
    scene.background = background;
    scene.ambient = ambient;

    Ok(SceneDescription {
        scene,
        resolution,
        output,
    })
}

/// One tokenized line.
struct Directive<'a> {
    line: usize,
    keyword: &'a str,
    args: Vec<&'a str>,
}

impl Directive<'_> {
    fn expect(&self, count: usize) -> Result<()> {
        if self.args.len() < count {
            return Err(FileError::MissingArgument {
                line: self.line,
                keyword: self.keyword.to_string(),
                expected: count,
                found: self.args.len(),
            });
        }
        Ok(())
    }

    fn token(&self, index: usize) -> Result<&str> {
        self.expect(index + 1)?;
        Ok(self.args[index])
    }

    fn float(&self, index: usize) -> Result<f64> {
        let token = self.token(index)?;
        token.parse().map_err(|_| self.invalid(token))
    }

    fn uint(&self, index: usize) -> Result<u32> {
        let token = self.token(index)?;
        token.parse().map_err(|_| self.invalid(token))
    }

    fn vec3(&self, index: usize) -> Result<Vec3> {
        self.expect(index + 3)?;
        Ok(Vec3::new(
            self.float(index)?,
            self.float(index + 1)?,
            self.float(index + 2)?,
        ))
    }

    fn point(&self, index: usize) -> Result<Point3> {
        self.vec3(index).map(Point3::from)
    }

    fn sphere(&self) -> Result<Sphere> {
        self.expect(15)?;
        let name = self.args[0];
        let position = self.point(1)?;
        let scale = self.vec3(4)?;
        if scale.iter().any(|s| *s == 0.0 || !s.is_finite()) {
            return Err(FileError::DegenerateSphere {
                line: self.line,
                name: name.to_string(),
            });
        }
        let color = self.vec3(7)?;
        let material = Material::new(
            self.float(10)?,
            self.float(11)?,
            self.float(12)?,
            self.float(13)?,
            self.float(14)?,
        );
        Ok(Sphere::new(name, position, scale, color, material))
    }

    fn invalid(&self, token: &str) -> FileError {
        FileError::InvalidNumber {
            line: self.line,
            token: token.to_string(),
        }
    }
}
