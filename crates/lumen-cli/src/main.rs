//! lumen CLI - render a scene file to an image
//!
//! Reads a text scene description, traces it and writes a PPM or PNG.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use lumen_io::{load_scene, save_image, SceneDescription};
use lumen_raytrace::{render, RenderSettings};
use tracing::{info, Level};

const DEFAULT_OUTPUT: &str = "output.ppm";

#[derive(Parser)]
#[command(name = "lumen")]
#[command(about = "Recursive ray tracer for scenes of transformed spheres", long_about = None)]
struct Cli {
    /// Scene description file
    scene: PathBuf,

    /// Output image (format determined by extension: .ppm, .png).
    /// Defaults to the scene's OUTPUT directive, then output.ppm
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// TOML file with render settings (max_depth, min_t, max_t)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the reflection depth limit
    #[arg(long)]
    max_depth: Option<u32>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(log_level(cli.verbose))
        .with_target(false)
        .init();

    let desc = load_scene(&cli.scene)
        .with_context(|| format!("failed to load scene {}", cli.scene.display()))?;
    info!(
        spheres = desc.scene.spheres.len(),
        lights = desc.scene.lights.len(),
        width = desc.resolution.width,
        height = desc.resolution.height,
        "scene loaded"
    );

    let settings = resolve_settings(cli.config.as_deref(), cli.max_depth)?;
    let image = render(&desc.scene, desc.resolution, &settings).context("render failed")?;

    let output = output_path(cli.output, &desc);
    save_image(&output, &image)
        .with_context(|| format!("failed to write {}", output.display()))?;
    println!("Rendered {}", output.display());

    Ok(())
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Settings from the optional TOML file, with the command-line depth on top.
fn resolve_settings(config: Option<&Path>, max_depth: Option<u32>) -> Result<RenderSettings> {
    let mut settings = match config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            parse_settings(&text)
                .with_context(|| format!("invalid config {}", path.display()))?
        }
        None => RenderSettings::default(),
    };
    if let Some(depth) = max_depth {
        settings.max_depth = depth;
    }
    Ok(settings)
}

fn parse_settings(text: &str) -> Result<RenderSettings> {
    Ok(toml::from_str(text)?)
}

fn output_path(explicit: Option<PathBuf>, desc: &SceneDescription) -> PathBuf {
    explicit
        .or_else(|| desc.output.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
}
