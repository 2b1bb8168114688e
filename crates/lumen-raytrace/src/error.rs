//! Error types for scene construction and rendering.

use thiserror::Error;

/// Precondition violations detected before tracing starts.
///
/// Tracing itself has no failure modes; these errors only come from
/// validating the inputs handed to the renderer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// Width or height is zero.
    #[error("image resolution must be non-zero, got {width}x{height}")]
    EmptyImage {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },

    /// Nothing to render.
    #[error("scene contains no spheres")]
    NoSpheres,

    /// The near plane must sit in front of the eye.
    #[error("near plane distance must be positive and finite, got {0}")]
    InvalidNearPlane(f64),

    /// A sphere transform cannot be inverted.
    #[error("sphere '{0}' has a singular transform")]
    SingularTransform(String),

    /// Render settings are out of range.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, RenderError>;
