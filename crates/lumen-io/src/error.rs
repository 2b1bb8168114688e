//! Error types for scene loading and image output.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from reading scene files or writing images.
#[derive(Error, Debug)]
pub enum FileError {
    /// The scene file could not be read.
    #[error("cannot read {path}: {source}")]
    Read {
        /// File that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A directive has fewer arguments than it needs.
    #[error("line {line}: {keyword} expects {expected} arguments, found {found}")]
    MissingArgument {
        /// 1-based line number.
        line: usize,
        /// Directive keyword.
        keyword: String,
        /// Number of arguments required.
        expected: usize,
        /// Number of arguments present.
        found: usize,
    },

    /// An argument is not a valid number.
    #[error("line {line}: invalid number '{token}'")]
    InvalidNumber {
        /// 1-based line number.
        line: usize,
        /// Offending token.
        token: String,
    },

    /// A sphere has a zero or non-finite scale component.
    #[error("line {line}: sphere '{name}' has a degenerate scale")]
    DegenerateSphere {
        /// 1-based line number.
        line: usize,
        /// Sphere name.
        name: String,
    },

    /// A required directive never appeared.
    #[error("missing required directive {0}")]
    MissingDirective(&'static str),

    /// The output file extension is not a known image format.
    #[error("unsupported image format '{0}' (expected .ppm or .png)")]
    UnsupportedFormat(String),

    /// PNG encoding failed.
    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    /// Writing output failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for scene file and image operations.
pub type Result<T> = std::result::Result<T, FileError>;
