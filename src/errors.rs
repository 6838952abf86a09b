//! Centralized error handling for langbadge.
//!
//! Every failure in the pipeline is fatal, so all of them funnel into a
//! single enum that `main` logs before exiting with a non-zero status.

use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for the badge pipeline.
#[derive(Error, Debug)]
pub enum BadgeError {
    /// Fetching or decoding the language manifest failed
    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),

    /// A manifest color could not be interpreted
    #[error("Color error: {0}")]
    Color(#[from] ColorError),

    /// Badge template errors
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    /// Image encoding errors
    #[error("Image generation error: {0}")]
    Image(#[from] ImageError),

    /// Two languages map onto the same badge file
    #[error("Languages {first:?} and {second:?} both map to badge file {stem:?}")]
    Collision {
        stem: String,
        first: String,
        second: String,
    },

    /// Writing an output file failed
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Network/HTTP client errors
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Manifest retrieval specific errors
#[derive(Error, Debug)]
pub enum ManifestError {
    /// The manifest host answered with a non-success status
    #[error("Manifest request returned HTTP {0}")]
    Status(u16),

    /// The manifest body is not a YAML mapping of languages
    #[error("Failed to decode manifest: {0}")]
    Decode(#[from] serde_yaml::Error),
}

/// Color parsing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Not a `#RRGGBB` or `#RGB` hex string
    #[error("Invalid hex color {value:?} for {language}")]
    InvalidHex { language: String, value: String },
}

/// Badge template errors
#[derive(Error, Debug)]
pub enum TemplateError {
    /// The template file could not be read
    #[error("Failed to read template {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The template lacks a required placeholder
    #[error("Template is missing the {0} placeholder")]
    MissingPlaceholder(&'static str),

    /// The rendered template is not valid SVG
    #[error("Template does not produce valid SVG: {0}")]
    InvalidSvg(String),
}

/// Image generation specific errors
#[derive(Error, Debug)]
pub enum ImageError {
    /// Failed to create pixmap
    #[error("Failed to create pixmap: {0}")]
    PixmapCreation(String),

    /// Failed to render SVG
    #[error("Failed to render SVG: {0}")]
    SvgRendering(String),

    /// Failed to write PNG
    #[error("Failed to write PNG: {0}")]
    PngWrite(String),

    /// Failed to write SVG
    #[error("Failed to write SVG: {0}")]
    SvgWrite(String),
}

/// Type alias for Result using the unified error type
pub type Result<T> = std::result::Result<T, BadgeError>;

impl BadgeError {
    /// Wraps an I/O failure with the path being written.
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BadgeError::Write {
            path: path.into(),
            source,
        }
    }
}
