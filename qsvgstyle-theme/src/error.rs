//! # Theme Error Types
//!
//! Errors raised while loading theme, palette and style configuration files
//! or the SVG document that backs a theme. Rendering never produces these:
//! a paint call that cannot resolve something falls back and keeps going.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading QSvgStyle configuration.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Theme with the specified name was not found in any search directory.
    #[error("Theme '{name}' not found")]
    ThemeNotFound {
        /// The name of the theme that was not found.
        name: String,
    },

    /// A configuration or SVG file does not exist.
    #[error("File not found: {path:?}")]
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// A configuration or SVG file exists but could not be read.
    #[error("Failed to read {path:?}: {source}")]
    ReadError {
        /// The path of the file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Error parsing a TOML configuration file.
    #[error("Failed to parse {path:?}: {details}")]
    ParseError {
        /// The path of the file that failed to parse.
        path: PathBuf,
        /// Details about the parse error.
        details: String,
    },

    /// Error parsing the SVG document of a theme.
    #[error("Failed to parse SVG document {path:?}: {details}")]
    SvgError {
        /// Path of the SVG document, or `<builtin>`.
        path: PathBuf,
        /// Details reported by the SVG parser.
        details: String,
    },

    /// Invalid color value.
    #[error("Invalid color format: {0}")]
    InvalidColor(String),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error serializing configuration data.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for theme operations.
pub type ThemeResult<T> = Result<T, ThemeError>;

impl ThemeError {
    /// Create a theme not found error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::ThemeNotFound { name: name.into() }
    }

    /// Create a file not found error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a read error for the given path.
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration parse error.
    pub fn parse_error(path: impl Into<PathBuf>, details: impl Into<String>) -> Self {
        Self::ParseError {
            path: path.into(),
            details: details.into(),
        }
    }

    /// Create an SVG parse error.
    pub fn svg_error(path: impl Into<PathBuf>, details: impl Into<String>) -> Self {
        Self::SvgError {
            path: path.into(),
            details: details.into(),
        }
    }

    /// Returns true if this error means "the file is not there".
    ///
    /// Callers use this to decide between a quiet fallback and a warning.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::FileNotFound { .. } | Self::ThemeNotFound { .. })
    }
}

/// Read a file to a string, mapping failures to [ThemeError].
pub fn read_to_string(path: &std::path::Path) -> ThemeResult<String> {
    if !path.exists() {
        return Err(ThemeError::file_not_found(path));
    }
    std::fs::read_to_string(path).map_err(|e| ThemeError::read_error(path, e))
}
