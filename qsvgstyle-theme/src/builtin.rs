//! The bundled default theme.
//!
//! It is compiled into the binary so a style always has something to draw
//! with, even when no theme is installed or the configured one is broken.

/// Name used for the bundled theme in configuration files and paths.
pub const BUILTIN_THEME_NAME: &str = "<builtin>";

/// Group configuration of the bundled theme.
pub const DEFAULT_THEME: &str = include_str!("../assets/default.toml");

/// SVG document of the bundled theme.
pub const DEFAULT_SVG: &str = include_str!("../assets/default.svg");
