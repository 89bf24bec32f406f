//! # Palette configuration
//!
//! A palette tints themed elements. Each group may give a foreground and a
//! background color and inherit the rest from another group:
//!
//! ```toml
//! [general]
//! name = "Ocean"
//!
//! [PushButton]
//! foreground = "#1a1a1a"
//! background = "#3070c0"
//!
//! [ToolButton]
//! inherits = "PushButton"
//! ```

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;
use vello::peniko::Color;

use crate::error::{self, ThemeError, ThemeResult};
use crate::specs::{ColorConfig, ColorSpec, GroupConfig};
use crate::store::{SpecProvider, SpecStore};

/// `[general]` table of a palette.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PaletteInfo {
    pub name: Option<String>,
    pub comment: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PaletteGroup {
    inherits: Option<String>,
    #[serde(with = "crate::serde_color::option")]
    foreground: Option<Color>,
    #[serde(with = "crate::serde_color::option")]
    background: Option<Color>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PaletteFile {
    general: PaletteInfo,
    #[serde(flatten)]
    groups: IndexMap<String, PaletteGroup>,
}

/// A loaded palette.
#[derive(Debug, Clone, Default)]
pub struct PaletteConfig {
    info: PaletteInfo,
    store: SpecStore,
    path: Option<PathBuf>,
}

impl PaletteConfig {
    /// Parse a palette from TOML content. `path` is only used in errors.
    pub fn from_toml(content: &str, path: impl AsRef<Path>) -> ThemeResult<Self> {
        let path = path.as_ref();
        let file: PaletteFile = toml::from_str(content)
            .map_err(|e| ThemeError::parse_error(path, e.to_string()))?;

        let groups = file
            .groups
            .into_iter()
            .map(|(name, group)| {
                let config = GroupConfig {
                    inherits: group.inherits,
                    color: Some(ColorConfig {
                        foreground: group.foreground,
                        background: group.background,
                    }),
                    ..Default::default()
                };
                (name, config)
            })
            .collect();

        Ok(Self {
            info: file.general,
            store: SpecStore::from_groups(groups),
            path: Some(path.to_path_buf()),
        })
    }

    /// Load a palette file.
    pub fn load(path: impl AsRef<Path>) -> ThemeResult<Self> {
        let path = path.as_ref();
        let content = error::read_to_string(path)?;
        Self::from_toml(&content, path)
    }

    /// `[general]` table.
    pub fn info(&self) -> &PaletteInfo {
        &self.info
    }

    /// File this palette was read from.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Resolved colors of `group`.
    pub fn color_spec(&self, group: &str) -> ColorSpec {
        self.store.color_spec(group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_inherit_between_groups() {
        let palette = PaletteConfig::from_toml(
            r##"
            [general]
            name = "Test"

            [PushButton]
            foreground = "#102030"
            background = 0xff405060

            [ToolButton]
            inherits = "PushButton"
            foreground = "#ffffff"
            "##,
            "test.toml",
        )
        .unwrap();

        assert_eq!(palette.info().name.as_deref(), Some("Test"));

        let tool = palette.color_spec("ToolButton");
        let fg = tool.fg.unwrap().to_rgba8();
        let bg = tool.bg.unwrap().to_rgba8();
        assert_eq!((fg.r, fg.g, fg.b), (255, 255, 255));
        assert_eq!((bg.r, bg.g, bg.b, bg.a), (0x40, 0x50, 0x60, 0xff));

        assert_eq!(palette.color_spec("Menu"), ColorSpec::default());
    }

    #[test]
    fn invalid_color_is_a_parse_error() {
        let err = PaletteConfig::from_toml("[PushButton]\nforeground = \"#12\"", "p.toml");
        assert!(matches!(err, Err(ThemeError::ParseError { .. })));
    }
}
