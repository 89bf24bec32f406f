//! # Theme configuration
//!
//! A theme is a pair of files sharing a base name: `<name>.toml` describing
//! groups and `<name>.svg` holding the elements those groups reference.
//!
//! ```toml
//! [general]
//! author = "Jane Doe"
//! comment = "Flat grey theme"
//!
//! [specific.palette]
//! intensity = 60
//!
//! [PushButton]
//! inherits = "GenericButton"
//!
//! [PushButton.frame]
//! enabled = true
//! element = "button"
//! width = 3
//! ```
//!
//! `[general]` and `[specific]` are reserved; every other top-level table is
//! a group.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::builtin;
use crate::error::{self, ThemeError, ThemeResult};
use crate::palette::PaletteConfig;
use crate::specs::{
    ColorSpec, FrameSpec, GroupConfig, IndicatorSpec, InteriorSpec, LabelSpec, SizeSpec,
};
use crate::store::{SpecProvider, SpecStore};
use crate::tweaks::ThemeTweaks;

/// `[general]` table of a theme.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeInfo {
    pub name: Option<String>,
    pub author: Option<String>,
    pub comment: Option<String>,
    /// Whether elements with animation frames are animated.
    pub animated: bool,
    /// Milliseconds between animation frames.
    pub animation_step: u32,
}

impl Default for ThemeInfo {
    fn default() -> Self {
        Self {
            name: None,
            author: None,
            comment: None,
            animated: false,
            animation_step: 250,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ThemeFile {
    general: ThemeInfo,
    specific: ThemeTweaks,
    #[serde(flatten)]
    groups: IndexMap<String, GroupConfig>,
}

/// A loaded theme: general info, tweaks and group specs.
///
/// Colors come from the attached [PaletteConfig] first, then from
/// `[group.color]` tables of the theme itself.
#[derive(Debug, Clone, Default)]
pub struct ThemeConfig {
    info: ThemeInfo,
    tweaks: ThemeTweaks,
    store: Arc<SpecStore>,
    palette: Option<PaletteConfig>,
    path: Option<PathBuf>,
}

impl ThemeConfig {
    /// Parse a theme from TOML content. `path` is only used in errors.
    pub fn from_toml(content: &str, path: impl AsRef<Path>) -> ThemeResult<Self> {
        let path = path.as_ref();
        let file: ThemeFile = toml::from_str(content)
            .map_err(|e| ThemeError::parse_error(path, e.to_string()))?;

        log::debug!("parsed {} groups from {:?}", file.groups.len(), path);
        Ok(Self {
            info: file.general,
            tweaks: file.specific,
            store: Arc::new(SpecStore::from_groups(file.groups)),
            palette: None,
            path: Some(path.to_path_buf()),
        })
    }

    /// Load a theme file.
    pub fn load(path: impl AsRef<Path>) -> ThemeResult<Self> {
        let path = path.as_ref();
        let content = error::read_to_string(path)?;
        Self::from_toml(&content, path)
    }

    /// The bundled default theme.
    pub fn builtin() -> Self {
        match Self::from_toml(builtin::DEFAULT_THEME, builtin::BUILTIN_THEME_NAME) {
            Ok(theme) => theme,
            Err(e) => {
                log::error!("built-in theme is invalid: {}", e);
                Self::default()
            }
        }
    }

    /// Load a user theme and fall back to the built-in one for anything it
    /// leaves unset. Failures load the built-in theme alone.
    pub fn load_or_builtin(path: impl AsRef<Path>) -> Self {
        let builtin = Self::builtin();
        match Self::load(path.as_ref()) {
            Ok(theme) => theme.with_parent(&builtin),
            Err(e) => {
                log::warn!("{}; using built-in theme", e);
                builtin
            }
        }
    }

    /// Resolve unset fields from `parent`'s groups.
    pub fn with_parent(mut self, parent: &ThemeConfig) -> Self {
        let own = Arc::unwrap_or_clone(self.store);
        self.store = Arc::new(own.with_parent(parent.store.clone()));
        self
    }

    /// Attach (or detach) a palette.
    pub fn set_palette(&mut self, palette: Option<PaletteConfig>) {
        self.palette = palette;
    }

    /// The attached palette, if any.
    pub fn palette(&self) -> Option<&PaletteConfig> {
        self.palette.as_ref()
    }

    /// `[general]` table.
    pub fn info(&self) -> &ThemeInfo {
        &self.info
    }

    /// `[specific]` table.
    pub fn tweaks(&self) -> &ThemeTweaks {
        &self.tweaks
    }

    /// Mutable access to the tweaks, for hosts that override settings at run time.
    pub fn tweaks_mut(&mut self) -> &mut ThemeTweaks {
        &mut self.tweaks
    }

    /// The group store.
    pub fn store(&self) -> &SpecStore {
        &self.store
    }

    /// File this theme was read from; `<builtin>` for the bundled theme.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Whether this is the bundled theme.
    pub fn is_builtin(&self) -> bool {
        self.path
            .as_deref()
            .is_some_and(|p| p == Path::new(builtin::BUILTIN_THEME_NAME))
    }
}

impl SpecProvider for ThemeConfig {
    fn frame_spec(&self, group: &str) -> FrameSpec {
        self.store.frame_spec(group)
    }

    fn interior_spec(&self, group: &str) -> InteriorSpec {
        self.store.interior_spec(group)
    }

    fn indicator_spec(&self, group: &str) -> IndicatorSpec {
        self.store.indicator_spec(group)
    }

    fn label_spec(&self, group: &str) -> LabelSpec {
        self.store.label_spec(group)
    }

    fn size_spec(&self, group: &str) -> SizeSpec {
        self.store.size_spec(group)
    }

    fn color_spec(&self, group: &str) -> ColorSpec {
        let own = self.store.color_spec(group);
        match &self.palette {
            Some(palette) => {
                let c = palette.color_spec(group);
                ColorSpec {
                    fg: c.fg.or(own.fg),
                    bg: c.bg.or(own.bg),
                }
            }
            None => own,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"
        [general]
        author = "Tester"
        animation_step = 100

        [specific.button]
        use_capsule = false

        [GenericButton.frame]
        enabled = true
        element = "button"
        width = 3

        [PushButton]
        inherits = "GenericButton"

        [PushButton.interior]
        element = "button"
        repeat_x = 8

        [PushButton.text]
        margin = true
        margin_left = 4
        margin_right = 6
    "#;

    #[test]
    fn parses_general_specific_and_groups() {
        let theme = ThemeConfig::from_toml(SAMPLE, "sample.toml").unwrap();
        assert_eq!(theme.info().author.as_deref(), Some("Tester"));
        assert_eq!(theme.info().animation_step, 100);
        assert!(!theme.tweaks().button.use_capsule);
        assert_eq!(theme.store().len(), 2);

        let frame = theme.frame_spec("PushButton");
        assert!(frame.has_frame);
        assert_eq!(frame.element, "button");
        assert_eq!(frame.left, 3);

        let interior = theme.interior_spec("PushButton");
        assert_eq!(interior.px, 8);
        assert_eq!(interior.py, 0);

        assert_eq!(theme.label_spec("PushButton").hmargin, 6);
    }

    #[test]
    fn syntax_errors_carry_the_path() {
        let err = ThemeConfig::from_toml("[broken", "bad.toml").unwrap_err();
        assert!(matches!(err, ThemeError::ParseError { ref path, .. } if path == Path::new("bad.toml")));
    }

    #[test]
    fn missing_file_is_reported() {
        let err = ThemeConfig::load("/nonexistent/qsvgstyle/theme.toml").unwrap_err();
        assert!(err.is_missing());
    }

    #[test]
    fn builtin_theme_parses() {
        let theme = ThemeConfig::builtin();
        assert!(theme.is_builtin());
        assert!(!theme.store().is_empty());
        assert!(theme.frame_spec("PushButton").has_frame);
    }

    #[test]
    fn user_theme_falls_back_to_builtin() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[PushButton.frame]\nelement = \"mine\"").unwrap();

        let theme = ThemeConfig::load_or_builtin(file.path());
        let frame = theme.frame_spec("PushButton");
        assert_eq!(frame.element, "mine");
        assert!(frame.has_frame);
    }

    #[test]
    fn broken_user_theme_loads_builtin() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not toml at all [").unwrap();
        let theme = ThemeConfig::load_or_builtin(file.path());
        assert!(theme.is_builtin());
    }
}
