//! # Style Configuration
//!
//! The user-level settings of QSvgStyle: which theme and which palette to
//! use, plus the directories themes are discovered in.
//!
//! ## Configuration file
//!
//! `~/.config/QSvgStyle/qsvgstyle.toml`:
//!
//! ```toml
//! [general]
//! theme = "Glassy"
//! palette = "Ocean"
//! ```
//!
//! ## Theme directories
//!
//! A theme named `Glassy` lives in `<dir>/Glassy/Glassy.toml` next to
//! `<dir>/Glassy/Glassy.svg`. User themes (`~/.config/QSvgStyle`) shadow
//! system themes (`/usr/share/QSvgStyle`). Palettes are single files in
//! `<dir>/palettes/<name>.toml`.
//!
//! ## Environment Variables
//!
//! - `QSVGSTYLE_CONFIG`: path of the configuration file to read instead
//! - `QSVGSTYLE_THEME`: theme name, overrides the file
//! - `QSVGSTYLE_PALETTE`: palette name, overrides the file

use std::path::{Path, PathBuf};

use serde::Deserialize;
use xdg::BaseDirectories;

use crate::builtin::BUILTIN_THEME_NAME;
use crate::error::{self, ThemeError, ThemeResult};
use crate::theme::{ThemeConfig, ThemeInfo};

/// Directory name below the XDG config home and the system data dir.
pub const CONFIG_DIR_NAME: &str = "QSvgStyle";

/// File name of the user configuration.
pub const CONFIG_FILE_NAME: &str = "qsvgstyle.toml";

/// Directory holding system-wide themes.
pub const SYSTEM_CONFIG_DIR: &str = "/usr/share/QSvgStyle";

/// `[general]` table of the user configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StyleSettings {
    /// Theme name; empty or `<builtin>` selects the bundled theme.
    pub theme: Option<String>,
    /// Palette name; absent disables the palette overlay.
    pub palette: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StyleFile {
    general: StyleSettings,
}

/// A theme found in one of the theme directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeEntry {
    pub name: String,
    pub config_path: PathBuf,
    pub svg_path: PathBuf,
    pub info: ThemeInfo,
}

/// User-level style configuration.
#[derive(Debug, Clone, Default)]
pub struct StyleConfig {
    settings: StyleSettings,
    user_dir: Option<PathBuf>,
    system_dir: PathBuf,
}

impl StyleConfig {
    /// Create a configuration selecting the built-in theme.
    pub fn new() -> Self {
        Self {
            settings: StyleSettings::default(),
            user_dir: user_config_dir(),
            system_dir: PathBuf::from(SYSTEM_CONFIG_DIR),
        }
    }

    /// Parse the configuration from TOML content.
    pub fn from_toml(content: &str, path: impl AsRef<Path>) -> ThemeResult<Self> {
        let file: StyleFile = toml::from_str(content)
            .map_err(|e| ThemeError::parse_error(path.as_ref(), e.to_string()))?;
        Ok(Self {
            settings: file.general,
            ..Self::new()
        })
    }

    /// Load the configuration from a file.
    pub fn from_file(path: impl AsRef<Path>) -> ThemeResult<Self> {
        let path = path.as_ref();
        let content = error::read_to_string(path)?;
        Self::from_toml(&content, path)
    }

    /// Load the configuration the way a style plugin does at startup.
    ///
    /// `QSVGSTYLE_CONFIG` wins over the XDG user file; `QSVGSTYLE_THEME` and
    /// `QSVGSTYLE_PALETTE` override whatever was read. Errors are logged and
    /// leave the defaults in place.
    pub fn from_env_or_default() -> Self {
        let path = std::env::var_os("QSVGSTYLE_CONFIG")
            .map(PathBuf::from)
            .or_else(|| user_config_dir().map(|d| d.join(CONFIG_FILE_NAME)));

        let mut config = match path {
            Some(path) if path.exists() => Self::from_file(&path).unwrap_or_else(|e| {
                log::warn!("{}", e);
                Self::new()
            }),
            _ => Self::new(),
        };

        if let Ok(theme) = std::env::var("QSVGSTYLE_THEME") {
            log::debug!("QSVGSTYLE_THEME={} overrides configured theme", theme);
            config.settings.theme = Some(theme);
        }
        if let Ok(palette) = std::env::var("QSVGSTYLE_PALETTE") {
            config.settings.palette = Some(palette);
        }
        config
    }

    /// Use other theme directories, mainly for tests and tools.
    pub fn with_dirs(mut self, user_dir: Option<PathBuf>, system_dir: PathBuf) -> Self {
        self.user_dir = user_dir;
        self.system_dir = system_dir;
        self
    }

    /// Select a theme by name.
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.settings.theme = Some(theme.into());
        self
    }

    /// Select a palette by name.
    pub fn with_palette(mut self, palette: impl Into<String>) -> Self {
        self.settings.palette = Some(palette.into());
        self
    }

    /// The parsed `[general]` table.
    pub fn settings(&self) -> &StyleSettings {
        &self.settings
    }

    /// Selected theme name, `None` for the built-in theme.
    pub fn theme_name(&self) -> Option<&str> {
        self.settings
            .theme
            .as_deref()
            .filter(|t| !t.is_empty() && *t != BUILTIN_THEME_NAME)
    }

    /// Selected palette name.
    pub fn palette_name(&self) -> Option<&str> {
        self.settings.palette.as_deref().filter(|p| !p.is_empty())
    }

    /// Theme directories in lookup order.
    pub fn search_dirs(&self) -> Vec<PathBuf> {
        self.user_dir
            .iter()
            .cloned()
            .chain(std::iter::once(self.system_dir.clone()))
            .collect()
    }

    /// All installed themes; user themes shadow system themes of the same name.
    pub fn theme_list(&self) -> Vec<ThemeEntry> {
        let mut themes: Vec<ThemeEntry> = Vec::new();
        for dir in self.search_dirs() {
            let Ok(entries) = std::fs::read_dir(&dir) else {
                continue;
            };
            let mut names: Vec<String> = entries
                .filter_map(Result::ok)
                .filter(|e| e.path().is_dir())
                .filter_map(|e| e.file_name().into_string().ok())
                .collect();
            names.sort();

            for name in names {
                if themes.iter().any(|t| t.name == name) {
                    continue;
                }
                if let Some(entry) = theme_entry(&dir, &name) {
                    themes.push(entry);
                }
            }
        }
        themes
    }

    /// Locate a theme by name.
    pub fn find_theme(&self, name: &str) -> ThemeResult<ThemeEntry> {
        self.search_dirs()
            .iter()
            .find_map(|dir| theme_entry(dir, name))
            .ok_or_else(|| ThemeError::not_found(name))
    }

    /// Locate a palette file by name.
    pub fn find_palette(&self, name: &str) -> ThemeResult<PathBuf> {
        self.search_dirs()
            .iter()
            .map(|dir| dir.join("palettes").join(format!("{name}.toml")))
            .find(|p| p.is_file())
            .ok_or_else(|| ThemeError::not_found(name))
    }
}

fn theme_entry(dir: &Path, name: &str) -> Option<ThemeEntry> {
    let base = dir.join(name);
    let config_path = base.join(format!("{name}.toml"));
    let svg_path = base.join(format!("{name}.svg"));
    if !(config_path.is_file() && svg_path.is_file()) {
        return None;
    }
    let info = match ThemeConfig::load(&config_path) {
        Ok(theme) => theme.info().clone(),
        Err(e) => {
            log::warn!("skipping theme {}: {}", name, e);
            return None;
        }
    };
    Some(ThemeEntry {
        name: name.to_string(),
        config_path,
        svg_path,
        info,
    })
}

/// `$XDG_CONFIG_HOME/QSvgStyle`, if the XDG directories can be determined.
pub fn user_config_dir() -> Option<PathBuf> {
    match BaseDirectories::with_prefix(CONFIG_DIR_NAME) {
        Ok(dirs) => Some(dirs.get_config_home()),
        Err(e) => {
            log::debug!("no XDG base directories: {}", e);
            None
        }
    }
}
