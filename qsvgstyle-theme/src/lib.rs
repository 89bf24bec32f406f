#![warn(missing_docs)]

//! # QSvgStyle theme specifications
//!
//! Everything a QSvgStyle theme *says*, independent of how it is drawn:
//! the per-group frame/interior/indicator/label/size/color specifications,
//! their inheritance rules, the theme-wide tweaks and the user configuration
//! that selects a theme and a palette.
//!
//! ## Overview
//!
//! - **[SpecStore](store::SpecStore)**: named groups with inheritance-aware lookup
//! - **[SpecProvider](store::SpecProvider)**: the resolved-spec interface the renderer consumes
//! - **[ThemeConfig](theme::ThemeConfig)**: a loaded theme file (`<name>.toml`)
//! - **[PaletteConfig](palette::PaletteConfig)**: a color overlay
//! - **[StyleConfig](config::StyleConfig)**: which theme and palette are in use
//! - **[groups]**: the table mapping widget roles to group names
//!
//! ## Quick Start
//!
//! ```rust
//! use qsvgstyle_theme::store::SpecProvider;
//! use qsvgstyle_theme::theme::ThemeConfig;
//! use qsvgstyle_theme::groups::{primitive_group, PrimitiveElement};
//!
//! let theme = ThemeConfig::builtin();
//! let group = primitive_group(PrimitiveElement::PanelButtonCommand).unwrap();
//! let frame = theme.frame_spec(group);
//! assert!(frame.has_frame);
//! ```
//!
//! ## Theme Configuration
//!
//! ```rust,no_run
//! use qsvgstyle_theme::config::StyleConfig;
//! use qsvgstyle_theme::theme::ThemeConfig;
//!
//! let config = StyleConfig::from_env_or_default();
//! let theme = match config.theme_name().map(|n| config.find_theme(n)) {
//!     Some(Ok(entry)) => ThemeConfig::load_or_builtin(&entry.config_path),
//!     _ => ThemeConfig::builtin(),
//! };
//! ```

/// Contains the bundled default theme.
pub mod builtin;
/// Contains the [config::StyleConfig] struct for user configuration.
pub mod config;
/// Contains the [error::ThemeError] type.
pub mod error;
/// Contains the widget role to group table.
pub mod groups;
/// Contains the [palette::PaletteConfig] struct.
pub mod palette;
/// Contains serde helpers for colors.
pub mod serde_color;
/// Contains group configs and resolved specs.
pub mod specs;
/// Contains the [store::SpecStore] and the [store::SpecProvider] trait.
pub mod store;
/// Contains the [theme::ThemeConfig] struct.
pub mod theme;
/// Contains the theme-wide [tweaks::ThemeTweaks].
pub mod tweaks;

pub use error::{ThemeError, ThemeResult};
pub use specs::{
    CapsulePosition, ColorSpec, ElementSpec, FrameCut, FrameSpec, IndicatorSpec, InteriorSpec,
    LabelSpec, SizeSpec,
};
pub use store::{SpecProvider, SpecStore};
pub use theme::ThemeConfig;
