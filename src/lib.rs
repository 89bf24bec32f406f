#![warn(missing_docs)]

//! Theme desktop widgets with SVG stylesheets.
//!
//! A theme is a TOML file describing, per widget group, how frames,
//! interiors, indicators and labels are laid out, and an SVG document holding
//! the named elements they are drawn from. Hosts create a
//! [ThemeContext](core::style::ThemeContext) and route their paint, size and
//! hit-test requests through it.
//!
//! ```rust
//! use qsvgstyle::prelude::*;
//! use qsvgstyle::theme::groups::ControlElement;
//!
//! let ctx = ThemeContext::builtin(Box::new(FixedMetrics::default())).unwrap();
//! let option = StyleOption::new(Rect::new(0, 0, 80, 24), State::ENABLED).with_text("Ok");
//! let mut painter = RecordingPainter::new();
//! let done = ctx.draw_control(ControlElement::PushButton, &option, &mut painter, None);
//! assert_eq!(done, Dispatch::Done);
//! ```

pub use vello::peniko as color;

pub use qsvgstyle_core as core;
pub use qsvgstyle_theme as theme;

/// A "prelude" for hosts of the style.
///
/// ```rust
/// use qsvgstyle::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::prelude::*;
    pub use crate::theme::config::StyleConfig;
    pub use crate::theme::groups::{
        ComplexControl, ContentsType, ControlElement, PrimitiveElement, SubElement,
    };
    pub use crate::theme::palette::PaletteConfig;
    pub use crate::theme::{ThemeConfig, ThemeError, ThemeResult};
}
