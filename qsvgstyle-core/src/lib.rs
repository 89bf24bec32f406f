#![warn(missing_docs)]

//! Core library for QSvgStyle => See `qsvgstyle` crate.
//!
//! Contains the geometry engines, the SVG renderer and the widget style.

pub use vello as vg;

/// Contains the busy progress bar animation.
pub mod animation;

/// Contains the capsule analysis of same-kind widget groups.
pub mod capsule;

/// Contains the 9-slice frame geometry.
pub mod frame;

/// Contains the integer pixel geometry types.
pub mod geometry;

/// Contains the interior, label and indicator rectangles.
pub mod interior;

/// Contains layout direction, orientation and the host layout tree.
pub mod layout;

/// Contains the render observer hooks.
pub mod observer;

/// Contains the renderer composing SVG elements into widgets.
pub mod render;

/// Contains the contents size engine.
pub mod size;

/// Contains the widget state flags and element status names.
pub mod state;

/// Contains the widget style: drawing, sizes and sub-rectangles per role.
pub mod style;

/// Contains the SVG element sources.
pub mod svg;

/// Contains text measurement.
pub mod text;

/// Contains the painter interface and its backends.
pub mod vgi;

/// Re-exports of the types most hosts need.
pub mod prelude {
    pub use crate::capsule::{capsule_position, Capsule};
    pub use crate::geometry::{Alignment, Margins, Point, Rect, Size};
    pub use crate::layout::{
        LayoutDirection, LayoutInspector, LayoutTree, Orientation, WidgetId, WidgetRef, WidgetTag,
    };
    pub use crate::render::Renderer;
    pub use crate::size::TextIconMode;
    pub use crate::state::State;
    pub use crate::style::{
        Dispatch, Features, OptionExtra, PixelMetric, RangeOption, StyleOption, SubControl,
        ThemeContext, WidgetInfo,
    };
    pub use crate::svg::{LayeredSvg, SvgElementRenderer, VelloSvgRenderer};
    pub use crate::text::{FixedMetrics, FontMetrics, ParleyText};
    pub use crate::vgi::{Painter, RecordingPainter, VelloPainter};
}
