//! # Element specifications
//!
//! Two layers live here:
//!
//! - **Config** structs (`FrameConfig`, `InteriorConfig`, ...) mirror one
//!   table of a theme file. Every field is an `Option`, so "unset" stays
//!   distinguishable from "set to zero/false" and can be filled from an
//!   inherited group later on.
//! - **Spec** structs (`FrameSpec`, `InteriorSpec`, ...) are the resolved,
//!   default-filled values the geometry engines and the renderer consume.
//!
//! A theme file describes one group per table:
//!
//! ```toml
//! [PushButton]
//! inherits = "GenericButton"
//!
//! [PushButton.frame]
//! enabled = true
//! element = "button"
//! width = 3
//! capsule = true
//!
//! [PushButton.interior]
//! element = "button"
//!
//! [PushButton.text]
//! margin = true
//! margin_left = 4
//! margin_right = 4
//! icon_spacing = 4
//! ```

use serde::Deserialize;
use vello::peniko::Color;

/// Fill the unset fields of a config from a fallback config.
pub trait Merge {
    /// Copy every field of `fallback` that is unset in `self`.
    fn merge_from(&mut self, fallback: &Self);
}

macro_rules! impl_merge {
    ($ty:ty { $($field:ident),* $(,)? }) => {
        impl Merge for $ty {
            fn merge_from(&mut self, fallback: &Self) {
                $(
                    if self.$field.is_none() {
                        self.$field = fallback.$field.clone();
                    }
                )*
            }
        }
    };
}

/// Position of a widget inside a capsule along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CapsulePosition {
    /// First widget of the run (left or top). Code `-1`.
    Start,
    /// Between two widgets of the same kind. Code `0`.
    Middle,
    /// Last widget of the run (right or bottom). Code `1`.
    End,
    /// No neighbor on this axis; both edges are drawn. Code `2`.
    #[default]
    Both,
}

impl CapsulePosition {
    /// Numeric code used by theme tooling: -1, 0, 1 or 2.
    pub fn code(self) -> i8 {
        match self {
            CapsulePosition::Start => -1,
            CapsulePosition::Middle => 0,
            CapsulePosition::End => 1,
            CapsulePosition::Both => 2,
        }
    }

    /// Inverse of [CapsulePosition::code].
    pub fn from_code(code: i8) -> Option<Self> {
        match code {
            -1 => Some(CapsulePosition::Start),
            0 => Some(CapsulePosition::Middle),
            1 => Some(CapsulePosition::End),
            2 => Some(CapsulePosition::Both),
            _ => None,
        }
    }

    /// Whether the leading (left/top) edge is drawn.
    pub fn draws_start(self) -> bool {
        matches!(self, CapsulePosition::Start | CapsulePosition::Both)
    }

    /// Whether the trailing (right/bottom) edge is drawn.
    pub fn draws_end(self) -> bool {
        matches!(self, CapsulePosition::End | CapsulePosition::Both)
    }
}

/// `[group.frame]` table.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    /// Whether the group has a frame at all.
    pub enabled: Option<bool>,
    /// Group to take unset frame fields from, before `element.inherits`.
    pub inherits: Option<String>,
    /// Base SVG id of the frame parts.
    pub element: Option<String>,
    /// Width used for every side that is not given explicitly.
    pub width: Option<i32>,
    pub top: Option<i32>,
    pub bottom: Option<i32>,
    pub left: Option<i32>,
    pub right: Option<i32>,
    /// Allow grouping with same-kind neighbors.
    pub capsule: Option<bool>,
    pub animation_frames: Option<u32>,
    pub animation_loop: Option<bool>,
}

impl_merge!(FrameConfig {
    enabled,
    element,
    width,
    top,
    bottom,
    left,
    right,
    capsule,
    animation_frames,
    animation_loop,
});

/// `[group.interior]` table.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct InteriorConfig {
    pub enabled: Option<bool>,
    pub inherits: Option<String>,
    pub element: Option<String>,
    /// Horizontal tiling period; 0 stretches.
    pub repeat_x: Option<i32>,
    /// Vertical tiling period; 0 stretches.
    pub repeat_y: Option<i32>,
    pub animation_frames: Option<u32>,
    pub animation_loop: Option<bool>,
}

impl_merge!(InteriorConfig {
    enabled,
    element,
    repeat_x,
    repeat_y,
    animation_frames,
    animation_loop,
});

/// `[group.indicator]` table.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    pub inherits: Option<String>,
    pub element: Option<String>,
    pub size: Option<i32>,
    pub animation_frames: Option<u32>,
    pub animation_loop: Option<bool>,
}

impl_merge!(IndicatorConfig {
    element,
    size,
    animation_frames,
    animation_loop,
});

/// `[group.text]` table (also accepted as `[group.label]`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    pub shadow: Option<bool>,
    pub shadow_xshift: Option<i32>,
    pub shadow_yshift: Option<i32>,
    #[serde(with = "crate::serde_color::option")]
    pub shadow_color: Option<Color>,
    pub shadow_depth: Option<i32>,
    pub margin: Option<bool>,
    pub margin_top: Option<i32>,
    pub margin_bottom: Option<i32>,
    pub margin_left: Option<i32>,
    pub margin_right: Option<i32>,
    /// Horizontal margin; defaults to the larger of left and right.
    pub margin_h: Option<i32>,
    /// Vertical margin; defaults to the larger of top and bottom.
    pub margin_v: Option<i32>,
    pub icon_spacing: Option<i32>,
}

impl_merge!(LabelConfig {
    shadow,
    shadow_xshift,
    shadow_yshift,
    shadow_color,
    shadow_depth,
    margin,
    margin_top,
    margin_bottom,
    margin_left,
    margin_right,
    margin_h,
    margin_v,
    icon_spacing,
});

/// `[group.size]` table.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SizeConfig {
    pub min_width: Option<i32>,
    pub min_height: Option<i32>,
    pub fixed_width: Option<i32>,
    pub fixed_height: Option<i32>,
}

impl_merge!(SizeConfig {
    min_width,
    min_height,
    fixed_width,
    fixed_height,
});

/// `[group.color]` table, usually found in palette files.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    #[serde(with = "crate::serde_color::option")]
    pub foreground: Option<Color>,
    #[serde(with = "crate::serde_color::option")]
    pub background: Option<Color>,
}

impl_merge!(ColorConfig { foreground, background });

/// One group table of a theme or palette file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GroupConfig {
    /// Group consulted for every part after the part's own `inherits`.
    pub inherits: Option<String>,
    pub frame: Option<FrameConfig>,
    pub interior: Option<InteriorConfig>,
    pub indicator: Option<IndicatorConfig>,
    #[serde(alias = "label")]
    pub text: Option<LabelConfig>,
    pub size: Option<SizeConfig>,
    pub color: Option<ColorConfig>,
}

/// A part of a group that can be resolved through inheritance.
pub trait PartConfig: Merge + Clone + Default {
    /// Select this part from a group table.
    fn of(group: &GroupConfig) -> Option<&Self>;

    /// The part-level `inherits` key, if the part has one.
    fn inherits(&self) -> Option<&str> {
        None
    }
}

impl PartConfig for FrameConfig {
    fn of(group: &GroupConfig) -> Option<&Self> {
        group.frame.as_ref()
    }

    fn inherits(&self) -> Option<&str> {
        self.inherits.as_deref()
    }
}

impl PartConfig for InteriorConfig {
    fn of(group: &GroupConfig) -> Option<&Self> {
        group.interior.as_ref()
    }

    fn inherits(&self) -> Option<&str> {
        self.inherits.as_deref()
    }
}

impl PartConfig for IndicatorConfig {
    fn of(group: &GroupConfig) -> Option<&Self> {
        group.indicator.as_ref()
    }

    fn inherits(&self) -> Option<&str> {
        self.inherits.as_deref()
    }
}

impl PartConfig for LabelConfig {
    fn of(group: &GroupConfig) -> Option<&Self> {
        group.text.as_ref()
    }
}

impl PartConfig for SizeConfig {
    fn of(group: &GroupConfig) -> Option<&Self> {
        group.size.as_ref()
    }
}

impl PartConfig for ColorConfig {
    fn of(group: &GroupConfig) -> Option<&Self> {
        group.color.as_ref()
    }
}

/// Interruption of the top frame edge between two x positions.
///
/// Used where another control overlaps the frame, such as a group box title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameCut {
    /// First x position that is not drawn.
    pub from: i32,
    /// Last x position that is not drawn.
    pub to: i32,
}

/// Resolved frame of a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSpec {
    pub element: String,
    pub has_frame: bool,
    pub width: i32,
    pub top: i32,
    pub bottom: i32,
    pub left: i32,
    pub right: i32,
    pub has_capsule: bool,
    pub capsule_h: CapsulePosition,
    pub capsule_v: CapsulePosition,
    /// Swaps light and dark bevel colors. Set per draw call.
    pub pressed: bool,
    pub animation_frames: u32,
    pub loop_animation: bool,
    /// Set per draw call.
    pub cut: Option<FrameCut>,
}

impl Default for FrameSpec {
    fn default() -> Self {
        Self {
            element: String::new(),
            has_frame: false,
            width: 0,
            top: 0,
            bottom: 0,
            left: 0,
            right: 0,
            has_capsule: false,
            capsule_h: CapsulePosition::Both,
            capsule_v: CapsulePosition::Both,
            pressed: false,
            animation_frames: 1,
            loop_animation: true,
            cut: None,
        }
    }
}

impl FrameSpec {
    /// Resolve a merged frame config, filling defaults.
    pub fn from_config(config: &FrameConfig) -> Self {
        let mut spec = FrameSpec::default();
        spec.has_frame = config.enabled.unwrap_or(false);
        if !spec.has_frame {
            return spec;
        }

        let side = |v: Option<i32>| v.or(config.width).unwrap_or(0).max(0);
        spec.element = config.element.clone().unwrap_or_default();
        spec.top = side(config.top);
        spec.bottom = side(config.bottom);
        spec.left = side(config.left);
        spec.right = side(config.right);
        spec.width = config
            .width
            .unwrap_or_else(|| spec.top.max(spec.bottom).max(spec.left.max(spec.right)));
        spec.has_capsule = config.capsule.unwrap_or(false);
        spec.animation_frames = config.animation_frames.unwrap_or(1).max(1);
        spec.loop_animation = config.animation_loop.unwrap_or(true);
        spec
    }

    /// Whether this frame takes part in a capsule for this draw call.
    pub fn in_capsule(&self) -> bool {
        self.has_capsule
            && !(self.capsule_h == CapsulePosition::Both && self.capsule_v == CapsulePosition::Both)
    }
}

/// Resolved interior of a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteriorSpec {
    pub element: String,
    pub has_interior: bool,
    /// Horizontal tiling period; 0 stretches.
    pub px: i32,
    /// Vertical tiling period; 0 stretches.
    pub py: i32,
    pub animation_frames: u32,
    pub loop_animation: bool,
}

impl Default for InteriorSpec {
    fn default() -> Self {
        Self {
            element: String::new(),
            has_interior: true,
            px: 0,
            py: 0,
            animation_frames: 1,
            loop_animation: true,
        }
    }
}

impl InteriorSpec {
    /// Resolve a merged interior config, filling defaults.
    pub fn from_config(config: &InteriorConfig) -> Self {
        let has_interior = config.enabled.unwrap_or(true);
        Self {
            element: if has_interior {
                config.element.clone().unwrap_or_default()
            } else {
                String::new()
            },
            has_interior,
            px: config.repeat_x.unwrap_or(0).max(0),
            py: config.repeat_y.unwrap_or(0).max(0),
            animation_frames: config.animation_frames.unwrap_or(1).max(1),
            loop_animation: config.animation_loop.unwrap_or(true),
        }
    }
}

/// Default side of an indicator in pixels.
pub const DEFAULT_INDICATOR_SIZE: i32 = 15;

/// Resolved indicator of a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorSpec {
    pub element: String,
    pub size: i32,
    pub animation_frames: u32,
    pub loop_animation: bool,
}

impl Default for IndicatorSpec {
    fn default() -> Self {
        Self {
            element: String::new(),
            size: DEFAULT_INDICATOR_SIZE,
            animation_frames: 1,
            loop_animation: true,
        }
    }
}

impl IndicatorSpec {
    /// Resolve a merged indicator config, filling defaults.
    pub fn from_config(config: &IndicatorConfig) -> Self {
        Self {
            element: config.element.clone().unwrap_or_default(),
            size: config.size.unwrap_or(DEFAULT_INDICATOR_SIZE).max(0),
            animation_frames: config.animation_frames.unwrap_or(1).max(1),
            loop_animation: config.animation_loop.unwrap_or(true),
        }
    }
}

/// Resolved text/icon layout of a group.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelSpec {
    pub has_shadow: bool,
    pub xshift: i32,
    pub yshift: i32,
    pub shadow_color: Color,
    pub depth: i32,
    pub has_margin: bool,
    pub top: i32,
    pub bottom: i32,
    pub left: i32,
    pub right: i32,
    pub hmargin: i32,
    pub vmargin: i32,
    /// Gap between icon and text.
    pub tispace: i32,
}

impl Default for LabelSpec {
    fn default() -> Self {
        Self {
            has_shadow: false,
            xshift: 0,
            yshift: 1,
            shadow_color: Color::BLACK,
            depth: 1,
            has_margin: false,
            top: 0,
            bottom: 0,
            left: 0,
            right: 0,
            hmargin: 0,
            vmargin: 0,
            tispace: 0,
        }
    }
}

impl LabelSpec {
    /// Resolve a merged label config, filling defaults.
    pub fn from_config(config: &LabelConfig) -> Self {
        let mut spec = LabelSpec::default();

        spec.has_shadow = config.shadow.unwrap_or(false);
        if spec.has_shadow {
            spec.xshift = config.shadow_xshift.unwrap_or(spec.xshift);
            spec.yshift = config.shadow_yshift.unwrap_or(spec.yshift);
            spec.shadow_color = config.shadow_color.unwrap_or(spec.shadow_color);
            spec.depth = config.shadow_depth.unwrap_or(spec.depth).max(0);
        }

        spec.has_margin = config.margin.unwrap_or(false);
        if spec.has_margin {
            spec.top = config.margin_top.unwrap_or(0);
            spec.bottom = config.margin_bottom.unwrap_or(0);
            spec.left = config.margin_left.unwrap_or(0);
            spec.right = config.margin_right.unwrap_or(0);
            spec.hmargin = config.margin_h.unwrap_or(spec.left.max(spec.right));
            spec.vmargin = config.margin_v.unwrap_or(spec.top.max(spec.bottom));
        }

        spec.tispace = config.icon_spacing.unwrap_or(0);
        spec
    }
}

/// Resolved size constraints of a group.
///
/// Fixed values override minimum values, which override computed sizes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SizeSpec {
    pub min_w: Option<i32>,
    pub min_h: Option<i32>,
    pub fixed_w: Option<i32>,
    pub fixed_h: Option<i32>,
}

impl SizeSpec {
    /// Resolve a merged size config. Negative values mean "unset".
    pub fn from_config(config: &SizeConfig) -> Self {
        let positive = |v: Option<i32>| v.filter(|v| *v >= 0);
        Self {
            min_w: positive(config.min_width),
            min_h: positive(config.min_height),
            fixed_w: positive(config.fixed_width),
            fixed_h: positive(config.fixed_height),
        }
    }
}

/// Resolved palette overlay of a group.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ColorSpec {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
}

impl ColorSpec {
    /// Resolve a merged color config.
    pub fn from_config(config: &ColorConfig) -> Self {
        Self {
            fg: config.foreground,
            bg: config.background,
        }
    }
}

/// All resolved specs of a group.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementSpec {
    pub inherits: Option<String>,
    pub frame: FrameSpec,
    pub interior: InteriorSpec,
    pub indicator: IndicatorSpec,
    pub label: LabelSpec,
    pub size: SizeSpec,
    pub color: ColorSpec,
}
