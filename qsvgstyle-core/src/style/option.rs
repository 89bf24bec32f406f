// SPDX-License-Identifier: LGPL-3.0-only

//! What the host tells the style about the widget being drawn.

use bitflags::bitflags;
use vello::peniko::Color;

use crate::geometry::{Alignment, Rect, Size};
use crate::layout::{LayoutDirection, LayoutInspector, Orientation, WidgetRef};
use crate::size::TextIconMode;
use crate::state::State;
use crate::vgi::Icon;

use super::SubControl;

bitflags! {
    /// Optional features of a control.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Features: u32 {
        const FLAT = 1 << 0;
        /// The default button of a dialog.
        const DEFAULT_BUTTON = 1 << 1;
        const AUTO_DEFAULT = 1 << 2;
        /// A simple down arrow opens a menu.
        const HAS_MENU = 1 << 3;
        /// A separate drop-down button opens a menu.
        const MENU = 1 << 4;
        const EDITABLE = 1 << 5;
        const TEXT_VISIBLE = 1 << 6;
        /// Alternate row of an item view.
        const ALTERNATE = 1 << 7;
        /// Group boxes with a check box in their title.
        const CHECKABLE = 1 << 8;
        /// Tab bars whose tabs have close buttons.
        const CLOSABLE = 1 << 9;
        /// Dock widgets with a vertical title bar.
        const VERTICAL_TITLE = 1 << 10;
        /// Item view cells showing a check box.
        const CHECK_INDICATOR = 1 << 11;
    }
}

/// Arrow shown by a tool button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ArrowType {
    #[default]
    None,
    Up,
    Down,
    Left,
    Right,
}

/// Sort arrow of a header section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortIndicator {
    #[default]
    None,
    Up,
    Down,
}

/// Position of a header section or a tab in its bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SectionPosition {
    Beginning,
    Middle,
    End,
    #[default]
    OnlyOne,
}

/// Where the selected tab is relative to a tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelectedPosition {
    #[default]
    NotAdjacent,
    NextIsSelected,
    PreviousIsSelected,
}

/// Side of the pane a tab bar is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TabShape {
    #[default]
    North,
    South,
    West,
    East,
}

/// Kind of a menu item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MenuItemKind {
    #[default]
    Normal,
    Separator,
    TearOff,
    SubMenu,
}

/// Check behavior of a menu item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CheckType {
    #[default]
    NotCheckable,
    Exclusive,
    NonExclusive,
}

/// Buttons of a spin box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ButtonSymbols {
    #[default]
    UpDownArrows,
    PlusMinus,
    NoButtons,
}

/// Shape of a plain frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FrameShape {
    NoFrame,
    #[default]
    Panel,
    HLine,
    VLine,
}

/// Value range of scroll bars, sliders, dials and progress bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RangeOption {
    pub minimum: i32,
    pub maximum: i32,
    pub value: i32,
    pub page_step: i32,
    pub orientation: Orientation,
    pub upside_down: bool,
    /// Tick marks of sliders.
    pub ticks: bool,
}

impl RangeOption {
    pub fn new(minimum: i32, maximum: i32, value: i32) -> Self {
        Self {
            minimum,
            maximum,
            value,
            page_step: 10,
            orientation: Orientation::Horizontal,
            upside_down: false,
            ticks: false,
        }
    }

    pub fn with_page_step(mut self, page_step: i32) -> Self {
        self.page_step = page_step;
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn upside_down(mut self, upside_down: bool) -> Self {
        self.upside_down = upside_down;
        self
    }

    /// A progress bar without a known value.
    pub fn is_busy(&self) -> bool {
        self.minimum == self.maximum
    }
}

/// Control-specific part of a [StyleOption].
#[derive(Debug, Clone, Default, PartialEq)]
pub enum OptionExtra {
    #[default]
    None,
    Range(RangeOption),
    ToolButton {
        arrow: ArrowType,
    },
    Header {
        position: SectionPosition,
        sort: SortIndicator,
        orientation: Orientation,
    },
    Tab {
        position: SectionPosition,
        shape: TabShape,
        selected: SelectedPosition,
    },
    MenuItem {
        kind: MenuItemKind,
        check: CheckType,
        checked: bool,
        /// Width reserved for icons by the whole menu.
        max_icon_width: i32,
    },
    SpinBox {
        symbols: ButtonSymbols,
    },
    Frame {
        shape: FrameShape,
        line_width: i32,
    },
}

/// Everything the style needs to know to draw or measure one control.
#[derive(Debug, Clone)]
pub struct StyleOption {
    pub rect: Rect,
    pub state: State,
    pub direction: LayoutDirection,
    pub text: String,
    pub icon: Option<Icon>,
    pub icon_size: Size,
    /// Arrangement of icon and text, used by tool buttons.
    pub mode: TextIconMode,
    pub alignment: Alignment,
    pub text_color: Color,
    pub features: Features,
    pub extra: OptionExtra,
    /// Part of a complex control under the mouse or pressed.
    pub active: Option<SubControl>,
}

impl Default for StyleOption {
    fn default() -> Self {
        Self {
            rect: Rect::EMPTY,
            state: State::ENABLED,
            direction: LayoutDirection::Ltr,
            text: String::new(),
            icon: None,
            icon_size: Size::new(16, 16),
            mode: TextIconMode::TextBesideIcon,
            alignment: Alignment::LEFT | Alignment::VCENTER,
            text_color: Color::BLACK,
            features: Features::empty(),
            extra: OptionExtra::None,
            active: None,
        }
    }
}

impl StyleOption {
    pub fn new(rect: Rect, state: State) -> Self {
        Self {
            rect,
            state,
            ..Default::default()
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_icon(mut self, icon: Icon, size: Size) -> Self {
        self.icon = Some(icon);
        self.icon_size = size;
        self
    }

    pub fn with_direction(mut self, direction: LayoutDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_mode(mut self, mode: TextIconMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_features(mut self, features: Features) -> Self {
        self.features = features;
        self
    }

    pub fn with_extra(mut self, extra: OptionExtra) -> Self {
        self.extra = extra;
        self
    }

    pub fn with_active(mut self, active: SubControl) -> Self {
        self.active = Some(active);
        self
    }

    /// Copy of this option for a sub-part at `rect`.
    pub fn at(&self, rect: Rect) -> Self {
        let mut o = self.clone();
        o.rect = rect;
        o
    }

    pub fn range(&self) -> Option<&RangeOption> {
        match &self.extra {
            OptionExtra::Range(range) => Some(range),
            _ => None,
        }
    }

    /// Orientation of range controls, or from the [State::HORIZONTAL] flag.
    pub fn orientation(&self) -> Orientation {
        match &self.extra {
            OptionExtra::Range(range) => range.orientation,
            OptionExtra::Header { orientation, .. } => *orientation,
            _ if self.state.contains(State::HORIZONTAL) => Orientation::Horizontal,
            _ => Orientation::Vertical,
        }
    }

    /// Size of the icon if one is shown.
    pub fn shown_icon_size(&self) -> Size {
        if self.icon.is_some() {
            self.icon_size
        } else {
            Size::default()
        }
    }
}

/// The widget being drawn and the layout it lives in.
///
/// Needed for capsule analysis and for per-widget animation state.
#[derive(Clone, Copy)]
pub struct WidgetInfo<'a> {
    pub widget: &'a WidgetRef,
    pub layout: Option<&'a dyn LayoutInspector>,
}

impl<'a> WidgetInfo<'a> {
    pub fn new(widget: &'a WidgetRef) -> Self {
        Self {
            widget,
            layout: None,
        }
    }

    pub fn in_layout(widget: &'a WidgetRef, layout: &'a dyn LayoutInspector) -> Self {
        Self {
            widget,
            layout: Some(layout),
        }
    }
}

impl std::fmt::Debug for WidgetInfo<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetInfo")
            .field("widget", self.widget)
            .field("has_layout", &self.layout.is_some())
            .finish()
    }
}
