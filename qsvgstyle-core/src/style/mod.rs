// SPDX-License-Identifier: LGPL-3.0-only

//! The widget style: drawing, sizing and hit geometry of every themed role.
//!
//! Hosts call the entry points of [ThemeContext] with a role from
//! [qsvgstyle_theme::groups], a [StyleOption] and optionally a [WidgetInfo].
//! Each role is looked up in a handler table; roles without a theme group or
//! without a handler answer [Dispatch::Fallback] (or `None`) so the host can
//! use its own rendering.

use std::f64::consts::FRAC_PI_2;

use qsvgstyle_theme::{CapsulePosition, ElementSpec, FrameSpec, SpecProvider};
use vello::kurbo::Affine;
use vello::peniko::Color;

use crate::capsule::{capsule_position, Capsule};
use crate::geometry::{Alignment, Rect};
use crate::layout::{LayoutDirection, Orientation};
use crate::render::LabelContent;
use crate::state::{status_str, State};
use crate::vgi::Painter;

mod complex;
mod context;
mod control;
mod metrics;
mod option;
mod primitive;

pub use context::ThemeContext;
pub use metrics::slider_position_from_value;
pub use option::{
    ArrowType, ButtonSymbols, CheckType, Features, FrameShape, MenuItemKind, OptionExtra,
    RangeOption, SectionPosition, SelectedPosition, SortIndicator, StyleOption, TabShape,
    WidgetInfo,
};

/// Outcome of a draw call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dispatch {
    /// The style drew the role.
    Done,
    /// The role is not themed; the host draws it.
    Fallback,
}

/// Parts of complex controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubControl {
    SpinBoxFrame,
    SpinBoxEditField,
    SpinBoxUp,
    SpinBoxDown,
    ComboBoxFrame,
    ComboBoxEditField,
    ComboBoxArrow,
    ComboBoxListBoxPopup,
    ScrollBarGroove,
    ScrollBarSubLine,
    ScrollBarAddLine,
    ScrollBarSubPage,
    ScrollBarAddPage,
    ScrollBarSlider,
    SliderGroove,
    SliderHandle,
    SliderTickmarks,
    ToolButton,
    ToolButtonMenu,
    GroupBoxFrame,
    GroupBoxLabel,
    GroupBoxCheckBox,
    GroupBoxContents,
    DialGroove,
    DialHandle,
    TitleBarLabel,
}

/// Style-wide sizes the host asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelMetric {
    ButtonMargin,
    ButtonShiftHorizontal,
    ButtonShiftVertical,
    DefaultFrameWidth,
    SpinBoxFrameWidth,
    ComboBoxFrameWidth,
    LayoutLeftMargin,
    LayoutRightMargin,
    LayoutTopMargin,
    LayoutBottomMargin,
    LayoutHorizontalSpacing,
    LayoutVerticalSpacing,
    MenuBarPanelWidth,
    MenuBarItemSpacing,
    MenuBarHMargin,
    MenuBarVMargin,
    MenuHMargin,
    MenuVMargin,
    MenuPanelWidth,
    MenuTearoffHeight,
    MenuScrollerHeight,
    ToolBarFrameWidth,
    ToolBarHandleExtent,
    ToolBarSeparatorExtent,
    ToolBarItemSpacing,
    ToolBarItemMargin,
    ToolBarExtensionExtent,
    ToolBarIconSize,
    TabBarIconSize,
    TabCloseIndicatorWidth,
    TabCloseIndicatorHeight,
    SmallIconSize,
    LargeIconSize,
    ButtonIconSize,
    IndicatorWidth,
    IndicatorHeight,
    ExclusiveIndicatorWidth,
    ExclusiveIndicatorHeight,
    CheckBoxLabelSpacing,
    RadioButtonLabelSpacing,
    SplitterWidth,
    ScrollBarExtent,
    ScrollBarSliderMin,
    SliderThickness,
    SliderLength,
    SliderControlThickness,
    SliderTickmarkOffset,
    ProgressBarChunkWidth,
    DockWidgetFrameWidth,
    DockWidgetTitleMargin,
    DockWidgetTitleBarButtonMargin,
    DockWidgetSeparatorExtent,
    DockWidgetHandleExtent,
    TitleBarHeight,
}

/// One dispatched call: the option, the widget and the group's specs.
pub(crate) struct Job<'a> {
    pub option: &'a StyleOption,
    pub widget: Option<WidgetInfo<'a>>,
    pub group: &'static str,
    pub spec: ElementSpec,
}

impl Job<'_> {
    pub fn rect(&self) -> Rect {
        self.option.rect
    }

    pub fn state(&self) -> State {
        self.option.state
    }

    pub fn direction(&self) -> LayoutDirection {
        self.option.direction
    }

    pub fn orientation(&self) -> Orientation {
        self.option.orientation()
    }

    /// Status part of element ids. Containers have no hover or press
    /// feedback.
    pub fn status(&self) -> &'static str {
        status_str(self.option.state, is_container(self.group))
    }
}

/// Groups drawn as containers of other widgets.
pub(crate) fn is_container(group: &str) -> bool {
    matches!(
        group,
        "Frame"
            | "GroupBox"
            | "Tooltip"
            | "Menu"
            | "ToolBar"
            | "StatusBar"
            | "TabWidget"
            | "DockWidget"
            | "Window"
            | "TitleBar"
            | "RubberBand"
    )
}

/// Map a rectangle from the canonical space of `bounds` back to widget
/// coordinates.
///
/// Inverse of the quarter turn applied to vertical widgets by
/// [crate::render::canonical_transform]; horizontal rectangles are returned
/// unchanged.
pub(crate) fn from_canonical(bounds: &Rect, r: &Rect, orientation: Orientation) -> Rect {
    if orientation.is_horizontal() {
        return *r;
    }
    Rect::new(
        2 * bounds.x + bounds.width - r.y - r.height,
        r.x,
        r.height,
        r.width,
    )
}

/// Capsule position of a header section or tab from its place in the bar.
pub(crate) fn section_capsule(position: SectionPosition) -> CapsulePosition {
    match position {
        SectionPosition::Beginning => CapsulePosition::Start,
        SectionPosition::Middle => CapsulePosition::Middle,
        SectionPosition::End => CapsulePosition::End,
        SectionPosition::OnlyOne => CapsulePosition::Both,
    }
}

/// Turn the painter so the vertical rectangle `r` can be drawn into as a
/// horizontal one at the origin; the returned rectangle is that target.
///
/// Clockwise turns put the start of the text at the top. Callers save and
/// restore the painter around it.
pub(crate) fn rotate_into(painter: &mut dyn Painter, r: &Rect, clockwise: bool) -> Rect {
    let (x, y) = (r.x as f64, r.y as f64);
    let (w, h) = (r.width as f64, r.height as f64);
    let t = if clockwise {
        Affine::translate((x + w, y)) * Affine::rotate(FRAC_PI_2)
    } else {
        Affine::translate((x, y + h)) * Affine::rotate(-FRAC_PI_2)
    };
    painter.concat_transform(t);
    Rect::new(0, 0, r.height, r.width)
}

/// State of one part of a complex control: hover and press feedback only
/// goes to the active part.
pub(crate) fn part_state(option: &StyleOption, part: SubControl) -> State {
    match option.active {
        Some(active) if active != part => {
            option.state - (State::SUNKEN | State::SELECTED | State::ON | State::MOUSE_OVER)
        }
        _ => option.state,
    }
}

/// Draws one role.
pub(crate) type Handler = fn(&ThemeContext, &mut dyn Painter, &Job<'_>);

/// Find the handler of `role` in a dispatch table.
pub(crate) fn lookup<R: Copy + PartialEq, H: Copy>(table: &[(R, H)], role: R) -> Option<H> {
    table.iter().find(|(r, _)| *r == role).map(|(_, h)| *h)
}

impl ThemeContext {
    pub(crate) fn job<'a>(
        &self,
        group: &'static str,
        option: &'a StyleOption,
        widget: Option<WidgetInfo<'a>>,
    ) -> Job<'a> {
        Job {
            option,
            widget,
            group,
            spec: self.theme().element_spec(group),
        }
    }

    /// Capsule position of a button-like widget in its layout.
    pub(crate) fn capsule(&self, option: &StyleOption, widget: Option<WidgetInfo<'_>>) -> Capsule {
        if !self.tweaks().button.use_capsule || option.state.contains(State::AUTO_RAISE) {
            return Capsule::NONE;
        }
        match widget {
            Some(WidgetInfo {
                widget,
                layout: Some(layout),
            }) => capsule_position(layout, widget),
            _ => Capsule::NONE,
        }
    }

    /// The group's frame with the widget's capsule position applied.
    ///
    /// Frames whose theme does not allow capsules are returned as is.
    pub(crate) fn capsule_frame(&self, job: &Job<'_>) -> FrameSpec {
        let mut frame = job.spec.frame.clone();
        if frame.has_capsule {
            self.capsule(job.option, job.widget).apply(&mut frame);
        }
        frame
    }

    /// Draw one element stretched into `rect`.
    pub(crate) fn paint_element(&self, painter: &mut dyn Painter, element: &str, rect: &Rect) {
        self.renderer().render_element(painter, element, rect, 0, 0, 0);
    }

    /// Draw `<frame.element>-<status>`.
    pub(crate) fn paint_frame(
        &self,
        painter: &mut dyn Painter,
        rect: &Rect,
        spec: &ElementSpec,
        frame: &FrameSpec,
        status: &str,
        direction: LayoutDirection,
        orientation: Orientation,
    ) {
        let element = format!("{}-{}", frame.element, status);
        self.renderer().render_frame(
            painter,
            spec.color.bg,
            rect,
            frame,
            &element,
            direction,
            orientation,
        );
    }

    /// Draw `<interior.element>-<status>` inside `frame`.
    pub(crate) fn paint_interior(
        &self,
        painter: &mut dyn Painter,
        rect: &Rect,
        spec: &ElementSpec,
        frame: &FrameSpec,
        status: &str,
        direction: LayoutDirection,
        orientation: Orientation,
    ) {
        let element = format!("{}-{}", spec.interior.element, status);
        self.renderer().render_interior(
            painter,
            spec.color.bg,
            rect,
            frame,
            &spec.interior,
            &element,
            direction,
            orientation,
        );
    }

    /// Frame then interior.
    pub(crate) fn paint_panel(
        &self,
        painter: &mut dyn Painter,
        rect: &Rect,
        spec: &ElementSpec,
        frame: &FrameSpec,
        status: &str,
        direction: LayoutDirection,
        orientation: Orientation,
    ) {
        self.paint_frame(painter, rect, spec, frame, status, direction, orientation);
        self.paint_interior(painter, rect, spec, frame, status, direction, orientation);
    }

    /// Default-button and focus frames drawn over a panel, when the theme
    /// has them.
    pub(crate) fn paint_overlays(
        &self,
        painter: &mut dyn Painter,
        rect: &Rect,
        frame: &FrameSpec,
        option: &StyleOption,
        orientation: Orientation,
    ) {
        if !option.state.is_enabled() {
            return;
        }
        let overlays = [
            (option.features.contains(Features::DEFAULT_BUTTON), "default"),
            (option.state.contains(State::HAS_FOCUS), "focused"),
        ];
        let renderer = self.renderer();
        for (wanted, overlay) in overlays {
            let element = format!("{}-{}", frame.element, overlay);
            if wanted && renderer.svg().element_exists(&format!("{}-top", element)) {
                renderer.render_frame(painter, None, rect, frame, &element, option.direction, orientation);
            }
        }
    }

    /// Draw `<indicator.element>-<name>-<status>` aligned inside `rect`.
    ///
    /// An empty `name` draws `<indicator.element>-<status>`.
    pub(crate) fn paint_indicator(
        &self,
        painter: &mut dyn Painter,
        rect: &Rect,
        spec: &ElementSpec,
        frame: &FrameSpec,
        name: &str,
        status: &str,
        alignment: Alignment,
        direction: LayoutDirection,
    ) -> Rect {
        let element = if name.is_empty() {
            format!("{}-{}", spec.indicator.element, status)
        } else {
            format!("{}-{}-{}", spec.indicator.element, name, status)
        };
        let renderer = self.renderer();
        let r = renderer.render_indicator(
            painter,
            rect,
            frame,
            &spec.indicator,
            &element,
            alignment,
            direction,
        );
        if let Some(fg) = spec.color.fg {
            renderer.colorize_indicator(painter, &r, fg);
        }
        r
    }

    /// Draw `text` and the option's icon in the label area of `rect`.
    pub(crate) fn paint_label(
        &self,
        painter: &mut dyn Painter,
        rect: &Rect,
        spec: &ElementSpec,
        frame: &FrameSpec,
        option: &StyleOption,
        text: &str,
        alignment: Alignment,
    ) {
        let color = label_color(option, spec);
        let mut content = LabelContent::text(text, alignment, color);
        if let Some(icon) = &option.icon {
            content = content.with_icon(icon, option.icon_size, option.mode);
        }
        self.renderer()
            .render_label(painter, rect, frame, &spec.label, &content, option.direction);
    }
}

/// Text color of a label: the palette foreground, else the host's color.
/// Disabled labels are drawn at half opacity.
pub(crate) fn label_color(option: &StyleOption, spec: &ElementSpec) -> Color {
    let color = spec.color.fg.unwrap_or(option.text_color);
    if option.state.is_enabled() {
        return color;
    }
    let c = color.to_rgba8();
    Color::from_rgba8(c.r, c.g, c.b, c.a / 2)
}
