// SPDX-License-Identifier: LGPL-3.0-only

//! Primitive elements: frames, panels and indicators.

use qsvgstyle_theme::groups::PrimitiveElement;
use qsvgstyle_theme::{ElementSpec, FrameSpec, SpecProvider};

use super::{lookup, Dispatch, Features, Handler, Job, OptionExtra, SortIndicator, StyleOption, WidgetInfo};
use super::{CheckType, ThemeContext};
use crate::geometry::Alignment;
use crate::layout::Orientation;
use crate::state::{check_mark_str, check_status_str, status_str, State};
use crate::vgi::Painter;

const PRIMITIVES: &[(PrimitiveElement, Handler)] = &[
    (PrimitiveElement::Frame, frame),
    (PrimitiveElement::FrameTabWidget, frame_and_interior),
    (PrimitiveElement::FrameFocusRect, focus_rect),
    (PrimitiveElement::FrameDefaultButton, default_button),
    (PrimitiveElement::FrameButtonBevel, button_frame),
    (PrimitiveElement::FrameButtonTool, button_frame),
    (PrimitiveElement::PanelButtonCommand, button_panel),
    (PrimitiveElement::PanelButtonBevel, button_panel),
    (PrimitiveElement::PanelButtonTool, tool_panel),
    (PrimitiveElement::FrameLineEdit, frame_only),
    (PrimitiveElement::PanelLineEdit, line_edit_panel),
    (PrimitiveElement::FrameGroupBox, frame_and_interior),
    (PrimitiveElement::FrameDockWidget, frame_only),
    (PrimitiveElement::FrameWindow, frame_only),
    (PrimitiveElement::FrameStatusBarItem, frame_only),
    (PrimitiveElement::FrameMenu, frame_only),
    (PrimitiveElement::FrameTabBarBase, frame_only),
    (PrimitiveElement::PanelMenuBar, frame_and_interior),
    (PrimitiveElement::PanelToolBar, toolbar_panel),
    (PrimitiveElement::PanelTipLabel, frame_and_interior),
    (PrimitiveElement::PanelStatusBar, frame_and_interior),
    (PrimitiveElement::PanelMenu, frame_and_interior),
    (PrimitiveElement::PanelScrollAreaCorner, interior_only),
    (PrimitiveElement::PanelItemViewItem, item_panel),
    (PrimitiveElement::PanelItemViewRow, item_row),
    (PrimitiveElement::IndicatorArrowUp, arrow_up),
    (PrimitiveElement::IndicatorArrowDown, arrow_down),
    (PrimitiveElement::IndicatorArrowLeft, arrow_left),
    (PrimitiveElement::IndicatorArrowRight, arrow_right),
    (PrimitiveElement::IndicatorColumnViewArrow, arrow_right),
    (PrimitiveElement::IndicatorButtonDropDown, drop_down),
    (PrimitiveElement::IndicatorSpinUp, arrow_up),
    (PrimitiveElement::IndicatorSpinDown, arrow_down),
    (PrimitiveElement::IndicatorSpinPlus, spin_plus),
    (PrimitiveElement::IndicatorSpinMinus, spin_minus),
    (PrimitiveElement::IndicatorHeaderArrow, header_arrow),
    (PrimitiveElement::IndicatorBranch, branch),
    (PrimitiveElement::IndicatorCheckBox, check),
    (PrimitiveElement::IndicatorItemViewItemCheck, check),
    (PrimitiveElement::IndicatorRadioButton, check),
    (PrimitiveElement::IndicatorMenuCheckMark, menu_check),
    (PrimitiveElement::IndicatorProgressChunk, interior_only),
    (PrimitiveElement::IndicatorToolBarHandle, toolbar_handle),
    (PrimitiveElement::IndicatorToolBarSeparator, toolbar_separator),
    (PrimitiveElement::IndicatorDockWidgetResizeHandle, dock_handle),
    (PrimitiveElement::IndicatorTabClose, tab_close),
];

impl ThemeContext {
    /// Draw a primitive element.
    pub fn draw_primitive(
        &self,
        element: PrimitiveElement,
        option: &StyleOption,
        painter: &mut dyn Painter,
        widget: Option<WidgetInfo<'_>>,
    ) -> Dispatch {
        let Some(group) = element.group() else {
            return Dispatch::Fallback;
        };
        let Some(handler) = lookup(PRIMITIVES, element) else {
            log::trace!("no handler for {:?}", element);
            return Dispatch::Fallback;
        };
        handler(self, painter, &self.job(group, option, widget));
        Dispatch::Done
    }
}

/// Generic frames come in a sunken and a raised variant.
fn frame_variant(job: &Job<'_>) -> ElementSpec {
    let mut spec = job.spec.clone();
    if job.group == "Frame" {
        let variant = if job.state().contains(State::RAISED) {
            "raised"
        } else {
            "sunken"
        };
        spec.frame.element = format!("{}-{}", spec.frame.element, variant);
        spec.interior.element = format!("{}-{}", spec.interior.element, variant);
    }
    spec
}

fn frame(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    let spec = frame_variant(job);
    let (r, status, dir, orn) = (job.rect(), job.status(), job.direction(), Orientation::Horizontal);
    ctx.paint_frame(painter, &r, &spec, &spec.frame, status, dir, orn);
    if job.state().intersects(State::SUNKEN | State::RAISED) {
        ctx.paint_interior(painter, &r, &spec, &spec.frame, status, dir, orn);
    }
}

fn frame_only(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    let spec = &job.spec;
    ctx.paint_frame(painter, &job.rect(), spec, &spec.frame, job.status(), job.direction(), Orientation::Horizontal);
}

fn interior_only(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    let spec = &job.spec;
    let orientation = job.option.range().map_or(Orientation::Horizontal, |r| r.orientation);
    ctx.paint_interior(painter, &job.rect(), spec, &spec.frame, job.status(), job.direction(), orientation);
}

fn frame_and_interior(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    let spec = frame_variant(job);
    ctx.paint_panel(painter, &job.rect(), &spec, &spec.frame, job.status(), job.direction(), Orientation::Horizontal);
}

/// Tool bar panels follow the bar's orientation.
fn toolbar_panel(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    let spec = &job.spec;
    ctx.paint_panel(painter, &job.rect(), spec, &spec.frame, job.status(), job.direction(), job.orientation());
}

fn focus_rect(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    let spec = frame_variant(job);
    ctx.paint_frame(painter, &job.rect(), &spec, &spec.frame, "focused", job.direction(), Orientation::Horizontal);
}

fn default_button(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    if !job.option.features.contains(Features::DEFAULT_BUTTON) || !job.state().is_enabled() {
        return;
    }
    let frame = ctx.capsule_frame(job);
    ctx.paint_frame(painter, &job.rect(), &job.spec, &frame, "default", job.direction(), Orientation::Horizontal);
}

fn button_frame(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    let mut frame = ctx.capsule_frame(job);
    frame.pressed = job.state().intersects(State::SUNKEN | State::ON);
    let r = job.rect();
    ctx.paint_frame(painter, &r, &job.spec, &frame, job.status(), job.direction(), Orientation::Horizontal);
    ctx.paint_overlays(painter, &r, &frame, job.option, Orientation::Horizontal);
}

fn button_panel(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    let frame = ctx.capsule_frame(job);
    ctx.paint_interior(painter, &job.rect(), &job.spec, &frame, job.status(), job.direction(), Orientation::Horizontal);
}

/// Auto-raised tool buttons only show a panel while hovered, pressed or on.
fn tool_panel(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    let state = job.state();
    if state.contains(State::AUTO_RAISE)
        && !(state.is_enabled() && state.intersects(State::SUNKEN | State::ON | State::MOUSE_OVER))
    {
        return;
    }
    let mut frame = ctx.capsule_frame(job);
    frame.pressed = state.intersects(State::SUNKEN | State::ON);
    let r = job.rect();
    ctx.paint_panel(painter, &r, &job.spec, &frame, job.status(), job.direction(), Orientation::Horizontal);
    ctx.paint_overlays(painter, &r, &frame, job.option, Orientation::Horizontal);
}

fn line_edit_panel(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    let spec = &job.spec;
    let r = job.rect();
    let has_frame = match job.option.extra {
        OptionExtra::Frame { line_width, .. } => line_width > 0,
        _ => true,
    };
    let no_frame = FrameSpec::default();
    let frame = if has_frame { &spec.frame } else { &no_frame };
    if has_frame {
        ctx.paint_frame(painter, &r, spec, frame, job.status(), job.direction(), Orientation::Horizontal);
    }
    ctx.paint_interior(painter, &r, spec, frame, job.status(), job.direction(), Orientation::Horizontal);
    if has_frame {
        ctx.paint_overlays(painter, &r, frame, job.option, Orientation::Horizontal);
    }
}

/// Item view cells are only highlighted when selected or hovered.
fn item_panel(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    if !job.state().intersects(State::SELECTED | State::MOUSE_OVER | State::SUNKEN) {
        return;
    }
    let frame = ctx.capsule_frame(job);
    ctx.paint_panel(painter, &job.rect(), &job.spec, &frame, job.status(), job.direction(), Orientation::Horizontal);
}

fn item_row(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    if !job.option.features.contains(Features::ALTERNATE) {
        return;
    }
    let spec = &job.spec;
    let element = format!("{}-alt-normal", spec.interior.element);
    ctx.renderer().render_interior(
        painter,
        spec.color.bg,
        &job.rect(),
        &FrameSpec::default(),
        &spec.interior,
        &element,
        job.direction(),
        Orientation::Horizontal,
    );
}

/// Draw `<indicator>-<name>-<status>` centered in the rect.
fn arrow(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>, name: &str) {
    let no_frame = FrameSpec::default();
    ctx.paint_indicator(painter, &job.rect(), &job.spec, &no_frame, name, job.status(), Alignment::CENTER, job.direction());
}

fn arrow_up(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    arrow(ctx, painter, job, "up");
}

fn arrow_down(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    arrow(ctx, painter, job, "down");
}

fn arrow_left(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    arrow(ctx, painter, job, "left");
}

fn arrow_right(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    arrow(ctx, painter, job, "right");
}

fn spin_plus(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    arrow(ctx, painter, job, "plus");
}

fn spin_minus(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    arrow(ctx, painter, job, "minus");
}

/// Drop-down arrows have their own size.
fn drop_down(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    let mut spec = job.spec.clone();
    spec.indicator.size = ctx.tweaks().dropdown.size;
    let no_frame = FrameSpec::default();
    ctx.paint_indicator(painter, &job.rect(), &spec, &no_frame, "dropdown", job.status(), Alignment::CENTER, job.direction());
}

fn header_arrow(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    let name = match job.option.extra {
        OptionExtra::Header { sort: SortIndicator::Up, .. } => "asc",
        OptionExtra::Header { sort: SortIndicator::Down, .. } => "desc",
        _ => return,
    };
    let no_frame = FrameSpec::default();
    ctx.paint_indicator(painter, &job.rect(), &job.spec, &no_frame, name, job.status(), Alignment::CENTER, job.direction());
}

/// Expand and collapse signs of tree views.
fn branch(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    let state = job.state();
    if !state.contains(State::CHILDREN) {
        return;
    }
    let name = if state.contains(State::OPEN) { "minus" } else { "plus" };
    let no_frame = FrameSpec::default();
    ctx.paint_indicator(painter, &job.rect(), &job.spec, &no_frame, name, job.status(), Alignment::CENTER, job.direction());
}

fn check(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    let state = job.state();
    let status = format!("{}{}", check_mark_str(state), check_status_str(state));
    let no_frame = FrameSpec::default();
    ctx.paint_indicator(painter, &job.rect(), &job.spec, &no_frame, "", &status, Alignment::CENTER, job.direction());
}

/// Check marks of menu items have no hover state of their own.
fn menu_check(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    let (kind, checked) = match job.option.extra {
        OptionExtra::MenuItem {
            check: CheckType::NotCheckable,
            ..
        } => return,
        OptionExtra::MenuItem {
            check: CheckType::Exclusive,
            checked,
            ..
        } => ("radio", checked),
        OptionExtra::MenuItem { checked, .. } => ("checkbox", checked),
        _ => ("checkbox", job.state().contains(State::ON)),
    };
    let state = job.state();
    let mark = if checked {
        "checked-"
    } else if kind == "checkbox" && state.contains(State::NO_CHANGE) {
        "tristate-"
    } else {
        ""
    };
    let status = if !state.is_enabled() {
        "disabled"
    } else if state.contains(State::SUNKEN) {
        "toggled"
    } else {
        "normal"
    };
    let mut spec = job.spec.clone();
    spec.indicator = ctx.theme().indicator_spec("MenuItem");
    let no_frame = FrameSpec::default();
    let status = format!("{}{}", mark, status);
    ctx.paint_indicator(painter, &job.rect(), &spec, &no_frame, kind, &status, Alignment::CENTER, job.direction());
}

/// Draw `<indicator>-<axis><kind>-<status>` stretched over the whole rect.
fn stretched(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>, axis: &str, kind: &str) {
    let element = format!("{}-{}{}-{}", job.spec.indicator.element, axis, kind, job.status());
    ctx.paint_element(painter, &element, &job.rect());
}

/// Horizontal tool bars have vertical handles and separators.
fn toolbar_axis(job: &Job<'_>) -> &'static str {
    if job.state().contains(State::HORIZONTAL) {
        "v"
    } else {
        "h"
    }
}

fn toolbar_handle(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    stretched(ctx, painter, job, toolbar_axis(job), "handle");
}

fn toolbar_separator(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    stretched(ctx, painter, job, toolbar_axis(job), "sep");
}

fn dock_handle(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    let axis = if job.state().contains(State::HORIZONTAL) { "h" } else { "v" };
    stretched(ctx, painter, job, axis, "handle");
}

fn tab_close(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    let no_frame = FrameSpec::default();
    ctx.paint_indicator(
        painter,
        &job.rect(),
        &job.spec,
        &no_frame,
        "tabclose",
        status_str(job.state(), false),
        Alignment::CENTER,
        job.direction(),
    );
}
