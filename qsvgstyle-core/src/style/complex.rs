// SPDX-License-Identifier: LGPL-3.0-only

//! Complex controls: drawing and hit geometry of controls made of parts.
//!
//! Range controls lay their parts out along a horizontal line first and map
//! the result onto the widget, so both orientations share one code path.

use qsvgstyle_theme::groups::{ComplexControl, ControlElement, PrimitiveElement};
use qsvgstyle_theme::tweaks::{ScrollBarVariant, SliderArea, SpinBoxVariant};
use qsvgstyle_theme::{CapsulePosition, ElementSpec, FrameCut, FrameSpec, SpecProvider};
use vello::kurbo::Affine;

use super::metrics::{frame_margins, BUTTON_WIDTH, GROUPBOX_TITLE_INDENT, MENU_BUTTON_WIDTH};
use super::{
    from_canonical, lookup, part_state, slider_position_from_value, ButtonSymbols, Dispatch, Features,
    Handler, Job, OptionExtra, RangeOption, StyleOption, SubControl, ThemeContext, WidgetInfo,
};
use crate::capsule::Capsule;
use crate::geometry::{aligned_rect, visual_rect, Alignment, Rect, Size};
use crate::interior::interior_rect;
use crate::layout::{LayoutDirection, Orientation};
use crate::size::{size_from_contents, TextIconMode};
use crate::state::{status_str, State};
use crate::vgi::Painter;

/// Sweep of a dial handle in degrees, and where the sweep starts.
const DIAL_SWEEP: i32 = 290;
const DIAL_START: f64 = -60.0;

const COMPLEX: &[(ComplexControl, Handler)] = &[
    (ComplexControl::SpinBox, spin_box),
    (ComplexControl::ComboBox, combo_box),
    (ComplexControl::ScrollBar, scroll_bar),
    (ComplexControl::Slider, slider),
    (ComplexControl::ToolButton, tool_button),
    (ComplexControl::TitleBar, title_bar),
    (ComplexControl::Dial, dial),
    (ComplexControl::GroupBox, group_box),
];

impl ThemeContext {
    /// Draw a complex control with all its parts.
    pub fn draw_complex_control(
        &self,
        control: ComplexControl,
        option: &StyleOption,
        painter: &mut dyn Painter,
        widget: Option<WidgetInfo<'_>>,
    ) -> Dispatch {
        let Some(group) = control.group() else {
            return Dispatch::Fallback;
        };
        let Some(handler) = lookup(COMPLEX, control) else {
            log::trace!("no handler for {:?}", control);
            return Dispatch::Fallback;
        };
        handler(self, painter, &self.job(group, option, widget));
        Dispatch::Done
    }

    /// Rectangle of one part of a complex control, in widget coordinates.
    ///
    /// `None` when the control is not themed or has no such part.
    pub fn sub_control_rect(
        &self,
        control: ComplexControl,
        part: SubControl,
        option: &StyleOption,
        widget: Option<WidgetInfo<'_>>,
    ) -> Option<Rect> {
        let group = control.group()?;
        let job = self.job(group, option, widget);
        match control {
            ComplexControl::SpinBox => spin_box_rect(&job, self.tweaks().spinbox.variant, part),
            ComplexControl::ComboBox => combo_box_rect(&job, part),
            ComplexControl::ScrollBar => scroll_bar_rect(self, &job, part),
            ComplexControl::Slider => slider_rect(self, &job, part),
            ComplexControl::ToolButton => tool_button_rect(self, &job, part),
            ComplexControl::TitleBar => match part {
                SubControl::TitleBarLabel => {
                    let m = job.spec.label.hmargin;
                    Some(job.rect().adjusted(m, 0, -m, 0))
                }
                _ => None,
            },
            ComplexControl::Dial => dial_rect(&job, part),
            ComplexControl::GroupBox => group_box_rect(self, &job, part),
            ComplexControl::MdiControls => None,
        }
    }
}

/// Range of a range control; controls without one behave as empty.
fn range_of(option: &StyleOption) -> RangeOption {
    option.range().copied().unwrap_or_else(|| RangeOption::new(0, 0, 0))
}

/// `r` laid out as a horizontal control.
fn canonical(r: &Rect, orientation: Orientation) -> Rect {
    match orientation {
        Orientation::Horizontal => *r,
        Orientation::Vertical => r.transposed(),
    }
}

/// Map a canonical part back onto the widget. Horizontal controls follow
/// the layout direction.
fn to_widget(bounds: &Rect, c: &Rect, orientation: Orientation, direction: LayoutDirection) -> Rect {
    match orientation {
        Orientation::Horizontal => visual_rect(direction, bounds, c),
        Orientation::Vertical => from_canonical(bounds, c, orientation),
    }
}

/// Direction handed to the renderer: vertical controls are never mirrored
/// along their length.
fn paint_direction(direction: LayoutDirection, orientation: Orientation) -> LayoutDirection {
    match orientation {
        Orientation::Horizontal => direction,
        Orientation::Vertical => LayoutDirection::Ltr,
    }
}

/// State of a button part that only reacts while it is the active part.
fn active_only(option: &StyleOption, part: SubControl) -> State {
    if option.active == Some(part) {
        option.state
    } else {
        option.state - (State::SUNKEN | State::SELECTED | State::MOUSE_OVER)
    }
}

/// `<element>-<suffix>` for both frame and interior.
fn suffixed(spec: &ElementSpec, suffix: &str) -> ElementSpec {
    let mut spec = spec.clone();
    spec.frame.element = format!("{}-{}", spec.frame.element, suffix);
    spec.interior.element = format!("{}-{}", spec.interior.element, suffix);
    spec
}

fn spin_box_rect(job: &Job<'_>, variant: SpinBoxVariant, part: SubControl) -> Option<Rect> {
    let r = job.rect();
    let inner = interior_rect(&r, &job.spec.frame, Orientation::Horizontal);
    let bw = BUTTON_WIDTH;
    let no_buttons = matches!(
        job.option.extra,
        OptionExtra::SpinBox {
            symbols: ButtonSymbols::NoButtons
        }
    );
    let from_right = |offset: i32| Rect::new(inner.right() - offset, inner.y, bw, inner.height);

    let rect = match (part, no_buttons) {
        (SubControl::SpinBoxFrame, _) => r,
        (SubControl::SpinBoxEditField, true) => inner,
        (SubControl::SpinBoxUp | SubControl::SpinBoxDown, true) => Rect::EMPTY,
        (SubControl::SpinBoxEditField, false) => match variant {
            SpinBoxVariant::SideBySide => inner.adjusted(0, 0, -2 * bw, 0),
            SpinBoxVariant::Opposite => inner.adjusted(bw, 0, -bw, 0),
            SpinBoxVariant::Stacked => inner.adjusted(0, 0, -bw, 0),
        },
        (SubControl::SpinBoxUp, false) => match variant {
            SpinBoxVariant::SideBySide | SpinBoxVariant::Opposite => from_right(bw),
            SpinBoxVariant::Stacked => Rect::new(inner.right() - bw, inner.y, bw, inner.height / 2),
        },
        (SubControl::SpinBoxDown, false) => match variant {
            SpinBoxVariant::SideBySide => from_right(2 * bw),
            SpinBoxVariant::Opposite => Rect::new(inner.x, inner.y, bw, inner.height),
            SpinBoxVariant::Stacked => {
                let half = inner.height / 2;
                Rect::new(inner.right() - bw, inner.y + half, bw, inner.height - half)
            }
        },
        _ => return None,
    };
    Some(visual_rect(job.direction(), &r, &rect))
}

fn spin_box(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    let spec = &job.spec;
    let r = job.rect();
    let dir = job.direction();
    let option = job.option;

    let panel_state = option.state - (State::SUNKEN | State::SELECTED);
    ctx.paint_panel(painter, &r, spec, &spec.frame, status_str(panel_state, false), dir, Orientation::Horizontal);
    ctx.paint_overlays(painter, &r, &spec.frame, option, Orientation::Horizontal);

    let symbols = match option.extra {
        OptionExtra::SpinBox { symbols } => symbols,
        _ => ButtonSymbols::UpDownArrows,
    };
    let (up, down) = match symbols {
        ButtonSymbols::NoButtons => return,
        ButtonSymbols::UpDownArrows => (PrimitiveElement::IndicatorSpinUp, PrimitiveElement::IndicatorSpinDown),
        ButtonSymbols::PlusMinus => (PrimitiveElement::IndicatorSpinPlus, PrimitiveElement::IndicatorSpinMinus),
    };
    let button = ctx.theme().element_spec("PushButton");
    let no_frame = FrameSpec::default();
    let variant = ctx.tweaks().spinbox.variant;
    for (part, indicator) in [(SubControl::SpinBoxUp, up), (SubControl::SpinBoxDown, down)] {
        let Some(rect) = spin_box_rect(job, variant, part).filter(|b| !b.is_empty()) else {
            continue;
        };
        let mut o = option.at(rect);
        o.state = active_only(option, part);
        ctx.paint_interior(painter, &rect, &button, &no_frame, status_str(o.state, false), dir, Orientation::Horizontal);
        ctx.draw_primitive(indicator, &o, painter, job.widget);
    }
}

fn combo_box_rect(job: &Job<'_>, part: SubControl) -> Option<Rect> {
    let r = job.rect();
    let inner = interior_rect(&r, &job.spec.frame, Orientation::Horizontal);
    let rect = match part {
        SubControl::ComboBoxFrame | SubControl::ComboBoxListBoxPopup => r,
        SubControl::ComboBoxEditField => inner.adjusted(0, 0, -BUTTON_WIDTH, 0),
        SubControl::ComboBoxArrow => Rect::new(inner.right() - BUTTON_WIDTH, inner.y, BUTTON_WIDTH, inner.height),
        _ => return None,
    };
    Some(visual_rect(job.direction(), &r, &rect))
}

/// Editable combo boxes look like line edits with an arrow button.
fn combo_box(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    let option = job.option;
    let dir = job.direction();
    let editable = option.features.contains(Features::EDITABLE);
    let no_frame = FrameSpec::default();

    let frame = if editable {
        PrimitiveElement::FrameLineEdit
    } else {
        PrimitiveElement::FrameButtonBevel
    };
    ctx.draw_primitive(frame, option, painter, job.widget);

    let button = ctx.theme().element_spec("PushButton");
    if let Some(edit) = combo_box_rect(job, SubControl::ComboBoxEditField) {
        let (spec, state) = if editable {
            (ctx.theme().element_spec("LineEdit"), option.state - State::SUNKEN)
        } else {
            (button.clone(), part_state(option, SubControl::ComboBoxEditField))
        };
        ctx.paint_interior(painter, &edit, &spec, &no_frame, status_str(state, false), dir, Orientation::Horizontal);
    }
    if let Some(arrow) = combo_box_rect(job, SubControl::ComboBoxArrow) {
        let mut o = option.at(arrow);
        o.state = part_state(option, SubControl::ComboBoxArrow);
        if editable {
            o.state -= State::SUNKEN;
        }
        ctx.paint_interior(painter, &arrow, &button, &no_frame, status_str(o.state, false), dir, Orientation::Horizontal);
        ctx.draw_primitive(PrimitiveElement::IndicatorButtonDropDown, &o, painter, job.widget);
    }
}

/// Parts of a scroll bar in canonical left-to-right coordinates.
struct ScrollBarParts {
    groove: Rect,
    sub_line: Rect,
    add_line: Rect,
    sub_page: Rect,
    add_page: Rect,
    slider: Rect,
}

fn scroll_bar_parts(ctx: &ThemeContext, job: &Job<'_>, range: &RangeOption) -> ScrollBarParts {
    let t = &ctx.tweaks().scrollbar;
    let c = canonical(&job.rect(), range.orientation);
    let extent = t.thickness;

    let (groove, sub_line, add_line) = match t.variant {
        ScrollBarVariant::Buttons => (
            c.adjusted(extent, 0, -extent, 0),
            Rect::new(c.x, c.y, extent, c.height),
            Rect::new(c.right() - extent, c.y, extent, c.height),
        ),
        ScrollBarVariant::NoButtons => (c, Rect::EMPTY, Rect::EMPTY),
    };
    let area = match t.slider_area {
        SliderArea::InsideGroove => interior_rect(&groove, &job.spec.frame, Orientation::Horizontal),
        SliderArea::OverlapsGroove => groove,
    };

    let span = area.width.max(0);
    let length = if range.maximum <= range.minimum {
        span
    } else {
        let range_len = range.maximum as i64 - range.minimum as i64;
        let page = range.page_step.max(0) as i64;
        let length = (page * span as i64 / (range_len + page)) as i32;
        if length < t.slider_min_size || range_len > (i32::MAX / 2) as i64 {
            t.slider_min_size
        } else {
            length
        }
    };
    let length = length.min(span);
    let start = slider_position_from_value(
        range.minimum,
        range.maximum,
        range.value,
        span - length,
        range.upside_down,
    );
    let slider = Rect::new(area.x + start, area.y, length, area.height);

    ScrollBarParts {
        groove,
        sub_line,
        add_line,
        sub_page: Rect::new(area.x, area.y, start, area.height),
        add_page: Rect::new(slider.right(), area.y, area.right() - slider.right(), area.height),
        slider,
    }
}

fn scroll_bar_rect(ctx: &ThemeContext, job: &Job<'_>, part: SubControl) -> Option<Rect> {
    let range = range_of(job.option);
    let parts = scroll_bar_parts(ctx, job, &range);
    let c = match part {
        SubControl::ScrollBarGroove => parts.groove,
        SubControl::ScrollBarSubLine => parts.sub_line,
        SubControl::ScrollBarAddLine => parts.add_line,
        SubControl::ScrollBarSubPage => parts.sub_page,
        SubControl::ScrollBarAddPage => parts.add_page,
        SubControl::ScrollBarSlider => parts.slider,
        _ => return None,
    };
    Some(to_widget(&job.rect(), &c, range.orientation, job.direction()))
}

fn scroll_bar(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    let range = range_of(job.option);
    let orientation = range.orientation;
    let parts = scroll_bar_parts(ctx, job, &range);
    let r = job.rect();
    let dir = job.direction();
    let at = |c: &Rect| to_widget(&r, c, orientation, dir);

    let spec = &job.spec;
    let groove_state = job.state() - (State::SUNKEN | State::SELECTED | State::ON | State::MOUSE_OVER);
    let status = status_str(groove_state, false);
    ctx.paint_panel(painter, &at(&parts.groove), spec, &spec.frame, status, paint_direction(dir, orientation), orientation);

    let buttons = [
        (parts.sub_line, ControlElement::ScrollBarSubLine),
        (parts.add_line, ControlElement::ScrollBarAddLine),
        (parts.slider, ControlElement::ScrollBarSlider),
    ];
    for (c, element) in buttons {
        if !c.is_empty() {
            ctx.draw_control(element, &job.option.at(at(&c)), painter, job.widget);
        }
    }
}

/// Groove and handle of a slider in canonical left-to-right coordinates.
fn slider_parts(ctx: &ThemeContext, c: &Rect, range: &RangeOption) -> (Rect, Rect) {
    let t = &ctx.tweaks().slider;
    let cs = t.cursor_size;
    let groove = aligned_rect(
        LayoutDirection::Ltr,
        Alignment::CENTER,
        Size::new(c.width - cs, t.thickness),
        c,
    );
    let pos = slider_position_from_value(
        range.minimum,
        range.maximum,
        range.value,
        groove.width,
        range.upside_down,
    );
    let handle = Rect::new(groove.x + pos - cs / 2, c.y + (c.height - cs) / 2, cs, cs);
    (groove, handle)
}

fn slider_rect(ctx: &ThemeContext, job: &Job<'_>, part: SubControl) -> Option<Rect> {
    let range = range_of(job.option);
    let r = job.rect();
    let (groove, handle) = slider_parts(ctx, &canonical(&r, range.orientation), &range);
    let c = match part {
        SubControl::SliderGroove => groove,
        SubControl::SliderHandle => handle,
        SubControl::SliderTickmarks => return Some(r),
        _ => return None,
    };
    Some(to_widget(&r, &c, range.orientation, job.direction()))
}

/// The groove is split at the handle into an elapsed and an empty part,
/// each closing only its outer end.
fn slider(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    let range = range_of(job.option);
    let orientation = range.orientation;
    let r = job.rect();
    let dir = job.direction();
    let paint_dir = paint_direction(dir, orientation);
    let at = |c: &Rect| to_widget(&r, c, orientation, dir);
    let spec = &job.spec;
    let (groove, handle) = slider_parts(ctx, &canonical(&r, orientation), &range);

    let status = status_str(job.state() - State::SUNKEN, false);
    let cut = (handle.x + handle.width / 2).clamp(groove.x, groove.right());
    let before = Rect::new(groove.x, groove.y, cut - groove.x, groove.height);
    let after = Rect::new(cut, groove.y, groove.right() - cut, groove.height);
    let (full, empty, full_at, empty_at) = if range.upside_down {
        (after, before, CapsulePosition::End, CapsulePosition::Start)
    } else {
        (before, after, CapsulePosition::Start, CapsulePosition::End)
    };

    let elapsed = suffixed(spec, "elapsed");
    let mut empty_frame = spec.frame.clone();
    Capsule::at(empty_at, CapsulePosition::Both).apply(&mut empty_frame);
    let mut full_frame = elapsed.frame.clone();
    Capsule::at(full_at, CapsulePosition::Both).apply(&mut full_frame);
    ctx.paint_panel(painter, &at(&empty), spec, &empty_frame, status, paint_dir, orientation);
    ctx.paint_panel(painter, &at(&full), &elapsed, &full_frame, status, paint_dir, orientation);

    if range.ticks {
        slider_ticks(ctx, painter, job, &range, &groove, status);
    }

    let mut cursor = spec.clone();
    cursor.interior.element = if range.ticks {
        format!("{}-cursor", spec.indicator.element)
    } else {
        format!("{}-cursor-tickless", spec.indicator.element)
    };
    let no_frame = FrameSpec::default();
    let handle_status = status_str(part_state(job.option, SubControl::SliderHandle), false);
    let handle = at(&handle);
    ctx.paint_interior(painter, &handle, &cursor, &no_frame, handle_status, paint_dir, orientation);
    if job.state().is_enabled() && job.state().contains(State::HAS_FOCUS) {
        ctx.paint_interior(painter, &handle, &cursor, &no_frame, "focused", paint_dir, orientation);
    }
}

/// Tick marks on both sides of the groove, one per page step. The step is
/// doubled until ticks are at least 3px apart.
fn slider_ticks(
    ctx: &ThemeContext,
    painter: &mut dyn Painter,
    job: &Job<'_>,
    range: &RangeOption,
    groove: &Rect,
    status: &str,
) {
    let range_len = range.maximum as i64 - range.minimum as i64;
    if range_len <= 0 || groove.width <= 0 {
        return;
    }
    let offset = ctx.tweaks().slider.ticks_offset;
    let mut interval = range.page_step.max(1) as i64;
    while interval * (groove.width as i64) < 3 * range_len {
        interval *= 2;
    }
    let axis = if range.orientation.is_horizontal() { "h" } else { "v" };
    let element = format!("{}-{}tick-{}", job.spec.indicator.element, axis, status);
    let r = job.rect();

    let mut value = range.minimum as i64;
    while value <= range.maximum as i64 {
        let pos = slider_position_from_value(
            range.minimum,
            range.maximum,
            value as i32,
            groove.width,
            range.upside_down,
        );
        let x = groove.x + pos;
        for tick in [
            Rect::new(x, groove.y - offset - 3, 1, 3),
            Rect::new(x, groove.bottom() + offset, 1, 3),
        ] {
            let tick = to_widget(&r, &tick, range.orientation, job.direction());
            ctx.paint_element(painter, &element, &tick);
        }
        value += interval;
    }
}

fn tool_button_rect(ctx: &ThemeContext, job: &Job<'_>, part: SubControl) -> Option<Rect> {
    let r = job.rect();
    let inner = interior_rect(&r, &ctx.capsule_frame(job), Orientation::Horizontal);
    let features = job.option.features;
    let ds = job.spec.indicator.size;
    let tispace = job.spec.label.tispace;

    let rect = match part {
        SubControl::ToolButton if features.contains(Features::MENU) => inner.adjusted(0, 0, -MENU_BUTTON_WIDTH, 0),
        SubControl::ToolButton if features.contains(Features::HAS_MENU) => inner.adjusted(0, 0, -(ds + tispace), 0),
        SubControl::ToolButton => inner,
        SubControl::ToolButtonMenu if features.contains(Features::MENU) => Rect::new(
            inner.right() - MENU_BUTTON_WIDTH,
            inner.y,
            MENU_BUTTON_WIDTH,
            inner.height,
        ),
        SubControl::ToolButtonMenu if features.contains(Features::HAS_MENU) => {
            Rect::new(inner.right() - tispace - ds, inner.bottom() - ds - 2, ds, ds)
        }
        SubControl::ToolButtonMenu => Rect::EMPTY,
        _ => return None,
    };
    Some(visual_rect(job.direction(), &r, &rect))
}

/// Tool buttons with a separate menu button draw two panels.
fn tool_button(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    let option = job.option;
    let r = job.rect();
    let fm = frame_margins(&ctx.capsule_frame(job));
    let button = tool_button_rect(ctx, job, SubControl::ToolButton).unwrap_or(r);
    let menu = tool_button_rect(ctx, job, SubControl::ToolButtonMenu).unwrap_or(Rect::EMPTY);
    let mut menu_option = option.at(menu);
    menu_option.state = part_state(option, SubControl::ToolButtonMenu);

    if option.features.contains(Features::MENU) {
        let mut b = option.clone();
        b.state = part_state(option, SubControl::ToolButton);
        ctx.draw_primitive(PrimitiveElement::PanelButtonTool, &b, painter, job.widget);
        let drop = menu_option.at(menu.margins_added(fm));
        ctx.draw_primitive(PrimitiveElement::PanelButtonTool, &drop, painter, None);
    } else {
        ctx.draw_primitive(PrimitiveElement::PanelButtonTool, option, painter, job.widget);
    }

    ctx.draw_control(ControlElement::ToolButtonLabel, &option.at(button.margins_added(fm)), painter, job.widget);

    if option.features.contains(Features::MENU) {
        ctx.draw_primitive(PrimitiveElement::IndicatorButtonDropDown, &menu_option, painter, job.widget);
    } else if option.features.contains(Features::HAS_MENU) {
        ctx.draw_primitive(PrimitiveElement::IndicatorArrowDown, &menu_option, painter, job.widget);
    }
}

/// Windows have no hover feedback; active title bars look toggled.
fn title_bar(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    let spec = &job.spec;
    let state = job.state();
    let r = job.rect();
    let mut frame = spec.frame.clone();
    frame.bottom = 0;
    let status = match (state.is_enabled(), state.contains(State::ACTIVE)) {
        (false, _) => "disabled",
        (true, true) => "toggled",
        (true, false) => "normal",
    };
    ctx.paint_panel(painter, &r, spec, &frame, status, job.direction(), Orientation::Horizontal);

    let m = spec.label.hmargin;
    let label = r.adjusted(m, 0, -m, 0);
    let no_frame = FrameSpec::default();
    ctx.paint_label(painter, &label, spec, &no_frame, job.option, &job.option.text, Alignment::CENTER);
}

/// Angle of the dial handle in degrees, clockwise from 9 o'clock.
fn dial_angle(range: &RangeOption, direction: LayoutDirection) -> f64 {
    let pos = slider_position_from_value(
        range.minimum,
        range.maximum,
        range.value,
        DIAL_SWEEP,
        range.upside_down,
    );
    let angle = DIAL_START + pos as f64;
    if direction.is_rtl() {
        180.0 - angle
    } else {
        angle
    }
}

fn dial_groove(r: &Rect) -> Rect {
    let side = r.width.min(r.height);
    aligned_rect(LayoutDirection::Ltr, Alignment::CENTER, Size::new(side, side), r)
}

fn dial_rect(job: &Job<'_>, part: SubControl) -> Option<Rect> {
    let groove = dial_groove(&job.rect());
    match part {
        SubControl::DialGroove => Some(groove),
        SubControl::DialHandle => {
            let side = groove.width;
            let s = (side / 5).max(4);
            let radius = (side - s) as f64 / 2.0;
            let a = dial_angle(&range_of(job.option), job.direction()).to_radians();
            let cx = groove.x as f64 + side as f64 / 2.0 - a.cos() * radius;
            let cy = groove.y as f64 + side as f64 / 2.0 - a.sin() * radius;
            let half = s as f64 / 2.0;
            Some(Rect::new((cx - half).round() as i32, (cy - half).round() as i32, s, s))
        }
        _ => None,
    }
}

/// The handle element covers the whole groove and is turned around its
/// center.
fn dial(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    let spec = &job.spec;
    let groove = dial_groove(&job.rect());
    let status = status_str(job.state() - State::SUNKEN, false);
    ctx.paint_interior(painter, &groove, spec, &spec.frame, status, LayoutDirection::Ltr, Orientation::Horizontal);

    let handle_spec = {
        let mut s = spec.clone();
        s.interior.element = format!("{}-handle", spec.interior.element);
        s
    };
    let handle_status = status_str(part_state(job.option, SubControl::DialHandle), false);
    let angle = dial_angle(&range_of(job.option), job.direction());
    let (w, h) = (groove.width, groove.height);
    let center = (
        groove.x as f64 + w as f64 / 2.0,
        groove.y as f64 + h as f64 / 2.0,
    );
    let local = Rect::new(-w / 2, -h / 2, w, h);

    painter.save();
    painter.concat_transform(Affine::translate(center) * Affine::rotate(angle.to_radians()));
    ctx.paint_interior(
        painter,
        &local,
        &handle_spec,
        &FrameSpec::default(),
        handle_status,
        LayoutDirection::Ltr,
        Orientation::Horizontal,
    );
    painter.restore();
}

/// Title, check box, frame and contents of a group box, left to right.
struct GroupBoxParts {
    title: Rect,
    check: Rect,
    frame: Rect,
    contents: Rect,
}

fn group_box_parts(ctx: &ThemeContext, job: &Job<'_>) -> GroupBoxParts {
    let spec = &job.spec;
    let option = job.option;
    let r = job.rect();
    let fm = frame_margins(&spec.frame);
    let ds = spec.indicator.size;
    let checkable = option.features.contains(Features::CHECKABLE);

    let title_size = if option.text.is_empty() && !checkable {
        Size::default()
    } else {
        let mut s = size_from_contents(
            ctx.metrics(),
            &spec.frame,
            &spec.label,
            &option.text,
            option.shown_icon_size(),
            TextIconMode::TextBesideIcon,
        );
        if checkable {
            s.width += ds + ctx.tweaks().radiocheckbox.label_tispace;
            s = s.expanded_to(Size::new(0, fm.vertical() + ds));
        }
        s
    };
    let indent = GROUPBOX_TITLE_INDENT;
    let title = if title_size.is_empty() {
        Rect::EMPTY
    } else {
        aligned_rect(
            LayoutDirection::Ltr,
            option.alignment & Alignment::HORIZONTAL_MASK,
            title_size,
            &r.adjusted(indent, 0, -indent, 0),
        )
    };
    let check = if checkable {
        let hm = spec.label.hmargin;
        let area = title.adjusted(fm.left + hm, fm.top, -fm.right - hm, -fm.bottom);
        aligned_rect(LayoutDirection::Ltr, Alignment::LEFT | Alignment::VCENTER, Size::new(ds, ds), &area)
    } else {
        Rect::EMPTY
    };
    let frame = r.adjusted(0, title_size.height, 0, 0);
    GroupBoxParts {
        title,
        check,
        frame,
        contents: interior_rect(&frame, &spec.frame, Orientation::Horizontal),
    }
}

fn group_box_rect(ctx: &ThemeContext, job: &Job<'_>, part: SubControl) -> Option<Rect> {
    let parts = group_box_parts(ctx, job);
    let rect = match part {
        SubControl::GroupBoxLabel => parts.title,
        SubControl::GroupBoxCheckBox => parts.check,
        SubControl::GroupBoxFrame => parts.frame,
        SubControl::GroupBoxContents => parts.contents,
        _ => return None,
    };
    Some(visual_rect(job.direction(), &job.rect(), &rect))
}

/// The frame's top edge is cut where the title box joins it. Unchecked
/// checkable group boxes look disabled.
fn group_box(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    let spec = &job.spec;
    let option = job.option;
    let r = job.rect();
    let dir = job.direction();
    let parts = group_box_parts(ctx, job);
    let fm = frame_margins(&spec.frame);
    let checkable = option.features.contains(Features::CHECKABLE);

    let mut state = option.state - State::ON;
    if checkable && !option.state.contains(State::ON) {
        state -= State::ENABLED;
    }
    let status = status_str(state, true);

    if !option.features.contains(Features::FLAT) {
        let mut frame = spec.frame.clone();
        if !parts.title.is_empty() {
            frame.cut = Some(FrameCut {
                from: parts.title.x + fm.left,
                to: parts.title.right() - fm.right - 1,
            });
        }
        ctx.paint_panel(painter, &parts.frame, spec, &frame, status, dir, Orientation::Horizontal);
    }
    if parts.title.is_empty() {
        return;
    }

    let title = visual_rect(dir, &r, &parts.title);
    let mut title_frame = spec.frame.clone();
    Capsule::at(CapsulePosition::Both, CapsulePosition::Start).apply(&mut title_frame);
    let mut title_option = option.at(title);
    title_option.state = state;
    ctx.paint_panel(painter, &title, spec, &title_frame, status, dir, Orientation::Horizontal);
    ctx.paint_overlays(painter, &title, &title_frame, &title_option, Orientation::Horizontal);

    let label = if checkable {
        let skip = spec.indicator.size + ctx.tweaks().radiocheckbox.label_tispace;
        visual_rect(dir, &r, &parts.title.adjusted(skip, 0, 0, 0))
    } else {
        title
    };
    ctx.paint_label(painter, &label, spec, &title_frame, &title_option, &option.text, Alignment::CENTER);

    if checkable {
        let check = option.at(visual_rect(dir, &r, &parts.check));
        ctx.draw_primitive(PrimitiveElement::IndicatorCheckBox, &check, painter, job.widget);
    }
}
