// SPDX-License-Identifier: LGPL-3.0-only

//! Control elements: whole controls and their labelled parts.

use qsvgstyle_theme::groups::{ControlElement, PrimitiveElement, SubElement};
use qsvgstyle_theme::tweaks::{ProgressBarVariant, TabVariant};
use qsvgstyle_theme::{CapsulePosition, ElementSpec, FrameSpec, SpecProvider};

use super::metrics::{frame_margins, split_shortcut};
use super::{
    from_canonical, lookup, part_state, rotate_into, section_capsule, slider_position_from_value,
    ArrowType, CheckType, Dispatch, Features, FrameShape, Handler, Job, MenuItemKind, OptionExtra,
    SectionPosition, SelectedPosition, SortIndicator, StyleOption, SubControl, TabShape, ThemeContext,
    WidgetInfo,
};
use crate::animation::busy_pieces;
use crate::capsule::{capsule_position, Capsule};
use crate::geometry::{aligned_rect, visual_rect, Alignment, Rect, Size};
use crate::interior::interior_rect;
use crate::layout::{LayoutDirection, Orientation};
use crate::state::{status_str, State};
use crate::vgi::Painter;

/// Height difference between the selected tab and the others.
const TAB_RAISE: i32 = 5;

const CONTROLS: &[(ControlElement, Handler)] = &[
    (ControlElement::PushButton, push_button),
    (ControlElement::PushButtonBevel, push_button_bevel),
    (ControlElement::PushButtonLabel, push_button_label),
    (ControlElement::CheckBox, check_box),
    (ControlElement::RadioButton, check_box),
    (ControlElement::CheckBoxLabel, check_label),
    (ControlElement::RadioButtonLabel, check_label),
    (ControlElement::TabBarTab, tab),
    (ControlElement::TabBarTabShape, tab_shape),
    (ControlElement::TabBarTabLabel, tab_label),
    (ControlElement::ProgressBar, progress_bar),
    (ControlElement::ProgressBarGroove, progress_groove),
    (ControlElement::ProgressBarContents, progress_contents),
    (ControlElement::ProgressBarLabel, progress_label),
    (ControlElement::MenuItem, menu_item),
    (ControlElement::MenuTearoff, menu_tearoff),
    (ControlElement::MenuScroller, menu_scroller),
    (ControlElement::MenuEmptyArea, nothing),
    (ControlElement::MenuBarItem, menu_bar_item),
    (ControlElement::MenuBarEmptyArea, menu_bar_empty_area),
    (ControlElement::ToolButtonLabel, tool_button_label),
    (ControlElement::Header, header),
    (ControlElement::HeaderSection, header_section),
    (ControlElement::HeaderEmptyArea, header_section),
    (ControlElement::HeaderLabel, header_label),
    (ControlElement::ToolBoxTab, tool_box_tab),
    (ControlElement::ToolBoxTabShape, panel),
    (ControlElement::ToolBoxTabLabel, tool_box_label),
    (ControlElement::SizeGrip, size_grip),
    (ControlElement::Splitter, splitter),
    (ControlElement::RubberBand, rubber_band),
    (ControlElement::DockWidgetTitle, dock_title),
    (ControlElement::ScrollBarAddLine, scroll_add_line),
    (ControlElement::ScrollBarSubLine, scroll_sub_line),
    (ControlElement::ScrollBarAddPage, scroll_page),
    (ControlElement::ScrollBarSubPage, scroll_page),
    (ControlElement::ScrollBarSlider, scroll_slider),
    (ControlElement::FocusFrame, nothing),
    (ControlElement::ComboBoxLabel, combo_label),
    (ControlElement::ToolBar, toolbar),
    (ControlElement::ItemViewItem, item_view_item),
    (ControlElement::ShapedFrame, shaped_frame),
];

impl ThemeContext {
    /// Draw a control element.
    pub fn draw_control(
        &self,
        element: ControlElement,
        option: &StyleOption,
        painter: &mut dyn Painter,
        widget: Option<WidgetInfo<'_>>,
    ) -> Dispatch {
        let Some(group) = element.group() else {
            return Dispatch::Fallback;
        };
        let Some(handler) = lookup(CONTROLS, element) else {
            log::trace!("no handler for {:?}", element);
            return Dispatch::Fallback;
        };
        handler(self, painter, &self.job(group, option, widget));
        Dispatch::Done
    }
}

fn nothing(_: &ThemeContext, _: &mut dyn Painter, _: &Job<'_>) {}

fn panel(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    let spec = &job.spec;
    ctx.paint_panel(painter, &job.rect(), spec, &spec.frame, job.status(), job.direction(), Orientation::Horizontal);
}

fn push_button(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    push_button_bevel(ctx, painter, job);
    push_button_label(ctx, painter, job);
}

/// Flat buttons only get a bevel while hovered, pressed or on.
fn push_button_bevel(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    let state = job.state();
    let raised = !job.option.features.contains(Features::FLAT)
        || (state.is_enabled() && state.intersects(State::SUNKEN | State::ON | State::MOUSE_OVER));
    let mut frame = ctx.capsule_frame(job);
    let r = job.rect();
    if raised {
        frame.pressed = state.intersects(State::SUNKEN | State::ON);
        ctx.paint_panel(painter, &r, &job.spec, &frame, job.status(), job.direction(), Orientation::Horizontal);
    }
    ctx.paint_overlays(painter, &r, &frame, job.option, Orientation::Horizontal);
}

/// Centered label; menu buttons keep room for a down arrow on the trailing side.
fn push_button_label(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    let spec = &job.spec;
    let frame = ctx.capsule_frame(job);
    let r = job.rect();
    let dir = job.direction();
    let text = job.option.text.as_str();

    if !job.option.features.contains(Features::HAS_MENU) {
        ctx.paint_label(painter, &r, spec, &frame, job.option, text, Alignment::CENTER);
        return;
    }
    let ds = spec.indicator.size;
    let label = visual_rect(dir, &r, &r.adjusted(0, 0, -ds - spec.label.tispace, 0));
    ctx.paint_label(painter, &label, spec, &frame, job.option, text, Alignment::CENTER);

    let fm = frame_margins(&frame);
    let arrow = Rect::new(r.right() - ds - fm.right - spec.label.hmargin, r.y, ds, r.height);
    let arrow = visual_rect(dir, &r, &arrow);
    ctx.draw_primitive(PrimitiveElement::IndicatorArrowDown, &job.option.at(arrow), painter, job.widget);
}

fn check_box(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    let (indicator, contents, primitive) = if job.group == "RadioButton" {
        (
            SubElement::RadioButtonIndicator,
            SubElement::RadioButtonContents,
            PrimitiveElement::IndicatorRadioButton,
        )
    } else {
        (
            SubElement::CheckBoxIndicator,
            SubElement::CheckBoxContents,
            PrimitiveElement::IndicatorCheckBox,
        )
    };
    if let Some(r) = ctx.sub_element_rect(indicator, job.option, job.widget) {
        ctx.draw_primitive(primitive, &job.option.at(r), painter, job.widget);
    }
    if let Some(r) = ctx.sub_element_rect(contents, job.option, job.widget) {
        check_label_at(ctx, painter, job, &r);
    }
}

fn check_label(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    check_label_at(ctx, painter, job, &job.rect());
}

/// Hovered labels get the interior as a highlight.
fn check_label_at(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>, r: &Rect) {
    let spec = &job.spec;
    if job.state().contains(State::MOUSE_OVER) {
        ctx.paint_interior(painter, r, spec, &spec.frame, job.status(), job.direction(), Orientation::Horizontal);
    }
    let alignment = Alignment::LEFT | Alignment::VCENTER;
    ctx.paint_label(painter, r, spec, &spec.frame, job.option, &job.option.text, alignment);
}

#[derive(Debug, Clone, Copy)]
struct TabInfo {
    position: SectionPosition,
    shape: TabShape,
    selected_position: SelectedPosition,
}

fn tab_info(option: &StyleOption) -> TabInfo {
    match option.extra {
        OptionExtra::Tab {
            position,
            shape,
            selected,
        } => TabInfo {
            position,
            shape,
            selected_position: selected,
        },
        _ => TabInfo {
            position: SectionPosition::OnlyOne,
            shape: TabShape::North,
            selected_position: SelectedPosition::NotAdjacent,
        },
    }
}

/// Pressed tabs are shown as selected.
fn tab_state(state: State) -> State {
    if state.contains(State::SUNKEN) {
        (state - State::SUNKEN) | State::ON
    } else {
        state
    }
}

fn is_selected_tab(state: State) -> bool {
    state.intersects(State::SELECTED | State::ON)
}

fn tab_orientation(shape: TabShape) -> Orientation {
    match shape {
        TabShape::North | TabShape::South => Orientation::Horizontal,
        TabShape::West | TabShape::East => Orientation::Vertical,
    }
}

/// Unselected tabs step back from the pane when tabs are drawn apart.
fn tab_rect(ctx: &ThemeContext, r: &Rect, state: State, shape: TabShape) -> Rect {
    let raise = match ctx.tweaks().tab.variant {
        TabVariant::Individual | TabVariant::GroupNonSelected => TAB_RAISE,
        TabVariant::GroupAll => 0,
    };
    if is_selected_tab(state) || raise == 0 {
        return *r;
    }
    match shape {
        TabShape::North => r.adjusted(0, raise, 0, 0),
        TabShape::South => r.adjusted(0, 0, 0, -raise),
        TabShape::West => r.adjusted(raise, 0, 0, 0),
        TabShape::East => r.adjusted(0, 0, -raise, 0),
    }
}

/// Capsule of a tab along its bar and away from the pane.
fn tab_capsule(variant: TabVariant, info: TabInfo, state: State, direction: LayoutDirection) -> Capsule {
    use CapsulePosition::{Both, End, Middle, Start};
    use SectionPosition::{Beginning, OnlyOne};

    let along = match variant {
        TabVariant::Individual => Both,
        TabVariant::GroupAll => section_capsule(info.position),
        TabVariant::GroupNonSelected if is_selected_tab(state) => Both,
        TabVariant::GroupNonSelected => match (info.position, info.selected_position) {
            (OnlyOne, _) => Both,
            (Beginning, SelectedPosition::NextIsSelected) => Both,
            (Beginning, _) => Start,
            (SectionPosition::End, SelectedPosition::PreviousIsSelected) => Both,
            (SectionPosition::End, _) => End,
            (SectionPosition::Middle, SelectedPosition::PreviousIsSelected) => Start,
            (SectionPosition::Middle, SelectedPosition::NextIsSelected) => End,
            (SectionPosition::Middle, SelectedPosition::NotAdjacent) => Middle,
        },
    };
    // Vertical tab bars keep their order under right-to-left layouts while
    // the renderer mirrors, so the ends swap.
    let along = match along {
        Start if tab_orientation(info.shape).is_vertical() && direction.is_rtl() => End,
        End if tab_orientation(info.shape).is_vertical() && direction.is_rtl() => Start,
        p => p,
    };
    let across = match info.shape {
        TabShape::North | TabShape::East => Start,
        TabShape::South | TabShape::West => End,
    };
    Capsule::at(along, across)
}

fn tab(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    tab_shape(ctx, painter, job);
    tab_label(ctx, painter, job);
}

fn tab_shape(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    let info = tab_info(job.option);
    let state = tab_state(job.state());
    let orientation = tab_orientation(info.shape);
    let r = tab_rect(ctx, &job.rect(), state, info.shape);
    let status = status_str(state, false);

    let mut frame = job.spec.frame.clone();
    tab_capsule(ctx.tweaks().tab.variant, info, state, job.direction()).apply(&mut frame);

    ctx.paint_interior(painter, &r, &job.spec, &frame, status, job.direction(), orientation);
    ctx.paint_frame(painter, &r, &job.spec, &frame, status, job.direction(), orientation);
    ctx.paint_overlays(painter, &r, &frame, job.option, orientation);
}

/// Labels of vertical tabs are turned with the bar and always laid out
/// left to right.
fn tab_label(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    let info = tab_info(job.option);
    let state = tab_state(job.state());
    let r = tab_rect(ctx, &job.rect(), state, info.shape);
    let mut option = job.option.clone();
    option.state = state;

    painter.save();
    let mut target = match info.shape {
        TabShape::North | TabShape::South => r,
        TabShape::East => {
            option.direction = LayoutDirection::Ltr;
            rotate_into(painter, &r, true)
        }
        TabShape::West => {
            option.direction = LayoutDirection::Ltr;
            rotate_into(painter, &r, false)
        }
    };
    if option.features.contains(Features::CLOSABLE) {
        let close = ctx.theme().indicator_spec("TabWidget").size + job.spec.label.tispace;
        target = visual_rect(option.direction, &target, &target.adjusted(0, 0, -close, 0));
    }
    let alignment = Alignment::LEFT | Alignment::VCENTER;
    ctx.paint_label(painter, &target, &job.spec, &job.spec.frame, &option, &option.text, alignment);
    painter.restore();
}

/// Progress bars fill from the trailing end when inverted, when vertical
/// (bottom to top) or when laid out right to left.
fn fills_from_end(option: &StyleOption, orientation: Orientation, upside_down: bool) -> bool {
    let rtl = orientation.is_horizontal() && option.direction.is_rtl();
    upside_down ^ orientation.is_vertical() ^ rtl
}

/// Rectangle the bar is drawn in: the thin variant keeps a centered band.
fn progress_band(ctx: &ThemeContext, r: &Rect, orientation: Orientation) -> Rect {
    let progress = &ctx.tweaks().progressbar;
    if progress.variant != ProgressBarVariant::Thin {
        return *r;
    }
    let c = if orientation.is_vertical() { r.transposed() } else { *r };
    let thickness = progress.thin_min_height.min(c.height);
    let band = Rect::new(c.x, c.y + (c.height - thickness) / 2, c.width, thickness);
    from_canonical(r, &band, orientation)
}

fn progress_orientation(job: &Job<'_>) -> Orientation {
    job.option.range().map_or(Orientation::Horizontal, |r| r.orientation)
}

fn progress_bar(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    progress_groove(ctx, painter, job);
    progress_contents(ctx, painter, job);
    if job.option.features.contains(Features::TEXT_VISIBLE) {
        progress_label(ctx, painter, job);
    }
}

fn progress_groove(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    let orientation = progress_orientation(job);
    let r = progress_band(ctx, &job.rect(), orientation);
    let spec = &job.spec;
    ctx.paint_panel(painter, &r, spec, &spec.frame, job.status(), job.direction(), orientation);
}

/// The `-elapsed` variant of a group's frame and interior.
fn elapsed(spec: &ElementSpec) -> ElementSpec {
    let mut spec = spec.clone();
    spec.frame.element = format!("{}-elapsed", spec.frame.element);
    spec.interior.element = format!("{}-elapsed", spec.interior.element);
    spec
}

/// The filled part of the bar, or the moving chunk of a busy bar.
///
/// Geometry is computed on the horizontal bar and mapped back; mirroring is
/// done here so the renderer is always called left to right.
fn progress_contents(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    let Some(range) = job.option.range() else {
        return;
    };
    let orientation = range.orientation;
    let bounds = progress_band(ctx, &job.rect(), orientation);
    let groove = if orientation.is_vertical() { bounds.transposed() } else { bounds };
    let spec = elapsed(&job.spec);
    let fm = frame_margins(&spec.frame);
    let inner = interior_rect(&bounds, &spec.frame, orientation);
    if inner.is_empty() {
        return;
    }
    let reversed = fills_from_end(job.option, orientation, range.upside_down);
    let status = job.status();
    let ltr = LayoutDirection::Ltr;

    // (piece bounds, clip, frame) in canonical space
    let mut pieces: Vec<(Rect, Rect, FrameSpec)> = Vec::new();
    if !range.is_busy() {
        let filled = slider_position_from_value(range.minimum, range.maximum, range.value, inner.width, false);
        if filled <= 0 {
            return;
        }
        let piece = Rect::new(inner.x, inner.y, filled, inner.height).margins_added(fm);
        let clip = if range.value < range.maximum {
            piece.adjusted(0, 0, -fm.right, 0)
        } else {
            piece
        };
        pieces.push((piece, clip, spec.frame.clone()));
    } else {
        let progress = &ctx.tweaks().progressbar;
        let offset = job.widget.map_or(0, |w| ctx.animations().offset(w.widget.id));
        for busy in busy_pieces(&inner, offset, progress.chunk_width, progress.busy_variant, progress.busy_full_direction) {
            if busy.pattern_shift > 0 || busy.rect == inner {
                // Full length: one frame over the groove and a shifted pattern.
                let piece = groove.adjusted(-busy.pattern_shift, 0, 0, 0);
                let clip = groove.adjusted(fm.left, 0, -fm.right, 0);
                ctx.paint_frame(painter, &bounds, &spec, &spec.frame, status, ltr, orientation);
                let (piece, clip) = mirrored(reversed, &groove, piece, clip);
                painter.save();
                painter.clip_rect(&from_canonical(&bounds, &clip, orientation));
                let frame = FrameSpec::default();
                ctx.paint_interior(painter, &from_canonical(&bounds, &piece, orientation), &spec, &frame, status, ltr, orientation);
                painter.restore();
                continue;
            }
            let piece = busy.rect.margins_added(fm);
            let mut frame = spec.frame.clone();
            let clip = if busy.capsule.is_capsule {
                busy.capsule.apply(&mut frame);
                piece
            } else {
                let mut clip = piece;
                if piece.left() > groove.left() {
                    clip = clip.adjusted(fm.left, 0, 0, 0);
                }
                if piece.right() < groove.right() {
                    clip = clip.adjusted(0, 0, -fm.right, 0);
                }
                clip
            };
            pieces.push((piece, clip, frame));
        }
    }

    for (piece, clip, frame) in pieces {
        let (piece, clip) = mirrored(reversed, &groove, piece, clip);
        let piece = from_canonical(&bounds, &piece, orientation);
        painter.save();
        painter.clip_rect(&from_canonical(&bounds, &clip, orientation));
        ctx.paint_frame(painter, &piece, &spec, &frame, status, ltr, orientation);
        ctx.paint_interior(painter, &piece, &spec, &frame, status, ltr, orientation);
        painter.restore();
    }
}

fn mirrored(reversed: bool, groove: &Rect, piece: Rect, clip: Rect) -> (Rect, Rect) {
    if reversed {
        (piece.mirrored_in(groove), clip.mirrored_in(groove))
    } else {
        (piece, clip)
    }
}

/// Vertical bars draw their label turned, reading bottom to top unless
/// inverted. Thin bars have no frame around the label.
fn progress_label(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    let orientation = progress_orientation(job);
    let mut frame = job.spec.frame.clone();
    if ctx.tweaks().progressbar.variant == ProgressBarVariant::Thin {
        frame.has_frame = false;
    }
    let r = job.rect();
    painter.save();
    let target = if orientation.is_vertical() {
        let upside_down = job.option.range().is_some_and(|range| range.upside_down);
        rotate_into(painter, &r, upside_down)
    } else {
        r
    };
    ctx.paint_label(painter, &target, &job.spec, &frame, job.option, &job.option.text, job.option.alignment);
    painter.restore();
}

fn menu_item(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    let (kind, check, max_icon) = match job.option.extra {
        OptionExtra::MenuItem {
            kind,
            check,
            max_icon_width,
            ..
        } => (kind, check, max_icon_width),
        _ => (MenuItemKind::Normal, CheckType::NotCheckable, 0),
    };
    let spec = &job.spec;
    let r = job.rect();
    let dir = job.direction();

    match kind {
        MenuItemKind::Separator if job.option.text.is_empty() => {
            let element = format!("{}-separator-normal", spec.indicator.element);
            ctx.paint_element(painter, &element, &r);
            return;
        }
        MenuItemKind::Separator => {
            // A titled section is drawn as a toggled button.
            let mut option = job.option.clone();
            option.state |= State::ON;
            option.icon_size = Size::new(max_icon, max_icon);
            ctx.draw_control(ControlElement::PushButton, &option, painter, None);
            return;
        }
        MenuItemKind::TearOff => {
            menu_tearoff(ctx, painter, job);
            return;
        }
        MenuItemKind::Normal | MenuItemKind::SubMenu => {}
    }

    // Menu items have no pressed look.
    let mut option = job.option.clone();
    option.state -= State::SUNKEN;
    let status = status_str(option.state, false);

    let mut frame = spec.frame.clone();
    if ctx.tweaks().menu.use_capsule {
        if let Some(WidgetInfo {
            widget,
            layout: Some(layout),
        }) = job.widget
        {
            capsule_position(layout, widget).apply(&mut frame);
        }
    }
    ctx.paint_panel(painter, &r, spec, &frame, status, dir, Orientation::Horizontal);

    let (label, shortcut) = split_shortcut(&job.option.text);
    let ds = spec.indicator.size;
    let mark = ds + ctx.tweaks().radiocheckbox.label_tispace;
    let mut text = r;
    if option.icon.is_none() {
        text = text.adjusted(max_icon + spec.label.tispace, 0, 0, 0);
    }
    if check != CheckType::NotCheckable {
        text = text.adjusted(0, 0, -mark, 0);
    }
    if kind == MenuItemKind::SubMenu {
        text = text.adjusted(0, 0, -mark, 0);
    }
    let fm = frame_margins(&spec.frame);
    let child = Rect::new(r.right() - ds - fm.right - spec.label.hmargin, r.y, ds, r.height);
    let checkmark = if kind == MenuItemKind::SubMenu {
        child.translated(-mark, 0)
    } else {
        child
    };
    let text = visual_rect(dir, &r, &text);
    let checkmark = visual_rect(dir, &r, &checkmark);
    let child = visual_rect(dir, &r, &child);

    let no_frame = FrameSpec::default();
    ctx.paint_label(painter, &text, spec, &no_frame, &option, label, Alignment::LEFT | Alignment::VCENTER);
    if !shortcut.is_empty() {
        let mut plain = option.clone();
        plain.icon = None;
        ctx.paint_label(painter, &text, spec, &no_frame, &plain, shortcut, Alignment::RIGHT | Alignment::VCENTER);
    }

    ctx.draw_primitive(PrimitiveElement::IndicatorMenuCheckMark, &option.at(checkmark), painter, job.widget);
    if kind == MenuItemKind::SubMenu {
        ctx.draw_primitive(PrimitiveElement::IndicatorColumnViewArrow, &option.at(child), painter, None);
    }
}

fn menu_tearoff(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    let element = format!("{}-tearoff-normal", job.spec.indicator.element);
    ctx.renderer().render_element(painter, &element, &job.rect(), 10, 0, 0);
}

fn menu_scroller(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    ctx.draw_primitive(PrimitiveElement::PanelButtonTool, job.option, painter, job.widget);
    let arrow = if job.state().contains(State::DOWN_ARROW) {
        PrimitiveElement::IndicatorArrowDown
    } else {
        PrimitiveElement::IndicatorArrowUp
    };
    ctx.draw_primitive(arrow, job.option, painter, job.widget);
}

fn menu_bar_item(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    let mut option = job.option.clone();
    option.state -= State::SUNKEN;
    let status = status_str(option.state, false);
    let spec = &job.spec;
    let r = job.rect();
    ctx.paint_panel(painter, &r, spec, &spec.frame, status, job.direction(), Orientation::Horizontal);
    ctx.paint_label(painter, &r, spec, &spec.frame, &option, &option.text, Alignment::CENTER);
}

/// Menu bars report no state at all; draw them as normal.
fn menu_bar_empty_area(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    let status = if job.state().is_empty() {
        "normal"
    } else {
        job.status()
    };
    let spec = &job.spec;
    ctx.paint_interior(painter, &job.rect(), spec, &spec.frame, status, job.direction(), Orientation::Horizontal);
}

/// Label and optional arrow of a tool button. The arrow sits on the leading
/// side, or in the middle when there is nothing else to show.
fn tool_button_label(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    let spec = &job.spec;
    let r = job.rect();
    let dir = job.direction();
    let arrow = match job.option.extra {
        OptionExtra::ToolButton { arrow } => arrow,
        _ => ArrowType::None,
    };
    let text = job.option.text.as_str();
    let frame = ctx.capsule_frame(job);

    let mut arrows = spec.clone();
    arrows.indicator = ctx.theme().indicator_spec("Indicator");
    let ds = arrows.indicator.size;

    let name = match arrow {
        ArrowType::None => {
            ctx.paint_label(painter, &r, spec, &frame, job.option, text, Alignment::CENTER);
            return;
        }
        ArrowType::Up => "up",
        ArrowType::Down => "down",
        ArrowType::Left => "left",
        ArrowType::Right => "right",
    };
    let label = visual_rect(dir, &r, &r.adjusted(ds + spec.label.tispace, 0, 0, 0));
    ctx.paint_label(painter, &label, spec, &frame, job.option, text, Alignment::CENTER);

    let alignment = if text.is_empty() && job.option.icon.is_none() {
        Alignment::CENTER
    } else {
        Alignment::LEFT | Alignment::VCENTER
    };
    ctx.paint_indicator(painter, &r, &arrows, &frame, name, job.status(), alignment, dir);
}

fn header(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    header_section(ctx, painter, job);
    header_label(ctx, painter, job);
}

/// Sections form a capsule along the header.
fn header_section(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    let capsule = match job.option.extra {
        OptionExtra::Header {
            position,
            orientation: Orientation::Horizontal,
            ..
        } => Capsule::at(section_capsule(position), CapsulePosition::Both),
        OptionExtra::Header { position, .. } => Capsule::at(CapsulePosition::Both, section_capsule(position)),
        _ => Capsule::SOLO,
    };
    let mut frame = job.spec.frame.clone();
    capsule.apply(&mut frame);
    ctx.paint_panel(painter, &job.rect(), &job.spec, &frame, job.status(), job.direction(), Orientation::Horizontal);
}

fn header_label(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    let spec = &job.spec;
    let r = job.rect();
    let label = match ctx.sub_element_rect(SubElement::HeaderArrow, job.option, job.widget) {
        Some(arrow) if !matches!(job.option.extra, OptionExtra::Header { sort: SortIndicator::None, .. }) => {
            ctx.draw_primitive(PrimitiveElement::IndicatorHeaderArrow, &job.option.at(arrow), painter, job.widget);
            let room = spec.indicator.size + spec.label.tispace;
            visual_rect(job.direction(), &r, &r.adjusted(0, 0, -room, 0))
        }
        _ => r,
    };
    ctx.paint_label(painter, &label, spec, &spec.frame, job.option, &job.option.text, job.option.alignment);
}

fn tool_box_tab(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    panel(ctx, painter, job);
    tool_box_label(ctx, painter, job);
}

fn tool_box_label(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    let mut option = job.option.clone();
    option.icon_size = Size::new(16, 16);
    let spec = &job.spec;
    ctx.paint_label(painter, &job.rect(), spec, &spec.frame, &option, &option.text, Alignment::CENTER);
}

fn size_grip(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    let no_frame = FrameSpec::default();
    let alignment = Alignment::RIGHT | Alignment::BOTTOM;
    ctx.paint_indicator(painter, &job.rect(), &job.spec, &no_frame, "sizegrip", job.status(), alignment, job.direction());
}

/// Tall handles separate widgets side by side and use the vertical handle.
fn splitter(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    let r = job.rect();
    panel(ctx, painter, job);
    let axis = if r.height > r.width { "v" } else { "h" };
    let element = format!("{}-{}handle-{}", job.spec.indicator.element, axis, job.status());
    ctx.paint_element(painter, &element, &r);
}

/// Line bands have no interior; bands never show hover.
fn rubber_band(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    let spec = &job.spec;
    let r = job.rect();
    let status = status_str(job.state() - State::MOUSE_OVER, true);
    ctx.paint_frame(painter, &r, spec, &spec.frame, status, job.direction(), Orientation::Horizontal);
    let line = matches!(
        job.option.extra,
        OptionExtra::Frame {
            shape: FrameShape::HLine | FrameShape::VLine,
            ..
        }
    );
    if !line {
        ctx.paint_interior(painter, &r, spec, &spec.frame, status, job.direction(), Orientation::Horizontal);
    }
}

fn dock_title(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    let vertical = job.option.features.contains(Features::VERTICAL_TITLE);
    let orientation = if vertical {
        Orientation::Vertical
    } else {
        Orientation::Horizontal
    };
    let spec = &job.spec;
    let r = job.rect();
    ctx.paint_panel(painter, &r, spec, &spec.frame, job.status(), job.direction(), orientation);

    painter.save();
    let target = if vertical { rotate_into(painter, &r, false) } else { r };
    let alignment = Alignment::LEFT | Alignment::VCENTER;
    ctx.paint_label(painter, &target, spec, &spec.frame, job.option, &job.option.text, alignment);
    painter.restore();
}

/// Arrow button of a scroll bar: panel, then the arrow pointing `forward`
/// (right or down) or back.
fn scroll_line(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>, part: SubControl, forward: bool) {
    let orientation = job.orientation();
    let mut option = job.option.clone();
    option.state = part_state(job.option, part);
    let status = status_str(option.state, false);
    let spec = &job.spec;
    let r = job.rect();
    ctx.paint_panel(painter, &r, spec, &spec.frame, status, job.direction(), orientation);

    let arrow = match (orientation, forward) {
        (Orientation::Horizontal, true) => PrimitiveElement::IndicatorArrowRight,
        (Orientation::Horizontal, false) => PrimitiveElement::IndicatorArrowLeft,
        (Orientation::Vertical, true) => PrimitiveElement::IndicatorArrowDown,
        (Orientation::Vertical, false) => PrimitiveElement::IndicatorArrowUp,
    };
    ctx.draw_primitive(arrow, &option, painter, job.widget);
}

fn scroll_add_line(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    scroll_line(ctx, painter, job, SubControl::ScrollBarAddLine, true);
}

fn scroll_sub_line(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    scroll_line(ctx, painter, job, SubControl::ScrollBarSubLine, false);
}

/// Page areas show the groove interior.
fn scroll_page(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    let no_frame = FrameSpec::default();
    let status = status_str(job.state() - (State::SUNKEN | State::MOUSE_OVER), false);
    ctx.paint_interior(painter, &job.rect(), &job.spec, &no_frame, status, job.direction(), job.orientation());
}

fn scroll_slider(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    let mut spec = job.spec.clone();
    spec.frame.element = format!("{}-slider", spec.frame.element);
    spec.interior.element = format!("{}-slider", spec.interior.element);
    let mut option = job.option.clone();
    option.state = part_state(job.option, SubControl::ScrollBarSlider);
    let status = status_str(option.state, false);
    let orientation = job.orientation();
    let r = job.rect();
    ctx.paint_panel(painter, &r, &spec, &spec.frame, status, job.direction(), orientation);
    ctx.paint_overlays(painter, &r, &spec.frame, &option, orientation);
}

/// Editable combo boxes have their text drawn by the editor; only the icon
/// is drawn here.
fn combo_label(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    let text = if job.option.features.contains(Features::EDITABLE) {
        ""
    } else {
        job.option.text.as_str()
    };
    let no_frame = FrameSpec::default();
    let alignment = Alignment::LEFT | Alignment::VCENTER;
    ctx.paint_label(painter, &job.rect(), &job.spec, &no_frame, job.option, text, alignment);
}

fn toolbar(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    let spec = &job.spec;
    ctx.paint_panel(painter, &job.rect(), spec, &spec.frame, job.status(), job.direction(), job.orientation());
}

/// Highlight, check box and label of an item view cell.
fn item_view_item(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    ctx.draw_primitive(PrimitiveElement::PanelItemViewItem, job.option, painter, job.widget);
    let spec = &job.spec;
    let r = job.rect();
    let dir = job.direction();

    let mut label = r;
    if job.option.features.contains(Features::CHECK_INDICATOR) {
        let is = ctx.theme().indicator_spec("CheckBox").size;
        let area = r.adjusted(spec.label.hmargin, 0, 0, 0);
        let check = aligned_rect(dir, Alignment::LEFT | Alignment::VCENTER, Size::new(is, is), &area);
        ctx.draw_primitive(PrimitiveElement::IndicatorItemViewItemCheck, &job.option.at(check), painter, job.widget);
        label = visual_rect(dir, &r, &r.adjusted(is + spec.label.hmargin + spec.label.tispace, 0, 0, 0));
    }
    let no_frame = FrameSpec::default();
    ctx.paint_label(painter, &label, spec, &no_frame, job.option, &job.option.text, job.option.alignment);
}

/// Lines use the tool bar separators; panels are plain frames.
fn shaped_frame(ctx: &ThemeContext, painter: &mut dyn Painter, job: &Job<'_>) {
    let shape = match job.option.extra {
        OptionExtra::Frame { shape, .. } => shape,
        _ => FrameShape::Panel,
    };
    let axis = match shape {
        FrameShape::NoFrame => return,
        FrameShape::Panel => {
            ctx.draw_primitive(PrimitiveElement::Frame, job.option, painter, job.widget);
            return;
        }
        FrameShape::HLine => "h",
        FrameShape::VLine => "v",
    };
    let separators = ctx.theme().indicator_spec("ToolBar");
    let element = format!("{}-{}sep-{}", separators.element, axis, job.status());
    ctx.paint_element(painter, &element, &job.rect());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{LayoutTree, WidgetRef};
    use crate::style::RangeOption;
    use crate::text::FixedMetrics;
    use crate::vgi::{DrawCall, RecordingPainter};

    fn context() -> ThemeContext {
        ThemeContext::builtin(Box::new(FixedMetrics::default())).unwrap()
    }

    fn ids(painter: &RecordingPainter) -> Vec<String> {
        painter.elements().into_iter().map(|(id, _)| id.to_string()).collect()
    }

    fn clips(painter: &RecordingPainter) -> Vec<vello::kurbo::Rect> {
        painter
            .calls()
            .iter()
            .filter_map(|c| match c {
                DrawCall::Clip { rect } => Some(*rect),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn unthemed_controls_fall_back() {
        let ctx = context();
        let mut painter = RecordingPainter::new();
        let option = StyleOption::new(Rect::new(0, 0, 10, 10), State::ENABLED);
        assert_eq!(
            ctx.draw_control(ControlElement::ColumnViewGrip, &option, &mut painter, None),
            Dispatch::Fallback
        );
        assert_eq!(
            ctx.draw_control(ControlElement::ScrollBarFirst, &option, &mut painter, None),
            Dispatch::Fallback
        );
        assert_eq!(
            ctx.draw_control(ControlElement::FocusFrame, &option, &mut painter, None),
            Dispatch::Done
        );
        assert!(painter.calls().is_empty());
    }

    #[test]
    fn push_button_draws_bevel_and_label() {
        let ctx = context();
        let mut painter = RecordingPainter::new();
        let option = StyleOption::new(Rect::new(0, 0, 80, 24), State::ENABLED).with_text("&Ok");
        ctx.draw_control(ControlElement::PushButton, &option, &mut painter, None);

        assert!(painter.element_rect("button-normal-topleft").is_some());
        assert_eq!(painter.element_rect("button-normal"), Some(Rect::new(3, 3, 74, 18).to_kurbo()));
        assert_eq!(painter.texts()[0].0, "Ok");
    }

    #[test]
    fn flat_buttons_rest_without_bevel() {
        let ctx = context();
        let mut painter = RecordingPainter::new();
        let option = StyleOption::new(Rect::new(0, 0, 80, 24), State::ENABLED).with_features(Features::FLAT);
        ctx.draw_control(ControlElement::PushButtonBevel, &option, &mut painter, None);
        assert!(painter.elements().is_empty());

        let option = StyleOption {
            state: State::ENABLED | State::MOUSE_OVER,
            ..option
        };
        ctx.draw_control(ControlElement::PushButtonBevel, &option, &mut painter, None);
        assert!(painter.element_rect("button-hovered").is_some());
    }

    #[test]
    fn menu_buttons_show_a_down_arrow_at_the_trailing_side() {
        let ctx = context();
        let r = Rect::new(0, 0, 100, 24);
        let option = StyleOption::new(r, State::ENABLED)
            .with_text("Menu")
            .with_features(Features::HAS_MENU);

        let mut painter = RecordingPainter::new();
        ctx.draw_control(ControlElement::PushButtonLabel, &option, &mut painter, None);
        let arrow = painter.element_rect("arrow-down-normal").unwrap();
        // 100 - arrow 10 - frame 3 - margin 6
        assert_eq!(arrow.x0, 81.0);

        let mut painter = RecordingPainter::new();
        let rtl = option.with_direction(LayoutDirection::Rtl);
        ctx.draw_control(ControlElement::PushButtonLabel, &rtl, &mut painter, None);
        let arrow = painter.element_rect("arrow-down-normal").unwrap();
        assert_eq!(arrow.x0, 9.0);
    }

    #[test]
    fn check_box_puts_the_indicator_first() {
        let ctx = context();
        let mut painter = RecordingPainter::new();
        let option = StyleOption::new(Rect::new(0, 0, 100, 20), State::ENABLED | State::ON).with_text("Check");
        ctx.draw_control(ControlElement::CheckBox, &option, &mut painter, None);
        let indicator = painter.element_rect("checkbox-checked-normal").unwrap();
        assert_eq!(indicator.x0, 0.0);
        assert!(painter.texts()[0].1.x0 >= 19.0);

        let mut painter = RecordingPainter::new();
        let rtl = option.with_direction(LayoutDirection::Rtl);
        ctx.draw_control(ControlElement::CheckBox, &rtl, &mut painter, None);
        let indicator = painter.element_rect("checkbox-checked-normal").unwrap();
        assert_eq!(indicator.x1, 100.0);
        assert!(painter.texts()[0].1.x1 <= 81.0);
    }

    fn tab_option(position: SectionPosition, shape: TabShape, state: State) -> StyleOption {
        StyleOption::new(Rect::new(0, 0, 60, 24), state)
            .with_text("Tab")
            .with_extra(OptionExtra::Tab {
                position,
                shape,
                selected: SelectedPosition::NotAdjacent,
            })
    }

    #[test]
    fn grouped_tabs_form_a_capsule() {
        let ctx = context();
        let mut painter = RecordingPainter::new();
        let option = tab_option(SectionPosition::Beginning, TabShape::North, State::ENABLED);
        ctx.draw_control(ControlElement::TabBarTabShape, &option, &mut painter, None);
        let ids = ids(&painter);
        assert!(ids.contains(&"tab-normal-left".to_string()));
        assert!(ids.contains(&"tab-normal-top".to_string()));
        assert!(!ids.contains(&"tab-normal-right".to_string()));
        assert!(!ids.contains(&"tab-normal-bottom".to_string()));
    }

    #[test]
    fn tab_capsules_by_variant() {
        let info = TabInfo {
            position: SectionPosition::Middle,
            shape: TabShape::South,
            selected_position: SelectedPosition::NextIsSelected,
        };
        let ltr = LayoutDirection::Ltr;
        assert_eq!(
            tab_capsule(TabVariant::GroupNonSelected, info, State::ENABLED, ltr),
            Capsule::at(CapsulePosition::End, CapsulePosition::End)
        );
        assert_eq!(
            tab_capsule(TabVariant::GroupNonSelected, info, State::ENABLED | State::SELECTED, ltr),
            Capsule::at(CapsulePosition::Both, CapsulePosition::End)
        );
        assert_eq!(
            tab_capsule(TabVariant::Individual, info, State::ENABLED, ltr),
            Capsule::at(CapsulePosition::Both, CapsulePosition::End)
        );

        let west = TabInfo {
            position: SectionPosition::Beginning,
            shape: TabShape::West,
            selected_position: SelectedPosition::NotAdjacent,
        };
        assert_eq!(
            tab_capsule(TabVariant::GroupAll, west, State::ENABLED, LayoutDirection::Rtl),
            Capsule::at(CapsulePosition::End, CapsulePosition::End)
        );
    }

    #[test]
    fn pressed_tabs_look_selected() {
        let ctx = context();
        let mut painter = RecordingPainter::new();
        let option = tab_option(SectionPosition::OnlyOne, TabShape::North, State::ENABLED | State::SUNKEN);
        ctx.draw_control(ControlElement::TabBarTabShape, &option, &mut painter, None);
        assert!(painter.element_rect("tab-toggled").is_some());
    }

    #[test]
    fn vertical_tab_labels_are_turned() {
        let ctx = context();
        let mut painter = RecordingPainter::new();
        let option = StyleOption::new(Rect::new(0, 0, 24, 80), State::ENABLED)
            .with_text("Tab")
            .with_extra(OptionExtra::Tab {
                position: SectionPosition::OnlyOne,
                shape: TabShape::West,
                selected: SelectedPosition::NotAdjacent,
            });
        ctx.draw_control(ControlElement::TabBarTabLabel, &option, &mut painter, None);
        let text = painter.texts()[0].1;
        assert!(text.height() > text.width());
    }

    fn progress(value: i32) -> StyleOption {
        StyleOption::new(Rect::new(0, 0, 104, 20), State::ENABLED)
            .with_extra(OptionExtra::Range(RangeOption::new(0, 100, value)))
    }

    #[test]
    fn progress_fills_with_the_value() {
        let ctx = context();
        let mut painter = RecordingPainter::new();
        ctx.draw_control(ControlElement::ProgressBarContents, &progress(50), &mut painter, None);
        // interior 100 wide, half of it filled
        assert_eq!(
            painter.element_rect("progress-elapsed-normal"),
            Some(Rect::new(2, 2, 50, 16).to_kurbo())
        );
        // right frame edge hidden until full
        assert_eq!(clips(&painter), vec![Rect::new(0, 0, 52, 20).to_kurbo()]);

        let mut painter = RecordingPainter::new();
        ctx.draw_control(ControlElement::ProgressBarContents, &progress(100), &mut painter, None);
        assert_eq!(clips(&painter), vec![Rect::new(0, 0, 104, 20).to_kurbo()]);

        let mut painter = RecordingPainter::new();
        ctx.draw_control(ControlElement::ProgressBarContents, &progress(0), &mut painter, None);
        assert!(painter.calls().is_empty());
    }

    #[test]
    fn right_to_left_progress_fills_from_the_right() {
        let ctx = context();
        let mut painter = RecordingPainter::new();
        let option = progress(50).with_direction(LayoutDirection::Rtl);
        ctx.draw_control(ControlElement::ProgressBarContents, &option, &mut painter, None);
        assert_eq!(
            painter.element_rect("progress-elapsed-normal"),
            Some(Rect::new(52, 2, 50, 16).to_kurbo())
        );
    }

    #[test]
    fn busy_progress_follows_the_animation() {
        let mut ctx = context();
        let bar = WidgetRef::new(9, "ProgressBar");
        ctx.animations_mut().show(bar.id);
        for _ in 0..5 {
            ctx.tick_progress();
        }
        let option = StyleOption::new(Rect::new(0, 0, 104, 20), State::ENABLED)
            .with_extra(OptionExtra::Range(RangeOption::new(0, 0, 0)));

        let mut painter = RecordingPainter::new();
        ctx.draw_control(ControlElement::ProgressBarContents, &option, &mut painter, Some(WidgetInfo::new(&bar)));
        // offset 10, chunk 20
        assert_eq!(
            painter.element_rect("progress-elapsed-normal"),
            Some(Rect::new(12, 2, 20, 16).to_kurbo())
        );
    }

    #[test]
    fn menu_items_split_label_and_shortcut() {
        let ctx = context();
        let mut painter = RecordingPainter::new();
        let option = StyleOption::new(Rect::new(0, 0, 200, 22), State::ENABLED | State::SUNKEN)
            .with_text("Open\tCtrl+O")
            .with_extra(OptionExtra::MenuItem {
                kind: MenuItemKind::SubMenu,
                check: CheckType::NonExclusive,
                checked: true,
                max_icon_width: 16,
            });
        ctx.draw_control(ControlElement::MenuItem, &option, &mut painter, None);

        let ids = ids(&painter);
        assert!(ids.contains(&"menuitem-normal".to_string()));
        assert!(ids.contains(&"menuitem-checkbox-checked-normal".to_string()));
        assert!(ids.contains(&"arrow-right-normal".to_string()));

        let texts = painter.texts();
        assert_eq!(texts.len(), 2);
        assert_eq!(texts[0].0, "Open");
        assert!(texts[0].1.x0 >= 22.0);
        assert_eq!(texts[1].0, "Ctrl+O");
        assert!(texts[1].1.x0 > texts[0].1.x1);
    }

    #[test]
    fn menu_separators_and_tearoffs() {
        let ctx = context();
        let item = |kind| {
            StyleOption::new(Rect::new(0, 0, 100, 6), State::ENABLED).with_extra(OptionExtra::MenuItem {
                kind,
                check: CheckType::NotCheckable,
                checked: false,
                max_icon_width: 0,
            })
        };
        let mut painter = RecordingPainter::new();
        ctx.draw_control(ControlElement::MenuItem, &item(MenuItemKind::Separator), &mut painter, None);
        assert_eq!(ids(&painter), vec!["menuitem-separator-normal"]);

        let mut painter = RecordingPainter::new();
        ctx.draw_control(ControlElement::MenuItem, &item(MenuItemKind::TearOff), &mut painter, None);
        // tiled every 10 pixels
        assert_eq!(painter.elements().len(), 11);
    }

    #[test]
    fn header_sections_capsule_by_position() {
        let ctx = context();
        let mut painter = RecordingPainter::new();
        let option = StyleOption::new(Rect::new(0, 0, 80, 20), State::ENABLED).with_extra(OptionExtra::Header {
            position: SectionPosition::Middle,
            sort: SortIndicator::None,
            orientation: Orientation::Horizontal,
        });
        ctx.draw_control(ControlElement::HeaderSection, &option, &mut painter, None);
        let ids = ids(&painter);
        assert!(ids.contains(&"header-normal-top".to_string()));
        assert!(!ids.contains(&"header-normal-left".to_string()));
        assert!(!ids.contains(&"header-normal-topleft".to_string()));
    }

    #[test]
    fn scroll_bar_parts_only_react_when_active() {
        let ctx = context();
        let option = StyleOption::new(Rect::new(0, 0, 14, 14), State::ENABLED | State::MOUSE_OVER)
            .with_extra(OptionExtra::Range(RangeOption::new(0, 10, 0)))
            .with_active(SubControl::ScrollBarSlider);

        let mut painter = RecordingPainter::new();
        ctx.draw_control(ControlElement::ScrollBarAddLine, &option, &mut painter, None);
        assert!(painter.element_rect("scrollbar-normal").is_some());
        assert!(painter.element_rect("arrow-right-normal").is_some());

        let mut painter = RecordingPainter::new();
        ctx.draw_control(ControlElement::ScrollBarSlider, &option, &mut painter, None);
        assert!(painter.element_rect("scrollbar-slider-hovered").is_some());
    }

    #[test]
    fn shaped_lines_use_separators() {
        let ctx = context();
        let mut painter = RecordingPainter::new();
        let option = StyleOption::new(Rect::new(0, 0, 100, 2), State::ENABLED).with_extra(OptionExtra::Frame {
            shape: FrameShape::HLine,
            line_width: 1,
        });
        ctx.draw_control(ControlElement::ShapedFrame, &option, &mut painter, None);
        assert_eq!(ids(&painter), vec!["toolbar-hsep-normal"]);
    }

    #[test]
    fn menu_capsules_follow_the_menu_layout() {
        let mut ctx = context();
        ctx.theme_mut().tweaks_mut().menu.use_capsule = true;
        let mut tree = LayoutTree::new();
        let column = tree.vbox(0);
        let first = WidgetRef::new(1, "MenuItem");
        tree.add_widget(column, first.clone());
        tree.add_widget(column, WidgetRef::new(2, "MenuItem"));

        let mut painter = RecordingPainter::new();
        let option = StyleOption::new(Rect::new(0, 0, 100, 22), State::ENABLED).with_text("Open");
        ctx.draw_control(
            ControlElement::MenuItem,
            &option,
            &mut painter,
            Some(WidgetInfo::in_layout(&first, &tree)),
        );
        let ids = ids(&painter);
        assert!(ids.contains(&"menuitem-normal-top".to_string()));
        assert!(!ids.contains(&"menuitem-normal-bottom".to_string()));
    }
}
