// SPDX-License-Identifier: LGPL-3.0-only

//! Drawing of frames, interiors, indicators and labels from their specs.
//!
//! Geometry is computed in canonical horizontal space by [crate::frame] and
//! [crate::interior]. The renderer maps it onto the widget with
//! [canonical_transform], which rotates vertical widgets and mirrors
//! right-to-left ones, and asks the [SvgElementRenderer] to stretch one
//! element into every resulting rectangle.

use bitflags::bitflags;
use qsvgstyle_theme::tweaks::PaletteTweaks;
use qsvgstyle_theme::{FrameSpec, IndicatorSpec, InteriorSpec, LabelSpec};
use vello::kurbo::{Affine, BezPath, Point};
use vello::peniko::Color;

use crate::frame::{compute_frame_rects, FramePart, FrameRects};
use crate::geometry::{aligned_rect, visual_rect, Alignment, Rect, Size};
use crate::interior::{indicator_rect, interior_rect, label_rect};
use crate::layout::{LayoutDirection, Orientation};
use crate::observer::{RenderObserver, RenderOp};
use crate::size::TextIconMode;
use crate::svg::SvgElementRenderer;
use crate::text::{strip_mnemonic, text_size, FontMetrics};
use crate::vgi::{Icon, Painter};

bitflags! {
    /// Debug overlays drawn on top of the themed elements.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DebugFlags: u8 {
        /// Outline every computed rectangle.
        const WIREFRAME = 1 << 0;
        /// Cover every drawn element with translucent red.
        const OVERDRAW = 1 << 1;
    }
}

const FRAME_WIRE: Color = Color::from_rgba8(0, 0, 255, 255);
const INTERIOR_WIRE: Color = Color::from_rgba8(255, 0, 0, 255);
const INDICATOR_WIRE: Color = Color::from_rgba8(0, 255, 255, 255);
const LABEL_WIRE: Color = Color::from_rgba8(255, 255, 255, 255);
const ICON_WIRE: Color = Color::from_rgba8(0, 255, 0, 255);
const TEXT_WIRE: Color = Color::from_rgba8(255, 0, 255, 255);
const OVERDRAW_FILL: Color = Color::from_rgba8(255, 0, 0, 100);

/// Transform from canonical horizontal space onto `bounds`.
///
/// Vertical widgets are rotated a quarter turn clockwise, so the canonical
/// left edge lands on the top of the widget. Right-to-left widgets are then
/// mirrored around the bounds centre, horizontally or vertically following
/// the orientation.
pub fn canonical_transform(
    bounds: &Rect,
    direction: LayoutDirection,
    orientation: Orientation,
) -> Affine {
    let x0 = bounds.x as f64;
    let y0 = bounds.y as f64;
    let w = bounds.width as f64;
    let h = bounds.height as f64;

    let base = if orientation.is_vertical() {
        // (u, v) -> (2 x0 + w - v, u)
        Affine::new([0.0, 1.0, -1.0, 0.0, 2.0 * x0 + w, 0.0])
    } else {
        Affine::IDENTITY
    };
    if !direction.is_rtl() {
        return base;
    }
    let mirror = if orientation.is_vertical() {
        Affine::new([1.0, 0.0, 0.0, -1.0, 0.0, 2.0 * y0 + h])
    } else {
        Affine::new([-1.0, 0.0, 0.0, 1.0, 2.0 * x0 + w, 0.0])
    };
    mirror * base
}

/// Text and icon of a label.
#[derive(Debug, Clone, Copy)]
pub struct LabelContent<'a> {
    pub text: &'a str,
    pub icon: Option<&'a Icon>,
    /// Size the icon is drawn at.
    pub icon_size: Size,
    pub mode: TextIconMode,
    pub alignment: Alignment,
    pub color: Color,
}

impl<'a> LabelContent<'a> {
    /// Text only, vertically centred.
    pub fn text(text: &'a str, alignment: Alignment, color: Color) -> Self {
        Self {
            text,
            icon: None,
            icon_size: Size::default(),
            mode: TextIconMode::TextOnly,
            alignment,
            color,
        }
    }

    /// Add an icon shown at `size`.
    pub fn with_icon(mut self, icon: &'a Icon, size: Size, mode: TextIconMode) -> Self {
        self.icon = Some(icon);
        self.icon_size = size;
        self.mode = mode;
        self
    }
}

/// Draws theme parts through a [Painter].
pub struct Renderer<'a> {
    svg: &'a dyn SvgElementRenderer,
    palette: &'a PaletteTweaks,
    metrics: &'a dyn FontMetrics,
    debug: DebugFlags,
    observer: Option<&'a dyn RenderObserver>,
    animation_count: u32,
}

impl<'a> Renderer<'a> {
    pub fn new(
        svg: &'a dyn SvgElementRenderer,
        palette: &'a PaletteTweaks,
        metrics: &'a dyn FontMetrics,
    ) -> Self {
        Self {
            svg,
            palette,
            metrics,
            debug: DebugFlags::empty(),
            observer: None,
            animation_count: 0,
        }
    }

    pub fn with_debug(mut self, debug: DebugFlags) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_observer(mut self, observer: Option<&'a dyn RenderObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Current tick of the theme animation.
    pub fn with_animation_count(mut self, count: u32) -> Self {
        self.animation_count = count;
        self
    }

    pub fn svg(&self) -> &'a dyn SvgElementRenderer {
        self.svg
    }

    pub fn metrics(&self) -> &'a dyn FontMetrics {
        self.metrics
    }

    fn begin(&self, op: RenderOp, subject: &str) {
        if let Some(observer) = self.observer {
            observer.begin(op, subject);
        }
    }

    fn end(&self, op: RenderOp, subject: &str) {
        if let Some(observer) = self.observer {
            observer.end(op, subject);
        }
    }

    fn frame_no(&self, frames: u32, looping: bool) -> u32 {
        if frames <= 1 {
            0
        } else if looping {
            self.animation_count % frames
        } else {
            self.animation_count.min(frames - 1)
        }
    }

    fn overlay_color(&self, color: Color) -> Option<Color> {
        if !self.palette.use_palette || self.palette.intensity == 0 {
            return None;
        }
        let c = color.to_rgba8();
        Some(Color::from_rgba8(c.r, c.g, c.b, self.palette.intensity))
    }

    /// Draw the frame parts of `bounds`.
    ///
    /// `color` tints the frame with the palette overlay.
    pub fn render_frame(
        &self,
        painter: &mut dyn Painter,
        color: Option<Color>,
        bounds: &Rect,
        frame: &FrameSpec,
        element: &str,
        direction: LayoutDirection,
        orientation: Orientation,
    ) {
        if !frame.has_frame || bounds.is_empty() {
            return;
        }
        self.begin(RenderOp::Frame, element);

        let rects = compute_frame_rects(bounds, frame, orientation);
        let frame_no = self.frame_no(frame.animation_frames, frame.loop_animation);

        painter.save();
        painter.concat_transform(canonical_transform(bounds, direction, orientation));
        for (part, r) in rects.iter() {
            let id = format!("{}-{}", element, part.suffix());
            match (part, frame.cut) {
                (FramePart::Top, Some(cut)) if cut.to >= cut.from => {
                    let before = Rect::new(r.x, r.y, cut.from - r.x, r.height);
                    let after = Rect::new(cut.to + 1, r.y, r.right() - cut.to - 1, r.height);
                    self.render_element(painter, &id, &before, 0, 0, frame_no);
                    self.render_element(painter, &id, &after, 0, 0, frame_no);
                }
                _ => self.render_element(painter, &id, &r, 0, 0, frame_no),
            }
        }
        if let Some(color) = color {
            self.colorize_frame(painter, &rects, color, frame.pressed);
        }
        if self.debug.contains(DebugFlags::WIREFRAME) {
            for (_, r) in rects.iter() {
                painter.stroke_rect(&r, FRAME_WIRE);
            }
        }
        painter.restore();

        self.end(RenderOp::Frame, element);
    }

    fn colorize_frame(&self, painter: &mut dyn Painter, rects: &FrameRects, color: Color, pressed: bool) {
        let Some(color) = self.overlay_color(color) else {
            return;
        };
        if !self.palette.frames_3d {
            for (_, r) in rects.iter() {
                painter.fill_rect(&r, color);
            }
            return;
        }

        let (mut light, mut dark) = (lighter(color), darker(color));
        if pressed {
            std::mem::swap(&mut light, &mut dark);
        }

        let mut lit = BezPath::new();
        for r in [rects.top, rects.left, rects.top_left] {
            add_rect(&mut lit, &r);
        }
        add_upper_triangle(&mut lit, &rects.top_right);
        add_upper_triangle(&mut lit, &rects.bottom_left);

        let mut shaded = BezPath::new();
        for r in [rects.bottom, rects.right, rects.bottom_right] {
            add_rect(&mut shaded, &r);
        }
        add_lower_triangle(&mut shaded, &rects.top_right);
        add_lower_triangle(&mut shaded, &rects.bottom_left);

        painter.fill_path(&lit, light);
        painter.fill_path(&shaded, dark);
    }

    /// Draw the interior of `bounds`, tiled when the interior has a period.
    pub fn render_interior(
        &self,
        painter: &mut dyn Painter,
        color: Option<Color>,
        bounds: &Rect,
        frame: &FrameSpec,
        interior: &InteriorSpec,
        element: &str,
        direction: LayoutDirection,
        orientation: Orientation,
    ) {
        if !interior.has_interior || bounds.is_empty() {
            return;
        }
        self.begin(RenderOp::Interior, element);

        let r = interior_rect(bounds, frame, orientation);
        let frame_no = self.frame_no(interior.animation_frames, interior.loop_animation);

        painter.save();
        painter.concat_transform(canonical_transform(bounds, direction, orientation));
        self.render_element(painter, element, &r, interior.px, interior.py, frame_no);
        if let Some(color) = color.and_then(|c| self.overlay_color(c)) {
            painter.fill_rect(&r, color);
        }
        if self.debug.contains(DebugFlags::WIREFRAME) {
            painter.stroke_rect(&r, INTERIOR_WIRE);
        }
        painter.restore();

        self.end(RenderOp::Interior, element);
    }

    /// Draw a square indicator aligned inside the interior of `bounds`.
    ///
    /// Right-to-left indicators are mirrored inside their own rectangle.
    /// Returns the rectangle drawn into.
    pub fn render_indicator(
        &self,
        painter: &mut dyn Painter,
        bounds: &Rect,
        frame: &FrameSpec,
        indicator: &IndicatorSpec,
        element: &str,
        alignment: Alignment,
        direction: LayoutDirection,
    ) -> Rect {
        let r = indicator_rect(bounds, frame, indicator.size, alignment, direction);
        if r.is_empty() {
            return r;
        }
        self.begin(RenderOp::Indicator, element);

        let frame_no = self.frame_no(indicator.animation_frames, indicator.loop_animation);
        painter.save();
        if direction.is_rtl() {
            painter.concat_transform(canonical_transform(&r, direction, Orientation::Horizontal));
        }
        self.render_element(painter, element, &r, 0, 0, frame_no);
        if self.debug.contains(DebugFlags::WIREFRAME) {
            painter.stroke_rect(&r, INDICATOR_WIRE);
        }
        painter.restore();

        self.end(RenderOp::Indicator, element);
        r
    }

    /// Tint an indicator rectangle with the palette overlay.
    pub fn colorize_indicator(&self, painter: &mut dyn Painter, rect: &Rect, color: Color) {
        let Some(color) = self.overlay_color(color) else {
            return;
        };
        if rect.is_empty() {
            return;
        }
        let (light, dark) = if self.palette.frames_3d {
            (lighter(color), darker(color))
        } else {
            (color, color)
        };
        let mut upper = BezPath::new();
        add_upper_triangle(&mut upper, rect);
        let mut lower = BezPath::new();
        add_lower_triangle(&mut lower, rect);
        painter.fill_path(&upper, light);
        painter.fill_path(&lower, dark);
    }

    /// Draw text and icon inside the label area of `bounds`.
    pub fn render_label(
        &self,
        painter: &mut dyn Painter,
        bounds: &Rect,
        frame: &FrameSpec,
        label: &LabelSpec,
        content: &LabelContent<'_>,
        direction: LayoutDirection,
    ) {
        let subject = format!(
            "text:{}/icon:{}",
            content.text,
            if content.icon.is_some() { "yes" } else { "no" }
        );
        self.begin(RenderOp::Label, &subject);

        let r = label_rect(bounds, frame, label);
        let text = strip_mnemonic(content.text);
        let has_icon = content.icon.is_some() && !content.icon_size.is_empty();
        let isz = if has_icon { content.icon_size } else { Size::default() };
        let spacing = if has_icon { label.tispace } else { 0 };
        let ltr = LayoutDirection::Ltr;

        let (mut ricon, rtext) = match content.mode {
            TextIconMode::TextBesideIcon => (
                aligned_rect(ltr, Alignment::VCENTER | Alignment::LEFT, isz, &r),
                Rect::new(r.x + isz.width + spacing, r.y, r.width - isz.width - spacing, r.height),
            ),
            TextIconMode::TextUnderIcon => (
                aligned_rect(ltr, Alignment::TOP | Alignment::HCENTER, isz, &r),
                Rect::new(r.x, r.y + isz.height + spacing, r.width, r.height - isz.height - spacing),
            ),
            TextIconMode::IconOnly => (aligned_rect(ltr, Alignment::CENTER, isz, &r), r),
            TextIconMode::TextOnly => (r, r),
        };
        if text.is_empty() {
            ricon = aligned_rect(ltr, Alignment::CENTER, isz, &r);
        }
        let rtext = visual_rect(direction, bounds, &rtext);
        let ricon = visual_rect(direction, bounds, &ricon);
        let alignment = content.alignment.visual(direction);

        if content.mode != TextIconMode::IconOnly && !text.is_empty() {
            let size = text_size(self.metrics, &text).bounded_to(rtext.size());
            let tbox = aligned_rect(ltr, alignment, size, &rtext);
            if label.has_shadow {
                for i in 0..label.depth {
                    let shadow = tbox.translated(label.xshift + i, label.yshift + i);
                    painter.draw_text(&shadow, alignment, &text, label.shadow_color);
                }
            }
            painter.draw_text(&tbox, alignment, &text, content.color);
            if self.debug.contains(DebugFlags::WIREFRAME) {
                painter.stroke_rect(&tbox, TEXT_WIRE);
            }
        }

        if content.mode != TextIconMode::TextOnly && has_icon {
            if let Some(icon) = content.icon {
                painter.draw_icon(&ricon, icon);
                if self.debug.contains(DebugFlags::WIREFRAME) {
                    painter.stroke_rect(&ricon, ICON_WIRE);
                }
            }
        }

        if self.debug.contains(DebugFlags::WIREFRAME) {
            painter.stroke_rect(&r, LABEL_WIRE);
        }
        self.end(RenderOp::Label, &subject);
    }

    /// Draw one element into `rect`.
    ///
    /// `px`/`py` tile the element with that period instead of stretching it.
    /// With `frame_no > 0` the highest existing `-frameN` variant up to
    /// `frame_no` is used. A missing element draws a crossed box.
    pub fn render_element(
        &self,
        painter: &mut dyn Painter,
        element: &str,
        rect: &Rect,
        px: i32,
        py: i32,
        frame_no: u32,
    ) {
        if rect.is_empty() || element.is_empty() {
            return;
        }
        if !self.svg.element_exists(element) {
            log::warn!("element '{}' not found in the theme", element);
            draw_placeholder(painter, rect);
            return;
        }
        let id = (1..=frame_no)
            .rev()
            .map(|i| format!("{}-frame{}", element, i))
            .find(|id| self.svg.element_exists(id))
            .unwrap_or_else(|| element.to_string());

        if px > 0 || py > 0 {
            let tile_w = if px > 0 { px } else { rect.width };
            let tile_h = if py > 0 { py } else { rect.height };
            let columns = if px > 0 { rect.width / px + 1 } else { 1 };
            let rows = if py > 0 { rect.height / py + 1 } else { 1 };

            painter.save();
            painter.clip_rect(rect);
            for i in 0..columns {
                for j in 0..rows {
                    let tile = Rect::new(rect.x + i * tile_w, rect.y + j * tile_h, tile_w, tile_h);
                    painter.draw_element(self.svg, &id, &tile);
                }
            }
            painter.restore();
        } else {
            painter.draw_element(self.svg, &id, rect);
        }

        if self.debug.contains(DebugFlags::OVERDRAW) {
            painter.fill_rect(rect, OVERDRAW_FILL);
        }
    }
}

/// Crossed black box marking a missing element.
pub fn draw_placeholder(painter: &mut dyn Painter, rect: &Rect) {
    let (x0, y0) = (rect.x as f64, rect.y as f64);
    let (x1, y1) = ((rect.right() - 1) as f64, (rect.bottom() - 1) as f64);
    painter.stroke_rect(rect, Color::BLACK);
    painter.draw_line(Point::new(x0, y0), Point::new(x1, y1), Color::BLACK);
    painter.draw_line(Point::new(x1, y0), Point::new(x0, y1), Color::BLACK);
}

fn shade(color: Color, f: impl Fn(u8) -> u8) -> Color {
    let c = color.to_rgba8();
    Color::from_rgba8(f(c.r), f(c.g), f(c.b), c.a)
}

fn lighter(color: Color) -> Color {
    shade(color, |v| v + ((255 - v as u16) * 2 / 5) as u8)
}

fn darker(color: Color) -> Color {
    shade(color, |v| (v as u16 * 3 / 5) as u8)
}

fn add_rect(path: &mut BezPath, r: &Rect) {
    if r.is_empty() {
        return;
    }
    let (x0, y0, x1, y1) = (r.left() as f64, r.top() as f64, r.right() as f64, r.bottom() as f64);
    path.move_to((x0, y0));
    path.line_to((x1, y0));
    path.line_to((x1, y1));
    path.line_to((x0, y1));
    path.close_path();
}

/// Triangle above the bottom-left to top-right diagonal.
fn add_upper_triangle(path: &mut BezPath, r: &Rect) {
    if r.is_empty() {
        return;
    }
    let (x0, y0, x1, y1) = (r.left() as f64, r.top() as f64, r.right() as f64, r.bottom() as f64);
    path.move_to((x0, y0));
    path.line_to((x1, y0));
    path.line_to((x0, y1));
    path.close_path();
}

/// Triangle below the bottom-left to top-right diagonal.
fn add_lower_triangle(path: &mut BezPath, r: &Rect) {
    if r.is_empty() {
        return;
    }
    let (x0, y0, x1, y1) = (r.left() as f64, r.top() as f64, r.right() as f64, r.bottom() as f64);
    path.move_to((x1, y0));
    path.line_to((x1, y1));
    path.line_to((x0, y1));
    path.close_path();
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::observer::RenderLog;
    use crate::text::FixedMetrics;
    use crate::vgi::{DrawCall, RecordingPainter};
    use vello::kurbo;

    struct Ids(HashSet<String>);

    impl Ids {
        fn new(ids: &[&str]) -> Self {
            Self(ids.iter().map(|s| s.to_string()).collect())
        }

        fn frame(base: &str) -> Self {
            let mut ids: Vec<String> = FramePart::ALL
                .iter()
                .map(|p| format!("{}-{}", base, p.suffix()))
                .collect();
            ids.push(base.to_string());
            Self(ids.into_iter().collect())
        }
    }

    impl SvgElementRenderer for Ids {
        fn element_exists(&self, id: &str) -> bool {
            self.0.contains(id)
        }

        fn render(&self, _painter: &mut dyn Painter, _id: &str, _rect: &Rect) {}
    }

    fn spec(width: i32) -> FrameSpec {
        FrameSpec {
            element: "button".into(),
            has_frame: true,
            width,
            top: width,
            bottom: width,
            left: width,
            right: width,
            ..Default::default()
        }
    }

    fn kr(x: i32, y: i32, w: i32, h: i32) -> kurbo::Rect {
        Rect::new(x, y, w, h).to_kurbo()
    }

    #[test]
    fn frame_draws_one_element_per_part() {
        let svg = Ids::frame("button-normal");
        let palette = PaletteTweaks::default();
        let metrics = FixedMetrics::default();
        let renderer = Renderer::new(&svg, &palette, &metrics);
        let mut painter = RecordingPainter::new();

        renderer.render_frame(
            &mut painter,
            None,
            &Rect::new(0, 0, 40, 20),
            &spec(3),
            "button-normal",
            LayoutDirection::Ltr,
            Orientation::Horizontal,
        );

        assert_eq!(painter.elements().len(), 8);
        assert_eq!(painter.element_rect("button-normal-top"), Some(kr(3, 0, 34, 3)));
        assert_eq!(painter.element_rect("button-normal-bottomright"), Some(kr(37, 17, 3, 3)));
    }

    #[test]
    fn disabled_frame_draws_nothing() {
        let svg = Ids::frame("button-normal");
        let palette = PaletteTweaks::default();
        let metrics = FixedMetrics::default();
        let renderer = Renderer::new(&svg, &palette, &metrics);
        let mut painter = RecordingPainter::new();
        let frame = FrameSpec::default();

        renderer.render_frame(
            &mut painter,
            None,
            &Rect::new(0, 0, 40, 20),
            &frame,
            "button-normal",
            LayoutDirection::Ltr,
            Orientation::Horizontal,
        );
        assert!(painter.calls().is_empty());
    }

    #[test]
    fn vertical_frames_rotate_onto_the_bounds() {
        let svg = Ids::frame("scrollbar-normal");
        let palette = PaletteTweaks::default();
        let metrics = FixedMetrics::default();
        let renderer = Renderer::new(&svg, &palette, &metrics);
        let mut painter = RecordingPainter::new();

        renderer.render_frame(
            &mut painter,
            None,
            &Rect::new(10, 0, 16, 100),
            &spec(2),
            "scrollbar-normal",
            LayoutDirection::Ltr,
            Orientation::Vertical,
        );

        // canonical top edge ends up on the right side of the widget
        assert_eq!(painter.element_rect("scrollbar-normal-top"), Some(kr(24, 2, 2, 96)));
        // canonical left edge ends up on top
        assert_eq!(painter.element_rect("scrollbar-normal-left"), Some(kr(12, 0, 12, 2)));
        let outer = kr(10, 0, 16, 100);
        for (_, r) in painter.elements() {
            assert_eq!(outer.union(r), outer, "{r:?}");
        }
    }

    #[test]
    fn cut_splits_the_top_edge() {
        let svg = Ids::frame("groupbox-normal");
        let palette = PaletteTweaks::default();
        let metrics = FixedMetrics::default();
        let renderer = Renderer::new(&svg, &palette, &metrics);
        let mut painter = RecordingPainter::new();
        let mut frame = spec(2);
        frame.cut = Some(qsvgstyle_theme::FrameCut { from: 10, to: 29 });

        renderer.render_frame(
            &mut painter,
            None,
            &Rect::new(0, 0, 100, 50),
            &frame,
            "groupbox-normal",
            LayoutDirection::Ltr,
            Orientation::Horizontal,
        );

        let tops: Vec<_> = painter
            .elements()
            .into_iter()
            .filter(|(id, _)| *id == "groupbox-normal-top")
            .map(|(_, r)| r)
            .collect();
        assert_eq!(tops, vec![kr(2, 0, 8, 2), kr(30, 0, 68, 2)]);
    }

    #[test]
    fn interior_tiles_clipped_to_the_rect() {
        let svg = Ids::new(&["progress-pattern-normal"]);
        let palette = PaletteTweaks::default();
        let metrics = FixedMetrics::default();
        let renderer = Renderer::new(&svg, &palette, &metrics);
        let mut painter = RecordingPainter::new();
        let interior = InteriorSpec {
            element: "progress-pattern".into(),
            px: 20,
            ..Default::default()
        };

        renderer.render_interior(
            &mut painter,
            None,
            &Rect::new(0, 0, 50, 10),
            &FrameSpec::default(),
            &interior,
            "progress-pattern-normal",
            LayoutDirection::Ltr,
            Orientation::Horizontal,
        );

        let tiles: Vec<_> = painter.elements().into_iter().map(|(_, r)| r).collect();
        assert_eq!(tiles, vec![kr(0, 0, 20, 10), kr(20, 0, 20, 10), kr(40, 0, 20, 10)]);
        assert!(painter
            .calls()
            .iter()
            .any(|c| matches!(c, DrawCall::Clip { rect } if *rect == kr(0, 0, 50, 10))));
    }

    #[test]
    fn missing_elements_draw_a_crossed_box() {
        let svg = Ids::new(&[]);
        let palette = PaletteTweaks::default();
        let metrics = FixedMetrics::default();
        let renderer = Renderer::new(&svg, &palette, &metrics);
        let mut painter = RecordingPainter::new();

        renderer.render_element(&mut painter, "nope", &Rect::new(0, 0, 50, 50), 0, 0, 0);

        let lines = painter
            .calls()
            .iter()
            .filter(|c| matches!(c, DrawCall::Line { .. }))
            .count();
        assert_eq!(lines, 2);
        assert!(painter.elements().is_empty());
    }

    #[test]
    fn animation_frames_pick_the_latest_existing_variant() {
        let svg = Ids::new(&["spinner", "spinner-frame1", "spinner-frame2"]);
        let palette = PaletteTweaks::default();
        let metrics = FixedMetrics::default();
        let renderer = Renderer::new(&svg, &palette, &metrics);
        let mut painter = RecordingPainter::new();

        renderer.render_element(&mut painter, "spinner", &Rect::new(0, 0, 8, 8), 0, 0, 3);
        renderer.render_element(&mut painter, "spinner", &Rect::new(0, 0, 8, 8), 0, 0, 0);

        let ids: Vec<_> = painter.elements().into_iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["spinner-frame2", "spinner"]);
    }

    #[test]
    fn flat_overlay_uses_the_intensity_as_alpha() {
        let svg = Ids::frame("button-normal");
        let palette = PaletteTweaks {
            intensity: 80,
            ..Default::default()
        };
        let metrics = FixedMetrics::default();
        let renderer = Renderer::new(&svg, &palette, &metrics);
        let mut painter = RecordingPainter::new();

        renderer.render_interior(
            &mut painter,
            Some(Color::from_rgba8(10, 20, 30, 255)),
            &Rect::new(0, 0, 20, 20),
            &spec(2),
            &InteriorSpec::default(),
            "button-normal",
            LayoutDirection::Ltr,
            Orientation::Horizontal,
        );

        let fill = painter.calls().iter().find_map(|c| match c {
            DrawCall::FillRect { rect, color } => Some((*rect, color.to_rgba8())),
            _ => None,
        });
        let (rect, color) = fill.unwrap();
        assert_eq!(rect, kr(2, 2, 16, 16));
        assert_eq!((color.r, color.g, color.b, color.a), (10, 20, 30, 80));
    }

    #[test]
    fn bevel_swaps_when_pressed() {
        let svg = Ids::frame("button-normal");
        let palette = PaletteTweaks {
            intensity: 100,
            frames_3d: true,
            ..Default::default()
        };
        let metrics = FixedMetrics::default();
        let renderer = Renderer::new(&svg, &palette, &metrics);
        let base = Color::from_rgba8(100, 100, 100, 255);

        let first_fill = |pressed: bool| {
            let mut painter = RecordingPainter::new();
            let mut frame = spec(2);
            frame.pressed = pressed;
            renderer.render_frame(
                &mut painter,
                Some(base),
                &Rect::new(0, 0, 20, 20),
                &frame,
                "button-normal",
                LayoutDirection::Ltr,
                Orientation::Horizontal,
            );
            painter
                .calls()
                .iter()
                .find_map(|c| match c {
                    DrawCall::FillPath { color, .. } => Some(color.to_rgba8().r),
                    _ => None,
                })
                .unwrap()
        };
        assert!(first_fill(false) > 100);
        assert!(first_fill(true) < 100);
    }

    #[test]
    fn rtl_indicator_mirrors_inside_its_rect() {
        let svg = Ids::new(&["arrow-right-normal"]);
        let palette = PaletteTweaks::default();
        let metrics = FixedMetrics::default();
        let renderer = Renderer::new(&svg, &palette, &metrics);
        let mut painter = RecordingPainter::new();
        let indicator = IndicatorSpec {
            element: "arrow".into(),
            size: 10,
            ..Default::default()
        };

        let r = renderer.render_indicator(
            &mut painter,
            &Rect::new(0, 0, 100, 20),
            &FrameSpec::default(),
            &indicator,
            "arrow-right-normal",
            Alignment::LEFT | Alignment::VCENTER,
            LayoutDirection::Rtl,
        );

        assert_eq!(r, Rect::new(90, 5, 10, 10));
        assert_eq!(painter.element_rect("arrow-right-normal"), Some(r.to_kurbo()));
        let DrawCall::Element { transform, .. } = &painter.calls()[0] else {
            panic!("expected an element");
        };
        assert_eq!(transform.as_coeffs()[0], -1.0);
    }

    #[test]
    fn label_shadow_is_drawn_before_the_text() {
        let svg = Ids::new(&[]);
        let palette = PaletteTweaks::default();
        let metrics = FixedMetrics::default();
        let renderer = Renderer::new(&svg, &palette, &metrics);
        let mut painter = RecordingPainter::new();
        let label = LabelSpec {
            has_shadow: true,
            xshift: 1,
            yshift: 1,
            depth: 2,
            ..Default::default()
        };

        renderer.render_label(
            &mut painter,
            &Rect::new(0, 0, 100, 20),
            &FrameSpec::default(),
            &label,
            &LabelContent::text("&Save", Alignment::LEFT | Alignment::VCENTER, Color::WHITE),
            LayoutDirection::Ltr,
        );

        let texts = painter.texts();
        assert_eq!(texts.len(), 3);
        assert!(texts.iter().all(|(t, _)| *t == "Save"));
        assert_eq!(texts[2].1, kr(0, 2, 28, 16));
        assert_eq!(texts[0].1, kr(1, 3, 28, 16));
        assert_eq!(texts[1].1, kr(2, 4, 28, 16));
    }

    #[test]
    fn icon_beside_text_in_rtl() {
        let svg = Ids::new(&[]);
        let palette = PaletteTweaks::default();
        let metrics = FixedMetrics::default();
        let renderer = Renderer::new(&svg, &palette, &metrics);
        let mut painter = RecordingPainter::new();
        let icon = Icon::placeholder(Size::new(16, 16));
        let content = LabelContent::text("Go", Alignment::LEFT | Alignment::VCENTER, Color::WHITE)
            .with_icon(&icon, Size::new(16, 16), TextIconMode::TextBesideIcon);
        let label = LabelSpec {
            tispace: 4,
            ..Default::default()
        };

        renderer.render_label(
            &mut painter,
            &Rect::new(0, 0, 100, 20),
            &FrameSpec::default(),
            &label,
            &content,
            LayoutDirection::Rtl,
        );

        let icon_rect = painter.calls().iter().find_map(|c| match c {
            DrawCall::Icon { rect } => Some(*rect),
            _ => None,
        });
        assert_eq!(icon_rect, Some(kr(84, 2, 16, 16)));
        assert_eq!(painter.texts()[0].1, kr(66, 2, 14, 16));
    }

    #[test]
    fn observer_sees_begin_and_end() {
        let svg = Ids::frame("button-normal");
        let palette = PaletteTweaks::default();
        let metrics = FixedMetrics::default();
        let log = RenderLog::new();
        let renderer = Renderer::new(&svg, &palette, &metrics).with_observer(Some(&log));
        let mut painter = RecordingPainter::new();

        renderer.render_frame(
            &mut painter,
            None,
            &Rect::new(0, 0, 20, 20),
            &spec(2),
            "button-normal",
            LayoutDirection::Ltr,
            Orientation::Horizontal,
        );

        let events = log.take();
        assert_eq!(events.len(), 2);
        assert!(events[0].begin && !events[1].begin);
        assert_eq!(events[0].op, RenderOp::Frame);
        assert_eq!(events[0].subject, "button-normal");
    }
}
