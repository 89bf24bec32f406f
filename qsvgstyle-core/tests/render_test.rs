//! Tests for frame decomposition and element rendering

use std::collections::HashSet;
use std::sync::Mutex;

use qsvgstyle_core::frame::{compute_frame_rects, FramePart};
use qsvgstyle_core::geometry::{Alignment, Rect};
use qsvgstyle_core::interior::interior_rect;
use qsvgstyle_core::layout::{LayoutDirection, Orientation};
use qsvgstyle_core::observer::{RenderLog, RenderOp};
use qsvgstyle_core::render::{LabelContent, Renderer};
use qsvgstyle_core::svg::SvgElementRenderer;
use qsvgstyle_core::text::FixedMetrics;
use qsvgstyle_core::vgi::{DrawCall, Painter, RecordingPainter};
use qsvgstyle_theme::tweaks::PaletteTweaks;
use qsvgstyle_theme::{CapsulePosition, FrameSpec, InteriorSpec, LabelSpec};
use vello::kurbo;
use vello::peniko::Color;

/// Document knowing a fixed set of element ids.
struct Elements(HashSet<String>);

impl Elements {
    fn frame(base: &str) -> Self {
        let mut ids: HashSet<String> = FramePart::ALL
            .iter()
            .map(|p| format!("{}-{}", base, p.suffix()))
            .collect();
        ids.insert(base.to_string());
        Self(ids)
    }

    fn without(mut self, id: &str) -> Self {
        self.0.remove(id);
        self
    }
}

impl SvgElementRenderer for Elements {
    fn element_exists(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    fn render(&self, _painter: &mut dyn Painter, _id: &str, _rect: &Rect) {}
}

/// Keeps warnings so tests can check what was reported.
struct CapturedLog(Mutex<Vec<(log::Level, String)>>);

impl log::Log for CapturedLog {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::Level::Warn
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut records) = self.0.lock() {
                records.push((record.level(), record.args().to_string()));
            }
        }
    }

    fn flush(&self) {}
}

static LOG: CapturedLog = CapturedLog(Mutex::new(Vec::new()));

fn captured_log() -> &'static CapturedLog {
    // Another test may have installed it already.
    let _ = log::set_logger(&LOG);
    log::set_max_level(log::LevelFilter::Warn);
    &LOG
}

fn warned_about(log: &CapturedLog, text: &str) -> bool {
    log.0
        .lock()
        .unwrap()
        .iter()
        .any(|(level, message)| *level == log::Level::Warn && message.contains(text))
}

fn frame(top: i32, bottom: i32, left: i32, right: i32) -> FrameSpec {
    FrameSpec {
        element: "button".into(),
        has_frame: true,
        width: top.max(bottom).max(left).max(right),
        top,
        bottom,
        left,
        right,
        ..Default::default()
    }
}

fn ids(painter: &RecordingPainter) -> Vec<String> {
    painter.elements().into_iter().map(|(id, _)| id.to_string()).collect()
}

const POSITIONS: [CapsulePosition; 4] = [
    CapsulePosition::Start,
    CapsulePosition::Middle,
    CapsulePosition::End,
    CapsulePosition::Both,
];

#[test]
fn test_frame_parts_and_interior_tile_the_bounds() {
    let bounds = Rect::new(10, 5, 80, 30);
    let area = |r: &Rect| r.width * r.height;

    for h in POSITIONS {
        for v in POSITIONS {
            let mut spec = frame(2, 4, 3, 5);
            spec.has_capsule = true;
            spec.capsule_h = h;
            spec.capsule_v = v;

            let rects = compute_frame_rects(&bounds, &spec, Orientation::Horizontal);
            let interior = interior_rect(&bounds, &spec, Orientation::Horizontal);
            let mut pieces: Vec<Rect> = rects.iter().map(|(_, r)| r).collect();
            pieces.push(interior);

            for (i, a) in pieces.iter().enumerate() {
                assert!(bounds.contains_rect(a), "{:?} outside for {:?}/{:?}", a, h, v);
                for b in &pieces[i + 1..] {
                    assert!(a.intersected(b).is_empty(), "{:?} overlaps {:?}", a, b);
                }
            }
            let total: i32 = pieces.iter().map(area).sum();
            assert_eq!(total, area(&bounds), "gap for {:?}/{:?}", h, v);
        }
    }
}

#[test]
fn test_suppressed_edges_give_room_to_the_interior() {
    let bounds = Rect::new(0, 0, 60, 24);
    let mut spec = frame(3, 3, 3, 3);
    spec.has_capsule = true;
    spec.capsule_h = CapsulePosition::Middle;

    let interior = interior_rect(&bounds, &spec, Orientation::Horizontal);
    assert_eq!(interior, Rect::new(0, 3, 60, 18));

    let svg = Elements::frame("button-normal");
    let palette = PaletteTweaks::default();
    let metrics = FixedMetrics::default();
    let renderer = Renderer::new(&svg, &palette, &metrics);
    let mut painter = RecordingPainter::new();
    renderer.render_frame(
        &mut painter,
        None,
        &bounds,
        &spec,
        "button-normal",
        LayoutDirection::Ltr,
        Orientation::Horizontal,
    );
    assert_eq!(ids(&painter), vec!["button-normal-top", "button-normal-bottom"]);
    assert_eq!(
        painter.element_rect("button-normal-top"),
        Some(kurbo::Rect::new(0.0, 0.0, 60.0, 3.0))
    );
}

#[test]
fn test_vertical_frames_cover_the_widget() {
    let bounds = Rect::new(0, 0, 20, 100);
    let spec = frame(3, 3, 3, 3);
    let svg = Elements::frame("bar-normal");
    let palette = PaletteTweaks::default();
    let metrics = FixedMetrics::default();
    let renderer = Renderer::new(&svg, &palette, &metrics);

    let mut painter = RecordingPainter::new();
    renderer.render_frame(
        &mut painter,
        None,
        &bounds,
        &spec,
        "bar-normal",
        LayoutDirection::Ltr,
        Orientation::Vertical,
    );
    let interior = InteriorSpec {
        element: "bar-normal".into(),
        has_interior: true,
        ..Default::default()
    };
    renderer.render_interior(
        &mut painter,
        None,
        &bounds,
        &spec,
        &interior,
        "bar-normal",
        LayoutDirection::Ltr,
        Orientation::Vertical,
    );

    let elements = painter.elements();
    assert_eq!(elements.len(), 9);
    let union = elements
        .iter()
        .map(|(_, r)| *r)
        .reduce(|a, b| a.union(b))
        .unwrap();
    assert_eq!(union, bounds.to_kurbo());

    // The canonical left edge is the top of a vertical widget.
    assert_eq!(
        painter.element_rect("bar-normal-left"),
        Some(kurbo::Rect::new(3.0, 0.0, 17.0, 3.0))
    );
    assert_eq!(
        painter.element_rect("bar-normal"),
        Some(kurbo::Rect::new(3.0, 3.0, 17.0, 97.0))
    );
}

#[test]
fn test_right_to_left_frames_are_mirrored() {
    let bounds = Rect::new(0, 0, 40, 20);
    let spec = frame(2, 2, 2, 6);
    let svg = Elements::frame("button-normal");
    let palette = PaletteTweaks::default();
    let metrics = FixedMetrics::default();
    let renderer = Renderer::new(&svg, &palette, &metrics);

    let mut ltr = RecordingPainter::new();
    renderer.render_frame(&mut ltr, None, &bounds, &spec, "button-normal", LayoutDirection::Ltr, Orientation::Horizontal);
    let mut rtl = RecordingPainter::new();
    renderer.render_frame(&mut rtl, None, &bounds, &spec, "button-normal", LayoutDirection::Rtl, Orientation::Horizontal);

    assert_eq!(ltr.element_rect("button-normal-right"), Some(kurbo::Rect::new(34.0, 2.0, 40.0, 18.0)));
    assert_eq!(rtl.element_rect("button-normal-right"), Some(kurbo::Rect::new(0.0, 2.0, 6.0, 18.0)));
}

#[test]
fn test_missing_element_draws_a_placeholder() {
    let bounds = Rect::new(0, 0, 50, 20);
    let spec = frame(3, 3, 3, 3);
    let svg = Elements::frame("button-normal").without("button-normal-top");
    let palette = PaletteTweaks::default();
    let metrics = FixedMetrics::default();
    let renderer = Renderer::new(&svg, &palette, &metrics);
    let log = captured_log();

    let mut painter = RecordingPainter::new();
    renderer.render_frame(
        &mut painter,
        None,
        &bounds,
        &spec,
        "button-normal",
        LayoutDirection::Ltr,
        Orientation::Horizontal,
    );
    assert!(warned_about(log, "'button-normal-top' not found"));

    let ids = ids(&painter);
    assert_eq!(ids.len(), 7);
    assert!(!ids.contains(&"button-normal-top".to_string()));
    assert!(ids.contains(&"button-normal-bottomright".to_string()));

    let strokes: Vec<_> = painter
        .calls()
        .iter()
        .filter(|c| matches!(c, DrawCall::StrokeRect { .. }))
        .collect();
    assert_eq!(strokes.len(), 1);
    assert_eq!(strokes[0].rect(), Some(kurbo::Rect::new(3.0, 0.0, 47.0, 3.0)));
    let lines = painter
        .calls()
        .iter()
        .filter(|c| matches!(c, DrawCall::Line { .. }))
        .count();
    assert_eq!(lines, 2);
}

#[test]
fn test_right_to_left_labels_are_right_aligned() {
    let bounds = Rect::new(0, 0, 100, 20);
    let svg = Elements(HashSet::new());
    let palette = PaletteTweaks::default();
    let metrics = FixedMetrics::default();
    let renderer = Renderer::new(&svg, &palette, &metrics);
    let content = LabelContent::text("&Hi", Alignment::LEFT | Alignment::VCENTER, Color::BLACK);

    let mut painter = RecordingPainter::new();
    renderer.render_label(
        &mut painter,
        &bounds,
        &FrameSpec::default(),
        &LabelSpec::default(),
        &content,
        LayoutDirection::Ltr,
    );
    let (text, rect) = painter.texts()[0];
    assert_eq!(text, "Hi");
    assert_eq!(rect, kurbo::Rect::new(0.0, 2.0, 14.0, 18.0));

    let mut painter = RecordingPainter::new();
    renderer.render_label(
        &mut painter,
        &bounds,
        &FrameSpec::default(),
        &LabelSpec::default(),
        &content,
        LayoutDirection::Rtl,
    );
    assert_eq!(painter.texts()[0].1, kurbo::Rect::new(86.0, 2.0, 100.0, 18.0));
}

#[test]
fn test_observer_sees_every_operation() {
    let bounds = Rect::new(0, 0, 50, 20);
    let spec = frame(3, 3, 3, 3);
    let svg = Elements::frame("button-normal");
    let palette = PaletteTweaks::default();
    let metrics = FixedMetrics::default();
    let log = RenderLog::new();
    let renderer = Renderer::new(&svg, &palette, &metrics).with_observer(Some(&log));

    let mut painter = RecordingPainter::new();
    renderer.render_frame(
        &mut painter,
        None,
        &bounds,
        &spec,
        "button-normal",
        LayoutDirection::Ltr,
        Orientation::Horizontal,
    );
    let content = LabelContent::text("Ok", Alignment::CENTER, Color::BLACK);
    renderer.render_label(
        &mut painter,
        &bounds,
        &spec,
        &LabelSpec::default(),
        &content,
        LayoutDirection::Ltr,
    );

    let events = log.take();
    let ops: Vec<(RenderOp, bool)> = events.iter().map(|e| (e.op, e.begin)).collect();
    assert_eq!(
        ops,
        vec![
            (RenderOp::Frame, true),
            (RenderOp::Frame, false),
            (RenderOp::Label, true),
            (RenderOp::Label, false),
        ]
    );
    assert_eq!(events[0].subject, "button-normal");
    assert_eq!(events[2].subject, "text:Ok/icon:no");
    assert!(log.take().is_empty());
}
