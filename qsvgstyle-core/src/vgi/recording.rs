// SPDX-License-Identifier: LGPL-3.0-only
use vello::kurbo::{self, Affine, BezPath, Point, Shape};
use vello::peniko::Color;
use vello::Scene;

use crate::geometry::{Alignment, Rect};
use crate::svg::SvgElementRenderer;
use crate::vgi::{device_rect, Icon, Painter};

/// One call received by a [RecordingPainter], in device coordinates.
#[derive(Debug, Clone)]
pub enum DrawCall {
    /// An SVG element stretched into `rect`.
    Element {
        id: String,
        rect: kurbo::Rect,
        transform: Affine,
    },
    FillRect {
        rect: kurbo::Rect,
        color: Color,
    },
    /// A filled path, reduced to its bounding box.
    FillPath {
        bounds: kurbo::Rect,
        color: Color,
    },
    StrokeRect {
        rect: kurbo::Rect,
        color: Color,
    },
    Line {
        from: Point,
        to: Point,
        color: Color,
    },
    Text {
        rect: kurbo::Rect,
        alignment: Alignment,
        text: String,
        color: Color,
    },
    Icon {
        rect: kurbo::Rect,
    },
    Scene {
        transform: Affine,
    },
    Clip {
        rect: kurbo::Rect,
    },
}

impl DrawCall {
    /// Device rectangle touched by the call, if it has one.
    pub fn rect(&self) -> Option<kurbo::Rect> {
        match self {
            DrawCall::Element { rect, .. }
            | DrawCall::FillRect { rect, .. }
            | DrawCall::StrokeRect { rect, .. }
            | DrawCall::Text { rect, .. }
            | DrawCall::Icon { rect }
            | DrawCall::Clip { rect } => Some(*rect),
            DrawCall::FillPath { bounds, .. } => Some(*bounds),
            DrawCall::Line { from, to, .. } => Some(kurbo::Rect::from_points(*from, *to)),
            DrawCall::Scene { .. } => None,
        }
    }
}

/// A [Painter] that records every call instead of drawing.
///
/// Element calls are recorded without asking the SVG renderer to draw, so
/// the recording shows exactly which ids the style requested and where.
#[derive(Debug, Default)]
pub struct RecordingPainter {
    calls: Vec<DrawCall>,
    transform: Affine,
    stack: Vec<Affine>,
}

impl RecordingPainter {
    /// Create an empty recording.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded calls in order.
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Take the recorded calls, leaving the recording empty.
    pub fn take(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }

    /// Ids and device rectangles of the element calls.
    pub fn elements(&self) -> Vec<(&str, kurbo::Rect)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Element { id, rect, .. } => Some((id.as_str(), *rect)),
                _ => None,
            })
            .collect()
    }

    /// Device rectangle of the first element call with `id`.
    pub fn element_rect(&self, id: &str) -> Option<kurbo::Rect> {
        self.elements()
            .into_iter()
            .find(|(e, _)| *e == id)
            .map(|(_, r)| r)
    }

    /// Recorded text calls.
    pub fn texts(&self) -> Vec<(&str, kurbo::Rect)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text { text, rect, .. } => Some((text.as_str(), *rect)),
                _ => None,
            })
            .collect()
    }
}

impl Painter for RecordingPainter {
    fn save(&mut self) {
        self.stack.push(self.transform);
    }

    fn restore(&mut self) {
        if let Some(t) = self.stack.pop() {
            self.transform = t;
        }
    }

    fn transform(&self) -> Affine {
        self.transform
    }

    fn set_transform(&mut self, transform: Affine) {
        self.transform = transform;
    }

    fn clip_rect(&mut self, rect: &Rect) {
        self.calls.push(DrawCall::Clip {
            rect: device_rect(self.transform, rect),
        });
    }

    fn fill_rect(&mut self, rect: &Rect, color: Color) {
        if rect.is_empty() {
            return;
        }
        self.calls.push(DrawCall::FillRect {
            rect: device_rect(self.transform, rect),
            color,
        });
    }

    fn fill_path(&mut self, path: &BezPath, color: Color) {
        self.calls.push(DrawCall::FillPath {
            bounds: (self.transform * path.clone()).bounding_box(),
            color,
        });
    }

    fn stroke_rect(&mut self, rect: &Rect, color: Color) {
        self.calls.push(DrawCall::StrokeRect {
            rect: device_rect(self.transform, rect),
            color,
        });
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color) {
        self.calls.push(DrawCall::Line {
            from: self.transform * from,
            to: self.transform * to,
            color,
        });
    }

    fn draw_text(&mut self, rect: &Rect, alignment: Alignment, text: &str, color: Color) {
        self.calls.push(DrawCall::Text {
            rect: device_rect(self.transform, rect),
            alignment,
            text: text.to_string(),
            color,
        });
    }

    fn draw_icon(&mut self, rect: &Rect, _icon: &Icon) {
        self.calls.push(DrawCall::Icon {
            rect: device_rect(self.transform, rect),
        });
    }

    fn append_scene(&mut self, _scene: &Scene, transform: Affine) {
        self.calls.push(DrawCall::Scene {
            transform: self.transform * transform,
        });
    }

    fn draw_element(&mut self, _svg: &dyn SvgElementRenderer, id: &str, rect: &Rect) {
        self.calls.push(DrawCall::Element {
            id: id.to_string(),
            rect: device_rect(self.transform, rect),
            transform: self.transform,
        });
    }
}
