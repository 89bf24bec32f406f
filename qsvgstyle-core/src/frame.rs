// SPDX-License-Identifier: LGPL-3.0-only

//! 9-slice decomposition of a frame.
//!
//! Frames are computed in a canonical horizontal space. For vertical widgets
//! the bounds are transposed first and the renderer rotates the result back.

use qsvgstyle_theme::FrameSpec;

use crate::geometry::{Margins, Rect};
use crate::layout::Orientation;

/// One of the eight parts of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FramePart {
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl FramePart {
    /// Every part, edges first.
    pub const ALL: [FramePart; 8] = [
        FramePart::Top,
        FramePart::Bottom,
        FramePart::Left,
        FramePart::Right,
        FramePart::TopLeft,
        FramePart::TopRight,
        FramePart::BottomLeft,
        FramePart::BottomRight,
    ];

    /// Suffix of the SVG element drawing this part.
    pub fn suffix(self) -> &'static str {
        match self {
            FramePart::Top => "top",
            FramePart::Bottom => "bottom",
            FramePart::Left => "left",
            FramePart::Right => "right",
            FramePart::TopLeft => "topleft",
            FramePart::TopRight => "topright",
            FramePart::BottomLeft => "bottomleft",
            FramePart::BottomRight => "bottomright",
        }
    }
}

/// The eight frame rectangles; empty ones are not drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameRects {
    pub top: Rect,
    pub bottom: Rect,
    pub left: Rect,
    pub right: Rect,
    pub top_left: Rect,
    pub top_right: Rect,
    pub bottom_left: Rect,
    pub bottom_right: Rect,
}

impl FrameRects {
    /// Rectangle of one part.
    pub fn get(&self, part: FramePart) -> Rect {
        match part {
            FramePart::Top => self.top,
            FramePart::Bottom => self.bottom,
            FramePart::Left => self.left,
            FramePart::Right => self.right,
            FramePart::TopLeft => self.top_left,
            FramePart::TopRight => self.top_right,
            FramePart::BottomLeft => self.bottom_left,
            FramePart::BottomRight => self.bottom_right,
        }
    }

    /// Non-empty parts with their rectangles.
    pub fn iter(&self) -> impl Iterator<Item = (FramePart, Rect)> + '_ {
        FramePart::ALL
            .into_iter()
            .map(|part| (part, self.get(part)))
            .filter(|(_, r)| !r.is_empty())
    }

    /// Whether no part is drawn.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Widths actually occupied on each side.
    pub fn margins(&self) -> Margins {
        Margins::new(
            self.left.width,
            self.top.height,
            self.right.width,
            self.bottom.height,
        )
    }

    /// Map every rectangle through `f`.
    pub fn map(&self, f: impl Fn(&Rect) -> Rect) -> FrameRects {
        FrameRects {
            top: f(&self.top),
            bottom: f(&self.bottom),
            left: f(&self.left),
            right: f(&self.right),
            top_left: f(&self.top_left),
            top_right: f(&self.top_right),
            bottom_left: f(&self.bottom_left),
            bottom_right: f(&self.bottom_right),
        }
    }
}

/// Compute the frame parts of `bounds` in canonical horizontal space.
///
/// For [Orientation::Vertical] the bounds are transposed before the
/// decomposition, so the result describes the transposed widget.
pub fn compute_frame_rects(bounds: &Rect, spec: &FrameSpec, orientation: Orientation) -> FrameRects {
    if !spec.has_frame || bounds.is_empty() {
        return FrameRects::default();
    }

    let r = if orientation.is_vertical() {
        bounds.transposed()
    } else {
        *bounds
    };
    let (x0, y0, w, h) = (r.x, r.y, r.width, r.height);
    let (x1, y1) = (r.right(), r.bottom());
    let (t, b, l, rt) = (spec.top, spec.bottom, spec.left, spec.right);

    if !spec.has_capsule {
        return FrameRects {
            top: Rect::new(x0 + l, y0, w - l - rt, t),
            bottom: Rect::new(x0 + l, y1 - b, w - l - rt, b),
            left: Rect::new(x0, y0 + t, l, h - t - b),
            right: Rect::new(x1 - rt, y0 + t, rt, h - t - b),
            top_left: Rect::new(x0, y0, l, t),
            top_right: Rect::new(x1 - rt, y0, rt, t),
            bottom_left: Rect::new(x0, y1 - b, l, b),
            bottom_right: Rect::new(x1 - rt, y1 - b, rt, b),
        };
    }

    let (ch, cv) = (spec.capsule_h, spec.capsule_v);
    if !ch.draws_start() && !ch.draws_end() && !cv.draws_start() && !cv.draws_end() {
        return FrameRects::default();
    }

    // Sides that are actually drawn; a suppressed side takes no room.
    let la = if ch.draws_start() { l } else { 0 };
    let ra = if ch.draws_end() { rt } else { 0 };
    let ta = if cv.draws_start() { t } else { 0 };
    let ba = if cv.draws_end() { b } else { 0 };

    let mut rects = FrameRects::default();
    if ta > 0 {
        rects.top = Rect::new(x0 + la, y0, w - la - ra, ta);
    }
    if ba > 0 {
        rects.bottom = Rect::new(x0 + la, y1 - ba, w - la - ra, ba);
    }
    if la > 0 {
        rects.left = Rect::new(x0, y0 + ta, la, h - ta - ba);
    }
    if ra > 0 {
        rects.right = Rect::new(x1 - ra, y0 + ta, ra, h - ta - ba);
    }
    if la > 0 && ta > 0 {
        rects.top_left = Rect::new(x0, y0, la, ta);
    }
    if ra > 0 && ta > 0 {
        rects.top_right = Rect::new(x1 - ra, y0, ra, ta);
    }
    if la > 0 && ba > 0 {
        rects.bottom_left = Rect::new(x0, y1 - ba, la, ba);
    }
    if ra > 0 && ba > 0 {
        rects.bottom_right = Rect::new(x1 - ra, y1 - ba, ra, ba);
    }
    rects
}
