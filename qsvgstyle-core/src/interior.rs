// SPDX-License-Identifier: LGPL-3.0-only

//! Interior, label and indicator rectangles.

use qsvgstyle_theme::{FrameSpec, LabelSpec};

use crate::frame::compute_frame_rects;
use crate::geometry::{aligned_rect, Alignment, Rect, Size};
use crate::layout::{LayoutDirection, Orientation};

/// Area inside the frame, in canonical horizontal space.
///
/// Only the frame parts that are actually drawn take room, so an edge
/// suppressed by a capsule leaves the interior reaching the bounds.
pub fn interior_rect(bounds: &Rect, frame: &FrameSpec, orientation: Orientation) -> Rect {
    let r = if orientation.is_vertical() {
        bounds.transposed()
    } else {
        *bounds
    };
    let margins = compute_frame_rects(bounds, frame, orientation).margins();
    let interior = r.margins_removed(margins);
    if interior.is_empty() {
        return Rect::new(r.x, r.y, 0, 0);
    }
    interior
}

/// Area available to text and icons: the interior minus the label margins.
pub fn label_rect(bounds: &Rect, frame: &FrameSpec, label: &LabelSpec) -> Rect {
    interior_rect(bounds, frame, Orientation::Horizontal).adjusted(
        label.hmargin,
        label.vmargin,
        -label.hmargin,
        -label.vmargin,
    )
}

/// Largest square at the origin of `r`.
pub fn squared_rect(r: &Rect) -> Rect {
    r.squared()
}

/// Square indicator of side `min(size, interior side)` aligned in the interior.
pub fn indicator_rect(
    bounds: &Rect,
    frame: &FrameSpec,
    size: i32,
    alignment: Alignment,
    direction: LayoutDirection,
) -> Rect {
    let interior = interior_rect(bounds, frame, Orientation::Horizontal);
    let side = size.min(squared_rect(&interior).width).max(0);
    aligned_rect(direction, alignment, Size::new(side, side), &interior)
}
