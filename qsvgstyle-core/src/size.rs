// SPDX-License-Identifier: LGPL-3.0-only

//! Ideal widget sizes from their contents.

use qsvgstyle_theme::{ElementSpec, FrameSpec, LabelSpec, SizeSpec};

use crate::geometry::Size;
use crate::text::{text_size, FontMetrics};

/// Arrangement of the icon and text of a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextIconMode {
    IconOnly,
    TextOnly,
    #[default]
    TextBesideIcon,
    TextUnderIcon,
}

/// Size needed to show `text` and an icon of `icon` size inside a frame.
///
/// An empty `icon` means there is no icon. The result is at least the frame
/// plus a 2px interior.
pub fn size_from_contents(
    metrics: &dyn FontMetrics,
    frame: &FrameSpec,
    label: &LabelSpec,
    text: &str,
    icon: Size,
    mode: TextIconMode,
) -> Size {
    let has_icon = !icon.is_empty();
    let has_text = !text.is_empty();
    let (fw, fh) = if frame.has_frame {
        (frame.left + frame.right, frame.top + frame.bottom)
    } else {
        (0, 0)
    };

    let mut s = Size::new(fw, fh);
    if has_text || has_icon {
        s.width += 2 * label.hmargin;
        s.height += 2 * label.vmargin;
    }
    if has_text && label.has_shadow {
        s.width += label.xshift + label.depth;
        s.height += label.yshift + label.depth;
    }

    let t = text_size(metrics, text);
    let icon = if has_icon { icon } else { Size::default() };
    let spacing = if has_icon && has_text { label.tispace } else { 0 };
    match mode {
        TextIconMode::IconOnly => {
            s.width += icon.width;
            s.height += icon.height;
        }
        TextIconMode::TextOnly => {
            s.width += t.width;
            s.height += t.height;
        }
        TextIconMode::TextBesideIcon => {
            s.width += icon.width + spacing + t.width;
            s.height += icon.height.max(t.height);
        }
        TextIconMode::TextUnderIcon => {
            s.width += icon.width.max(t.width);
            s.height += icon.height + spacing + t.height;
        }
    }

    s.expanded_to(Size::new(fw + 2, fh + 2))
}

/// Clamp a computed size to the group's size constraints.
///
/// Minimums grow the size, fixed values replace it.
pub fn apply_size_spec(size: Size, spec: &SizeSpec) -> Size {
    let clamp = |computed: i32, min: Option<i32>, fixed: Option<i32>| match fixed {
        Some(fixed) => fixed,
        None => computed.max(min.unwrap_or(0)),
    };
    Size::new(
        clamp(size.width, spec.min_w, spec.fixed_w),
        clamp(size.height, spec.min_h, spec.fixed_h),
    )
}

/// [size_from_contents] followed by [apply_size_spec] for a whole group.
pub fn element_size(
    metrics: &dyn FontMetrics,
    spec: &ElementSpec,
    text: &str,
    icon: Size,
    mode: TextIconMode,
) -> Size {
    let s = size_from_contents(metrics, &spec.frame, &spec.label, text, icon, mode);
    apply_size_spec(s, &spec.size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::FixedMetrics;

    fn frame(width: i32) -> FrameSpec {
        FrameSpec {
            has_frame: true,
            element: "button".into(),
            width,
            top: width,
            bottom: width,
            left: width,
            right: width,
            ..Default::default()
        }
    }

    fn label() -> LabelSpec {
        LabelSpec {
            has_margin: true,
            hmargin: 4,
            vmargin: 2,
            tispace: 3,
            ..Default::default()
        }
    }

    #[test]
    fn text_beside_icon() {
        let m = FixedMetrics::default();
        let s = size_from_contents(
            &m,
            &frame(2),
            &label(),
            "&Ok",
            Size::new(16, 16),
            TextIconMode::TextBesideIcon,
        );
        // frame 4 + margins 8 + icon 16 + spacing 3 + "Ok" 14
        assert_eq!(s, Size::new(45, 4 + 4 + 16));
    }

    #[test]
    fn text_under_icon() {
        let m = FixedMetrics::default();
        let s = size_from_contents(
            &m,
            &frame(2),
            &label(),
            "Open",
            Size::new(16, 16),
            TextIconMode::TextUnderIcon,
        );
        assert_eq!(s, Size::new(4 + 8 + 28, 4 + 4 + 16 + 3 + 16));
    }

    #[test]
    fn spacing_needs_both_icon_and_text() {
        let m = FixedMetrics::default();
        let s = size_from_contents(&m, &frame(0), &label(), "ab", Size::default(), TextIconMode::TextBesideIcon);
        assert_eq!(s.width, 8 + 14);
    }

    #[test]
    fn shadow_adds_offset_and_depth() {
        let m = FixedMetrics::default();
        let mut l = label();
        l.has_shadow = true;
        l.xshift = 1;
        l.yshift = 1;
        l.depth = 2;
        let plain = size_from_contents(&m, &frame(1), &label(), "x", Size::default(), TextIconMode::TextOnly);
        let shadowed = size_from_contents(&m, &frame(1), &l, "x", Size::default(), TextIconMode::TextOnly);
        assert_eq!(shadowed, Size::new(plain.width + 3, plain.height + 3));
    }

    #[test]
    fn empty_contents_keep_a_minimal_interior() {
        let m = FixedMetrics::default();
        let s = size_from_contents(&m, &frame(3), &label(), "", Size::default(), TextIconMode::TextOnly);
        assert_eq!(s, Size::new(8, 8));
        let none = size_from_contents(&m, &FrameSpec::default(), &label(), "", Size::default(), TextIconMode::TextOnly);
        assert_eq!(none, Size::new(2, 2));
    }

    #[test]
    fn fixed_overrides_min() {
        let spec = SizeSpec {
            min_w: Some(100),
            fixed_w: Some(40),
            min_h: Some(30),
            fixed_h: None,
        };
        assert_eq!(apply_size_spec(Size::new(70, 20), &spec), Size::new(40, 30));
        assert_eq!(apply_size_spec(Size::new(70, 50), &spec), Size::new(40, 50));
    }
}
