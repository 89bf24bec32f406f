// SPDX-License-Identifier: LGPL-3.0-only

//! Text measurement and layout.
//!
//! The size engine measures through [FontMetrics]. [ParleyText] implements it
//! with Parley and also draws text into a Vello scene; [FixedMetrics] is a
//! fixed-advance stand-in for hosts that measure elsewhere.

use std::borrow::Cow;
use std::cell::RefCell;

use parley::fontique::{Collection, CollectionOptions};
use parley::{Alignment as TextAlign, FontContext, Layout, LayoutContext, StyleProperty};
use vello::kurbo::Affine;
use vello::peniko::{Brush, Color, Fill};
use vello::Scene;

use crate::geometry::{aligned_rect, Alignment, Rect, Size};
use crate::layout::LayoutDirection;

/// Measures text in pixels.
pub trait FontMetrics {
    /// Advance width of a single line.
    fn text_width(&self, line: &str) -> i32;

    /// Height of one line, including leading.
    fn line_height(&self) -> i32;
}

/// Remove `&` accelerator markers; `&&` becomes a literal `&`.
pub fn strip_mnemonic(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '&' {
            if chars.peek() == Some(&'&') {
                out.push('&');
                chars.next();
            }
            continue;
        }
        out.push(c);
    }
    Cow::Owned(out)
}

/// Bounding size of `text` with accelerators removed.
///
/// Lines are stacked: the width is the widest line, the height the sum of
/// the line heights.
pub fn text_size(metrics: &dyn FontMetrics, text: &str) -> Size {
    if text.is_empty() {
        return Size::default();
    }
    let text = strip_mnemonic(text);
    let mut width = 0;
    let mut height = 0;
    for line in text.split('\n') {
        width = width.max(metrics.text_width(line));
        height += metrics.line_height();
    }
    Size::new(width, height)
}

/// Every character advances by the same width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedMetrics {
    pub char_width: i32,
    pub line_height: i32,
}

impl Default for FixedMetrics {
    fn default() -> Self {
        Self {
            char_width: 7,
            line_height: 16,
        }
    }
}

impl FontMetrics for FixedMetrics {
    fn text_width(&self, line: &str) -> i32 {
        line.chars().count() as i32 * self.char_width
    }

    fn line_height(&self) -> i32 {
        self.line_height
    }
}

/// Parley-backed text measurement and drawing.
pub struct ParleyText {
    font_cx: RefCell<FontContext>,
    layout_cx: RefCell<LayoutContext<[u8; 4]>>,
    font_size: f32,
    hint: bool,
}

impl ParleyText {
    /// Create a text context with the system fonts loaded.
    pub fn new(font_size: f32) -> Self {
        let font_cx = FontContext {
            collection: Collection::new(CollectionOptions {
                system_fonts: true,
                ..Default::default()
            }),
            source_cache: Default::default(),
        };
        Self {
            font_cx: RefCell::new(font_cx),
            layout_cx: RefCell::new(LayoutContext::new()),
            font_size,
            hint: false,
        }
    }

    /// Enable glyph hinting.
    pub fn with_hinting(mut self, hint: bool) -> Self {
        self.hint = hint;
        self
    }

    /// Point size used for every layout.
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    fn layout(&self, text: &str) -> Layout<[u8; 4]> {
        let mut font_cx = self.font_cx.borrow_mut();
        let mut layout_cx = self.layout_cx.borrow_mut();
        let mut builder = layout_cx.ranged_builder(&mut font_cx, text, 1.0, true);
        builder.push_default(StyleProperty::FontSize(self.font_size));
        let mut layout = builder.build(text);
        layout.break_all_lines(None);
        layout.align(None, TextAlign::Start, Default::default());
        layout
    }

    /// Draw `text` aligned inside `rect`, below `transform`.
    pub fn draw(
        &self,
        scene: &mut Scene,
        transform: Affine,
        rect: &Rect,
        alignment: Alignment,
        text: &str,
        color: Color,
    ) {
        if text.is_empty() || rect.is_empty() {
            return;
        }
        let layout = self.layout(text);
        let block = Size::new(layout.width().ceil() as i32, layout.height().ceil() as i32);
        let at = aligned_rect(LayoutDirection::Ltr, alignment, block, rect);
        let transform = transform * Affine::translate((at.x as f64, at.y as f64));
        let brush = Brush::Solid(color);

        for line in layout.lines() {
            for item in line.items() {
                let parley::PositionedLayoutItem::GlyphRun(glyph_run) = item else {
                    continue;
                };

                let mut x = glyph_run.offset();
                let y = glyph_run.baseline();
                let run = glyph_run.run();
                let glyph_xform = run
                    .synthesis()
                    .skew()
                    .map(|angle| Affine::skew(angle.to_radians().tan() as f64, 0.0));

                scene
                    .draw_glyphs(run.font())
                    .brush(&brush)
                    .hint(self.hint)
                    .transform(transform)
                    .glyph_transform(glyph_xform)
                    .font_size(run.font_size())
                    .normalized_coords(run.normalized_coords())
                    .draw(
                        Fill::NonZero,
                        glyph_run.glyphs().map(|glyph| {
                            let gx = x + glyph.x;
                            let gy = y - glyph.y;
                            x += glyph.advance;
                            vello::Glyph {
                                id: glyph.id as _,
                                x: gx,
                                y: gy,
                            }
                        }),
                    );
            }
        }
    }
}

impl Default for ParleyText {
    fn default() -> Self {
        Self::new(13.0)
    }
}

impl FontMetrics for ParleyText {
    fn text_width(&self, line: &str) -> i32 {
        if line.is_empty() {
            return 0;
        }
        self.layout(line).width().ceil() as i32
    }

    fn line_height(&self) -> i32 {
        self.layout("Ag").height().ceil() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mnemonics_are_removed() {
        assert_eq!(strip_mnemonic("&Open"), "Open");
        assert_eq!(strip_mnemonic("Save && Quit"), "Save & Quit");
        assert_eq!(strip_mnemonic("plain"), "plain");
        assert!(matches!(strip_mnemonic("plain"), Cow::Borrowed(_)));
    }

    #[test]
    fn multi_line_text_stacks() {
        let metrics = FixedMetrics {
            char_width: 5,
            line_height: 10,
        };
        assert_eq!(text_size(&metrics, "&File\nOpen recent"), Size::new(55, 20));
        assert_eq!(text_size(&metrics, ""), Size::default());
    }
}
