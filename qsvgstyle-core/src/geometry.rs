// SPDX-License-Identifier: LGPL-3.0-only

//! Integer widget geometry.
//!
//! Widget rectangles live on the pixel grid, so the engines work with `i32`
//! rectangles and only convert to [vello::kurbo] types when painting.
//! A [Rect] covers `x..x + width` and `y..y + height`; its size is never
//! negative.

use bitflags::bitflags;
use vello::kurbo;

use crate::layout::LayoutDirection;

/// A point on the pixel grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Convert to a kurbo point.
    pub fn to_kurbo(self) -> kurbo::Point {
        kurbo::Point::new(self.x as f64, self.y as f64)
    }
}

/// A size on the pixel grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    /// Create a size. Negative sides are kept, see [Size::is_valid].
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Whether both sides are non-negative.
    pub fn is_valid(self) -> bool {
        self.width >= 0 && self.height >= 0
    }

    /// Whether one side is zero or negative.
    pub fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Component-wise maximum.
    pub fn expanded_to(self, other: Size) -> Size {
        Size::new(self.width.max(other.width), self.height.max(other.height))
    }

    /// Component-wise minimum.
    pub fn bounded_to(self, other: Size) -> Size {
        Size::new(self.width.min(other.width), self.height.min(other.height))
    }

    /// Swap width and height.
    pub fn transposed(self) -> Size {
        Size::new(self.height, self.width)
    }
}

/// Distances removed from each side of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Margins {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Margins {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Same margin on every side.
    pub const fn uniform(m: i32) -> Self {
        Self::new(m, m, m, m)
    }

    /// `left + right`
    pub fn horizontal(self) -> i32 {
        self.left + self.right
    }

    /// `top + bottom`
    pub fn vertical(self) -> i32 {
        self.top + self.bottom
    }
}

/// An axis-aligned rectangle on the pixel grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Create a rectangle; negative sizes are clamped to zero.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width: width.max(0),
            height: height.max(0),
        }
    }

    /// Rectangle at `origin` with `size`.
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// The empty rectangle at the origin.
    pub const EMPTY: Rect = Rect {
        x: 0,
        y: 0,
        width: 0,
        height: 0,
    };

    /// Whether the rectangle covers no pixel.
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Leftmost column.
    pub fn left(&self) -> i32 {
        self.x
    }

    /// Topmost row.
    pub fn top(&self) -> i32 {
        self.y
    }

    /// First column past the rectangle.
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// First row past the rectangle.
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Center, rounded towards the origin.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Swap the x and y axes.
    pub fn transposed(&self) -> Rect {
        Rect::new(self.y, self.x, self.height, self.width)
    }

    /// Move the edges by the given deltas; the size is clamped at zero.
    pub fn adjusted(&self, dx1: i32, dy1: i32, dx2: i32, dy2: i32) -> Rect {
        Rect::new(
            self.x + dx1,
            self.y + dy1,
            self.width - dx1 + dx2,
            self.height - dy1 + dy2,
        )
    }

    /// Shrink by `m` on each side.
    pub fn margins_removed(&self, m: Margins) -> Rect {
        self.adjusted(m.left, m.top, -m.right, -m.bottom)
    }

    /// Grow by `m` on each side.
    pub fn margins_added(&self, m: Margins) -> Rect {
        self.adjusted(-m.left, -m.top, m.right, m.bottom)
    }

    pub fn translated(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Same rectangle with another size.
    pub fn with_size(&self, size: Size) -> Rect {
        Rect::new(self.x, self.y, size.width, size.height)
    }

    /// Square of side `min(width, height)` at the same origin.
    pub fn squared(&self) -> Rect {
        let side = self.width.min(self.height);
        Rect::new(self.x, self.y, side, side)
    }

    /// Whether the pixel at `p` is covered.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// Whether `other` lies completely inside.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.is_empty()
            || (other.x >= self.x
                && other.y >= self.y
                && other.right() <= self.right()
                && other.bottom() <= self.bottom())
    }

    /// Common area; empty when the rectangles do not overlap.
    pub fn intersected(&self, other: &Rect) -> Rect {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());
        if x1 <= x0 || y1 <= y0 {
            return Rect::EMPTY;
        }
        Rect::new(x0, y0, x1 - x0, y1 - y0)
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        !self.intersected(other).is_empty()
    }

    /// Smallest rectangle covering both; empty inputs are ignored.
    pub fn united(&self, other: &Rect) -> Rect {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        let x0 = self.x.min(other.x);
        let y0 = self.y.min(other.y);
        let x1 = self.right().max(other.right());
        let y1 = self.bottom().max(other.bottom());
        Rect::new(x0, y0, x1 - x0, y1 - y0)
    }

    /// Mirror horizontally inside `bounds`.
    pub fn mirrored_in(&self, bounds: &Rect) -> Rect {
        Rect::new(
            2 * bounds.x + bounds.width - self.x - self.width,
            self.y,
            self.width,
            self.height,
        )
    }

    /// Convert to a kurbo rectangle.
    pub fn to_kurbo(&self) -> kurbo::Rect {
        kurbo::Rect::new(
            self.x as f64,
            self.y as f64,
            self.right() as f64,
            self.bottom() as f64,
        )
    }
}

bitflags! {
    /// Placement of a smaller item inside a rectangle.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Alignment: u16 {
        const LEFT = 0x0001;
        const RIGHT = 0x0002;
        const HCENTER = 0x0004;
        /// Left or right regardless of the layout direction.
        const ABSOLUTE = 0x0010;
        const TOP = 0x0020;
        const BOTTOM = 0x0040;
        const VCENTER = 0x0080;

        const CENTER = Self::HCENTER.bits() | Self::VCENTER.bits();
        const HORIZONTAL_MASK = Self::LEFT.bits() | Self::RIGHT.bits() | Self::HCENTER.bits() | Self::ABSOLUTE.bits();
        const VERTICAL_MASK = Self::TOP.bits() | Self::BOTTOM.bits() | Self::VCENTER.bits();
    }
}

impl Alignment {
    /// Swap left and right for right-to-left layouts, unless absolute.
    pub fn visual(self, direction: LayoutDirection) -> Alignment {
        if !direction.is_rtl() || self.contains(Alignment::ABSOLUTE) {
            return self;
        }
        let mut a = self;
        if self.contains(Alignment::LEFT) {
            a.remove(Alignment::LEFT);
            a.insert(Alignment::RIGHT);
        } else if self.contains(Alignment::RIGHT) {
            a.remove(Alignment::RIGHT);
            a.insert(Alignment::LEFT);
        }
        a
    }
}

/// Map a rectangle given in logical coordinates to screen coordinates.
///
/// Under right-to-left layouts `rect` is mirrored inside `bounds`.
pub fn visual_rect(direction: LayoutDirection, bounds: &Rect, rect: &Rect) -> Rect {
    if direction.is_rtl() {
        rect.mirrored_in(bounds)
    } else {
        *rect
    }
}

/// Place an item of `size` inside `container` following `alignment`.
pub fn aligned_rect(
    direction: LayoutDirection,
    alignment: Alignment,
    size: Size,
    container: &Rect,
) -> Rect {
    let alignment = alignment.visual(direction);
    let mut x = container.x;
    let mut y = container.y;

    if alignment.contains(Alignment::VCENTER) {
        y += container.height / 2 - size.height / 2;
    } else if alignment.contains(Alignment::BOTTOM) {
        y += container.height - size.height;
    }

    if alignment.contains(Alignment::RIGHT) {
        x += container.width - size.width;
    } else if alignment.contains(Alignment::HCENTER) {
        x += container.width / 2 - size.width / 2;
    }

    Rect::new(x, y, size.width, size.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_sizes_clamp() {
        let r = Rect::new(5, 5, -3, 4);
        assert_eq!(r.width, 0);
        assert!(r.is_empty());
        assert_eq!(Rect::new(0, 0, 10, 10).adjusted(6, 0, -6, 0).width, 0);
    }

    #[test]
    fn transposition_is_an_involution() {
        let r = Rect::new(3, 7, 40, 12);
        assert_eq!(r.transposed(), Rect::new(7, 3, 12, 40));
        assert_eq!(r.transposed().transposed(), r);
    }

    #[test]
    fn mirroring_stays_inside_bounds() {
        let bounds = Rect::new(10, 0, 100, 20);
        let r = Rect::new(10, 0, 30, 20);
        let m = visual_rect(LayoutDirection::Rtl, &bounds, &r);
        assert_eq!(m, Rect::new(80, 0, 30, 20));
        assert_eq!(visual_rect(LayoutDirection::Rtl, &bounds, &m), r);
        assert_eq!(visual_rect(LayoutDirection::Ltr, &bounds, &r), r);
    }

    #[test]
    fn aligned_rect_honours_direction() {
        let c = Rect::new(0, 0, 100, 50);
        let s = Size::new(20, 10);
        let left = Alignment::LEFT | Alignment::VCENTER;
        assert_eq!(aligned_rect(LayoutDirection::Ltr, left, s, &c), Rect::new(0, 20, 20, 10));
        assert_eq!(aligned_rect(LayoutDirection::Rtl, left, s, &c), Rect::new(80, 20, 20, 10));
        assert_eq!(
            aligned_rect(LayoutDirection::Rtl, left | Alignment::ABSOLUTE, s, &c),
            Rect::new(0, 20, 20, 10)
        );
        assert_eq!(
            aligned_rect(LayoutDirection::Ltr, Alignment::CENTER, s, &c),
            Rect::new(40, 20, 20, 10)
        );
    }

    #[test]
    fn intersection_and_union() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        assert_eq!(a.intersected(&b), Rect::new(5, 5, 5, 5));
        assert_eq!(a.united(&b), Rect::new(0, 0, 15, 15));
        assert!(a.intersected(&Rect::new(10, 0, 5, 5)).is_empty());
        assert_eq!(Rect::EMPTY.united(&a), a);
    }
}
