// SPDX-License-Identifier: LGPL-3.0-only

/// Text and layout direction of a widget.
///
/// Under right-to-left layouts frames, indicators and labels are mirrored
/// inside the widget bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayoutDirection {
    /// Left-to-right (LTR) layout direction.
    #[default]
    Ltr,

    /// Right-to-left (RTL) layout direction.
    ///
    /// Used for languages like Arabic, Hebrew, and Urdu.
    Rtl,

    /// Direction inherited from the host. Treated as LTR.
    Auto,
}

impl LayoutDirection {
    /// Check if this is RTL direction.
    pub fn is_rtl(&self) -> bool {
        matches!(self, LayoutDirection::Rtl)
    }

    /// Check if this is LTR direction.
    pub fn is_ltr(&self) -> bool {
        !self.is_rtl()
    }

    /// Get the resolved direction (Auto becomes Ltr).
    pub fn resolve(&self) -> LayoutDirection {
        match self {
            LayoutDirection::Auto => LayoutDirection::Ltr,
            other => *other,
        }
    }

    /// The opposite direction.
    pub fn flipped(&self) -> LayoutDirection {
        if self.is_rtl() {
            LayoutDirection::Ltr
        } else {
            LayoutDirection::Rtl
        }
    }

    /// Mirror the position of an item inside a parent span for RTL.
    ///
    /// `x` and `item_width` describe the item, `parent_x` and `parent_width`
    /// the span it is mirrored in. For LTR, returns the original x.
    pub fn mirror_position(&self, x: i32, item_width: i32, parent_x: i32, parent_width: i32) -> i32 {
        if self.is_rtl() {
            2 * parent_x + parent_width - x - item_width
        } else {
            x
        }
    }
}

/// Main axis of a widget.
///
/// Vertical widgets are laid out in a transposed coordinate space and drawn
/// rotated back onto their bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Check if this is the vertical orientation.
    pub fn is_vertical(&self) -> bool {
        matches!(self, Orientation::Vertical)
    }

    /// Check if this is the horizontal orientation.
    pub fn is_horizontal(&self) -> bool {
        !self.is_vertical()
    }

    /// Pick the horizontal or the vertical value.
    pub fn select<T>(&self, horizontal: T, vertical: T) -> T {
        match self {
            Orientation::Horizontal => horizontal,
            Orientation::Vertical => vertical,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_resolves_to_ltr() {
        assert_eq!(LayoutDirection::Auto.resolve(), LayoutDirection::Ltr);
        assert!(LayoutDirection::Auto.is_ltr());
        assert_eq!(LayoutDirection::Rtl.flipped(), LayoutDirection::Ltr);
    }

    #[test]
    fn mirror_position_keeps_items_inside() {
        let rtl = LayoutDirection::Rtl;
        assert_eq!(rtl.mirror_position(0, 10, 0, 100), 90);
        assert_eq!(rtl.mirror_position(90, 10, 0, 100), 0);
        assert_eq!(rtl.mirror_position(25, 10, 20, 100), 105);
        assert_eq!(LayoutDirection::Ltr.mirror_position(25, 10, 20, 100), 25);
    }
}
