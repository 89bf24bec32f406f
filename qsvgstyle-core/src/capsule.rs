// SPDX-License-Identifier: LGPL-3.0-only

//! Capsule analysis.
//!
//! Same-kind widgets that touch each other in a layout (no spacing) are drawn
//! as one continuous control. For every axis a widget gets a
//! [CapsulePosition]: `Start` keeps only the leading edge, `End` only the
//! trailing one, `Middle` neither and `Both` draws the full frame.

use qsvgstyle_theme::{CapsulePosition, FrameSpec};

use crate::layout::{LayoutId, LayoutInspector, LayoutItem, LayoutKind, WidgetRef};

/// Result of [capsule_position].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capsule {
    /// Whether the widget takes part in a capsule.
    pub is_capsule: bool,
    /// Position along the horizontal axis.
    pub h: CapsulePosition,
    /// Position along the vertical axis.
    pub v: CapsulePosition,
}

impl Default for Capsule {
    fn default() -> Self {
        Self::NONE
    }
}

impl Capsule {
    /// Not part of a capsule.
    pub const NONE: Capsule = Capsule {
        is_capsule: false,
        h: CapsulePosition::Both,
        v: CapsulePosition::Both,
    };

    /// A capsule of one: every edge is drawn.
    pub const SOLO: Capsule = Capsule {
        is_capsule: true,
        h: CapsulePosition::Both,
        v: CapsulePosition::Both,
    };

    /// A capsule at the given position.
    pub const fn at(h: CapsulePosition, v: CapsulePosition) -> Self {
        Self {
            is_capsule: true,
            h,
            v,
        }
    }

    /// Copy the result into a frame spec for one draw call.
    pub fn apply(&self, frame: &mut FrameSpec) {
        frame.has_capsule = self.is_capsule;
        frame.capsule_h = self.h;
        frame.capsule_v = self.v;
    }
}

/// Position derived from which neighbors along one axis are of the same kind.
fn position(same_before: bool, same_after: bool) -> CapsulePosition {
    match (same_before, same_after) {
        (true, true) => CapsulePosition::Middle,
        (true, false) => CapsulePosition::End,
        (false, true) => CapsulePosition::Start,
        (false, false) => CapsulePosition::Both,
    }
}

fn same_kind(item: Option<LayoutItem>, widget: &WidgetRef) -> bool {
    item.as_ref()
        .and_then(LayoutItem::widget)
        .is_some_and(|other| other.tag == widget.tag)
}

/// Find the layout directly holding `widget`, searching nested layouts of `root`.
///
/// Returns the layout and the widget's index in it.
pub fn layout_for_widget(
    inspector: &dyn LayoutInspector,
    root: LayoutId,
    widget: &WidgetRef,
) -> Option<(LayoutId, usize)> {
    for index in 0..inspector.count(root) {
        match inspector.item_at(root, index) {
            Some(LayoutItem::Widget(w)) if w.id == widget.id => return Some((root, index)),
            Some(LayoutItem::Layout(child)) => {
                if let Some(found) = layout_for_widget(inspector, child, widget) {
                    return Some(found);
                }
            }
            _ => {}
        }
    }
    None
}

/// Derive the capsule position of `widget` from its neighbors.
///
/// Widgets outside any layout, in layouts with spacing, or spanning several
/// grid cells are never part of a capsule.
pub fn capsule_position(inspector: &dyn LayoutInspector, widget: &WidgetRef) -> Capsule {
    let Some(root) = inspector.parent_layout(widget.id) else {
        return Capsule::NONE;
    };
    let Some((layout, index)) = layout_for_widget(inspector, root, widget) else {
        return Capsule::NONE;
    };

    if !inspector.spacing(layout).is_zero() {
        return Capsule::NONE;
    }

    let count = inspector.count(layout);
    if count == 1 {
        return Capsule::SOLO;
    }

    let capsule = match inspector.kind(layout) {
        LayoutKind::Horizontal => {
            let before = index > 0 && same_kind(inspector.item_at(layout, index - 1), widget);
            let after = same_kind(inspector.item_at(layout, index + 1), widget);
            Capsule {
                is_capsule: before || after,
                h: position(before, after),
                v: CapsulePosition::Both,
            }
        }
        LayoutKind::Vertical => {
            let before = index > 0 && same_kind(inspector.item_at(layout, index - 1), widget);
            let after = same_kind(inspector.item_at(layout, index + 1), widget);
            Capsule {
                is_capsule: before || after,
                h: CapsulePosition::Both,
                v: position(before, after),
            }
        }
        LayoutKind::Grid => grid_capsule(inspector, layout, index, widget),
    };

    log::trace!("capsule of {} #{}: {:?}", widget.tag, widget.id.0, capsule);
    capsule
}

fn grid_capsule(
    inspector: &dyn LayoutInspector,
    layout: LayoutId,
    index: usize,
    widget: &WidgetRef,
) -> Capsule {
    let Some(cell) = inspector.grid_position(layout, index) else {
        return Capsule::NONE;
    };
    if cell.is_spanning() {
        return Capsule::NONE;
    }

    let rows = inspector.row_count(layout);
    let columns = inspector.column_count(layout);
    let (row, column) = (cell.row, cell.column);

    // A single row or column is a capsule along the other axis even without
    // same-kind neighbors.
    let mut is_capsule = rows == 1 || columns == 1;

    let h = if columns == 1 {
        CapsulePosition::Both
    } else {
        let before =
            column > 0 && same_kind(inspector.item_at_position(layout, row, column - 1), widget);
        let after = same_kind(inspector.item_at_position(layout, row, column + 1), widget);
        is_capsule |= before || after;
        position(before, after)
    };

    let v = if rows == 1 {
        CapsulePosition::Both
    } else {
        let before = row > 0 && same_kind(inspector.item_at_position(layout, row - 1, column), widget);
        let after = same_kind(inspector.item_at_position(layout, row + 1, column), widget);
        is_capsule |= before || after;
        position(before, after)
    };

    Capsule { is_capsule, h, v }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{GridPosition, LayoutTree};

    fn button(id: u64) -> WidgetRef {
        WidgetRef::new(id, "PushButton")
    }

    #[test]
    fn widget_without_layout_is_not_a_capsule() {
        let tree = LayoutTree::new();
        assert_eq!(capsule_position(&tree, &button(1)), Capsule::NONE);
    }

    #[test]
    fn spacing_breaks_the_capsule() {
        let mut tree = LayoutTree::new();
        let row = tree.hbox(6);
        tree.add_widget(row, button(1));
        tree.add_widget(row, button(2));
        assert!(!capsule_position(&tree, &button(1)).is_capsule);
    }

    #[test]
    fn other_kinds_break_the_run() {
        let mut tree = LayoutTree::new();
        let row = tree.hbox(0);
        tree.add_widget(row, button(1));
        tree.add_widget(row, WidgetRef::new(2, "LineEdit"));
        tree.add_widget(row, button(3));

        for id in [1, 3] {
            let c = capsule_position(&tree, &button(id));
            assert!(!c.is_capsule);
            assert_eq!(c.h, CapsulePosition::Both);
        }
    }

    #[test]
    fn vertical_run() {
        let mut tree = LayoutTree::new();
        let column = tree.vbox(0);
        tree.add_widget(column, button(1));
        tree.add_widget(column, button(2));

        assert_eq!(
            capsule_position(&tree, &button(1)),
            Capsule::at(CapsulePosition::Both, CapsulePosition::Start)
        );
        assert_eq!(
            capsule_position(&tree, &button(2)),
            Capsule::at(CapsulePosition::Both, CapsulePosition::End)
        );
    }

    #[test]
    fn nested_layouts_are_searched() {
        let mut tree = LayoutTree::new();
        let outer = tree.vbox(8);
        let row = tree.hbox(0);
        tree.add_layout(outer, row);
        tree.add_widget(row, button(1));
        tree.add_widget(row, button(2));

        assert_eq!(
            capsule_position(&tree, &button(2)),
            Capsule::at(CapsulePosition::End, CapsulePosition::Both)
        );
    }

    #[test]
    fn grid_axes_are_independent() {
        let mut tree = LayoutTree::new();
        let grid = tree.grid(0, 0);
        tree.add_grid_widget(grid, button(1), GridPosition::cell(0, 0));
        tree.add_grid_widget(grid, button(2), GridPosition::cell(0, 1));
        tree.add_grid_widget(grid, button(3), GridPosition::cell(1, 0));
        tree.add_grid_widget(grid, WidgetRef::new(4, "Label"), GridPosition::cell(1, 1));

        assert_eq!(
            capsule_position(&tree, &button(1)),
            Capsule::at(CapsulePosition::Start, CapsulePosition::Start)
        );
        assert_eq!(
            capsule_position(&tree, &button(2)),
            Capsule::at(CapsulePosition::End, CapsulePosition::Both)
        );
        assert_eq!(
            capsule_position(&tree, &button(3)),
            Capsule::at(CapsulePosition::Both, CapsulePosition::End)
        );
    }

    #[test]
    fn grid_asymmetric_spacing_disables_grouping() {
        let mut tree = LayoutTree::new();
        let grid = tree.grid(0, 3);
        tree.add_grid_widget(grid, button(1), GridPosition::cell(0, 0));
        tree.add_grid_widget(grid, button(2), GridPosition::cell(0, 1));
        assert_eq!(capsule_position(&tree, &button(1)), Capsule::NONE);
    }

    #[test]
    fn spanning_grid_items_are_excluded() {
        let mut tree = LayoutTree::new();
        let grid = tree.grid(0, 0);
        tree.add_grid_widget(grid, button(1), GridPosition::cell(0, 0));
        tree.add_grid_widget(
            grid,
            button(2),
            GridPosition {
                row: 0,
                column: 1,
                row_span: 2,
                column_span: 1,
            },
        );
        tree.add_grid_widget(grid, button(3), GridPosition::cell(1, 0));

        assert_eq!(capsule_position(&tree, &button(2)), Capsule::NONE);
        // Its neighbors still see it as a same-kind widget.
        assert_eq!(capsule_position(&tree, &button(1)).h, CapsulePosition::Start);
    }

    #[test]
    fn apply_overrides_the_frame() {
        let mut frame = FrameSpec::default();
        Capsule::at(CapsulePosition::Middle, CapsulePosition::Both).apply(&mut frame);
        assert!(frame.has_capsule);
        assert_eq!(frame.capsule_h, CapsulePosition::Middle);
    }
}
