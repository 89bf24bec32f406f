// SPDX-License-Identifier: LGPL-3.0-only
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

/// Identity of a widget in the host toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(pub u64);

/// Identity of a layout inside a [LayoutInspector].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayoutId(pub usize);

/// Kind tag of a widget, assigned when the host wraps the widget.
///
/// Two widgets only merge into a capsule when their tags are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WidgetTag(Cow<'static, str>);

impl WidgetTag {
    /// Create a tag from a static name such as `"PushButton"`.
    pub const fn new(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Create a tag from an owned name.
    pub fn owned(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    /// The tag as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WidgetTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for WidgetTag {
    fn from(name: &'static str) -> Self {
        WidgetTag::new(name)
    }
}

/// A widget as seen by the style: identity plus kind tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WidgetRef {
    /// The widget identity.
    pub id: WidgetId,
    /// The widget kind.
    pub tag: WidgetTag,
}

impl WidgetRef {
    /// Create a new widget reference.
    pub fn new(id: u64, tag: impl Into<WidgetTag>) -> Self {
        Self {
            id: WidgetId(id),
            tag: tag.into(),
        }
    }
}

/// Arrangement of a layout's items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutKind {
    /// Items in a row.
    Horizontal,
    /// Items in a column.
    Vertical,
    /// Items in rows and columns.
    Grid,
}

/// Gaps between the items of a layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Spacing {
    /// Gap between columns.
    pub horizontal: i32,
    /// Gap between rows.
    pub vertical: i32,
}

impl Spacing {
    /// Same gap on both axes, as used by box layouts.
    pub const fn uniform(spacing: i32) -> Self {
        Self {
            horizontal: spacing,
            vertical: spacing,
        }
    }

    /// Whether items touch on both axes.
    pub fn is_zero(&self) -> bool {
        self.horizontal == 0 && self.vertical == 0
    }
}

/// Cell of a grid item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPosition {
    pub row: usize,
    pub column: usize,
    pub row_span: usize,
    pub column_span: usize,
}

impl GridPosition {
    /// A single cell.
    pub const fn cell(row: usize, column: usize) -> Self {
        Self {
            row,
            column,
            row_span: 1,
            column_span: 1,
        }
    }

    /// Whether the item covers more than one cell.
    pub fn is_spanning(&self) -> bool {
        self.row_span != 1 || self.column_span != 1
    }
}

/// One entry of a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutItem {
    /// A widget.
    Widget(WidgetRef),
    /// A nested layout.
    Layout(LayoutId),
    /// Empty space.
    Spacer,
}

impl LayoutItem {
    /// The widget of this item, if it is one.
    pub fn widget(&self) -> Option<&WidgetRef> {
        match self {
            LayoutItem::Widget(w) => Some(w),
            _ => None,
        }
    }
}

/// Read access to the host's layout tree.
///
/// Only used to find out which neighbors a widget touches.
pub trait LayoutInspector {
    /// Top-level layout of the widget's parent, if the parent has one.
    fn parent_layout(&self, widget: WidgetId) -> Option<LayoutId>;

    /// Arrangement of a layout.
    fn kind(&self, layout: LayoutId) -> LayoutKind;

    /// Gaps between the items of a layout.
    fn spacing(&self, layout: LayoutId) -> Spacing;

    /// Number of items.
    fn count(&self, layout: LayoutId) -> usize;

    /// Item at an index.
    fn item_at(&self, layout: LayoutId, index: usize) -> Option<LayoutItem>;

    /// Cell of the item at an index. `None` unless the layout is a grid.
    fn grid_position(&self, layout: LayoutId, index: usize) -> Option<GridPosition>;

    /// Item covering a grid cell. `None` unless the layout is a grid.
    fn item_at_position(&self, layout: LayoutId, row: usize, column: usize) -> Option<LayoutItem>;

    /// Number of rows of a grid; `1` for other layouts.
    fn row_count(&self, layout: LayoutId) -> usize;

    /// Number of columns of a grid; `1` for other layouts.
    fn column_count(&self, layout: LayoutId) -> usize;
}

#[derive(Debug, Clone)]
struct LayoutNode {
    kind: LayoutKind,
    spacing: Spacing,
    parent: Option<LayoutId>,
    items: Vec<(LayoutItem, Option<GridPosition>)>,
}

/// An in-memory layout tree.
///
/// Hosts without an inspectable layout system can mirror their arrangement
/// here; it is also what the tests use.
///
/// ```rust
/// use qsvgstyle_core::layout::{LayoutTree, WidgetRef};
///
/// let mut tree = LayoutTree::new();
/// let row = tree.hbox(0);
/// tree.add_widget(row, WidgetRef::new(1, "PushButton"));
/// tree.add_widget(row, WidgetRef::new(2, "PushButton"));
/// assert_eq!(tree.layout_of(qsvgstyle_core::layout::WidgetId(2)), Some(row));
/// ```
#[derive(Debug, Clone, Default)]
pub struct LayoutTree {
    layouts: Vec<LayoutNode>,
    owners: HashMap<WidgetId, LayoutId>,
}

impl LayoutTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, kind: LayoutKind, spacing: Spacing) -> LayoutId {
        self.layouts.push(LayoutNode {
            kind,
            spacing,
            parent: None,
            items: Vec::new(),
        });
        LayoutId(self.layouts.len() - 1)
    }

    /// Add a horizontal box layout.
    pub fn hbox(&mut self, spacing: i32) -> LayoutId {
        self.push(LayoutKind::Horizontal, Spacing::uniform(spacing))
    }

    /// Add a vertical box layout.
    pub fn vbox(&mut self, spacing: i32) -> LayoutId {
        self.push(LayoutKind::Vertical, Spacing::uniform(spacing))
    }

    /// Add a grid layout.
    pub fn grid(&mut self, horizontal_spacing: i32, vertical_spacing: i32) -> LayoutId {
        self.push(
            LayoutKind::Grid,
            Spacing {
                horizontal: horizontal_spacing,
                vertical: vertical_spacing,
            },
        )
    }

    /// Append a widget to a box layout.
    pub fn add_widget(&mut self, layout: LayoutId, widget: WidgetRef) {
        self.owners.insert(widget.id, layout);
        if let Some(node) = self.layouts.get_mut(layout.0) {
            node.items.push((LayoutItem::Widget(widget), None));
        }
    }

    /// Place a widget in a grid cell.
    pub fn add_grid_widget(&mut self, layout: LayoutId, widget: WidgetRef, position: GridPosition) {
        self.owners.insert(widget.id, layout);
        if let Some(node) = self.layouts.get_mut(layout.0) {
            node.items.push((LayoutItem::Widget(widget), Some(position)));
        }
    }

    /// Append empty space to a box layout.
    pub fn add_spacer(&mut self, layout: LayoutId) {
        if let Some(node) = self.layouts.get_mut(layout.0) {
            node.items.push((LayoutItem::Spacer, None));
        }
    }

    /// Nest `child` inside `parent`.
    pub fn add_layout(&mut self, parent: LayoutId, child: LayoutId) {
        if let Some(node) = self.layouts.get_mut(child.0) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.layouts.get_mut(parent.0) {
            node.items.push((LayoutItem::Layout(child), None));
        }
    }

    /// Layout directly holding a widget.
    pub fn layout_of(&self, widget: WidgetId) -> Option<LayoutId> {
        self.owners.get(&widget).copied()
    }

    fn node(&self, layout: LayoutId) -> Option<&LayoutNode> {
        self.layouts.get(layout.0)
    }
}

impl LayoutInspector for LayoutTree {
    fn parent_layout(&self, widget: WidgetId) -> Option<LayoutId> {
        let mut layout = self.layout_of(widget)?;
        while let Some(parent) = self.node(layout).and_then(|n| n.parent) {
            layout = parent;
        }
        Some(layout)
    }

    fn kind(&self, layout: LayoutId) -> LayoutKind {
        self.node(layout).map_or(LayoutKind::Horizontal, |n| n.kind)
    }

    fn spacing(&self, layout: LayoutId) -> Spacing {
        self.node(layout).map(|n| n.spacing).unwrap_or_default()
    }

    fn count(&self, layout: LayoutId) -> usize {
        self.node(layout).map_or(0, |n| n.items.len())
    }

    fn item_at(&self, layout: LayoutId, index: usize) -> Option<LayoutItem> {
        self.node(layout)?.items.get(index).map(|(item, _)| item.clone())
    }

    fn grid_position(&self, layout: LayoutId, index: usize) -> Option<GridPosition> {
        self.node(layout)?.items.get(index).and_then(|(_, pos)| *pos)
    }

    fn item_at_position(&self, layout: LayoutId, row: usize, column: usize) -> Option<LayoutItem> {
        self.node(layout)?
            .items
            .iter()
            .find(|(_, pos)| {
                pos.is_some_and(|p| {
                    (p.row..p.row + p.row_span.max(1)).contains(&row)
                        && (p.column..p.column + p.column_span.max(1)).contains(&column)
                })
            })
            .map(|(item, _)| item.clone())
    }

    fn row_count(&self, layout: LayoutId) -> usize {
        let Some(node) = self.node(layout) else {
            return 0;
        };
        if node.kind != LayoutKind::Grid {
            return 1;
        }
        node.items
            .iter()
            .filter_map(|(_, pos)| pos.map(|p| p.row + p.row_span.max(1)))
            .max()
            .unwrap_or(0)
    }

    fn column_count(&self, layout: LayoutId) -> usize {
        let Some(node) = self.node(layout) else {
            return 0;
        };
        if node.kind != LayoutKind::Grid {
            return 1;
        }
        node.items
            .iter()
            .filter_map(|(_, pos)| pos.map(|p| p.column + p.column_span.max(1)))
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parent_layout_is_the_outermost() {
        let mut tree = LayoutTree::new();
        let outer = tree.vbox(4);
        let inner = tree.hbox(0);
        tree.add_layout(outer, inner);
        tree.add_widget(inner, WidgetRef::new(7, "PushButton"));

        assert_eq!(tree.layout_of(WidgetId(7)), Some(inner));
        assert_eq!(tree.parent_layout(WidgetId(7)), Some(outer));
        assert_eq!(tree.parent_layout(WidgetId(8)), None);
    }

    #[test]
    fn grid_dimensions_follow_spans() {
        let mut tree = LayoutTree::new();
        let grid = tree.grid(0, 0);
        tree.add_grid_widget(grid, WidgetRef::new(1, "A"), GridPosition::cell(0, 0));
        tree.add_grid_widget(
            grid,
            WidgetRef::new(2, "A"),
            GridPosition {
                row: 1,
                column: 0,
                row_span: 1,
                column_span: 3,
            },
        );
        assert_eq!(tree.row_count(grid), 2);
        assert_eq!(tree.column_count(grid), 3);
        assert_eq!(
            tree.item_at_position(grid, 1, 2).and_then(|i| i.widget().map(|w| w.id)),
            Some(WidgetId(2))
        );
        assert!(tree.item_at_position(grid, 0, 1).is_none());
    }
}
