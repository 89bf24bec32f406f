// SPDX-License-Identifier: LGPL-3.0-only

//! Layout direction, orientation and the host layout tree.

mod direction;
mod tree;

pub use direction::{LayoutDirection, Orientation};
pub use tree::{
    GridPosition, LayoutId, LayoutInspector, LayoutItem, LayoutKind, LayoutTree, Spacing, WidgetId,
    WidgetRef, WidgetTag,
};
