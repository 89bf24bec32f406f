// SPDX-License-Identifier: LGPL-3.0-only

//! Widget state flags and the SVG status names derived from them.

use bitflags::bitflags;

bitflags! {
    /// State of the widget being drawn.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct State: u32 {
        const ENABLED = 1 << 0;
        const RAISED = 1 << 1;
        const SUNKEN = 1 << 2;
        const OFF = 1 << 3;
        const NO_CHANGE = 1 << 4;
        const ON = 1 << 5;
        const DOWN_ARROW = 1 << 6;
        const HORIZONTAL = 1 << 7;
        const HAS_FOCUS = 1 << 8;
        const TOP = 1 << 9;
        const BOTTOM = 1 << 10;
        const FOCUS_AT_BORDER = 1 << 11;
        const AUTO_RAISE = 1 << 12;
        const MOUSE_OVER = 1 << 13;
        const UP_ARROW = 1 << 14;
        const SELECTED = 1 << 15;
        const ACTIVE = 1 << 16;
        const WINDOW = 1 << 17;
        const OPEN = 1 << 18;
        const CHILDREN = 1 << 19;
        const ITEM = 1 << 20;
        const SIBLING = 1 << 21;
        const EDITING = 1 << 22;
        const READ_ONLY = 1 << 23;
    }
}

impl State {
    /// Whether the widget accepts input.
    pub fn is_enabled(self) -> bool {
        self.contains(State::ENABLED)
    }

    /// Checked or selected.
    pub fn is_toggled(self) -> bool {
        self.intersects(State::ON | State::SELECTED)
    }
}

/// Status part of an element id.
///
/// Plain widgets use `normal`, `hovered`, `pressed`, `toggled`, `disabled`
/// and `disabled-toggled`. Containers (frames, menus, tool bars, ...) only
/// have `normal`, `toggled`, `disabled` and `disabled-toggled`.
pub fn status_str(state: State, container: bool) -> &'static str {
    if !state.is_enabled() {
        return if state.is_toggled() {
            "disabled-toggled"
        } else {
            "disabled"
        };
    }
    if container {
        return if state.is_toggled() { "toggled" } else { "normal" };
    }
    if state.contains(State::SUNKEN) {
        "pressed"
    } else if state.is_toggled() {
        "toggled"
    } else if state.contains(State::MOUSE_OVER) {
        "hovered"
    } else {
        "normal"
    }
}

/// Status of check box and radio indicators.
///
/// The check mark itself carries the checked state, so these only know
/// `normal`, `hovered`, `toggled` (pressed) and `disabled`.
pub fn check_status_str(state: State) -> &'static str {
    if !state.is_enabled() {
        "disabled"
    } else if state.contains(State::SUNKEN) {
        "toggled"
    } else if state.contains(State::MOUSE_OVER) {
        "hovered"
    } else {
        "normal"
    }
}

/// Check mark infix of a check indicator: `checked-`, `tristate-` or nothing.
pub fn check_mark_str(state: State) -> &'static str {
    if state.contains(State::ON) {
        "checked-"
    } else if state.contains(State::NO_CHANGE) {
        "tristate-"
    } else {
        ""
    }
}
