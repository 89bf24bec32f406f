// SPDX-License-Identifier: LGPL-3.0-only

//! Hooks around every render operation, used by theme debugging tools.

use std::cell::RefCell;

/// Render operation reported to a [RenderObserver].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderOp {
    Frame,
    Interior,
    Indicator,
    Label,
}

/// Receives begin/end notifications from the renderer.
///
/// `subject` is the element base name, or a `text:<text>/icon:<yes|no>`
/// summary for labels.
pub trait RenderObserver {
    fn begin(&self, op: RenderOp, subject: &str);
    fn end(&self, op: RenderOp, subject: &str);
}

/// One notification kept by [RenderLog].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderEvent {
    pub op: RenderOp,
    pub subject: String,
    pub begin: bool,
}

/// An observer keeping every notification in order.
#[derive(Debug, Default)]
pub struct RenderLog {
    events: RefCell<Vec<RenderEvent>>,
}

impl RenderLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the collected events.
    pub fn take(&self) -> Vec<RenderEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    fn push(&self, op: RenderOp, subject: &str, begin: bool) {
        self.events.borrow_mut().push(RenderEvent {
            op,
            subject: subject.to_string(),
            begin,
        });
    }
}

impl RenderObserver for RenderLog {
    fn begin(&self, op: RenderOp, subject: &str) {
        self.push(op, subject, true);
    }

    fn end(&self, op: RenderOp, subject: &str) {
        self.push(op, subject, false);
    }
}
