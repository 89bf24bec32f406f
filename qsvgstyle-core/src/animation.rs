// SPDX-License-Identifier: LGPL-3.0-only

//! Busy progress bar animation.
//!
//! Progress bars without a known value show a moving chunk. The host calls
//! [ProgressAnimations::show] and [ProgressAnimations::hide] from the widget
//! show/hide/destroy events and [ProgressAnimations::tick] every
//! [PROGRESS_TICK_MS] while [ProgressAnimations::is_running] is true.

use std::collections::HashMap;

use qsvgstyle_theme::tweaks::{BusyDirection, BusyVariant};
use qsvgstyle_theme::CapsulePosition;

use crate::capsule::Capsule;
use crate::geometry::Rect;
use crate::layout::WidgetId;

/// Interval of the busy animation timer.
pub const PROGRESS_TICK_MS: u64 = 50;

/// Pixels a busy chunk advances per tick.
pub const PROGRESS_STEP: i32 = 2;

/// Animation offset of every visible busy progress bar.
#[derive(Debug, Default, Clone)]
pub struct ProgressAnimations {
    offsets: HashMap<WidgetId, i32>,
}

impl ProgressAnimations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start animating `widget` from offset 0.
    pub fn show(&mut self, widget: WidgetId) {
        self.offsets.insert(widget, 0);
        log::trace!("busy animation started for {:?}", widget);
    }

    /// Stop animating `widget`.
    pub fn hide(&mut self, widget: WidgetId) {
        if self.offsets.remove(&widget).is_some() {
            log::trace!("busy animation stopped for {:?}", widget);
        }
    }

    /// Forget a destroyed widget.
    pub fn destroy(&mut self, widget: WidgetId) {
        self.hide(widget);
    }

    /// Advance every animated bar. Returns the widgets to repaint.
    pub fn tick(&mut self) -> Vec<WidgetId> {
        self.offsets
            .iter_mut()
            .map(|(id, offset)| {
                *offset = offset.wrapping_add(PROGRESS_STEP);
                *id
            })
            .collect()
    }

    /// Current offset of `widget`, 0 when it is not animated.
    pub fn offset(&self, widget: WidgetId) -> i32 {
        self.offsets.get(&widget).copied().unwrap_or(0)
    }

    pub fn contains(&self, widget: WidgetId) -> bool {
        self.offsets.contains_key(&widget)
    }

    /// Whether the host timer needs to run.
    pub fn is_running(&self) -> bool {
        !self.offsets.is_empty()
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

/// One drawn piece of a busy indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusyPiece {
    pub rect: Rect,
    /// Capsule position of the piece's frame.
    pub capsule: Capsule,
    /// Shift of the interior pattern, used by [BusyVariant::FullLength].
    pub pattern_shift: i32,
}

impl BusyPiece {
    fn solo(rect: Rect) -> Self {
        Self {
            rect,
            capsule: Capsule::NONE,
            pattern_shift: 0,
        }
    }
}

/// Pieces of the busy indicator of a progress bar with contents `rect`.
///
/// `rect` is in canonical horizontal space. A wrapping chunk that crosses the
/// end of the bar is split in two capsule halves.
pub fn busy_pieces(
    rect: &Rect,
    offset: i32,
    chunk_width: i32,
    variant: BusyVariant,
    direction: BusyDirection,
) -> Vec<BusyPiece> {
    if rect.is_empty() {
        return Vec::new();
    }
    let chunk = chunk_width.clamp(1, rect.width);

    match variant {
        BusyVariant::Wrap => {
            let x = rect.x + offset.rem_euclid(rect.width);
            if x + chunk <= rect.right() {
                return vec![BusyPiece::solo(Rect::new(x, rect.y, chunk, rect.height))];
            }
            let tail = rect.right() - x;
            vec![
                BusyPiece {
                    rect: Rect::new(x, rect.y, tail, rect.height),
                    capsule: Capsule::at(CapsulePosition::End, CapsulePosition::Both),
                    pattern_shift: 0,
                },
                BusyPiece {
                    rect: Rect::new(rect.x, rect.y, chunk - tail, rect.height),
                    capsule: Capsule::at(CapsulePosition::Start, CapsulePosition::Both),
                    pattern_shift: 0,
                },
            ]
        }
        BusyVariant::BackAndForth => {
            let travel = rect.width - chunk;
            if travel <= 0 {
                return vec![BusyPiece::solo(*rect)];
            }
            let p = offset.rem_euclid(2 * travel);
            let pos = if p <= travel { p } else { 2 * travel - p };
            vec![BusyPiece::solo(Rect::new(rect.x + pos, rect.y, chunk, rect.height))]
        }
        BusyVariant::FullLength => {
            let shift = offset.rem_euclid(chunk);
            let shift = match direction {
                BusyDirection::Forward => shift,
                BusyDirection::Backward => (chunk - shift) % chunk,
            };
            vec![BusyPiece {
                rect: *rect,
                capsule: Capsule::NONE,
                pattern_shift: shift,
            }]
        }
    }
}
