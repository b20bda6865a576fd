//! Drag session: the ephemeral record of one in-progress drag.
//!
//! A session is created when a drag starts and dropped when it ends, so "no
//! session" and "idle" are the same thing. The tray keeps at most one.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::config::TrayConfig;
use crate::geometry::{self, Point, Rect};

/// Lifecycle phase of the tray's drag interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    /// No drag in progress.
    #[default]
    Idle,
    /// An item is held under the pointer.
    Dragging,
}

/// What a pointer update changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerUpdate {
    /// The move passed the jitter filter and was recorded.
    pub moved: bool,
    /// The outside-the-tray classification flipped.
    pub outside_changed: bool,
}

/// State of an active drag.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    /// Index the item occupied when the drag started.
    origin_index: usize,
    /// Index the item occupies now; follows hover swaps.
    dragged_index: usize,
    /// Last accepted pointer position in tray-local space.
    pointer: Option<Point>,
    /// Last accepted pointer position in global space, used by the jitter filter.
    last_global: Option<Point>,
    is_outside: bool,
}

impl DragSession {
    /// Begin dragging the item at `index`.
    #[must_use]
    pub fn start(index: usize) -> Self {
        Self { origin_index: index, dragged_index: index, pointer: None, last_global: None, is_outside: false }
    }

    #[must_use]
    pub fn origin_index(&self) -> usize {
        self.origin_index
    }

    #[must_use]
    pub fn dragged_index(&self) -> usize {
        self.dragged_index
    }

    /// Pointer position in tray-local space, once one has been recorded.
    #[must_use]
    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    #[must_use]
    pub fn is_outside(&self) -> bool {
        self.is_outside
    }

    /// Keep `dragged_index` on the same item after the item at `from` was
    /// moved to `to`. Items between the two slots shift by one toward `from`.
    pub fn track_move(&mut self, from: usize, to: usize) {
        let dragged = self.dragged_index;
        self.dragged_index = if dragged == from {
            to
        } else if from < dragged && dragged <= to {
            dragged - 1
        } else if to <= dragged && dragged < from {
            dragged + 1
        } else {
            dragged
        };
    }

    /// Record a pointer move reported in global space.
    ///
    /// Moves shorter than the jitter threshold are dropped. Positions are only
    /// recorded once the container box is known, so the first move after
    /// layout arrives always lands.
    pub fn update_pointer(&mut self, global: Point, container: Option<Rect>, cfg: &TrayConfig) -> PointerUpdate {
        if let Some(last) = self.last_global {
            if global.distance_to(last) < cfg.jitter_threshold {
                return PointerUpdate::default();
            }
        }
        if let Some(rect) = container {
            self.last_global = Some(global);
            self.pointer = Some(rect.to_local(global));
        }

        let outside = geometry::is_outside_opt(global, container, cfg.item_width, cfg.item_height);
        let outside_changed = outside != self.is_outside;
        if outside_changed {
            self.is_outside = outside;
        }
        PointerUpdate { moved: true, outside_changed }
    }
}
