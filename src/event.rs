//! Pointer events fed into the tray and actions handed back to the host.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// A drag-related pointer event, as reported by the rendering collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PointerEvent {
    /// The user picked up the item at `index`.
    DragStart { index: usize },
    /// The pointer moved; `position` is in global space.
    Move { position: Point },
    /// The pointer entered the drop region of the item at `target`.
    Hover { target: usize },
    /// The item was released over the slot at `target`.
    Drop { target: usize },
    /// The drag ended without a valid drop target.
    Cancel,
}

/// Anything that can hand the tray its pending pointer events in order.
pub trait PointerEventSource {
    /// Next pending event, or `None` when drained.
    fn next_event(&mut self) -> Option<PointerEvent>;
}

impl PointerEventSource for VecDeque<PointerEvent> {
    fn next_event(&mut self) -> Option<PointerEvent> {
        self.pop_front()
    }
}

/// Actions returned from event handlers for the host to process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Item views changed; the host should repaint.
    RenderNeeded,
    /// The pointer crossed the tray's boundary.
    OutsideChanged { outside: bool },
    /// A hover swap previewed the dragged item at a new slot.
    SwapPreviewed { from: usize, to: usize },
    /// A drop committed a reorder. The host callback has already run.
    Reordered { from: usize, to: usize },
}
