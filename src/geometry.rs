//! Geometry: points, rects, slot positions and the outside-the-tray test.
//!
//! Slots are laid out left to right from the tray's local origin with a fixed
//! stride of `item_width + spacing`. Nothing here reads layout state; callers
//! pass in whatever box the renderer reports at the moment of the query.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

/// A point in either global (window) or tray-local space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Axis-aligned box in global space. `x`/`y` are the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    #[must_use]
    pub fn left(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn top(&self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Grow the box by `dx` on the left and right and `dy` on the top and bottom.
    #[must_use]
    pub fn dilate(&self, dx: f64, dy: f64) -> Rect {
        Rect { x: self.x - dx, y: self.y - dy, width: self.width + 2.0 * dx, height: self.height + 2.0 * dy }
    }

    /// Inclusive containment: points on the edge count as inside.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left() && p.x <= self.right() && p.y >= self.top() && p.y <= self.bottom()
    }

    /// Convert a global point into this box's local coordinates.
    #[must_use]
    pub fn to_local(&self, global: Point) -> Point {
        Point { x: global.x - self.x, y: global.y - self.y }
    }
}

/// Whether `pointer` has left the tray's hit region.
///
/// The hit region is `container` dilated by half an item on each side, so the
/// classification does not flicker while the pointer hovers at the edge.
#[must_use]
pub fn is_outside(pointer: Point, container: Rect, item_width: f64, item_height: f64) -> bool {
    !container
        .dilate(item_width / 2.0, item_height / 2.0)
        .contains(pointer)
}

/// [`is_outside`] for a container that may not be laid out yet.
///
/// An unknown box is never "outside".
#[must_use]
pub fn is_outside_opt(pointer: Point, container: Option<Rect>, item_width: f64, item_height: f64) -> bool {
    container.is_some_and(|rect| is_outside(pointer, rect, item_width, item_height))
}

/// Local x of the center of slot `index`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn slot_center_x(index: usize, item_width: f64, spacing: f64) -> f64 {
    let stride = item_width + spacing;
    index as f64 * stride + stride / 2.0
}

/// Slot whose stride contains `local_x`, clamped to the row. `None` for an empty row.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn slot_at(local_x: f64, len: usize, item_width: f64, spacing: f64) -> Option<usize> {
    if len == 0 || !local_x.is_finite() {
        return None;
    }
    let stride = item_width + spacing;
    if local_x <= 0.0 {
        return Some(0);
    }
    let raw = (local_x / stride).floor() as usize;
    Some(raw.min(len - 1))
}
