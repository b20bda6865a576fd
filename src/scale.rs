//! Proximity magnification.
//!
//! Items near the pointer grow. The factor rises from 1.0 at
//! `max_distance` to `1.0 + max_scale_increase` over the item's center,
//! following a quarter sine so both ends of the curve are flat.

#[cfg(test)]
#[path = "scale_test.rs"]
mod scale_test;

use std::f64::consts::FRAC_PI_2;

use crate::config::TrayConfig;
use crate::geometry;
use crate::session::DragSession;

/// Magnification factor for the item at `index`. Always `>= 1.0`.
///
/// Items stay at rest when there is no drag, when the pointer position is not
/// yet known, or when `index` is the item being dragged.
#[must_use]
pub fn scale_of(index: usize, session: Option<&DragSession>, cfg: &TrayConfig) -> f64 {
    let Some(session) = session else {
        return 1.0;
    };
    let Some(pointer) = session.pointer() else {
        return 1.0;
    };
    if index == session.dragged_index() {
        return 1.0;
    }

    let center_x = geometry::slot_center_x(index, cfg.item_width, cfg.spacing);
    let distance = (pointer.x - center_x).abs();
    if distance > cfg.max_distance {
        return 1.0;
    }

    let t = (cfg.max_distance - distance) / cfg.max_distance;
    1.0 + cfg.max_scale_increase * (t * FRAC_PI_2).sin()
}

/// Rendered extent of an item of resting size `base` at `scale`, capped at `max`.
#[must_use]
pub fn magnified_size(scale: f64, base: f64, max: f64) -> f64 {
    (base * scale).min(max)
}
