//! Default tunables for the tray. [`crate::config::TrayConfig`] starts from these.

// ── Item sizing ─────────────────────────────────────────────────

/// Resting item width in layout units.
pub const ITEM_WIDTH: f64 = 50.0;

/// Resting item height in layout units.
pub const ITEM_HEIGHT: f64 = 50.0;

/// Upper bound on a magnified item's width.
pub const MAX_ITEM_WIDTH: f64 = 75.0;

/// Upper bound on a magnified item's height.
pub const MAX_ITEM_HEIGHT: f64 = 75.0;

/// Gap between neighbouring items.
pub const ITEM_SPACING: f64 = 8.0;

// ── Magnification ───────────────────────────────────────────────

/// Extra scale added at the peak (pointer over the item's center).
pub const MAX_SCALE_INCREASE: f64 = 0.7;

/// Pointer distance beyond which an item stays at rest scale.
pub const MAX_INFLUENCE_DISTANCE: f64 = 100.0;

// ── Timing (milliseconds) ───────────────────────────────────────

/// Duration the renderer should use when animating a committed reorder.
pub const REORDER_ANIMATION_MS: u64 = 300;

/// How long a hover swap's visual transition holds the swap lock.
pub const SWAP_VISUAL_MS: u64 = 200;

/// Minimum gap between two accepted hover swaps.
pub const SWAP_DEBOUNCE_MS: u64 = 150;

// ── Pointer ─────────────────────────────────────────────────────

/// Pointer moves shorter than this are treated as jitter.
pub const POINTER_JITTER_THRESHOLD: f64 = 5.0;
