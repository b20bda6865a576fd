//! Swap debouncer: rate limiting and mutual exclusion for hover swaps.
//!
//! DESIGN
//! ======
//! A sweep across the row produces a burst of hover signals. Two rules keep
//! the preview readable:
//! - Rate limit: a swap is only admitted once the debounce window has passed
//!   since the previous admitted swap.
//! - Mutual exclusion: while a swap's visual transition runs, no other swap
//!   is admitted, whatever the window says.
//!
//! The lock is released by a timer on the injected [`Clock`]. The timer holds
//! only a `Weak` handle to the timing cell plus the epoch it was armed in, so
//! it becomes a no-op once the tray is dropped or [`SwapDebouncer::reset`]
//! has moved the epoch on.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::clock::Clock;
use crate::config::TrayConfig;

/// Why a swap request was not admitted. None of these are faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SwapRejected {
    #[error("swap source and target are the same slot")]
    SameIndex,
    #[error("swap requested {since_last:?} after the previous one (window {window:?})")]
    Debounced { since_last: Duration, window: Duration },
    #[error("previous swap is still animating")]
    Animating,
}

#[derive(Debug, Default)]
struct SwapTiming {
    last_swap: Cell<Option<Instant>>,
    animating: Cell<bool>,
    epoch: Cell<u64>,
}

/// Admission control for hover swaps. One per tray.
pub struct SwapDebouncer {
    timing: Rc<SwapTiming>,
    clock: Rc<dyn Clock>,
    window: Duration,
    visual: Duration,
}

impl SwapDebouncer {
    #[must_use]
    pub fn new(clock: Rc<dyn Clock>, cfg: &TrayConfig) -> Self {
        Self { timing: Rc::new(SwapTiming::default()), clock, window: cfg.swap_debounce(), visual: cfg.swap_visual() }
    }

    /// Decide whether a swap from `from` to `to` may happen now.
    ///
    /// On success the swap is recorded and the lock armed; the caller must
    /// then perform the mutation.
    pub fn admit(&self, from: usize, to: usize) -> Result<(), SwapRejected> {
        self.admit_at(from, to, self.clock.now())
    }

    fn admit_at(&self, from: usize, to: usize, now: Instant) -> Result<(), SwapRejected> {
        if from == to {
            return Err(SwapRejected::SameIndex);
        }
        if let Some(last) = self.timing.last_swap.get() {
            let since_last = now.saturating_duration_since(last);
            if since_last < self.window {
                return Err(SwapRejected::Debounced { since_last, window: self.window });
            }
        }
        if self.timing.animating.get() {
            return Err(SwapRejected::Animating);
        }

        self.timing.last_swap.set(Some(now));
        self.timing.animating.set(true);
        let epoch = self.timing.epoch.get();
        let weak = Rc::downgrade(&self.timing);
        self.clock.schedule_after(
            self.visual,
            Box::new(move || {
                let Some(timing) = weak.upgrade() else {
                    tracing::trace!("swap lock release skipped: tray dropped");
                    return;
                };
                if timing.epoch.get() != epoch {
                    tracing::trace!(epoch, "swap lock release skipped: stale epoch");
                    return;
                }
                timing.animating.set(false);
            }),
        );
        Ok(())
    }

    /// Whether a swap's visual transition still holds the lock.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.timing.animating.get()
    }

    /// Instant of the most recently admitted swap.
    #[must_use]
    pub fn last_swap(&self) -> Option<Instant> {
        self.timing.last_swap.get()
    }

    /// Forget all timing state. Timers armed before the reset become no-ops.
    pub fn reset(&self) {
        self.timing.epoch.set(self.timing.epoch.get() + 1);
        self.timing.last_swap.set(None);
        self.timing.animating.set(false);
    }
}
