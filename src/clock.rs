//! Injected time source.
//!
//! The tray never reads the system clock or spawns timers itself. Hosts hand
//! it a [`Clock`]; tests use [`ManualClock`] to step time deterministically,
//! and a tokio-driven host uses [`TokioClock`]. Callbacks run on the same
//! thread as pointer events, so they may freely touch `Rc`/`Cell` state.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use std::time::{Duration, Instant};

use tokio::task::LocalSet;

/// A deferred unit of work.
pub type Callback = Box<dyn FnOnce() + 'static>;

/// Time source plus one-shot timers on the host's event loop.
pub trait Clock {
    /// Current instant.
    fn now(&self) -> Instant;

    /// Run `callback` once, no earlier than `delay` from now.
    fn schedule_after(&self, delay: Duration, callback: Callback);
}

// =============================================================================
// MANUAL CLOCK
// =============================================================================

struct Timer {
    due: Duration,
    seq: u64,
    callback: Callback,
}

/// Clock that only moves when told to. Timers fire inside [`ManualClock::advance`].
pub struct ManualClock {
    origin: Instant,
    elapsed: Cell<Duration>,
    pending: RefCell<Vec<Timer>>,
    next_seq: Cell<u64>,
}

impl fmt::Debug for ManualClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualClock")
            .field("elapsed", &self.elapsed.get())
            .field("pending", &self.pending.borrow().len())
            .finish_non_exhaustive()
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self { origin: Instant::now(), elapsed: Cell::new(Duration::ZERO), pending: RefCell::new(Vec::new()), next_seq: Cell::new(0) }
    }

    /// Time advanced since construction.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed.get()
    }

    /// Number of timers that have not fired yet.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Move time forward by `by`, firing due timers in deadline order.
    ///
    /// A callback that schedules another timer due within the window sees it
    /// fire during the same call.
    pub fn advance(&self, by: Duration) {
        let target = self.elapsed.get() + by;
        while let Some(timer) = self.take_next_due(target) {
            self.elapsed.set(timer.due);
            (timer.callback)();
        }
        self.elapsed.set(target);
    }

    fn take_next_due(&self, target: Duration) -> Option<Timer> {
        let mut pending = self.pending.borrow_mut();
        let idx = pending
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= target)
            .min_by_key(|(_, t)| (t.due, t.seq))
            .map(|(i, _)| i)?;
        Some(pending.remove(idx))
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.elapsed.get()
    }

    fn schedule_after(&self, delay: Duration, callback: Callback) {
        let seq = self.next_seq.get();
        self.next_seq.set(seq + 1);
        self.pending.borrow_mut().push(Timer { due: self.elapsed.get() + delay, seq, callback });
    }
}

// =============================================================================
// TOKIO CLOCK
// =============================================================================

/// Clock backed by the tokio timer.
///
/// Timers are spawned onto the clock's own [`LocalSet`] (the tray is
/// single-threaded and its callbacks are not `Send`), so scheduling works from
/// any context. They only make progress while the host drives that set, for
/// example with `clock.local_set().run_until(..)` inside a tokio runtime.
#[derive(Debug, Clone, Default)]
pub struct TokioClock {
    local: Rc<LocalSet>,
}

impl TokioClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Share a set the host already drives.
    #[must_use]
    pub fn with_local_set(local: Rc<LocalSet>) -> Self {
        Self { local }
    }

    /// The set timers are spawned onto.
    #[must_use]
    pub fn local_set(&self) -> &LocalSet {
        &self.local
    }
}

impl Clock for TokioClock {
    fn now(&self) -> Instant {
        tokio::time::Instant::now().into_std()
    }

    fn schedule_after(&self, delay: Duration, callback: Callback) {
        self.local.spawn_local(async move {
            tokio::time::sleep(delay).await;
            callback();
        });
    }
}
