//! Stable item keys.
//!
//! Renderers attach in-flight transitions to a key rather than to a position,
//! so a key is handed out once when its item enters the tray and then travels
//! with that item through every reorder. Keys are never derived from item
//! content; two equal items still get distinct keys.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of one item for animation purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemKey(pub u64);

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item-{}", self.0)
    }
}

/// Monotonic key source owned by one tray.
#[derive(Debug, Default)]
pub struct KeyGenerator {
    next: u64,
}

impl KeyGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out a key that has never been returned by this generator.
    pub fn next_key(&mut self) -> ItemKey {
        let key = ItemKey(self.next);
        self.next += 1;
        key
    }
}
