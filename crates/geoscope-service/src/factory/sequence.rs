//! Event identifier sequence.

use std::sync::atomic::{AtomicI64, Ordering};

use geoscope_entity::EventId;

/// Hands out strictly increasing event ids, starting at 1.
#[derive(Debug)]
pub struct IdSequence {
    next: AtomicI64,
}

impl IdSequence {
    /// Create a sequence whose first id is 1.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Create a sequence whose first id is `first`.
    pub fn starting_at(first: i64) -> Self {
        Self {
            next: AtomicI64::new(first),
        }
    }

    /// Take the next id.
    pub fn next_id(&self) -> EventId {
        EventId::new(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}
