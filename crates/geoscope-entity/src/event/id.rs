//! Event identity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Process-local event identifier.
///
/// Identifiers are assigned from a monotonic sequence when an event is
/// built and carry no meaning across restarts. `-1` marks an event that
/// has not been assigned one yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(i64);

impl EventId {
    /// The sentinel carried before an id is assigned.
    pub const UNASSIGNED: EventId = EventId(-1);

    /// Wrap a raw identifier.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// The raw identifier.
    pub fn value(&self) -> i64 {
        self.0
    }

    /// Whether an identifier has been assigned.
    pub fn is_assigned(&self) -> bool {
        self.0 >= 0
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::UNASSIGNED
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
