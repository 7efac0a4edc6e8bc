//! Event header, identity, and severity.

pub mod id;
pub mod model;
pub mod severity;

pub use id::EventId;
pub use model::{Event, EventDetails, EventKind, NewEvent};
pub use severity::Severity;
