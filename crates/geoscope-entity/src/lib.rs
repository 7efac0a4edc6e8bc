//! # geoscope-entity
//!
//! Domain models for Geoscope. An [`Event`] is one hazard occurrence with a
//! common header (identity, dates, severity) and a variant body selected by
//! its `kind` tag. Entities are built once per feed record and returned to
//! callers as immutable snapshots; they are never persisted.

pub mod earthquake;
pub mod event;
pub mod volcano;
pub mod wildfire;

pub use earthquake::{EarthquakeDetails, FaultType, MagnitudeType};
pub use event::{Event, EventDetails, EventId, EventKind, NewEvent, Severity};
pub use volcano::{VolcanoDetails, VolcanoType};
pub use wildfire::{AreaUnit, WildfireDetails};
