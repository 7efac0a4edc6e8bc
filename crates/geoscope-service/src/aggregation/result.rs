//! Aggregation results.

use serde::Serialize;

use geoscope_core::types::{HazardCategory, Warning};
use geoscope_entity::Event;

/// Events of a single category.
#[derive(Debug, Clone, Default)]
pub struct CategoryResult {
    /// Events in adapter delivery order.
    pub events: Vec<Event>,
    /// Non-fatal problems, e.g. skipped records.
    pub warnings: Vec<Warning>,
}

/// Combined payload keyed by category. Failed categories are `None` and
/// left out of the serialized object.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CombinedEvents {
    /// Earthquake events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earthquakes: Option<Vec<Event>>,
    /// Volcano events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volcanoes: Option<Vec<Event>>,
    /// Wildfire events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wildfires: Option<Vec<Event>>,
}

impl CombinedEvents {
    /// Store the events of `category`.
    pub fn insert(&mut self, category: HazardCategory, events: Vec<Event>) {
        *self.slot_mut(category) = Some(events);
    }

    /// Events of `category`, if it succeeded.
    pub fn get(&self, category: HazardCategory) -> Option<&[Event]> {
        match category {
            HazardCategory::Earthquakes => self.earthquakes.as_deref(),
            HazardCategory::Volcanoes => self.volcanoes.as_deref(),
            HazardCategory::Wildfires => self.wildfires.as_deref(),
        }
    }

    fn slot_mut(&mut self, category: HazardCategory) -> &mut Option<Vec<Event>> {
        match category {
            HazardCategory::Earthquakes => &mut self.earthquakes,
            HazardCategory::Volcanoes => &mut self.volcanoes,
            HazardCategory::Wildfires => &mut self.wildfires,
        }
    }
}

/// Result of a combined request.
#[derive(Debug, Clone, Default)]
pub struct CombinedResult {
    /// Events of every category that succeeded.
    pub data: CombinedEvents,
    /// One entry per failed category plus any skip counts.
    pub warnings: Vec<Warning>,
}
