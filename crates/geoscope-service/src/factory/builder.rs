//! The event factory.

use std::sync::Arc;

use tracing::debug;

use geoscope_core::result::AppResult;
use geoscope_core::types::RawRecord;
use geoscope_entity::{Event, EventKind};

use super::records;
use super::sequence::IdSequence;
use crate::severity::SeverityCalculator;

/// Events built from one feed response, plus the number of records left out.
#[derive(Debug, Clone, Default)]
pub struct FactoryBatch {
    /// Events in feed order.
    pub events: Vec<Event>,
    /// Records that lacked a required field.
    pub skipped: usize,
}

/// Converts raw records into scored, identified events.
#[derive(Debug, Clone)]
pub struct EventFactory {
    calculator: Arc<SeverityCalculator>,
    ids: Arc<IdSequence>,
}

impl EventFactory {
    /// Create a factory scoring with `calculator` and numbering from `ids`.
    pub fn new(calculator: Arc<SeverityCalculator>, ids: Arc<IdSequence>) -> Self {
        Self { calculator, ids }
    }

    /// Build one event of `kind` from `record`.
    ///
    /// Fails with `RecordIncomplete` when a required field is absent. The id
    /// is only drawn once the event is valid.
    pub fn build(&self, kind: EventKind, record: &RawRecord) -> AppResult<Event> {
        let new = match kind {
            EventKind::Earthquake => records::earthquake(record, &self.calculator)?,
            EventKind::Volcano => records::volcano(record, &self.calculator)?,
            EventKind::Wildfire => records::wildfire(record, &self.calculator)?,
        };

        let mut event = Event::new(new)?;
        event.assign_id(self.ids.next_id());
        Ok(event)
    }

    /// Build every record, skipping and counting the incomplete ones.
    pub fn build_batch(&self, kind: EventKind, records: Vec<RawRecord>) -> FactoryBatch {
        let mut batch = FactoryBatch {
            events: Vec::with_capacity(records.len()),
            skipped: 0,
        };

        for record in &records {
            match self.build(kind, record) {
                Ok(event) => batch.events.push(event),
                Err(e) => {
                    debug!(
                        kind = %kind,
                        source_id = record.provider_id().as_deref().unwrap_or("-"),
                        reason = %e.message,
                        "Skipping feed record"
                    );
                    batch.skipped += 1;
                }
            }
        }
        batch
    }
}

impl Default for EventFactory {
    fn default() -> Self {
        Self::new(
            Arc::new(SeverityCalculator::default()),
            Arc::new(IdSequence::new()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geoscope_entity::{EventDetails, EventId};
    use serde_json::json;

    fn quake(id: &str, mag: Option<f64>) -> RawRecord {
        RawRecord::new(json!({
            "id": id,
            "properties": { "mag": mag, "place": "Test Ridge", "time": 1700000000000_i64 },
            "geometry": { "type": "Point", "coordinates": [10.0, 20.0, 15.0] }
        }))
    }

    #[test]
    fn test_build_assigns_increasing_ids() {
        let factory = EventFactory::default();
        let first = factory.build(EventKind::Earthquake, &quake("a", Some(3.0))).unwrap();
        let second = factory.build(EventKind::Earthquake, &quake("b", Some(4.0))).unwrap();
        assert!(first.id().is_assigned());
        assert!(second.id().value() > first.id().value());
        assert!(matches!(first.details(), EventDetails::Earthquake(_)));
    }

    #[test]
    fn test_batch_skips_incomplete_records_in_order() {
        let factory = EventFactory::default();
        let batch = factory.build_batch(
            EventKind::Earthquake,
            vec![quake("a", Some(3.0)), quake("b", None), quake("c", Some(5.5))],
        );

        assert_eq!(batch.skipped, 1);
        let sources: Vec<&str> = batch.events.iter().filter_map(|e| e.source_id()).collect();
        assert_eq!(sources, vec!["a", "c"]);
        assert_eq!(batch.events[0].id(), EventId::new(1));
        assert_eq!(batch.events[1].id(), EventId::new(2));
    }

    #[test]
    fn test_end_before_start_is_skipped() {
        let factory = EventFactory::default();
        let record = RawRecord::new(json!({
            "properties": {
                "title": "Kilauea", "date": "2024-06-03T00:00:00Z", "closed": "2024-06-01T00:00:00Z"
            }
        }));
        let batch = factory.build_batch(EventKind::Volcano, vec![record]);
        assert_eq!(batch.skipped, 1);
        assert!(batch.events.is_empty());
    }

    #[test]
    fn test_every_event_is_on_scale() {
        let factory = EventFactory::default();
        let batch = factory.build_batch(
            EventKind::Earthquake,
            (0..20).map(|i| quake(&i.to_string(), Some(f64::from(i) * 0.6))).collect(),
        );
        assert_eq!(batch.events.len(), 20);
        for event in &batch.events {
            let score = event.severity().value();
            assert!((0.0..=10.0).contains(&score));
        }
    }
}
