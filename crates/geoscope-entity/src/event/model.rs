//! The polymorphic hazard event.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use geoscope_core::AppError;
use geoscope_core::result::AppResult;
use geoscope_core::types::{GeoPoint, HazardCategory};

use super::id::EventId;
use super::severity::Severity;
use crate::earthquake::EarthquakeDetails;
use crate::volcano::VolcanoDetails;
use crate::wildfire::WildfireDetails;

/// Discriminant of [`EventDetails`], serialized as the `kind` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// Earthquake.
    Earthquake,
    /// Volcanic eruption.
    Volcano,
    /// Wildfire.
    Wildfire,
}

impl EventKind {
    /// Return the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Earthquake => "earthquake",
            Self::Volcano => "volcano",
            Self::Wildfire => "wildfire",
        }
    }

    /// The feed category producing this kind.
    pub fn category(&self) -> HazardCategory {
        match self {
            Self::Earthquake => HazardCategory::Earthquakes,
            Self::Volcano => HazardCategory::Volcanoes,
            Self::Wildfire => HazardCategory::Wildfires,
        }
    }
}

impl From<HazardCategory> for EventKind {
    fn from(category: HazardCategory) -> Self {
        match category {
            HazardCategory::Earthquakes => Self::Earthquake,
            HazardCategory::Volcanoes => Self::Volcano,
            HazardCategory::Wildfires => Self::Wildfire,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Variant-specific attributes of an event.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum EventDetails {
    /// Earthquake attributes.
    Earthquake(EarthquakeDetails),
    /// Volcano attributes.
    Volcano(VolcanoDetails),
    /// Wildfire attributes.
    Wildfire(WildfireDetails),
}

impl EventDetails {
    /// The discriminant of this variant.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Earthquake(_) => EventKind::Earthquake,
            Self::Volcano(_) => EventKind::Volcano,
            Self::Wildfire(_) => EventKind::Wildfire,
        }
    }
}

/// Everything needed to construct an [`Event`].
#[derive(Debug, Clone)]
pub struct NewEvent {
    /// Event name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Instant the event began.
    pub start_date: DateTime<Utc>,
    /// Instant the event ended, if it has.
    pub end_date: Option<DateTime<Utc>>,
    /// Computed severity.
    pub severity: Severity,
    /// Where the event happened.
    pub location: Option<GeoPoint>,
    /// Upstream provider identifier.
    pub source_id: Option<String>,
    /// Provider page for the event.
    pub url: Option<String>,
    /// Variant attributes.
    pub details: EventDetails,
}

/// A hazard event snapshot.
///
/// Fields are private: the invariants below hold for every instance.
///
/// - `severity` lies in `[0, 10]`
/// - `end_date`, when set, is not before `start_date`
/// - `updated_at` moves forward on every mutation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    id: EventId,
    name: String,
    description: String,
    start_date: DateTime<Utc>,
    end_date: Option<DateTime<Utc>>,
    severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<GeoPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    #[serde(flatten)]
    details: EventDetails,
}

impl Event {
    /// Construct an event with an unassigned id.
    pub fn new(new: NewEvent) -> AppResult<Self> {
        check_dates(new.start_date, new.end_date)?;

        let now = Utc::now();
        Ok(Self {
            id: EventId::UNASSIGNED,
            name: new.name,
            description: new.description,
            start_date: new.start_date,
            end_date: new.end_date,
            severity: new.severity,
            location: new.location,
            source_id: new.source_id,
            url: new.url,
            created_at: now,
            updated_at: now,
            details: new.details,
        })
    }

    /// Identifier.
    pub fn id(&self) -> EventId {
        self.id
    }

    /// Name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Start instant.
    pub fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    /// End instant; `None` while the event is ongoing.
    pub fn end_date(&self) -> Option<DateTime<Utc>> {
        self.end_date
    }

    /// Whether the event has no end date yet.
    pub fn is_ongoing(&self) -> bool {
        self.end_date.is_none()
    }

    /// Severity score.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Location.
    pub fn location(&self) -> Option<GeoPoint> {
        self.location
    }

    /// Upstream provider identifier.
    pub fn source_id(&self) -> Option<&str> {
        self.source_id.as_deref()
    }

    /// Provider page.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Construction instant.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Last mutation instant.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Variant discriminant.
    pub fn kind(&self) -> EventKind {
        self.details.kind()
    }

    /// Variant attributes.
    pub fn details(&self) -> &EventDetails {
        &self.details
    }

    /// Assign the identifier.
    pub fn assign_id(&mut self, id: EventId) {
        self.id = id;
        self.touch();
    }

    /// Set or clear the end date. Rejects an end before the start.
    pub fn set_end_date(&mut self, end_date: Option<DateTime<Utc>>) -> AppResult<()> {
        check_dates(self.start_date, end_date)?;
        self.end_date = end_date;
        self.touch();
        Ok(())
    }

    /// Mutate the variant attributes in place.
    pub fn update_details(&mut self, f: impl FnOnce(&mut EventDetails)) {
        f(&mut self.details);
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now().max(self.updated_at);
    }
}

fn check_dates(start: DateTime<Utc>, end: Option<DateTime<Utc>>) -> AppResult<()> {
    match end {
        Some(end) if end < start => Err(AppError::record_incomplete(format!(
            "End date {end} precedes start date {start}"
        ))),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::earthquake::{FaultType, MagnitudeType};
    use crate::wildfire::{AreaUnit, WildfireDetails};
    use chrono::{Duration, TimeZone};

    fn tohoku() -> NewEvent {
        let start = Utc.with_ymd_and_hms(2011, 3, 11, 5, 46, 0).unwrap();
        NewEvent {
            name: "Tohoku Earthquake".to_string(),
            description: "Major earthquake off the coast of Japan".to_string(),
            start_date: start,
            end_date: Some(start + Duration::minutes(6)),
            severity: Severity::new(9.0),
            location: Some(GeoPoint {
                longitude: 142.37,
                latitude: 38.3,
            }),
            source_id: Some("official20110311054624120_30".to_string()),
            url: None,
            details: EventDetails::Earthquake(EarthquakeDetails::new(
                9.1,
                MagnitudeType::Moment,
                29.0,
                FaultType::Subduction,
                true,
            )),
        }
    }

    #[test]
    fn test_new_event_is_unassigned() {
        let event = Event::new(tohoku()).unwrap();
        assert_eq!(event.id(), EventId::UNASSIGNED);
        assert_eq!(event.id().value(), -1);
        assert_eq!(event.kind(), EventKind::Earthquake);
        assert_eq!(event.created_at(), event.updated_at());
    }

    #[test]
    fn test_rejects_end_before_start() {
        let mut new = tohoku();
        new.end_date = Some(new.start_date - Duration::hours(1));
        assert!(Event::new(new).is_err());
    }

    #[test]
    fn test_mutation_bumps_updated_at() {
        let mut event = Event::new(tohoku()).unwrap();
        let before = event.updated_at();
        event.assign_id(EventId::new(7));
        assert_eq!(event.id().value(), 7);
        assert!(event.updated_at() >= before);
        assert!(event.set_end_date(None).is_ok());
        assert!(event.is_ongoing());
    }

    #[test]
    fn test_set_end_date_keeps_order_invariant() {
        let mut event = Event::new(tohoku()).unwrap();
        let start = event.start_date();
        assert!(event.set_end_date(Some(start - Duration::seconds(1))).is_err());
        assert!(event.end_date().is_some());
    }

    #[test]
    fn test_serializes_flat_with_kind_tag() {
        let mut event = Event::new(tohoku()).unwrap();
        event.assign_id(EventId::new(1));
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["kind"], "earthquake");
        assert_eq!(json["id"], 1);
        assert_eq!(json["magnitude"], 9.1);
        assert_eq!(json["magnitudeType"], "Moment");
        assert_eq!(json["tsunamiGenerated"], true);
        assert!(json.get("startDate").is_some());
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn test_update_details_clamps_containment() {
        let start = Utc::now();
        let mut event = Event::new(NewEvent {
            name: "Creek Fire".to_string(),
            description: String::new(),
            start_date: start,
            end_date: None,
            severity: Severity::new(4.0),
            location: None,
            source_id: None,
            url: None,
            details: EventDetails::Wildfire(WildfireDetails::new(
                1200.0,
                AreaUnit::Acres,
                "Lightning",
                40.0,
                "Chaparral",
            )),
        })
        .unwrap();

        event.update_details(|details| {
            if let EventDetails::Wildfire(fire) = details {
                fire.set_containment_percent(150.0);
            }
        });

        match event.details() {
            EventDetails::Wildfire(fire) => assert_eq!(fire.containment_percent(), 100.0),
            other => panic!("unexpected variant {:?}", other.kind()),
        }
    }
}
