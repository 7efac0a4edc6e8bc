//! Field extraction for each event variant.
//!
//! Each function reads the fields it needs from a [`RawRecord`], fails with
//! `RecordIncomplete` when a required one is missing, and falls back to
//! neutral values (`Unknown`, 0, empty text) for the rest.

use chrono::{DateTime, Utc};

use geoscope_core::error::AppError;
use geoscope_core::result::AppResult;
use geoscope_core::types::RawRecord;
use geoscope_entity::{
    AreaUnit, EarthquakeDetails, EventDetails, FaultType, MagnitudeType, NewEvent, Severity,
    VolcanoDetails, VolcanoType, WildfireDetails,
};

use crate::severity::{EarthquakeInputs, SeverityCalculator, VolcanoInputs, WildfireInputs};

const NAME_KEYS: &[&str] = &["title", "name"];
const DATE_KEYS: &[&str] = &["date", "time", "startDate"];
const POPULATION_KEYS: &[&str] = &["population", "exposedPopulation"];
const URL_KEYS: &[&str] = &["url", "link"];

/// Build a [`NewEvent`] for an earthquake record.
///
/// Required: magnitude (`mag`), origin time (`time`), and a place or title.
/// Depth comes from the third geometry coordinate.
pub fn earthquake(record: &RawRecord, calculator: &SeverityCalculator) -> AppResult<NewEvent> {
    let magnitude = required(record.f64_any(&["mag", "magnitude"]), "magnitude")?;
    let start = required(record.instant_any(&["time", "date"]), "time")?;
    let place = record.str_any(&["place"]);
    let title = record.str_any(NAME_KEYS);
    let name = required(title.or(place), "place")?.to_string();

    let depth = record
        .first_position()
        .and_then(|p| p.get(2).copied())
        .or_else(|| record.f64_any(&["depth"]))
        .unwrap_or(0.0);
    let magnitude_type = record
        .str_any(&["magType"])
        .map(MagnitudeType::from_code)
        .unwrap_or_default();
    let fault_type = record
        .str_any(&["faultType", "mechanism"])
        .map(FaultType::parse_lenient)
        .unwrap_or_default();
    let tsunami = record.bool_any(&["tsunami"]).unwrap_or(false);

    let details = EarthquakeDetails::new(magnitude, magnitude_type, depth, fault_type, tsunami);
    let severity = calculator.earthquake(&EarthquakeInputs {
        magnitude,
        depth_km: details.depth(),
        tsunami,
        population: record.f64_any(POPULATION_KEYS),
    });

    Ok(new_event(
        record,
        name,
        place.unwrap_or_default().to_string(),
        start,
        Some(start),
        severity,
        EventDetails::Earthquake(details),
    ))
}

/// Build a [`NewEvent`] for a volcano record.
///
/// Required: name and date. The VEI defaults to 0 when not reported.
pub fn volcano(record: &RawRecord, calculator: &SeverityCalculator) -> AppResult<NewEvent> {
    let name = required(record.str_any(NAME_KEYS), "name")?.to_string();
    let start = required(record.instant_any(DATE_KEYS), "date")?;

    let vei = record
        .f64_any(&["vei", "explosivityIndex"])
        .map(|v| v.round().clamp(0.0, 8.0) as u8)
        .unwrap_or(0);
    let volcano_type = VolcanoType::parse_lenient(
        record.str_any(&["volcanoType", "type"]).unwrap_or(&name),
    );
    let magma = record
        .f64_any(&["magmaComposition", "silica"])
        .unwrap_or(0.0);
    let height = record.f64_any(&["eruptionHeight", "plumeHeight"]);
    let tsunami = record.bool_any(&["tsunami"]);

    let details = VolcanoDetails::new(
        volcano_type,
        vei,
        magma,
        height.unwrap_or(0.0),
        tsunami.unwrap_or(false),
    );
    let severity = calculator.volcano(&VolcanoInputs {
        vei: details.vei(),
        eruption_height_m: height,
        population: record.f64_any(POPULATION_KEYS),
        pyroclastic_flow: record.bool_any(&["pyroclastic", "pyroclasticFlow"]),
        lahar: record.bool_any(&["lahar"]),
        tsunami,
    });

    Ok(new_event(
        record,
        name,
        description(record),
        start,
        record.instant_any(&["closed", "endDate"]),
        severity,
        EventDetails::Volcano(details),
    ))
}

/// Build a [`NewEvent`] for a wildfire record.
///
/// Required: name, date, and burned area. The unit defaults to acres.
pub fn wildfire(record: &RawRecord, calculator: &SeverityCalculator) -> AppResult<NewEvent> {
    let name = required(record.str_any(NAME_KEYS), "name")?.to_string();
    let start = required(record.instant_any(DATE_KEYS), "date")?;
    let area = required(
        record.f64_any(&["magnitudeValue", "areaBurned", "acres"]),
        "burned area",
    )?;

    let unit = record
        .str_any(&["magnitudeUnit", "areaUnit"])
        .and_then(|u| u.parse::<AreaUnit>().ok())
        .unwrap_or_default();
    let containment = record
        .f64_any(&["containmentPercent", "containment", "percentContained"])
        .unwrap_or(0.0);

    let details = WildfireDetails::new(
        area,
        unit,
        record.str_any(&["cause"]).unwrap_or_default(),
        containment,
        record
            .str_any(&["vegetationType", "fuel"])
            .unwrap_or_default(),
    );
    let severity = calculator.wildfire(&WildfireInputs {
        area_hectares: details.area_hectares(),
        containment_percent: details.containment_percent(),
        population: record.f64_any(POPULATION_KEYS),
        spread_rate_ha_per_hour: record.f64_any(&["spreadRate"]),
    });

    Ok(new_event(
        record,
        name,
        description(record),
        start,
        record.instant_any(&["closed", "endDate"]),
        severity,
        EventDetails::Wildfire(details),
    ))
}

fn required<T>(value: Option<T>, field: &str) -> AppResult<T> {
    value.ok_or_else(|| AppError::record_incomplete(format!("Record is missing '{field}'")))
}

fn description(record: &RawRecord) -> String {
    record
        .str_any(&["description"])
        .unwrap_or_default()
        .to_string()
}

fn new_event(
    record: &RawRecord,
    name: String,
    description: String,
    start_date: DateTime<Utc>,
    end_date: Option<DateTime<Utc>>,
    severity: Severity,
    details: EventDetails,
) -> NewEvent {
    NewEvent {
        name,
        description,
        start_date,
        end_date,
        severity,
        location: record.point(),
        source_id: record.provider_id(),
        url: record.str_any(URL_KEYS).map(str::to_string),
        details,
    }
}
