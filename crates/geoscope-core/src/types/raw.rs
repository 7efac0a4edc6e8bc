//! Opaque feed records.
//!
//! A [`RawRecord`] is one GeoJSON-like feature as delivered by an upstream
//! feed: a `properties` block, a `geometry` block, and usually an `id`. The
//! accessors here validate single fields on demand; nothing checks the
//! record as a whole, since every provider shapes it differently.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A point on the globe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Longitude in degrees.
    pub longitude: f64,
    /// Latitude in degrees.
    pub latitude: f64,
}

/// One raw feature from an upstream feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord(Value);

impl RawRecord {
    /// Wrap a raw JSON feature.
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// The wrapped JSON value.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Unwrap into the JSON value.
    pub fn into_value(self) -> Value {
        self.0
    }

    /// Provider identifier, numeric ids included. The feature `id` wins
    /// over an `id` inside `properties`.
    pub fn provider_id(&self) -> Option<String> {
        let id = self.0.get("id").or_else(|| self.property("id"))?;
        match id {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// A non-null property by name.
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.0
            .get("properties")
            .and_then(|p| p.get(key))
            .filter(|v| !v.is_null())
    }

    /// A numeric property. Numeric strings are accepted.
    pub fn f64_any(&self, keys: &[&str]) -> Option<f64> {
        keys.iter().find_map(|k| {
            let number = match self.property(k)? {
                Value::Number(n) => n.as_f64(),
                Value::String(s) => s.trim().parse::<f64>().ok(),
                _ => None,
            };
            number.filter(|n| n.is_finite())
        })
    }

    /// A non-blank string property.
    pub fn str_any(&self, keys: &[&str]) -> Option<&str> {
        keys.iter().find_map(|k| {
            self.property(k)
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
        })
    }

    /// A boolean property. Feeds encode flags as booleans, `0`/`1`, or
    /// `"true"`/`"false"`.
    pub fn bool_any(&self, keys: &[&str]) -> Option<bool> {
        keys.iter().find_map(|k| match self.property(k)? {
            Value::Bool(b) => Some(*b),
            Value::Number(n) => n.as_f64().map(|n| n != 0.0),
            Value::String(s) => match s.trim().to_lowercase().as_str() {
                "true" | "yes" | "1" => Some(true),
                "false" | "no" | "0" => Some(false),
                _ => None,
            },
            _ => None,
        })
    }

    /// An instant property given either as epoch milliseconds or as an
    /// RFC 3339 string.
    pub fn instant_any(&self, keys: &[&str]) -> Option<DateTime<Utc>> {
        keys.iter().find_map(|k| match self.property(k)? {
            Value::Number(n) => n
                .as_i64()
                .and_then(|ms| Utc.timestamp_millis_opt(ms).single()),
            Value::String(s) => DateTime::parse_from_rfc3339(s.trim())
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
            _ => None,
        })
    }

    /// The first position of the geometry block as `[lon, lat, ...]`.
    ///
    /// Points carry it directly; for lines and polygons the first vertex is
    /// used.
    pub fn first_position(&self) -> Option<Vec<f64>> {
        let mut coords = self.0.get("geometry")?.get("coordinates")?;
        while let Some(first) = coords.as_array().and_then(|a| a.first()) {
            if first.is_number() {
                break;
            }
            coords = first;
        }
        let position: Vec<f64> = coords.as_array()?.iter().filter_map(Value::as_f64).collect();
        (position.len() >= 2).then_some(position)
    }

    /// The geometry as a [`GeoPoint`].
    pub fn point(&self) -> Option<GeoPoint> {
        self.first_position().map(|p| GeoPoint {
            longitude: p[0],
            latitude: p[1],
        })
    }
}

impl From<Value> for RawRecord {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn usgs_feature() -> RawRecord {
        RawRecord::new(json!({
            "type": "Feature",
            "id": "us7000jl0q",
            "properties": {
                "mag": 3.4,
                "place": "20 km NW of Los Angeles, CA",
                "time": 1684956000000_i64,
                "tsunami": 0,
                "felt": null,
                "depthKm": "12.5"
            },
            "geometry": { "type": "Point", "coordinates": [-118.4, 34.2, 10.0] }
        }))
    }

    #[test]
    fn test_numeric_accessors() {
        let record = usgs_feature();
        assert_eq!(record.f64_any(&["magnitude", "mag"]), Some(3.4));
        assert_eq!(record.f64_any(&["depthKm"]), Some(12.5));
        assert_eq!(record.f64_any(&["felt"]), None);
    }

    #[test]
    fn test_flag_encodings() {
        let record = usgs_feature();
        assert_eq!(record.bool_any(&["tsunami"]), Some(false));
        assert_eq!(record.bool_any(&["missing"]), None);
    }

    #[test]
    fn test_instant_from_epoch_millis_and_rfc3339() {
        let record = usgs_feature();
        let t = record.instant_any(&["time"]).unwrap();
        assert_eq!(t.timestamp_millis(), 1684956000000);

        let eonet = RawRecord::new(json!({ "properties": { "date": "2024-03-01T12:00:00Z" } }));
        let d = eonet.instant_any(&["date"]).unwrap();
        assert_eq!(d.to_rfc3339(), "2024-03-01T12:00:00+00:00");
    }

    #[test]
    fn test_point_from_polygon_geometry() {
        let record = RawRecord::new(json!({
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[10.0, 45.0], [11.0, 45.0], [11.0, 46.0], [10.0, 45.0]]]
            }
        }));
        let point = record.point().unwrap();
        assert_eq!(point.longitude, 10.0);
        assert_eq!(point.latitude, 45.0);
    }

    #[test]
    fn test_provider_id() {
        assert_eq!(usgs_feature().provider_id().as_deref(), Some("us7000jl0q"));
        assert_eq!(RawRecord::new(json!({ "id": 42 })).provider_id().as_deref(), Some("42"));
        assert_eq!(RawRecord::new(json!({})).provider_id(), None);
        let eonet = RawRecord::new(json!({ "properties": { "id": "EONET_6464" } }));
        assert_eq!(eonet.provider_id().as_deref(), Some("EONET_6464"));
    }
}
