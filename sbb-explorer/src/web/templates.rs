//! Askama templates for the web frontend.

use std::collections::HashMap;

use askama::Template;
use serde_json::Value;

use crate::format::{format_big_number, round_2_decimals};

/// Station record fields in the passenger-count dataset.
const STATION_NAME_FIELD: &str = "bahnhof_gare_stazione";
const STATION_CODE_FIELD: &str = "code_codice";
const STATION_YEAR_FIELD: &str = "jahr_annee_anno";
const DAILY_TRAFFIC_FIELD: &str = "dtv_tjm_tgm";
const WEEKDAY_TRAFFIC_FIELD: &str = "dwv_tmjo_tfm";

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page: busiest stations plus an optional place lookup.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub title: &'static str,
    pub stations: Vec<StationUsageView>,
    pub stations_error: Option<String>,
    pub place_query: String,
    pub place: Option<PlaceView>,
}

/// 404 page.
#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub title: &'static str,
    pub path: String,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// One row of the busiest-stations table.
#[derive(Debug, Clone, PartialEq)]
pub struct StationUsageView {
    pub name: String,
    pub code: Option<String>,
    pub year: Option<i64>,
    pub daily_passengers: String,
    pub weekday_passengers: Option<String>,
    daily_count: f64,
}

impl StationUsageView {
    /// Build a row from one dataset record. Records without a station name
    /// or a numeric daily count are skipped.
    fn from_record(record: &Value) -> Option<Self> {
        let name = record.get(STATION_NAME_FIELD)?.as_str()?.to_string();
        let daily_count = number_field(record, DAILY_TRAFFIC_FIELD)?;

        Some(Self {
            name,
            code: record
                .get(STATION_CODE_FIELD)
                .and_then(Value::as_str)
                .map(str::to_string),
            year: record.get(STATION_YEAR_FIELD).and_then(Value::as_i64),
            daily_passengers: format_big_number(daily_count),
            weekday_passengers: number_field(record, WEEKDAY_TRAFFIC_FIELD).map(format_big_number),
            daily_count,
        })
    }

    /// Busiest `limit` stations, most recent year only per station.
    pub fn busiest(payload: &Value, limit: usize) -> Vec<Self> {
        let Some(records) = payload.as_array() else {
            return Vec::new();
        };

        let mut latest: HashMap<String, Self> = HashMap::new();
        for row in records.iter().filter_map(Self::from_record) {
            match latest.get(&row.name) {
                Some(existing) if existing.year >= row.year => {}
                _ => {
                    latest.insert(row.name.clone(), row);
                }
            }
        }

        let mut rows: Vec<Self> = latest.into_values().collect();
        rows.sort_by(|a, b| {
            b.daily_count
                .total_cmp(&a.daily_count)
                .then_with(|| a.name.cmp(&b.name))
        });
        rows.truncate(limit);
        rows
    }
}

/// Read a field that providers send either as a number or a numeric string.
fn number_field(record: &Value, field: &str) -> Option<f64> {
    match record.get(field)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Latitude and longitude of a geocoded place.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinatesView {
    pub display_name: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl CoordinatesView {
    /// First geocoding hit, rounded to two decimals.
    pub fn first_hit(payload: &Value) -> Option<Self> {
        let hit = payload.as_array()?.first()?;
        Some(Self {
            display_name: hit
                .get("display_name")
                .and_then(Value::as_str)
                .map(str::to_string),
            latitude: round_2_decimals(number_field(hit, "lat")?),
            longitude: round_2_decimals(number_field(hit, "lon")?),
        })
    }
}

/// A key/value pair from a language-map feature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeView {
    pub key: String,
    pub value: String,
}

/// Attributes of the first language-map feature, in key order.
pub fn language_attributes(payload: &Value) -> Vec<AttributeView> {
    let Some(attributes) = payload
        .get("results")
        .and_then(Value::as_array)
        .and_then(|results| results.first())
        .and_then(|feature| feature.get("attributes"))
        .and_then(Value::as_object)
    else {
        return Vec::new();
    };

    let mut views: Vec<AttributeView> = attributes
        .iter()
        .filter_map(|(key, value)| {
            let value = match value {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.as_f64().map_or_else(|| n.to_string(), format_big_number),
                Value::Bool(b) => b.to_string(),
                _ => return None,
            };
            Some(AttributeView {
                key: key.clone(),
                value,
            })
        })
        .collect();
    views.sort_by(|a, b| a.key.cmp(&b.key));
    views
}

/// Lookup results for one place.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceView {
    pub name: String,
    pub coordinates: Option<CoordinatesView>,
    pub coordinates_error: Option<String>,
    pub language: Vec<AttributeView>,
    pub language_error: Option<String>,
}

impl PlaceView {
    /// Combine the two lookups; each failure is kept for display.
    pub fn new<E: std::fmt::Display>(
        name: &str,
        coordinates: Result<Value, E>,
        language: Result<Value, E>,
    ) -> Self {
        let (coordinates, coordinates_error) = match coordinates {
            Ok(payload) => (CoordinatesView::first_hit(&payload), None),
            Err(e) => (None, Some(e.to_string())),
        };
        let (language, language_error) = match language {
            Ok(payload) => (language_attributes(&payload), None),
            Err(e) => (Vec::new(), Some(e.to_string())),
        };

        Self {
            name: name.to_string(),
            coordinates,
            coordinates_error,
            language,
            language_error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn station(name: &str, year: i64, daily: f64) -> Value {
        json!({
            STATION_NAME_FIELD: name,
            STATION_CODE_FIELD: name.chars().take(2).collect::<String>(),
            STATION_YEAR_FIELD: year,
            DAILY_TRAFFIC_FIELD: daily,
            WEEKDAY_TRAFFIC_FIELD: daily * 1.1,
        })
    }

    #[test]
    fn busiest_sorts_by_daily_traffic() {
        let payload = json!([
            station("Bern", 2023, 185000.0),
            station("Zürich HB", 2023, 471300.0),
            station("Basel SBB", 2023, 118600.0),
        ]);

        let rows = StationUsageView::busiest(&payload, 2);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Zürich HB");
        assert_eq!(rows[0].daily_passengers, "471\u{202F}300");
        assert_eq!(rows[1].name, "Bern");
    }

    #[test]
    fn busiest_keeps_latest_year_per_station() {
        let payload = json!([
            station("Bern", 2018, 200000.0),
            station("Bern", 2023, 185000.0),
        ]);

        let rows = StationUsageView::busiest(&payload, 10);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].year, Some(2023));
        assert_eq!(rows[0].daily_passengers, "185\u{202F}000");
    }

    #[test]
    fn busiest_skips_incomplete_records() {
        let payload = json!([
            {STATION_NAME_FIELD: "Olten"},
            {DAILY_TRAFFIC_FIELD: 1000},
            {STATION_NAME_FIELD: "Thun", DAILY_TRAFFIC_FIELD: "29600"},
        ]);

        let rows = StationUsageView::busiest(&payload, 10);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Thun");
        assert_eq!(rows[0].code, None);
        assert_eq!(rows[0].weekday_passengers, None);
    }

    #[test]
    fn busiest_of_non_array_is_empty() {
        let payload = json!({"error_code": "NotFound"});
        assert!(StationUsageView::busiest(&payload, 10).is_empty());
    }

    #[test]
    fn coordinates_from_first_hit() {
        let payload = json!([
            {"display_name": "Bern, Schweiz", "lat": "46.9484742", "lon": "7.4521749"},
            {"display_name": "Bern, Indiana", "lat": "40.6", "lon": "-84.9"},
        ]);

        let coords = CoordinatesView::first_hit(&payload).unwrap();
        assert_eq!(coords.display_name.as_deref(), Some("Bern, Schweiz"));
        assert_eq!(coords.latitude, 46.95);
        assert_eq!(coords.longitude, 7.45);
    }

    #[test]
    fn coordinates_missing() {
        assert_eq!(CoordinatesView::first_hit(&json!([])), None);
        assert_eq!(CoordinatesView::first_hit(&json!([{"lat": "x"}])), None);
    }

    #[test]
    fn language_attributes_of_first_feature() {
        let payload = json!({
            "results": [
                {"attributes": {"name": "Bern", "sprache": "Deutsch", "flaeche": 51620, "geom": {}}},
                {"attributes": {"name": "Bern-Bümpliz"}},
            ]
        });

        let attrs = language_attributes(&payload);
        assert_eq!(
            attrs,
            vec![
                AttributeView { key: "flaeche".into(), value: "51\u{202F}620".into() },
                AttributeView { key: "name".into(), value: "Bern".into() },
                AttributeView { key: "sprache".into(), value: "Deutsch".into() },
            ]
        );
    }

    #[test]
    fn place_view_keeps_errors() {
        let place = PlaceView::new::<String>(
            "Bern",
            Err("HTTP error: timed out".to_string()),
            Ok(json!({"results": []})),
        );

        assert_eq!(place.coordinates, None);
        assert_eq!(place.coordinates_error.as_deref(), Some("HTTP error: timed out"));
        assert!(place.language.is_empty());
        assert_eq!(place.language_error, None);
    }

    #[test]
    fn not_found_template_renders_path() {
        let html = NotFoundTemplate {
            title: "NotFound",
            path: "/nowhere".to_string(),
        }
        .render()
        .unwrap();
        assert!(html.contains("nowhere"));
        assert!(html.contains("NotFound"));
    }
}
