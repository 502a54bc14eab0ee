//! Endpoint URLs for every dataset.

use std::fmt;
use std::str::FromStr;

/// Placeholder substituted by a place name in URL templates.
pub const PLACE_PLACEHOLDER: &str = "{place}";

const DEFAULT_MAIN_STATIONS_URL: &str =
    "https://data.sbb.ch/api/v2/catalog/datasets/anzahl-sbb-bahnhofbenutzer/exports/json";
const DEFAULT_STATION_SHOPS_URL: &str =
    "https://data.sbb.ch/api/v2/catalog/datasets/nebenbetriebe/exports/json";
const DEFAULT_PERRON_URL: &str =
    "https://data.sbb.ch/api/v2/catalog/datasets/perron/exports/json";
const DEFAULT_DELAY_URL: &str = "https://data.sbb.ch/api/explore/v2.1/catalog/datasets/actual-data-sbb-previous-day/exports/json";
const DEFAULT_EMPLOYEES_URL: &str =
    "https://data.sbb.ch/api/v2/catalog/datasets/personal-sbb-nach-kanton/exports/json";
const DEFAULT_COORDINATES_TEMPLATE: &str =
    "https://nominatim.openstreetmap.org/search?q={place} Switzerland&format=json";
const DEFAULT_LANGUAGE_TEMPLATE: &str = "https://api3.geo.admin.ch/rest/services/all/MapServer/find?searchText={place}&layers=ch.bfs.sprachenkarte-2010&searchField=name&f=json";

/// Where each dataset is fetched from.
///
/// Built once at start-up and shared read-only by the client. Templates
/// contain [`PLACE_PLACEHOLDER`] exactly where the place name goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub main_stations: String,
    pub station_shops: String,
    pub perron: String,
    pub delay: String,
    pub employees_by_canton: String,
    pub coordinates_template: String,
    pub language_template: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            main_stations: DEFAULT_MAIN_STATIONS_URL.to_string(),
            station_shops: DEFAULT_STATION_SHOPS_URL.to_string(),
            perron: DEFAULT_PERRON_URL.to_string(),
            delay: DEFAULT_DELAY_URL.to_string(),
            employees_by_canton: DEFAULT_EMPLOYEES_URL.to_string(),
            coordinates_template: DEFAULT_COORDINATES_TEMPLATE.to_string(),
            language_template: DEFAULT_LANGUAGE_TEMPLATE.to_string(),
        }
    }
}

impl Endpoints {
    /// URL of a fixed-endpoint dataset.
    pub fn dataset_url(&self, dataset: Dataset) -> &str {
        match dataset {
            Dataset::MainStations => &self.main_stations,
            Dataset::StationShops => &self.station_shops,
            Dataset::Perron => &self.perron,
            Dataset::Delay => &self.delay,
            Dataset::EmployeesByCanton => &self.employees_by_canton,
        }
    }

    /// Geocoding URL for `place`.
    pub fn coordinates_url(&self, place: &str) -> String {
        interpolate(&self.coordinates_template, place)
    }

    /// Language-map lookup URL for `place`.
    pub fn language_url(&self, place: &str) -> String {
        interpolate(&self.language_template, place)
    }
}

/// Plain substitution: the place name is inserted verbatim, unescaped.
fn interpolate(template: &str, place: &str) -> String {
    template.replace(PLACE_PLACEHOLDER, place)
}

/// Error returned when parsing an unknown dataset name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown dataset: {0}")]
pub struct UnknownDataset(String);

/// The datasets served from a fixed URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    MainStations,
    StationShops,
    Perron,
    Delay,
    EmployeesByCanton,
}

impl Dataset {
    pub const ALL: [Dataset; 5] = [
        Dataset::MainStations,
        Dataset::StationShops,
        Dataset::Perron,
        Dataset::Delay,
        Dataset::EmployeesByCanton,
    ];

    /// URL path segment naming this dataset.
    pub fn slug(self) -> &'static str {
        match self {
            Dataset::MainStations => "main-stations",
            Dataset::StationShops => "station-shops",
            Dataset::Perron => "perron",
            Dataset::Delay => "delay",
            Dataset::EmployeesByCanton => "employees-by-canton",
        }
    }
}

impl FromStr for Dataset {
    type Err = UnknownDataset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dataset::ALL
            .into_iter()
            .find(|d| d.slug() == s)
            .ok_or_else(|| UnknownDataset(s.to_string()))
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}
