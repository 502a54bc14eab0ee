//! Dataset accessors.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tracing::debug;

use super::endpoints::{Dataset, Endpoints};
use super::error::OpenDataError;
use super::loader::JsonLoader;

/// Configuration for the open-data client.
#[derive(Debug, Clone)]
pub struct OpenDataConfig {
    /// Dataset URLs and templates
    pub endpoints: Endpoints,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl OpenDataConfig {
    /// Create a config using the public endpoints.
    pub fn new() -> Self {
        Self {
            endpoints: Endpoints::default(),
            timeout_secs: 30,
        }
    }

    /// Replace the endpoints (for testing or mirrors).
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for OpenDataConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the SBB, geocoding and language-map datasets.
///
/// Every accessor issues one GET and returns the parsed body; failures are
/// those of [`JsonLoader::load_json`], unchanged.
#[derive(Debug, Clone)]
pub struct OpenDataClient {
    loader: JsonLoader,
    endpoints: Arc<Endpoints>,
}

impl OpenDataClient {
    /// Create a new open-data client.
    pub fn new(config: OpenDataConfig) -> Result<Self, OpenDataError> {
        let loader = JsonLoader::new(Duration::from_secs(config.timeout_secs))?;
        Ok(Self {
            loader,
            endpoints: Arc::new(config.endpoints),
        })
    }

    /// Passenger counts per station.
    pub async fn load_main_stations(&self) -> Result<Value, OpenDataError> {
        self.load_dataset(Dataset::MainStations).await
    }

    /// Shops and services located in stations.
    pub async fn load_station_shops(&self) -> Result<Value, OpenDataError> {
        self.load_dataset(Dataset::StationShops).await
    }

    /// Platform (perron) listings.
    pub async fn load_perron(&self) -> Result<Value, OpenDataError> {
        self.load_dataset(Dataset::Perron).await
    }

    /// Previous-day arrival and departure records, including delays.
    pub async fn load_delay(&self) -> Result<Value, OpenDataError> {
        self.load_dataset(Dataset::Delay).await
    }

    /// SBB employee counts per canton.
    pub async fn load_employees_by_canton(&self) -> Result<Value, OpenDataError> {
        self.load_dataset(Dataset::EmployeesByCanton).await
    }

    /// Load any fixed-endpoint dataset.
    pub async fn load_dataset(&self, dataset: Dataset) -> Result<Value, OpenDataError> {
        debug!(%dataset, "loading dataset");
        self.loader
            .load_json(self.endpoints.dataset_url(dataset))
            .await
    }

    /// Geocoding results for a Swiss place name.
    ///
    /// `place` is inserted into the query string as-is; callers must avoid
    /// `&`, `#` and `?` in it.
    pub async fn load_coordinates(&self, place: &str) -> Result<Value, OpenDataError> {
        let url = self.endpoints.coordinates_url(place);
        self.loader.load_json(&url).await
    }

    /// Language-map features matching a place name.
    ///
    /// Same escaping caveat as [`Self::load_coordinates`].
    pub async fn load_language(&self, place: &str) -> Result<Value, OpenDataError> {
        let url = self.endpoints.language_url(place);
        self.loader.load_json(&url).await
    }
}
