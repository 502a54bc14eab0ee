//! Server configuration from environment variables.

use std::net::{IpAddr, SocketAddr};

use tracing::info;

use crate::opendata::{Endpoints, OpenDataConfig, PLACE_PLACEHOLDER};

/// Errors raised while reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set to something unusable
    #[error("invalid value {value:?} for {var}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Everything the binary needs to start.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub timeout_secs: u64,
    pub static_dir: String,
    pub endpoints: Endpoints,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, which returns a variable's
    /// value if it is set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = parse_var(&lookup, "EXPLORER_HOST", "127.0.0.1")?;
        let port = parse_var(&lookup, "EXPLORER_PORT", "3000")?;
        let timeout_secs = parse_var(&lookup, "EXPLORER_TIMEOUT_SECS", "30")?;
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                var: "EXPLORER_TIMEOUT_SECS",
                value: "0".to_string(),
                reason: "must be at least 1 second".to_string(),
            });
        }
        let static_dir = lookup("EXPLORER_STATIC_DIR").unwrap_or_else(|| "static".to_string());

        let defaults = Endpoints::default();
        let endpoints = Endpoints {
            main_stations: lookup("SBB_MAIN_STATIONS_URL").unwrap_or(defaults.main_stations),
            station_shops: lookup("SBB_STATION_SHOPS_URL").unwrap_or(defaults.station_shops),
            perron: lookup("SBB_PERRON_URL").unwrap_or(defaults.perron),
            delay: lookup("SBB_DELAY_URL").unwrap_or(defaults.delay),
            employees_by_canton: lookup("SBB_EMPLOYEES_URL")
                .unwrap_or(defaults.employees_by_canton),
            coordinates_template: template_var(
                &lookup,
                "GEOCODE_URL_TEMPLATE",
                defaults.coordinates_template,
            )?,
            language_template: template_var(
                &lookup,
                "LANGUAGE_URL_TEMPLATE",
                defaults.language_template,
            )?,
        };

        Ok(Self {
            host,
            port,
            timeout_secs,
            static_dir,
            endpoints,
        })
    }

    /// Address the server binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Settings for the open-data client.
    pub fn opendata(&self) -> OpenDataConfig {
        OpenDataConfig::new()
            .with_endpoints(self.endpoints.clone())
            .with_timeout(self.timeout_secs)
    }

    pub fn log_startup(&self) {
        info!("Configuration loaded:");
        info!("  Listening on: {}", self.bind_addr());
        info!("  Request timeout: {}s", self.timeout_secs);
        info!("  Static assets: {}", self.static_dir);
        info!("  Main stations: {}", self.endpoints.main_stations);
        info!("  Station shops: {}", self.endpoints.station_shops);
        info!("  Perron: {}", self.endpoints.perron);
        info!("  Delay: {}", self.endpoints.delay);
        info!("  Employees by canton: {}", self.endpoints.employees_by_canton);
        info!("  Geocoding: {}", self.endpoints.coordinates_template);
        info!("  Language map: {}", self.endpoints.language_template);
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: &str,
) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let value = lookup(var).unwrap_or_else(|| default.to_string());
    value.parse().map_err(|e: T::Err| ConfigError::Invalid {
        var,
        reason: e.to_string(),
        value,
    })
}

/// A URL template must say where the place name goes.
fn template_var(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: String,
) -> Result<String, ConfigError> {
    match lookup(var) {
        Some(value) if !value.contains(PLACE_PLACEHOLDER) => Err(ConfigError::Invalid {
            var,
            value,
            reason: format!("missing {PLACE_PLACEHOLDER} placeholder"),
        }),
        Some(value) => Ok(value),
        None => Ok(default),
    }
}
