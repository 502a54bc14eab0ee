//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

/// Query string of the home page.
#[derive(Debug, Default, Deserialize)]
pub struct HomeQuery {
    /// Place to geocode and look up on the language map
    pub place: Option<String>,
}

impl HomeQuery {
    /// The requested place, trimmed, if any.
    pub fn place(&self) -> Option<&str> {
        self.place
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }
}

/// Error body of the JSON endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
