//! Generic GET-and-parse-JSON loader.

use std::time::Duration;

use serde_json::Value;
use tracing::debug;

use super::error::OpenDataError;

/// Maximum number of body characters kept on a parse failure.
const BODY_EXCERPT_CHARS: usize = 500;

/// Loads arbitrary JSON documents over HTTP.
///
/// Every call issues exactly one GET with no custom headers. Nothing is
/// cached and concurrent calls for the same URL are not merged.
#[derive(Debug, Clone)]
pub struct JsonLoader {
    http: reqwest::Client,
}

impl JsonLoader {
    /// Create a loader whose requests time out after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, OpenDataError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http })
    }

    /// Fetch `url` and parse the response body as JSON.
    pub async fn load_json(&self, url: &str) -> Result<Value, OpenDataError> {
        debug!(url, "loading JSON");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        debug!(url, status = status.as_u16(), bytes = body.len(), "response received");

        serde_json::from_str(&body).map_err(|e| OpenDataError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(BODY_EXCERPT_CHARS).collect()),
        })
    }
}
