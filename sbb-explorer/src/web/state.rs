//! Application state for the web layer.

use std::sync::Arc;

use crate::opendata::OpenDataClient;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Open-data client used by every view and API handler
    pub opendata: Arc<OpenDataClient>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(opendata: OpenDataClient) -> Self {
        Self {
            opendata: Arc::new(opendata),
        }
    }
}
