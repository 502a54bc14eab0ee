//! Local stand-in for the open-data providers, used by tests.
//!
//! Serves canned bodies keyed by request path and records every request
//! it receives.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, Uri};

use super::endpoints::Endpoints;

/// Paths the stub answers when built through [`StubServer::endpoints`].
pub const MAIN_STATIONS_PATH: &str = "/main-stations";
pub const STATION_SHOPS_PATH: &str = "/station-shops";
pub const PERRON_PATH: &str = "/perron";
pub const DELAY_PATH: &str = "/delay";
pub const EMPLOYEES_PATH: &str = "/employees";
pub const GEOCODE_PATH: &str = "/geocode";
pub const LANGUAGE_PATH: &str = "/language";

#[derive(Clone)]
struct StubState {
    responses: Arc<HashMap<String, (StatusCode, String)>>,
    requests: Arc<Mutex<Vec<String>>>,
}

/// A running stub provider bound to an ephemeral local port.
pub struct StubServer {
    base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubServer {
    /// Start serving `(path, status, body)` triples. Unknown paths answer
    /// 404 with a plain-text body.
    pub async fn start(responses: Vec<(&str, StatusCode, &str)>) -> Self {
        let responses = responses
            .into_iter()
            .map(|(path, status, body)| (path.to_string(), (status, body.to_string())))
            .collect();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            responses: Arc::new(responses),
            requests: requests.clone(),
        };

        let app = Router::new().fallback(respond).with_state(state);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            requests,
        }
    }

    /// Absolute URL for `path` on this stub.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Endpoints pointing every dataset at this stub.
    pub fn endpoints(&self) -> Endpoints {
        Endpoints {
            main_stations: self.url(MAIN_STATIONS_PATH),
            station_shops: self.url(STATION_SHOPS_PATH),
            perron: self.url(PERRON_PATH),
            delay: self.url(DELAY_PATH),
            employees_by_canton: self.url(EMPLOYEES_PATH),
            coordinates_template: self.url(&format!("{GEOCODE_PATH}?q={{place}} Switzerland&format=json")),
            language_template: self.url(&format!(
                "{LANGUAGE_PATH}?searchText={{place}}&layers=ch.bfs.sprachenkarte-2010&f=json"
            )),
        }
    }

    /// Path and query of every request received so far, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

async fn respond(State(state): State<StubState>, uri: Uri) -> (StatusCode, String) {
    state.requests.lock().unwrap().push(uri.to_string());
    state
        .responses
        .get(uri.path())
        .cloned()
        .unwrap_or((StatusCode::NOT_FOUND, "no stub for path".to_string()))
}

/// A URL on a local port that nothing listens on.
pub async fn refused_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/")
}
