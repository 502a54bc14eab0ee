//! Web layer: routed pages and the JSON dataset API.

mod dto;
pub mod route_table;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use route_table::{ROUTES, RouteEntry, RouteTarget, View};
pub use routes::create_router;
pub use state::AppState;
