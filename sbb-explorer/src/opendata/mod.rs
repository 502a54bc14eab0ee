//! Open-data loading.
//!
//! A generic JSON loader plus one accessor per dataset. Payloads are
//! returned as untyped [`serde_json::Value`]s: the providers' schemas are
//! neither validated nor versioned here, so any field access downstream is
//! fallible.
//!
//! Nothing is cached, retried or deduplicated; each accessor call is one
//! outbound GET.

mod client;
mod endpoints;
mod error;
mod loader;
#[cfg(test)]
pub(crate) mod stub;

pub use client::{OpenDataClient, OpenDataConfig};
pub use endpoints::{Dataset, Endpoints, PLACE_PLACEHOLDER, UnknownDataset};
pub use error::OpenDataError;
pub use loader::JsonLoader;
