//! SBB open-data explorer.
//!
//! A web application that fetches Swiss rail open data (station usage,
//! shops, platforms, delays, staff per canton) together with geocoding
//! and language-region lookups, and renders it in routed pages.

pub mod config;
pub mod format;
pub mod opendata;
pub mod web;
