//! ipfinder - IPv4 to (country, city) lookup service
//!
//! This library provides the core functionality for the ipfinder service:
//! an in-memory IPv4 lookup index with prefix autocomplete, exposed over
//! a small HTTP API.
//!
//! # Architecture
//! - `datastore`: Locator abstraction, CSV-backed index, provider factory
//! - `api`: HTTP handlers and response models
//! - `config`: Environment-driven settings
//! - `runtime`: Server startup
//! - `system`: Logging initialization
//! - `utils`: IPv4 / prefix syntax validation

pub mod api;
pub mod config;
pub mod datastore;
pub mod errors;
pub mod runtime;
pub mod system;
pub mod utils;
