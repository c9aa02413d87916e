//! External service interactions
//!
//! This module contains services for interacting with external systems:
//! - Transformation catalog access (HTTP API or offline document)
//! - Background fetch execution

pub mod catalog_client;
pub mod fetch_runner;

pub use catalog_client::{connect, CatalogApi};
pub use fetch_runner::FetchRunner;
