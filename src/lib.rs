//! Drug Pair Lookup Service Library
//!
//! Answers whether two drugs share a biological target and/or have a reported adverse
//! drug-drug interaction (DDI). The binary (`main.rs`) loads the source tables, builds
//! the indexes once and serves them over HTTP.
//!
//! ## Architecture Modules
//! - **`config`**: Command-line flags and their defaults.
//! - **`ingestion`**: CSV loading of the target-binding and adverse-event tables.
//! - **`index`**: Drug name normalization, unordered pairs and the two lookup indexes.
//! - **`query`**: The resolver over both indexes, request validation and Axum handlers.

pub mod config;
pub mod index;
pub mod ingestion;
pub mod query;
