//! Query Service Module
//!
//! Answers drug pair questions against the preloaded indexes.
//!
//! ## Overview
//! Bridges the HTTP API with the immutable `DrugIndexes`. Every request is a pure read:
//! the same two names always produce the same answer for the lifetime of the process.
//!
//! ## Submodules
//! - **`resolver`**: `DrugIndexes` and the lookup/ranking logic.
//! - **`validation`**: Query parameter checks (presence, length, blank names).
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: Endpoint paths and Data Transfer Objects (DTOs) for API communication.

pub mod handlers;
pub mod resolver;
pub mod types;
pub mod validation;
