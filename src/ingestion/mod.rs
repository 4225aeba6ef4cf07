//! Ingestion Module
//!
//! Loads the static source tables at startup.
//!
//! ## Workflow
//! 1. **Open**: Reads the target-binding and adverse-event CSV files from disk.
//! 2. **Validate**: Checks that every required column is present in the header row.
//! 3. **Deserialize**: Turns each row into a typed record (`TargetBinding`, `AdverseEvent`).
//!
//! Any failure here is fatal: the service never starts with a partially loaded table.

pub mod loader;
pub mod types;
