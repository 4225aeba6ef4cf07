//! Ingestion Record Types
//!
//! Rows of the two source tables, deserialized straight from CSV by column name.
//! Columns not listed here are ignored.

use serde::Deserialize;

/// One drug (ligand) binding one biological target.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TargetBinding {
    #[serde(rename = "Target")]
    pub target: String,
    /// Carried from the source table; lookups key on the target name only.
    #[serde(rename = "Target ID")]
    pub target_id: String,
    #[serde(rename = "Ligand")]
    pub ligand: String,
}

/// One reported adverse condition for a drug pair, with its proportional reporting ratio.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AdverseEvent {
    #[serde(rename = "drug_1_concept_name")]
    pub drug_1: String,
    #[serde(rename = "drug_2_concept_name")]
    pub drug_2: String,
    #[serde(rename = "condition_concept_name")]
    pub condition: String,
    #[serde(rename = "PRR")]
    pub prr: f64,
}

pub const TARGET_COLUMNS: [&str; 3] = ["Target", "Target ID", "Ligand"];

pub const ADVERSE_EVENT_COLUMNS: [&str; 4] = [
    "drug_1_concept_name",
    "drug_2_concept_name",
    "condition_concept_name",
    "PRR",
];
