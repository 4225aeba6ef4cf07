//! Query API Types
//!
//! Endpoint paths and the request/response bodies of the lookup API.
//! Optional response fields are omitted from the JSON entirely when a lookup misses.

use crate::index::interactions::ConditionScores;
use serde::{Deserialize, Serialize};

// --- API Endpoints ---

/// Shared-target lookup.
pub const ENDPOINT_TARGETS: &str = "/targets";
/// Adverse-event (DDI) lookup.
pub const ENDPOINT_INTERACTIONS: &str = "/interactions";
/// Both lookups combined.
pub const ENDPOINT_FULL_INTERACTIONS: &str = "/full_interactions";

// --- Data Transfer Objects ---

/// Query string shared by all three endpoints.
///
/// Both fields are optional so that a missing parameter is reported through the same
/// validation path as a malformed one.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PairParams {
    pub drug1: Option<String>,
    pub drug2: Option<String>,
}

impl PairParams {
    /// Picks `drug1`/`drug2` out of decoded query pairs. A repeated key keeps its last
    /// value; unrelated keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "drug1" => params.drug1 = Some(value),
                "drug2" => params.drug2 = Some(value),
                _ => {}
            }
        }
        params
    }
}

/// Combined answer for a drug pair, also the body of `/full_interactions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionResult {
    /// True when the pair shares a target or has reported adverse events.
    pub interaction: bool,
    /// Shared receptor target(s) of the two drugs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<String>>,
    /// Condition -> PRR, highest PRR first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions_and_prr: Option<ConditionScores>,
}

/// Body of `/targets`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetResponse {
    pub interaction: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<String>>,
}

impl From<Option<Vec<String>>> for TargetResponse {
    fn from(targets: Option<Vec<String>>) -> Self {
        Self {
            interaction: targets.is_some(),
            targets,
        }
    }
}

/// Body of `/interactions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DdiResponse {
    pub interaction: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions_and_prr: Option<ConditionScores>,
}

impl From<Option<ConditionScores>> for DdiResponse {
    fn from(conditions_and_prr: Option<ConditionScores>) -> Self {
        Self {
            interaction: conditions_and_prr.is_some(),
            conditions_and_prr,
        }
    }
}

/// Error body returned with client-error status codes.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}
