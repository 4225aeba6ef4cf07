use super::types::InteractionResult;
use crate::index::interactions::{ConditionScores, InteractionIndex};
use crate::index::pair::DrugPair;
use crate::index::targets::TargetIndex;
use crate::ingestion::types::{AdverseEvent, TargetBinding};

/// The two lookup indexes, built once at startup and only read afterwards.
///
/// Shared between request handlers as `Arc<DrugIndexes>`; no interior mutability.
#[derive(Debug, Clone)]
pub struct DrugIndexes {
    targets: TargetIndex,
    interactions: InteractionIndex,
}

impl DrugIndexes {
    pub fn new(targets: TargetIndex, interactions: InteractionIndex) -> Self {
        Self {
            targets,
            interactions,
        }
    }

    /// Builds both indexes from the loaded source tables.
    pub fn build(bindings: &[TargetBinding], events: &[AdverseEvent]) -> Self {
        let indexes = Self::new(TargetIndex::build(bindings), InteractionIndex::build(events));
        tracing::info!(
            "Indexes ready: {} pairs with shared targets, {} pairs with adverse events",
            indexes.targets.len(),
            indexes.interactions.len()
        );
        indexes
    }

    /// Targets bound by both drugs, or `None` when they share none.
    pub fn shared_targets(&self, drug1: &str, drug2: &str) -> Option<Vec<String>> {
        let pair = DrugPair::new(drug1, drug2);
        let targets = self.targets_for(&pair);

        tracing::debug!("Resolved targets {}: targets={}", pair, targets.is_some());
        targets
    }

    /// Adverse conditions reported for the pair, highest PRR first.
    pub fn ranked_conditions(&self, drug1: &str, drug2: &str) -> Option<ConditionScores> {
        let pair = DrugPair::new(drug1, drug2);
        let conditions = self.conditions_for(&pair);

        tracing::debug!(
            "Resolved conditions {}: conditions={}",
            pair,
            conditions.is_some()
        );
        conditions
    }

    /// Combined lookup: shared targets and ranked conditions for the pair.
    pub fn resolve(&self, drug1: &str, drug2: &str) -> InteractionResult {
        let pair = DrugPair::new(drug1, drug2);
        let targets = self.targets_for(&pair);
        let conditions_and_prr = self.conditions_for(&pair);

        tracing::debug!(
            "Resolved {}: targets={} conditions={}",
            pair,
            targets.is_some(),
            conditions_and_prr.is_some()
        );

        InteractionResult {
            interaction: targets.is_some() || conditions_and_prr.is_some(),
            targets,
            conditions_and_prr,
        }
    }

    fn targets_for(&self, pair: &DrugPair) -> Option<Vec<String>> {
        self.targets
            .get(pair)
            .filter(|targets| !targets.is_empty())
            .map(<[String]>::to_vec)
    }

    fn conditions_for(&self, pair: &DrugPair) -> Option<ConditionScores> {
        self.interactions
            .get(pair)
            .filter(|conditions| !conditions.is_empty())
            .map(rank_conditions)
    }
}

/// Returns a copy of `conditions` ordered by PRR, highest first.
///
/// The sort is stable, so equal scores keep their reported order. `total_cmp` places a
/// NaN PRR ahead of every number.
pub fn rank_conditions(conditions: &ConditionScores) -> ConditionScores {
    let mut ranked: Vec<(&String, &f64)> = conditions.iter().collect();
    ranked.sort_by(|a, b| b.1.total_cmp(a.1));
    ranked
        .into_iter()
        .map(|(condition, prr)| (condition.clone(), *prr))
        .collect()
}
