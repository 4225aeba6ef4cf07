use super::pair::DrugPair;
use crate::ingestion::types::AdverseEvent;

use indexmap::IndexMap;
use std::collections::HashMap;

/// Condition name -> PRR, in the order conditions were first reported.
pub type ConditionScores = IndexMap<String, f64>;

/// Map from drug pair to the adverse conditions reported for that combination.
#[derive(Debug, Default, Clone)]
pub struct InteractionIndex {
    pairs: HashMap<DrugPair, ConditionScores>,
}

impl InteractionIndex {
    /// Groups adverse-event reports by unordered drug pair.
    ///
    /// A condition reported twice for the same pair keeps its first position but takes
    /// the later PRR.
    pub fn build(events: &[AdverseEvent]) -> Self {
        let mut pairs: HashMap<DrugPair, ConditionScores> = HashMap::new();
        let mut overwritten = 0usize;

        for event in events {
            let previous = pairs
                .entry(DrugPair::new(&event.drug_1, &event.drug_2))
                .or_default()
                .insert(event.condition.clone(), event.prr);
            if previous.is_some() {
                overwritten += 1;
            }
        }

        if overwritten > 0 {
            tracing::warn!(
                "{} adverse event rows repeated a condition for the same pair; later PRR kept",
                overwritten
            );
        }
        tracing::debug!("Interaction index: {} drug pairs", pairs.len());

        Self { pairs }
    }

    pub fn get(&self, pair: &DrugPair) -> Option<&ConditionScores> {
        self.pairs.get(pair)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
