use super::pair::{DrugPair, normalize_drug_name};
use crate::ingestion::types::TargetBinding;

use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Precomputed map from drug pair to the targets both drugs bind to.
#[derive(Debug, Default, Clone)]
pub struct TargetIndex {
    pairs: HashMap<DrugPair, Vec<String>>,
}

impl TargetIndex {
    /// Groups bindings by target and records every target shared by each pair of
    /// distinct ligands.
    ///
    /// Targets are visited in ascending name order, so each pair's list comes out sorted.
    /// Repeated (target, ligand) rows count once.
    pub fn build(bindings: &[TargetBinding]) -> Self {
        let mut ligands_by_target: BTreeMap<&str, BTreeSet<String>> = BTreeMap::new();
        for binding in bindings {
            ligands_by_target
                .entry(binding.target.as_str())
                .or_default()
                .insert(normalize_drug_name(&binding.ligand));
        }

        let mut pairs: HashMap<DrugPair, Vec<String>> = HashMap::new();
        for (target, ligands) in &ligands_by_target {
            let ligands: Vec<&String> = ligands.iter().collect();
            for (i, first) in ligands.iter().enumerate() {
                for second in &ligands[i + 1..] {
                    let pair = DrugPair::from_normalized((*first).clone(), (*second).clone());
                    pairs.entry(pair).or_default().push(target.to_string());
                }
            }
        }

        tracing::debug!(
            "Target index: {} targets, {} drug pairs",
            ligands_by_target.len(),
            pairs.len()
        );

        Self { pairs }
    }

    pub fn get(&self, pair: &DrugPair) -> Option<&[String]> {
        self.pairs.get(pair).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
