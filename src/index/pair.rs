use std::fmt;

/// Normalizes a drug name into its lookup form: surrounding whitespace removed, lowercased.
pub fn normalize_drug_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Unordered pair of normalized drug names.
///
/// The names are kept lexicographically ordered, which makes the pair independent of
/// argument order without relying on a set type for equality and hashing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DrugPair(String, String);

impl DrugPair {
    /// Builds a pair from two raw names, normalizing both.
    pub fn new(a: &str, b: &str) -> Self {
        Self::from_normalized(normalize_drug_name(a), normalize_drug_name(b))
    }

    /// Builds a pair from names that are already normalized.
    pub fn from_normalized(a: String, b: String) -> Self {
        if a <= b { Self(a, b) } else { Self(b, a) }
    }
}

impl fmt::Display for DrugPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}
