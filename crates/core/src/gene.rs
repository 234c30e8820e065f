//! Enregistrement de gène

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Gène: identifiant, séquence (promoteur en minuscules) et propension.
///
/// L'égalité et l'ordre ne dépendent que de la propension.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneRecord {
    id: String,
    sequence: String,
    propensity: f64,
}

impl GeneRecord {
    /// Crée un gène de propension 0.0
    pub fn new(id: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            sequence: sequence.into(),
            propensity: 0.0,
        }
    }

    /// Crée un gène avec une propension déjà connue
    pub fn with_propensity(id: impl Into<String>, sequence: impl Into<String>, propensity: f64) -> Self {
        Self {
            propensity,
            ..Self::new(id, sequence)
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    pub fn propensity(&self) -> f64 {
        self.propensity
    }

    pub fn set_propensity(&mut self, propensity: f64) {
        self.propensity = propensity;
    }
}

impl PartialEq for GeneRecord {
    fn eq(&self, other: &Self) -> bool {
        self.propensity == other.propensity
    }
}

impl PartialOrd for GeneRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.propensity.partial_cmp(&other.propensity)
    }
}

impl fmt::Display for GeneRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.4})", self.id, self.propensity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_gene_is_empty() {
        let gene = GeneRecord::default();
        assert_eq!(gene.id(), "");
        assert_eq!(gene.sequence(), "");
        assert_eq!(gene.propensity(), 0.0);
    }

    #[test]
    fn test_accessors_and_mutator() {
        let mut gene = GeneRecord::new("gene1", "ACGT");
        assert_eq!(gene.id(), "gene1");
        assert_eq!(gene.sequence(), "ACGT");
        assert_eq!(gene.propensity(), 0.0);

        gene.set_propensity(3.14);
        assert_eq!(gene.propensity(), 3.14);
    }

    #[test]
    fn test_comparison_uses_propensity_only() {
        let high = GeneRecord::with_propensity("gene1", "ACGT", 3.14);
        let low = GeneRecord::with_propensity("gene2", "gggg", 1.0);

        assert!(high > low);
        assert!(low < high);
        assert!(high >= low);
        assert!(low <= high);
        assert!(high != low);

        let same = GeneRecord::with_propensity("other", "tttt", 3.14);
        assert!(high == same);
    }

    #[test]
    fn test_display() {
        let gene = GeneRecord::with_propensity("AT1G01010", "acgt", -1.5);
        assert_eq!(gene.to_string(), "AT1G01010 (-1.5000)");
    }
}
