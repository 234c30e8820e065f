//! Classement des gènes par propension décroissante

use crate::gene::GeneRecord;

/// Classement et sélection des meilleurs gènes.
///
/// Le tri est stable: à propension égale, les gènes gardent leur ordre
/// d'entrée. `f64::total_cmp` fixe un ordre total (NaN compris).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneRanker {
    top_n: usize,
}

impl GeneRanker {
    pub fn new(top_n: usize) -> Self {
        Self { top_n }
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Trie les gènes du plus au moins propice
    pub fn rank(&self, genes: &mut [GeneRecord]) {
        genes.sort_by(|a, b| b.propensity().total_cmp(&a.propensity()));
    }

    /// Trie puis conserve les `min(top_n, len)` premiers gènes
    pub fn select(&self, mut genes: Vec<GeneRecord>) -> Vec<GeneRecord> {
        self.rank(&mut genes);
        genes.truncate(self.top_n);
        genes
    }

    /// Vue sur les premiers gènes d'une collection déjà triée
    pub fn top<'a>(&self, ranked: &'a [GeneRecord]) -> &'a [GeneRecord] {
        &ranked[..self.top_n.min(ranked.len())]
    }
}
