//! Calcul de la propension à la régulation par le glucose
//!
//! Le comptage des occurrences reprend la recherche naïve de référence:
//! après une occurrence à la position `i`, la recherche reprend à `i + 1`.
//! Les occurrences qui se chevauchent sont donc toutes comptées
//! ("aaa" apparaît deux fois dans "aaaa"). Ce comportement est conservé
//! pour reproduire les scores publiés; un nouveau modèle ne devrait pas
//! s'en inspirer sans le réévaluer.

use crate::gene::GeneRecord;
use crate::motif::{BindingSite, MotifTable};
use crate::sequence::extract_promoter;
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

/// Nombre d'occurrences de `motif` dans `promoter`, chevauchements compris
pub fn count_occurrences(promoter: &str, motif: &str) -> usize {
    let (haystack, needle) = (promoter.as_bytes(), motif.as_bytes());
    if needle.is_empty() || needle.len() > haystack.len() {
        return 0;
    }
    haystack.windows(needle.len()).filter(|w| *w == needle).count()
}

/// Contribution d'un site: occurrences × poids (0.0 sans occurrence)
fn site_contribution(promoter: &str, site: &BindingSite) -> f64 {
    match count_occurrences(promoter, site.motif()) {
        0 => 0.0,
        n => n as f64 * site.weight(),
    }
}

/// Contribution d'un motif au score d'un promoteur
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contribution {
    pub motif: String,
    pub occurrences: usize,
    pub score: f64,
}

/// Détail du score par motif, dans l'ordre de la table
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ContributionMap {
    entries: Vec<Contribution>,
}

impl ContributionMap {
    /// Contribution d'un motif, s'il fait partie de la table utilisée
    pub fn get(&self, motif: &str) -> Option<f64> {
        self.entries.iter().find(|c| c.motif == motif).map(|c| c.score)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Contribution> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Somme des contributions dans l'ordre de la table
    pub fn total(&self) -> f64 {
        self.entries.iter().fold(0.0, |acc, c| acc + c.score)
    }

    /// Contributions triées par motif (ordre alphabétique)
    pub fn sorted_by_motif(&self) -> Vec<&Contribution> {
        let mut sorted: Vec<&Contribution> = self.entries.iter().collect();
        sorted.sort_by(|a, b| a.motif.cmp(&b.motif));
        sorted
    }
}

/// Calculateur de propension sur une table de motifs
#[derive(Debug, Clone, Copy)]
pub struct PropensityScorer<'a> {
    table: &'a MotifTable,
}

impl Default for PropensityScorer<'static> {
    fn default() -> Self {
        Self::new(MotifTable::reference())
    }
}

impl<'a> PropensityScorer<'a> {
    pub fn new(table: &'a MotifTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'a MotifTable {
        self.table
    }

    /// Score total d'une région promotrice déjà extraite.
    ///
    /// Les contributions sont additionnées dans l'ordre de la table, ce qui
    /// rend le total identique bit à bit à `breakdown(..).total()`.
    pub fn score(&self, promoter: &str) -> f64 {
        self.table
            .sites()
            .iter()
            .fold(0.0, |acc, site| acc + site_contribution(promoter, site))
    }

    /// Score détaillé motif par motif d'une région promotrice
    pub fn breakdown(&self, promoter: &str) -> ContributionMap {
        let entries = self
            .table
            .sites()
            .iter()
            .map(|site| {
                let occurrences = count_occurrences(promoter, site.motif());
                Contribution {
                    motif: site.motif().to_string(),
                    occurrences,
                    score: site_contribution(promoter, site),
                }
            })
            .collect();

        ContributionMap { entries }
    }

    /// Score d'une séquence complète (extraction du promoteur incluse)
    pub fn score_sequence(&self, sequence: &str) -> f64 {
        self.score(&extract_promoter(sequence))
    }

    /// Détail du score d'une séquence complète
    pub fn breakdown_sequence(&self, sequence: &str) -> ContributionMap {
        self.breakdown(&extract_promoter(sequence))
    }

    /// Calcule et affecte la propension de chaque gène.
    ///
    /// Chaque gène est indépendant; la version parallèle donne exactement
    /// les mêmes totaux que la version séquentielle.
    pub fn score_all(&self, genes: &mut [GeneRecord], parallel: bool) {
        let score_one = |gene: &mut GeneRecord| {
            let propensity = self.score_sequence(gene.sequence());
            debug!(id = gene.id(), propensity, "gène évalué");
            gene.set_propensity(propensity);
        };

        if parallel {
            genes.par_iter_mut().for_each(score_one);
        } else {
            genes.iter_mut().for_each(score_one);
        }
    }
}
