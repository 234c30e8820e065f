//! Table des sites de fixation des facteurs de transcription
//!
//! Les motifs et leurs poids proviennent de Li et al. (Genome Research,
//! 16:414-427, 2006). Les codes IUPAC ambigus sont développés en motifs
//! littéraux à la construction de la table, jamais pendant le scan.

use crate::error::{GeneError, Result};
use crate::sequence::IupacBase;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Table de référence, telle que publiée (peut contenir des codes IUPAC)
pub const REFERENCE_SITES: &[(&str, f64)] = &[
    ("aaaccctaa", 2.9895),
    ("ggaagggt", 1.3346),
    ("ggtagggt", 1.3346),
    ("aacgtgt", 1.1033),
    ("acggg", 0.9637),
    ("gcggcaaa", 0.9067),
    ("gttaggtt", 0.8397),
    ("rccgac", 0.8076),
    ("gataaga", -3.3202),
    ("gataagg", -3.3202),
    ("gataa", -2.1431),
    ("gataag", -0.7107),
    ("ggata", -3.2140),
    ("acgtggca", -1.1698),
    ("taacgta", -0.9167),
    ("aaaatatct", -0.8441),
];

/// Site de fixation: motif littéral sur {a,c,g,t} et son poids
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BindingSite {
    motif: String,
    weight: f64,
}

impl BindingSite {
    /// Motif littéral en minuscules
    pub fn motif(&self) -> &str {
        &self.motif
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// Table ordonnée et immuable de sites de fixation
#[derive(Debug, Clone, PartialEq)]
pub struct MotifTable {
    sites: Vec<BindingSite>,
}

impl MotifTable {
    /// Construit une table à partir de motifs IUPAC pondérés.
    ///
    /// Chaque motif ambigu est développé en toutes ses variantes concrètes,
    /// qui partagent le poids du motif d'origine et prennent sa place dans
    /// l'ordre de la table.
    pub fn from_patterns<'a, I>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut sites = Vec::new();
        let mut seen = HashSet::new();

        for (pattern, weight) in patterns {
            for motif in expand_pattern(pattern)? {
                if !seen.insert(motif.clone()) {
                    return Err(GeneError::DuplicateMotif(motif));
                }
                sites.push(BindingSite { motif, weight });
            }
        }

        Ok(Self { sites })
    }

    /// Table de référence partagée (17 motifs littéraux)
    pub fn reference() -> &'static MotifTable {
        static REFERENCE: OnceLock<MotifTable> = OnceLock::new();
        REFERENCE.get_or_init(|| {
            // Les entrées de REFERENCE_SITES sont vérifiées par les tests
            Self::from_patterns(REFERENCE_SITES.iter().copied())
                .unwrap_or_else(|e| panic!("table de référence invalide: {e}"))
        })
    }

    pub fn sites(&self) -> &[BindingSite] {
        &self.sites
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }
}

/// Développe un motif IUPAC en motifs littéraux minuscules
fn expand_pattern(pattern: &str) -> Result<Vec<String>> {
    if pattern.is_empty() {
        return Err(GeneError::EmptyMotif);
    }

    let mut expanded = vec![String::with_capacity(pattern.len())];
    for c in pattern.chars() {
        let base = IupacBase::from_char(c).ok_or_else(|| GeneError::InvalidBase {
            motif: pattern.to_string(),
            base: c,
        })?;

        expanded = expanded
            .into_iter()
            .flat_map(|prefix| {
                base.expand().iter().map(move |&b| {
                    let mut next = prefix.clone();
                    next.push(b);
                    next
                })
            })
            .collect();
    }

    Ok(expanded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_table_literal_contents() {
        let expected: &[(&str, f64)] = &[
            ("aaaccctaa", 2.9895),
            ("ggaagggt", 1.3346),
            ("ggtagggt", 1.3346),
            ("aacgtgt", 1.1033),
            ("acggg", 0.9637),
            ("gcggcaaa", 0.9067),
            ("gttaggtt", 0.8397),
            ("accgac", 0.8076),
            ("gccgac", 0.8076),
            ("gataaga", -3.3202),
            ("gataagg", -3.3202),
            ("gataa", -2.1431),
            ("gataag", -0.7107),
            ("ggata", -3.2140),
            ("acgtggca", -1.1698),
            ("taacgta", -0.9167),
            ("aaaatatct", -0.8441),
        ];

        let table = MotifTable::reference();
        assert_eq!(table.len(), 17);
        for (site, (motif, weight)) in table.sites().iter().zip(expected) {
            assert_eq!(site.motif(), *motif);
            assert_eq!(site.weight(), *weight);
        }
    }

    #[test]
    fn test_reference_motifs_are_concrete() {
        for site in MotifTable::reference().sites() {
            assert!(site.motif().chars().all(|c| matches!(c, 'a' | 'c' | 'g' | 't')));
        }
    }

    #[test]
    fn test_ambiguous_pattern_expansion() {
        let table = MotifTable::from_patterns([("ayg", 1.0), ("nt", -0.5)]).unwrap();
        let motifs: Vec<&str> = table.sites().iter().map(|s| s.motif()).collect();
        assert_eq!(motifs, vec!["acg", "atg", "at", "ct", "gt", "tt"]);
        assert_eq!(table.sites()[4].weight(), -0.5);
    }

    #[test]
    fn test_uppercase_pattern_is_lowered() {
        let table = MotifTable::from_patterns([("ACg", 2.0)]).unwrap();
        assert_eq!(table.sites()[0].motif(), "acg");
    }

    #[test]
    fn test_invalid_patterns_rejected() {
        assert!(matches!(
            MotifTable::from_patterns([("", 1.0)]),
            Err(GeneError::EmptyMotif)
        ));
        assert!(matches!(
            MotifTable::from_patterns([("acx", 1.0)]),
            Err(GeneError::InvalidBase { base: 'x', .. })
        ));
        assert!(matches!(
            MotifTable::from_patterns([("rcc", 1.0), ("gcc", 2.0)]),
            Err(GeneError::DuplicateMotif(m)) if m == "gcc"
        ));
    }
}
