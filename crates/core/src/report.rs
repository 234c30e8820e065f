//! Rapport détaillé d'un gène et de ses sites de fixation

use crate::error::Result;
use crate::gene::GeneRecord;
use crate::scoring::{ContributionMap, PropensityScorer};
use serde::Serialize;
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Rapport d'un gène: en-tête et contribution de chaque motif
#[derive(Debug, Clone, Serialize)]
pub struct GeneReport<'a> {
    pub id: &'a str,
    pub propensity: f64,
    pub sequence: &'a str,
    pub contributions: ContributionMap,
}

impl<'a> GeneReport<'a> {
    /// Assemble un rapport à partir d'un détail déjà calculé
    pub fn new(gene: &'a GeneRecord, contributions: ContributionMap) -> Self {
        Self {
            id: gene.id(),
            propensity: gene.propensity(),
            sequence: gene.sequence(),
            contributions,
        }
    }

    /// Recalcule le détail du gène avec `scorer`
    pub fn compute(gene: &'a GeneRecord, scorer: &PropensityScorer<'_>) -> Self {
        Self::new(gene, scorer.breakdown_sequence(gene.sequence()))
    }
}

impl fmt::Display for GeneReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Gène        = {}", self.id)?;
        writeln!(f, "Propension  = {:.4}", self.propensity)?;
        writeln!(f, "Séquence    = {}", self.sequence)?;
        writeln!(f)?;
        writeln!(f, "Contributions des sites de fixation:")?;
        writeln!(f)?;
        writeln!(f, "{:>10}   Contribution", "Motif")?;

        for c in self.contributions.sorted_by_motif() {
            writeln!(f, "{:>10}   {}", c.motif, signed(c.score))?;
        }
        Ok(())
    }
}

/// Écrit des rapports en JSON indenté
pub fn write_reports_json<W: Write>(mut writer: W, reports: &[GeneReport<'_>]) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, reports)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Enregistre des rapports JSON dans un fichier (créé ou remplacé)
pub fn save_reports_json(path: impl AsRef<Path>, reports: &[GeneReport<'_>]) -> Result<()> {
    write_reports_json(BufWriter::new(File::create(path)?), reports)
}

/// Valeur avec signe explicite et quatre décimales ("+0.9637", "-3.3202")
pub fn signed(value: f64) -> String {
    format!("{:+.4}", value)
}
