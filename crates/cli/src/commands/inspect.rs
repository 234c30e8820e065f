//! Commande de détail d'un gène

use crate::{create_spinner, ReportFormat};
use anyhow::{anyhow, Context, Result};
use gluco_core::{load_genes, log_error, write_reports_json, GeneReport, PropensityScorer};
use std::path::PathBuf;

pub fn run(input: PathBuf, id: &str, format: ReportFormat) -> Result<()> {
    let spinner = create_spinner("Lecture des gènes...");
    let genes = load_genes(&input).with_context(|| format!("lecture de {}", input.display()))?;
    spinner.finish_and_clear();

    let mut gene = genes
        .into_iter()
        .find(|g| g.id() == id)
        .ok_or_else(|| log_error!(anyhow!("Gène introuvable dans {}: {}", input.display(), id)))?;

    let scorer = PropensityScorer::default();
    gene.set_propensity(scorer.score_sequence(gene.sequence()));
    let report = GeneReport::compute(&gene, &scorer);

    match format {
        ReportFormat::Text => println!("{}", report),
        ReportFormat::Json => write_reports_json(std::io::stdout().lock(), std::slice::from_ref(&report))?,
    }

    Ok(())
}
