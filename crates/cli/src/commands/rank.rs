//! Commande de classement

use crate::config::PipelineConfig;
use crate::display::ranking::display_ranking;
use crate::{create_progress_bar, create_spinner};
use anyhow::{Context, Result};
use gluco_core::{
    load_genes, log_operation, save_genes, save_reports_json, GeneRanker, GeneReport, PropensityScorer,
};
use std::path::{Path, PathBuf};

/// Taille des lots de gènes entre deux mises à jour de la progression
const SCORING_BATCH: usize = 256;

pub fn run(config: &PipelineConfig, json: bool) -> Result<()> {
    println!("🧬 Classement des gènes de: {}", config.input.display());

    // 1. Charger la base de promoteurs
    let spinner = create_spinner("Lecture des gènes...");
    let mut genes = log_operation!("chargement", { load_genes(&config.input) })
        .with_context(|| format!("lecture de {}", config.input.display()))?;
    spinner.finish_with_message(format!("{} gènes chargés", genes.len()));

    // 2. Calculer la propension de chaque gène
    let scorer = PropensityScorer::default();
    let pb = create_progress_bar(genes.len() as u64, "Calcul des propensions...");
    log_operation!("score", {
        for batch in genes.chunks_mut(SCORING_BATCH) {
            scorer.score_all(batch, config.parallel);
            pb.inc(batch.len() as u64);
        }
    });
    pb.finish_with_message("Propensions calculées");

    // 3. Trier par propension décroissante
    let ranker = GeneRanker::new(config.top_n);
    log_operation!("classement", { ranker.rank(&mut genes) });
    let top = ranker.top(&genes);

    // 4. Afficher le gène le plus propice
    match genes.first() {
        Some(best) => println!("\n{}", GeneReport::compute(best, &scorer)),
        None => println!("\nAucun gène à classer"),
    }
    display_ranking(top);

    // 5. Exporter les meilleurs gènes
    log_operation!("export", { save_genes(&config.output, top) })
        .with_context(|| format!("écriture de {}", config.output.display()))?;
    println!("{} gènes écrits dans {}", top.len(), config.output.display());

    if json {
        let path = json_path(&config.output);
        let reports: Vec<GeneReport> = top.iter().map(|g| GeneReport::compute(g, &scorer)).collect();
        save_reports_json(&path, &reports).with_context(|| format!("écriture de {}", path.display()))?;
        println!("Détail JSON écrit dans: {}", path.display());
    }

    println!("\n✅ Classement terminé!");

    Ok(())
}

/// Chemin du détail JSON: même nom que le CSV, extension `.json`
fn json_path(output: &Path) -> PathBuf {
    output.with_extension("json")
}
