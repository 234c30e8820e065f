//! Affichage du classement

use console::style;
use gluco_core::{extract_promoter, GeneRecord};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct RankingRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Propension")]
    propensity: String,
    #[tabled(rename = "Promoteur (pb)")]
    promoter_len: usize,
}

/// Affiche les gènes classés sous forme de tableau
pub fn display_ranking(genes: &[GeneRecord]) {
    if genes.is_empty() {
        println!("Aucun gène sélectionné");
        return;
    }

    let rows: Vec<RankingRow> = genes
        .iter()
        .enumerate()
        .map(|(i, gene)| RankingRow {
            rank: i + 1,
            id: gene.id().to_string(),
            propensity: format!("{:.4}", gene.propensity()),
            promoter_len: extract_promoter(gene.sequence()).len(),
        })
        .collect();

    println!("\n{}", style(format!("📊 Top {} des gènes", genes.len())).bold().cyan());
    println!("{}", Table::new(rows));
}
