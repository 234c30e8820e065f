//! Affichage de la table des motifs

use console::style;
use gluco_core::report::signed;
use gluco_core::MotifTable;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct MotifRow {
    #[tabled(rename = "Motif")]
    motif: String,
    #[tabled(rename = "Poids")]
    weight: String,
}

/// Affiche les sites de fixation dans l'ordre de la table
pub fn display_motifs(table: &MotifTable) {
    let rows: Vec<MotifRow> = table
        .sites()
        .iter()
        .map(|site| MotifRow {
            motif: site.motif().to_string(),
            weight: signed(site.weight()),
        })
        .collect();

    println!("{}", style(format!("🧬 {} sites de fixation", table.len())).bold().cyan());
    println!("{}", Table::new(rows));
}
