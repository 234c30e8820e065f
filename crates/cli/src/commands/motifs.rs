//! Commande de liste des motifs

use crate::display::motifs::display_motifs;
use anyhow::Result;
use gluco_core::MotifTable;

pub fn run() -> Result<()> {
    display_motifs(MotifTable::reference());
    Ok(())
}
