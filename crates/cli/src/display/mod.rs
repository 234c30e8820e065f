//! Affichage terminal

pub mod motifs;
pub mod ranking;
