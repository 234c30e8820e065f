//! Sous-commandes de la CLI

pub mod inspect;
pub mod motifs;
pub mod rank;
