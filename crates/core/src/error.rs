//! Types d'erreurs pour la bibliothèque de propension

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeneError {
    #[error("Base IUPAC invalide dans le motif {motif:?}: {base:?}")]
    InvalidBase { motif: String, base: char },

    #[error("Motif vide dans la table des sites de fixation")]
    EmptyMotif,

    #[error("Motif en double dans la table: {0}")]
    DuplicateMotif(String),

    #[error("Enregistrement malformé ligne {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    #[error("Propension invalide ligne {line}: {value:?}")]
    InvalidPropensity { line: u64, value: String },

    #[error("Erreur IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("Erreur CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Erreur de sérialisation: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GeneError>;
