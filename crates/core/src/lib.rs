//! Gluco Core Library
//!
//! Score des promoteurs de gènes pour la régulation par le glucose, à partir
//! des sites de fixation de facteurs de transcription, et classement des
//! gènes les plus propices.

pub mod error;
pub mod gene;
pub mod logging;
pub mod motif;
pub mod ranking;
pub mod records;
pub mod report;
pub mod scoring;
pub mod sequence;

// Réexportations principales
pub use error::{GeneError, Result};
pub use gene::GeneRecord;
pub use motif::{BindingSite, MotifTable, REFERENCE_SITES};
pub use ranking::GeneRanker;
pub use records::{load_genes, read_genes, save_genes, write_genes};
pub use report::{save_reports_json, write_reports_json, GeneReport};
pub use scoring::{count_occurrences, Contribution, ContributionMap, PropensityScorer};
pub use sequence::{extract_promoter, IupacBase};
pub use logging::init_logging;
// Les macros log_operation et log_error sont automatiquement exportées à la racine du crate
