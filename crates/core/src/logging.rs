//! Système de logging pour le pipeline de propension

use tracing_subscriber::{fmt, EnvFilter};

/// Initialise le système de logging
///
/// `RUST_LOG` est prioritaire; sinon `default_level` est utilisé.
/// Un second appel est ignoré.
pub fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Macro pour le logging des étapes du pipeline
#[macro_export]
macro_rules! log_operation {
    ($name:expr, $block:block) => {{
        let span = tracing::span!(tracing::Level::INFO, $name);
        let _enter = span.enter();
        tracing::info!("Début de l'opération: {}", $name);
        let result = $block;
        tracing::info!("Fin de l'opération: {}", $name);
        result
    }};
}

/// Macro pour le logging des erreurs
#[macro_export]
macro_rules! log_error {
    ($error:expr) => {{
        let error = $error;
        tracing::error!("Erreur: {}", error);
        error
    }};
}
