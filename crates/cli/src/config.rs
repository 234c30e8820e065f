//! Configuration de l'application

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration du pipeline de classement
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub top_n: usize,
    pub parallel: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("arabidopsis.csv"),
            output: PathBuf::from("top20.csv"),
            top_n: 20,
            parallel: false,
        }
    }
}

/// Configuration du logging
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Configuration complète de l'application
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub pipeline: PipelineConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Charge la configuration: fichier optionnel puis variables `GLUCO_*`
    /// (ex. `GLUCO_PIPELINE__TOP_N=50`).
    pub fn load(path: Option<&Path>) -> Result<Self, ::config::ConfigError> {
        Self::load_from(path, None)
    }

    /// `env` remplace l'environnement du processus lorsqu'il est fourni
    fn load_from(
        path: Option<&Path>,
        env: Option<::config::Map<String, String>>,
    ) -> Result<Self, ::config::ConfigError> {
        let mut builder = ::config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(::config::File::from(path).required(true));
        }

        builder
            .add_source(
                ::config::Environment::with_prefix("GLUCO")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.pipeline.input, PathBuf::from("arabidopsis.csv"));
        assert_eq!(cfg.pipeline.output, PathBuf::from("top20.csv"));
        assert_eq!(cfg.pipeline.top_n, 20);
        assert!(!cfg.pipeline.parallel);
        assert_eq!(cfg.logging.level, "warn");
    }

    #[test]
    fn test_load_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gluco.toml");
        std::fs::write(&path, "[pipeline]\ntop_n = 5\nparallel = true\n\n[logging]\nlevel = \"debug\"\n").unwrap();

        let cfg = AppConfig::load(Some(path.as_path())).unwrap();
        assert_eq!(cfg.pipeline.top_n, 5);
        assert!(cfg.pipeline.parallel);
        assert_eq!(cfg.pipeline.input, PathBuf::from("arabidopsis.csv"));
        assert_eq!(cfg.logging.level, "debug");
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(AppConfig::load(Some(dir.path().join("absent.toml").as_path())).is_err());
    }

    fn env(vars: &[(&str, &str)]) -> Option<::config::Map<String, String>> {
        Some(vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect())
    }

    #[test]
    fn test_load_from_environment() {
        let cfg = AppConfig::load_from(
            None,
            env(&[
                ("GLUCO_PIPELINE__TOP_N", "50"),
                ("GLUCO_PIPELINE__OUTPUT", "top50.csv"),
                ("GLUCO_LOGGING__LEVEL", "info"),
            ]),
        )
        .unwrap();

        assert_eq!(cfg.pipeline.top_n, 50);
        assert_eq!(cfg.pipeline.output, PathBuf::from("top50.csv"));
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn test_environment_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gluco.toml");
        std::fs::write(&path, "[pipeline]\ntop_n = 5\n").unwrap();

        let cfg = AppConfig::load_from(Some(path.as_path()), env(&[("GLUCO_PIPELINE__TOP_N", "7")])).unwrap();
        assert_eq!(cfg.pipeline.top_n, 7);
    }

    #[test]
    fn test_unrelated_variables_are_ignored() {
        let cfg = AppConfig::load_from(None, env(&[("GLUCOSE_LEVEL", "high"), ("PIPELINE__TOP_N", "3")])).unwrap();
        assert_eq!(cfg.pipeline.top_n, 20);
    }
}
