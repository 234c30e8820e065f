//! CLI pour le classement des gènes par propension à la réponse au glucose

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;

mod commands;
mod config;
mod display;

use commands::{inspect, motifs, rank};
use crate::config::AppConfig;

#[derive(Parser)]
#[command(name = "gluco")]
#[command(about = "Classement des gènes par propension à la régulation par le glucose", long_about = None)]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Fichier de configuration (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Niveau de verbosité
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Calcule la propension de chaque gène et exporte les meilleurs
    Rank {
        /// Base de promoteurs (CSV)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Fichier de sortie des meilleurs gènes (CSV)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Nombre de gènes à exporter
        #[arg(short = 'n', long)]
        top_n: Option<usize>,

        /// Calculer les scores en parallèle
        #[arg(short, long)]
        parallel: bool,

        /// Exporter aussi le détail des meilleurs gènes en JSON, à côté du CSV
        #[arg(short, long)]
        json: bool,
    },

    /// Affiche le détail des sites de fixation d'un gène
    Inspect {
        /// Base de promoteurs (CSV)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Identifiant du gène
        #[arg(long)]
        id: String,

        /// Format d'affichage
        #[arg(short, long, value_enum, default_value = "text")]
        format: ReportFormat,
    },

    /// Liste la table des motifs et leurs poids
    Motifs,
}

#[derive(clap::ValueEnum, Clone)]
pub enum ReportFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut app_config = AppConfig::load(cli.config.as_deref())?;

    let level = match cli.verbose {
        0 => app_config.logging.level.as_str(),
        1 => "info",
        _ => "debug",
    };
    gluco_core::init_logging(level);

    match cli.command {
        Commands::Rank {
            input,
            output,
            top_n,
            parallel,
            json,
        } => {
            let pipeline = &mut app_config.pipeline;
            if let Some(input) = input {
                pipeline.input = input;
            }
            if let Some(output) = output {
                pipeline.output = output;
            }
            if let Some(top_n) = top_n {
                pipeline.top_n = top_n;
            }
            pipeline.parallel |= parallel;

            rank::run(&app_config.pipeline, json)?;
        }
        Commands::Inspect { input, id, format } => {
            let input = input.unwrap_or(app_config.pipeline.input);
            inspect::run(input, &id, format)?;
        }
        Commands::Motifs => {
            motifs::run()?;
        }
    }

    Ok(())
}

/// Crée une barre de progression
pub fn create_progress_bar(length: u64, msg: &str) -> ProgressBar {
    let pb = ProgressBar::new(length);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-"),
    );
    pb.set_message(msg.to_string());
    pb
}

/// Crée une barre de progression spinner
pub fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(SPINNER_TICK);
    pb
}

/// Intervalle d'animation des spinners
const SPINNER_TICK: Duration = Duration::from_millis(100);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_animates_until_finished() {
        let spinner = create_spinner("Lecture des gènes...");
        assert_eq!(spinner.message(), "Lecture des gènes...");
        assert!(!spinner.is_finished());

        std::thread::sleep(SPINNER_TICK * 3);
        spinner.finish_with_message("terminé");
        assert!(spinner.is_finished());
        assert_eq!(spinner.message(), "terminé");
    }

    #[test]
    fn test_json_flag_is_a_switch() {
        let cli = Cli::try_parse_from(["gluco", "rank", "--json", "-o", "out/top.csv"]).unwrap();
        match cli.command {
            Commands::Rank { json, output, .. } => {
                assert!(json);
                assert_eq!(output, Some(PathBuf::from("out/top.csv")));
            }
            _ => panic!("sous-commande inattendue"),
        }
    }
}
