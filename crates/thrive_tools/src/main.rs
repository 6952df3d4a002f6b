//! Thrive - Development Tools

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use thrive_core::config::SessionConfig;
use thrive_tools::preview::PreviewFormat;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "thrive-tools")]
#[command(about = "Development tools for Thrive")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a session config file
    Validate {
        /// Path to the session config
        path: PathBuf,
    },
    /// Print the default session config as RON
    DefaultConfig,
    /// Generate a board and print it
    Preview {
        /// Session config to use; defaults when omitted
        #[arg(long)]
        config: Option<PathBuf>,
        /// Seed; falls back to the config's seed, then 0
        #[arg(long)]
        seed: Option<u64>,
        /// Output format
        #[arg(long, value_enum, default_value_t = PreviewFormat::Ascii)]
        format: PreviewFormat,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { path } => {
            tracing::info!("Validating session config: {}", path.display());
            match thrive_tools::validate::validate_config_file(&path) {
                Ok(summary) => {
                    println!("{summary}");
                    tracing::info!("Validation passed");
                }
                Err(e) => {
                    tracing::error!("Validation failed: {e}");
                    std::process::exit(1);
                }
            }
        }
        Commands::DefaultConfig => match thrive_tools::validate::default_config_text() {
            Ok(text) => println!("{text}"),
            Err(e) => {
                tracing::error!("Could not write default config: {e}");
                std::process::exit(1);
            }
        },
        Commands::Preview {
            config,
            seed,
            format,
        } => {
            let loaded = match config {
                Some(path) => thrive_tools::validate::load_config(&path),
                None => Ok(SessionConfig::default()),
            };
            let result = loaded.and_then(|config| {
                let seed = seed.or(config.seed).unwrap_or(0);
                thrive_tools::preview::preview(config, seed, format)
            });
            match result {
                Ok(text) => println!("{text}"),
                Err(e) => {
                    tracing::error!("Preview failed: {e}");
                    std::process::exit(1);
                }
            }
        }
    }
}
