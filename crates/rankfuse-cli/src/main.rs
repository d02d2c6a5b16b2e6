#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]
//! `RankFuse` CLI - run fusion requests from the command line
//!
//! Usage:
//!   `rankfuse combine ./request.json`
//!   `rankfuse combine ./request.json --explain --format json`
//!   `rankfuse check ./request.json`
//!   `rankfuse config`

mod output;
mod request;

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use output::OutputFormat;
use rankfuse_core::{RankFuseConfig, RankFusionEngine};
use request::{FusionRequest, Overrides};

#[derive(Parser)]
#[command(name = "rankfuse")]
#[command(author, version, about = "RankFuse CLI - Weighted linear rank fusion")]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", env = "RANKFUSE_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Fuse the sources of a request file
    Combine {
        /// Path to the JSON request file
        request: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,

        /// Show every source's contribution
        #[arg(long)]
        explain: bool,

        /// Override the request's minimum score
        #[arg(long)]
        min_score: Option<f32>,

        /// Override the request's rank window size
        #[arg(long)]
        window: Option<usize>,

        /// Show the full combined ranking, without filtering or truncation
        #[arg(long)]
        all: bool,
    },

    /// Validate a request file without fusing it
    Check {
        /// Path to the JSON request file
        request: PathBuf,
    },

    /// Print the effective configuration as TOML
    Config,
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<RankFuseConfig> {
    let config = match path {
        Some(path) => RankFuseConfig::load_from_path(path)?,
        None => RankFuseConfig::load()?,
    };
    config.validate()?;
    Ok(config)
}

fn init_logging(verbose: bool, config: &RankFuseConfig) -> anyhow::Result<()> {
    let level = if verbose {
        Level::DEBUG
    } else {
        config.logging.level.parse().unwrap_or(Level::INFO)
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_ref())?;
    init_logging(cli.verbose, &config)?;

    match cli.command {
        Commands::Combine {
            request,
            format,
            explain,
            min_score,
            window,
            all,
        } => {
            let overrides = Overrides {
                rank_window_size: window,
                min_score,
            };
            let resolved = FusionRequest::from_path(&request)?.resolve(&config, overrides)?;
            debug!(
                sources = resolved.sources.len(),
                documents = resolved.document_count(),
                "resolved fusion request"
            );

            let engine = RankFusionEngine::new();
            if explain {
                let explained = if all {
                    engine.combine_explained(&resolved.sources, &resolved.config)?
                } else {
                    engine.fuse_explained(&resolved.sources, &resolved.config)?
                };
                output::print_explained(&explained, &resolved.names, format)?;
            } else {
                let docs = if all {
                    engine.combine(&resolved.sources, &resolved.config)?
                } else {
                    engine.fuse(&resolved.sources, &resolved.config)?
                };
                output::print_combined(&docs, format)?;
            }
        }
        Commands::Check { request } => {
            let resolved =
                FusionRequest::from_path(&request)?.resolve(&config, Overrides::default())?;
            // Runs the input checks without printing anything
            RankFusionEngine::new().combine(&resolved.sources, &resolved.config)?;

            println!(
                "{} {} sources, {} documents, window {}, min_score {}",
                "OK:".green().bold(),
                resolved.sources.len(),
                resolved.document_count(),
                resolved.config.rank_window_size(),
                resolved.config.min_score()
            );
            let sources = resolved.names.iter().zip(resolved.config.sources());
            for (name, (weight, normalizer)) in sources {
                println!("  - {} (weight {}, normalizer {})", name, weight, normalizer);
            }
        }
        Commands::Config => {
            print!("{}", config.to_toml()?);
        }
    }

    Ok(())
}
