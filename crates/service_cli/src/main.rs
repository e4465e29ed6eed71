//! Randlens CLI - Command Line Operations for LLM Randomness Analysis
//!
//! This is the operational entry point for the randlens laboratory.
//!
//! # Commands
//!
//! - `randlens run` - Run a full sampling campaign against a model
//! - `randlens quick` - Reduced campaign for a fast smoke check
//! - `randlens analyze --report <file>` - Re-analyse a saved report
//! - `randlens plot --report <file>` - Render charts from a saved report
//! - `randlens demo` - Offline campaign with the simulated sampler
//! - `randlens check` - Verify configuration, API keys and the stats kernel
//!
//! # Architecture
//!
//! As the service layer of the workspace, this crate orchestrates the
//! provider, analysis and report layers behind a unified CLI.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

pub use config::CliConfig;
pub use error::{CliError, Result};

use sampler_providers::PromptStyle;

/// Randlens LLM randomness laboratory CLI
#[derive(Parser)]
#[command(name = "randlens")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "randlens.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a full sampling campaign against a model
    Run {
        /// Model to query (e.g. gpt-4.1, claude-sonnet-4-20250514)
        #[arg(short, long)]
        model: Option<String>,

        /// Samples per range per run
        #[arg(short, long)]
        samples: Option<usize>,

        /// Number of independent runs
        #[arg(short, long)]
        runs: Option<usize>,

        /// Prompt style (direct, creative, precise)
        #[arg(short = 'p', long)]
        style: Option<PromptStyle>,

        /// Output directory for the report and charts
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Reduced campaign for a fast smoke check
    Quick {
        /// Model to query
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Re-analyse a saved report's raw results
    Analyze {
        /// Path to a saved report JSON file
        #[arg(short, long)]
        report: String,

        /// Where to write the refreshed report (defaults to in place)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Render charts from a saved report
    Plot {
        /// Path to a saved report JSON file
        #[arg(short, long)]
        report: String,

        /// Output directory for the charts
        #[arg(short, long, default_value = "./plots")]
        output_dir: String,
    },

    /// Offline campaign with the simulated sampler (no API keys needed)
    Demo {
        /// Seed for the simulated sampler
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Midpoint pull strength in [0, 1]
        #[arg(long, default_value = "0.6")]
        pull: f64,

        /// Output directory for the report and charts
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Verify configuration, API keys and the stats kernel
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let config = CliConfig::load(&cli.config)?;

    match cli.command {
        Commands::Run {
            model,
            samples,
            runs,
            style,
            output,
        } => {
            commands::run::run(
                &config,
                model.as_deref(),
                samples,
                runs,
                style,
                output.as_deref(),
            )
            .await
        }
        Commands::Quick { model } => commands::quick::run(&config, model.as_deref()).await,
        Commands::Analyze { report, output } => commands::analyze::run(&report, output.as_deref()),
        Commands::Plot { report, output_dir } => commands::plot::run(&report, &output_dir),
        Commands::Demo { seed, pull, output } => {
            commands::demo::run(&config, seed, pull, output.as_deref()).await
        }
        Commands::Check => commands::check::run(&config, &cli.config),
    }
}
