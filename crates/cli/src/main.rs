//! Diabetes Risk Predictor CLI
//!
//! Renders the input schema as a form, pre-fills it from templates, runs a
//! single blocking prediction against the loaded classifier artifact, and
//! prints the labeled, colored, probability-annotated result.

mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::predict::PredictArgs;
use commands::{predict, schema, templates};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Diabetes Risk Predictor CLI
#[derive(Parser)]
#[command(name = "dbrisk")]
#[command(author, version, about = "CLI for Diabetes Risk Predictor", long_about = None)]
pub struct Cli {
    /// Path to the classifier artifact (can also be set via DBRISK_MODEL env var)
    #[arg(long, env = "DBRISK_MODEL")]
    pub model: Option<String>,

    /// Expected SHA-256 checksum of the artifact (hex)
    #[arg(long)]
    pub checksum: Option<String>,

    /// Output format
    #[arg(long, short, default_value = "table")]
    pub format: output::OutputFormat,

    /// Enable verbose output
    #[arg(long, short)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one prediction
    Predict {
        /// Template to pre-fill the input vector (low-risk, medium-risk, high-risk)
        #[arg(long, short)]
        template: Option<String>,

        /// Override one field, e.g. --set BMI=23 (repeatable)
        #[arg(long = "set", value_name = "FIELD=VALUE")]
        set: Vec<String>,

        /// Read the complete input vector from a JSON file ("-" for stdin)
        #[arg(long, short)]
        input: Option<String>,
    },

    /// Show the input form fields in schema order
    Schema,

    /// List the built-in input templates
    Templates,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();

    match cli.command {
        Commands::Predict {
            template,
            set,
            input,
        } => predict::run(PredictArgs {
            model: cli.model,
            checksum: cli.checksum,
            template,
            set,
            input,
            format: cli.format,
        }),
        Commands::Schema => schema::run(cli.format),
        Commands::Templates => templates::run(cli.format),
    }
}
