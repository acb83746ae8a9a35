//! Heatmap CLI - European Option Price Heatmaps
//!
//! This is the operational entry point for the heatmap pricer.
//!
//! # Commands
//!
//! - `heatmap price` - Example call and put prices for every model
//! - `heatmap grid --model <analytic|lattice> --option <call|put>` - One price grid
//! - `heatmap dashboard` - Example prices plus call and put heatmaps per model
//!
//! # Architecture
//!
//! As the **S**ervice layer, this crate wires configuration and logging
//! around the pricer crates and renders their output.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod render;

use commands::grid::{ModelKind, OutputFormat};
use config::{build_config, CliArgs};
pub use error::{CliError, Result};

/// European option price heatmaps
#[derive(Parser)]
#[command(name = "heatmap")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Centre of the spot axis
    #[arg(long, global = true)]
    spot: Option<f64>,

    /// Spot axis half width
    #[arg(long, global = true)]
    spot_half_width: Option<f64>,

    /// Minimum volatility
    #[arg(long, global = true)]
    vol_min: Option<f64>,

    /// Maximum volatility
    #[arg(long, global = true)]
    vol_max: Option<f64>,

    /// Number of volatility rows
    #[arg(long, global = true)]
    vol_steps: Option<usize>,

    /// Strike price (K)
    #[arg(long, global = true)]
    strike: Option<f64>,

    /// Time to maturity in years (T)
    #[arg(long, global = true)]
    expiry: Option<f64>,

    /// Risk-free interest rate (r)
    #[arg(long, global = true)]
    rate: Option<f64>,

    /// Binomial tree steps
    #[arg(long, global = true)]
    tree_steps: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price the example option with every model
    Price,

    /// Evaluate a single price grid
    Grid {
        /// Pricing model
        #[arg(short, long, value_enum, default_value_t = ModelKind::Analytic)]
        model: ModelKind,

        /// Option type (call, put)
        #[arg(short, long, default_value = "call")]
        option: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Heatmap)]
        format: OutputFormat,
    },

    /// Example prices and call/put heatmaps for every model
    Dashboard,
}

impl From<&Cli> for CliArgs {
    fn from(cli: &Cli) -> Self {
        CliArgs {
            config_file: cli.config.clone(),
            spot: cli.spot,
            spot_half_width: cli.spot_half_width,
            vol_min: cli.vol_min,
            vol_max: cli.vol_max,
            vol_steps: cli.vol_steps,
            strike: cli.strike,
            expiry: cli.expiry,
            rate: cli.rate,
            tree_steps: cli.tree_steps,
            log_level: cli.log_level.clone(),
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&CliArgs::from(&cli))?;

    // Initialise tracing
    init_tracing(config.log_level.as_filter_str());

    info!(
        spot = config.spot,
        strike = config.strike,
        expiry = config.expiry,
        rate = config.rate,
        tree_steps = config.tree_steps,
        "Configuration loaded"
    );

    match cli.command {
        Commands::Price => commands::price::run(&config),
        Commands::Grid {
            model,
            option,
            format,
        } => commands::grid::run(&config, model, &option, format),
        Commands::Dashboard => commands::dashboard::run(&config),
    }
}
