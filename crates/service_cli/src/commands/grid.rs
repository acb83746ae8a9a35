//! Grid command implementation
//!
//! Evaluates a single model/option grid and prints it as a heatmap, a
//! numeric table, CSV or JSON.

use std::io;
use std::str::FromStr;

use clap::ValueEnum;
use pricer_core::types::OptionType;
use pricer_models::PricingModel;
use tracing::info;

use super::evaluate_grid;
use crate::config::HeatmapConfig;
use crate::render;
use crate::Result;

/// Model selector on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModelKind {
    /// Black-Scholes closed form
    Analytic,
    /// Cox-Ross-Rubinstein tree with the configured step count
    Lattice,
}

impl ModelKind {
    /// The pricing model this selector stands for
    pub fn resolve(self, config: &HeatmapConfig) -> Result<PricingModel> {
        match self {
            ModelKind::Analytic => Ok(PricingModel::Analytic),
            ModelKind::Lattice => Ok(PricingModel::lattice(config.tree_steps)?),
        }
    }
}

/// Output formats for a single grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Character heatmap
    #[default]
    Heatmap,
    /// Aligned numeric table
    Table,
    /// Comma-separated values
    Csv,
    /// Pretty-printed JSON
    Json,
}

/// Run the grid command
pub fn run(config: &HeatmapConfig, model: ModelKind, option: &str, format: OutputFormat) -> Result<()> {
    // Reject unknown option types before any cell is priced
    let option_type = OptionType::from_str(option)?;
    let model = model.resolve(config)?;

    info!("Evaluating grid...");
    info!("  Model: {}", model);
    info!("  Option type: {}", option_type);
    info!("  Output format: {:?}", format);

    let grid = evaluate_grid(config, &model, option_type)?;
    let title = render::title(&model, option_type);

    match format {
        OutputFormat::Heatmap => print!("{}", render::render_heatmap(&grid, &title)),
        OutputFormat::Table => print!("{}", render::render_table(&grid, &title)),
        OutputFormat::Csv => render::write_csv(&grid, io::stdout().lock())?,
        OutputFormat::Json => {
            println!("{}", render::to_json(&grid, &model, &config.terms(option_type))?)
        }
    }

    info!("Grid complete");
    Ok(())
}
