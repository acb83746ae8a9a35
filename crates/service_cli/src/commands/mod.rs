//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod dashboard;
pub mod grid;
pub mod price;

use pricer_core::types::OptionType;
use pricer_grid::parallel::evaluate_auto;
use pricer_grid::PriceGrid;
use pricer_models::PricingModel;

use crate::config::HeatmapConfig;
use crate::Result;

/// Evaluate one grid over the configured axes
pub(crate) fn evaluate_grid(
    config: &HeatmapConfig,
    model: &PricingModel,
    option_type: OptionType,
) -> Result<PriceGrid> {
    let spots = config.spot_values()?;
    let vols = config.vol_values();
    let terms = config.terms(option_type);

    let grid = evaluate_auto(&spots, &vols, &terms, model, config.parallel_threshold)?;
    Ok(grid)
}
