//! Dashboard command implementation
//!
//! For each model prints the example prices followed by the call and put
//! heatmaps, one model after another. A section whose pricing fails shows
//! the error in its place; the other sections are still rendered.

use pricer_core::types::OptionType;
use tracing::{debug, info, warn};

use super::evaluate_grid;
use super::price::ExamplePrices;
use crate::config::HeatmapConfig;
use crate::render;
use crate::{CliError, Result};

/// Text shown in place of a section that could not be priced.
fn failed_section(heading: &str, err: &CliError) -> String {
    format!("{}\n  Error: {}\n", heading, err)
}

/// Keeps pricing failures local to their section; anything else aborts.
fn section_or_error(heading: &str, section: Result<String>) -> Result<String> {
    match section {
        Ok(text) => Ok(text),
        Err(err @ (CliError::Pricing(_) | CliError::Grid(_))) => {
            warn!(section = heading, error = %err, "Dashboard section failed");
            Ok(failed_section(heading, &err))
        }
        Err(err) => Err(err),
    }
}

/// Build the full dashboard text
pub fn render_dashboard(config: &HeatmapConfig) -> Result<String> {
    let mut sections = Vec::new();

    for model in config.models()? {
        debug!(model = %model, "Rendering dashboard section");

        let heading = format!("{} Model", model.model_name());
        let prices = ExamplePrices::compute(config, model).map(|prices| prices.render());
        sections.push(section_or_error(&heading, prices)?);

        for option_type in OptionType::ALL {
            let title = render::title(&model, option_type);
            let heatmap = evaluate_grid(config, &model, option_type)
                .map(|grid| render::render_heatmap(&grid, &title));
            sections.push(section_or_error(&title, heatmap)?);
        }
    }

    Ok(sections.join("\n"))
}

/// Run the dashboard command
pub fn run(config: &HeatmapConfig) -> Result<()> {
    info!("Building dashboard...");
    info!(
        "  Spot axis: {} ± {}, volatility {}..{} in {} steps",
        config.spot, config.spot_half_width, config.vol_min, config.vol_max, config.vol_steps
    );

    println!("{}", render_dashboard(config)?);

    info!("Dashboard complete");
    Ok(())
}
