//! Price command implementation
//!
//! Prices the example option (call and put) with every model.

use pricer_core::traits::OptionPricer;
use pricer_core::types::OptionType;
use pricer_models::PricingModel;
use tracing::info;

use crate::config::HeatmapConfig;
use crate::Result;

/// Call and put price of the example option under one model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExamplePrices {
    /// Model used
    pub model: PricingModel,
    /// Call price
    pub call: f64,
    /// Put price
    pub put: f64,
}

impl ExamplePrices {
    /// Prices the configured example point with `model`.
    pub fn compute(config: &HeatmapConfig, model: PricingModel) -> Result<Self> {
        let params = config.example_parameters(OptionType::Call);
        let (call, put) = model.price_pair(&params)?;
        Ok(Self { model, call, put })
    }

    /// Two-decimal summary block headed by the model name.
    pub fn render(&self) -> String {
        format!(
            "{} Model\n  Call Option Price: {:.2}\n  Put Option Price: {:.2}\n",
            self.model.model_name(),
            self.call,
            self.put
        )
    }
}

/// Example prices for every configured model, analytic first
pub fn example_prices(config: &HeatmapConfig) -> Result<Vec<ExamplePrices>> {
    config
        .models()?
        .into_iter()
        .map(|model| ExamplePrices::compute(config, model))
        .collect()
}

/// Run the price command
pub fn run(config: &HeatmapConfig) -> Result<()> {
    info!("Pricing example option...");
    info!("  Spot: {}", config.example_spot);
    info!("  Volatility: {}", config.example_volatility);
    info!("  Strike: {}", config.strike);

    for prices in example_prices(config)? {
        println!("{}", prices.render());
    }

    info!("Pricing complete");
    Ok(())
}
