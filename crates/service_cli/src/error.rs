//! CLI error types

use pricer_core::types::PricingError;
use pricer_grid::GridError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration could not be loaded or failed validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Pricing error from pricer_models
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    /// Grid evaluation error from pricer_grid
    #[error("Grid error: {0}")]
    Grid(#[from] GridError),

    /// Writing output failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialisation failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV serialisation failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
