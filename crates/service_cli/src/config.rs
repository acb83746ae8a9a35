//! Heatmap configuration management
//!
//! Handles loading configuration from TOML files, environment variables and
//! CLI arguments, and turns it into pricing inputs.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use pricer_core::types::{OptionParameters, OptionType, PricingError};
use pricer_grid::axis::{linspace, spot_axis};
use pricer_grid::parallel::DEFAULT_PARALLEL_THRESHOLD;
use pricer_grid::{ContractTerms, GridResult};
use pricer_models::PricingModel;
use serde::Deserialize;
use thiserror::Error;

/// Prefix shared by all environment overrides.
pub const ENV_PREFIX: &str = "HEATMAP_";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Unknown log level name
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// A setting lies outside its permitted range
    #[error("Invalid {name}: {value}. {constraint}")]
    OutOfRange {
        /// Setting name
        name: &'static str,
        /// Offending value
        value: String,
        /// Human-readable bound
        constraint: String,
    },

    /// Reading or parsing the TOML file failed
    #[error("Configuration file error: {0}")]
    FileError(String),

    /// An environment variable could not be parsed
    #[error("Environment variable error: {key} = {value:?}")]
    EnvError {
        /// Variable name
        key: String,
        /// Raw value
        value: String,
    },
}

impl ConfigError {
    fn out_of_range(name: &'static str, value: impl ToString, constraint: impl Into<String>) -> Self {
        ConfigError::OutOfRange {
            name,
            value: value.to_string(),
            constraint: constraint.into(),
        }
    }
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Everything, including per-grid dispatch details
    Trace,
    /// Grid dimensions and model dispatch
    Debug,
    /// Command progress
    #[default]
    Info,
    /// Warnings only
    Warn,
    /// Errors only
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Heatmap configuration structure
///
/// Field defaults reproduce the dashboard's initial inputs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HeatmapConfig {
    /// Centre of the spot axis (>= 1)
    pub spot: f64,
    /// Spot axis half width (1..=10)
    pub spot_half_width: f64,
    /// Lowest volatility row (>= 0.1)
    pub vol_min: f64,
    /// Highest volatility row (>= vol_min)
    pub vol_max: f64,
    /// Number of volatility rows (10..=50)
    pub vol_steps: usize,
    /// Strike price K (>= 0.01)
    pub strike: f64,
    /// Time to maturity T in years (>= 0.01)
    pub expiry: f64,
    /// Risk-free rate r (0..=1)
    pub rate: f64,
    /// Binomial tree steps (10..=200)
    pub tree_steps: usize,
    /// Spot used for the example prices
    pub example_spot: f64,
    /// Volatility used for the example prices
    pub example_volatility: f64,
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Cell count from which grids are evaluated on the rayon pool
    pub parallel_threshold: usize,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            spot: 100.0,
            spot_half_width: 5.0,
            vol_min: 0.1,
            vol_max: 0.3,
            vol_steps: 20,
            strike: 100.0,
            expiry: 1.0,
            rate: 0.05,
            tree_steps: 50,
            example_spot: 100.0,
            example_volatility: 0.2,
            log_level: LogLevel::Info,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

fn parse_env<T: FromStr>(key: &str, raw: String) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::EnvError {
            key: key.to_string(),
            value: raw,
        })
}

impl HeatmapConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Apply `HEATMAP_*` environment variables
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Apply overrides looked up by full variable name
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            let key = format!("{}{}", ENV_PREFIX, name);
            lookup(&key).map(|raw| (key, raw))
        };

        if let Some((key, raw)) = var("SPOT") {
            self.spot = parse_env(&key, raw)?;
        }
        if let Some((key, raw)) = var("SPOT_HALF_WIDTH") {
            self.spot_half_width = parse_env(&key, raw)?;
        }
        if let Some((key, raw)) = var("VOL_MIN") {
            self.vol_min = parse_env(&key, raw)?;
        }
        if let Some((key, raw)) = var("VOL_MAX") {
            self.vol_max = parse_env(&key, raw)?;
        }
        if let Some((key, raw)) = var("VOL_STEPS") {
            self.vol_steps = parse_env(&key, raw)?;
        }
        if let Some((key, raw)) = var("STRIKE") {
            self.strike = parse_env(&key, raw)?;
        }
        if let Some((key, raw)) = var("EXPIRY") {
            self.expiry = parse_env(&key, raw)?;
        }
        if let Some((key, raw)) = var("RATE") {
            self.rate = parse_env(&key, raw)?;
        }
        if let Some((key, raw)) = var("TREE_STEPS") {
            self.tree_steps = parse_env(&key, raw)?;
        }
        if let Some((key, raw)) = var("EXAMPLE_SPOT") {
            self.example_spot = parse_env(&key, raw)?;
        }
        if let Some((key, raw)) = var("EXAMPLE_VOLATILITY") {
            self.example_volatility = parse_env(&key, raw)?;
        }
        if let Some((_, raw)) = var("LOG_LEVEL") {
            self.log_level = LogLevel::from_str(raw.trim())?;
        }
        if let Some((key, raw)) = var("PARALLEL_THRESHOLD") {
            self.parallel_threshold = parse_env(&key, raw)?;
        }

        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(spot) = cli.spot {
            self.spot = spot;
        }
        if let Some(half_width) = cli.spot_half_width {
            self.spot_half_width = half_width;
        }
        if let Some(vol_min) = cli.vol_min {
            self.vol_min = vol_min;
        }
        if let Some(vol_max) = cli.vol_max {
            self.vol_max = vol_max;
        }
        if let Some(vol_steps) = cli.vol_steps {
            self.vol_steps = vol_steps;
        }
        if let Some(strike) = cli.strike {
            self.strike = strike;
        }
        if let Some(expiry) = cli.expiry {
            self.expiry = expiry;
        }
        if let Some(rate) = cli.rate {
            self.rate = rate;
        }
        if let Some(tree_steps) = cli.tree_steps {
            self.tree_steps = tree_steps;
        }
        if let Some(log_level) = &cli.log_level {
            self.log_level = LogLevel::from_str(log_level)?;
        }
        Ok(())
    }

    /// Validate the configuration against the input bounds
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.spot.is_finite() && self.spot >= 1.0) {
            return Err(ConfigError::out_of_range("spot", self.spot, "Must be at least 1"));
        }
        if !(1.0..=10.0).contains(&self.spot_half_width) {
            return Err(ConfigError::out_of_range(
                "spot_half_width",
                self.spot_half_width,
                "Must be between 1 and 10",
            ));
        }
        if !(self.vol_min.is_finite() && self.vol_min >= 0.1) {
            return Err(ConfigError::out_of_range(
                "vol_min",
                self.vol_min,
                "Must be at least 0.1",
            ));
        }
        if !(self.vol_max.is_finite() && self.vol_max >= self.vol_min) {
            return Err(ConfigError::out_of_range(
                "vol_max",
                self.vol_max,
                format!("Must be at least vol_min ({})", self.vol_min),
            ));
        }
        if !(10..=50).contains(&self.vol_steps) {
            return Err(ConfigError::out_of_range(
                "vol_steps",
                self.vol_steps,
                "Must be between 10 and 50",
            ));
        }
        if !(self.strike.is_finite() && self.strike >= 0.01) {
            return Err(ConfigError::out_of_range(
                "strike",
                self.strike,
                "Must be at least 0.01",
            ));
        }
        if !(self.expiry.is_finite() && self.expiry >= 0.01) {
            return Err(ConfigError::out_of_range(
                "expiry",
                self.expiry,
                "Must be at least 0.01",
            ));
        }
        if !(0.0..=1.0).contains(&self.rate) {
            return Err(ConfigError::out_of_range(
                "rate",
                self.rate,
                "Must be between 0 and 1",
            ));
        }
        if !(10..=200).contains(&self.tree_steps) {
            return Err(ConfigError::out_of_range(
                "tree_steps",
                self.tree_steps,
                "Must be between 10 and 200",
            ));
        }
        if !(self.example_spot.is_finite() && self.example_spot > 0.0) {
            return Err(ConfigError::out_of_range(
                "example_spot",
                self.example_spot,
                "Must be positive",
            ));
        }
        if !(self.example_volatility.is_finite() && self.example_volatility > 0.0) {
            return Err(ConfigError::out_of_range(
                "example_volatility",
                self.example_volatility,
                "Must be positive",
            ));
        }

        Ok(())
    }

    /// Spot axis (columns).
    pub fn spot_values(&self) -> GridResult<Vec<f64>> {
        spot_axis(self.spot, self.spot_half_width)
    }

    /// Volatility axis (rows).
    pub fn vol_values(&self) -> Vec<f64> {
        linspace(self.vol_min, self.vol_max, self.vol_steps)
    }

    /// Contract terms shared by every grid cell.
    pub fn terms(&self, option_type: OptionType) -> ContractTerms {
        ContractTerms::new(self.strike, self.expiry, self.rate, option_type)
    }

    /// Both models, the lattice at the configured depth.
    pub fn models(&self) -> Result<[PricingModel; 2], PricingError> {
        PricingModel::standard_set(self.tree_steps)
    }

    /// Parameters for the example price shown above each heatmap.
    pub fn example_parameters(&self, option_type: OptionType) -> OptionParameters {
        self.terms(option_type)
            .at(self.example_spot, self.example_volatility)
    }
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Spot override
    pub spot: Option<f64>,
    /// Spot half width override
    pub spot_half_width: Option<f64>,
    /// Minimum volatility override
    pub vol_min: Option<f64>,
    /// Maximum volatility override
    pub vol_max: Option<f64>,
    /// Volatility row count override
    pub vol_steps: Option<usize>,
    /// Strike override
    pub strike: Option<f64>,
    /// Expiry override
    pub expiry: Option<f64>,
    /// Rate override
    pub rate: Option<f64>,
    /// Tree depth override
    pub tree_steps: Option<usize>,
    /// Log level override
    pub log_level: Option<String>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<HeatmapConfig, ConfigError> {
    let mut config = match &cli.config_file {
        Some(path) => HeatmapConfig::from_file(path)?,
        None => HeatmapConfig::default(),
    };

    config.apply_env()?;
    config.merge_with_cli(cli)?;

    config.validate()?;
    Ok(config)
}
