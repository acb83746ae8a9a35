//! Static dispatch enum for option pricing models.
//!
//! This module provides `PricingModel`, the closed set of supported pricers.
//! Model-specific settings (the lattice step count) travel inside the
//! variant, so callers pick a model once and price any number of parameter
//! sets through the same [`OptionPricer`] contract.
//!
//! ## Example
//!
//! ```
//! use pricer_core::traits::OptionPricer;
//! use pricer_core::types::{OptionParameters, OptionType};
//! use pricer_models::models::PricingModel;
//!
//! let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call);
//!
//! let analytic = PricingModel::Analytic.price(&params).unwrap();
//! let lattice = PricingModel::lattice(500).unwrap().price(&params).unwrap();
//!
//! assert_eq!(PricingModel::Analytic.model_name(), "Black-Scholes");
//! assert!((analytic - lattice).abs() < 0.01);
//! ```

use std::fmt;

use pricer_core::traits::OptionPricer;
use pricer_core::types::{OptionParameters, PricingError};

use crate::analytical::BlackScholesPricer;
use crate::lattice::BinomialTree;

/// Supported pricing models.
///
/// The set is fixed: adding a model means adding a variant here and a
/// match arm in each method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "model", rename_all = "lowercase"))]
pub enum PricingModel {
    /// Closed-form Black-Scholes formula
    Analytic,
    /// Cox-Ross-Rubinstein binomial tree
    Lattice {
        /// Number of time steps N (>= 1)
        steps: usize,
    },
}

impl PricingModel {
    /// Creates a lattice model, rejecting `steps == 0`.
    ///
    /// # Errors
    /// [`PricingError::InvalidStepCount`] if `steps == 0`.
    pub fn lattice(steps: usize) -> Result<Self, PricingError> {
        BinomialTree::new(steps).map(|tree| PricingModel::Lattice {
            steps: tree.steps(),
        })
    }

    /// Both models, analytic first, with the lattice at `steps` steps.
    pub fn standard_set(steps: usize) -> Result<[PricingModel; 2], PricingError> {
        Ok([PricingModel::Analytic, PricingModel::lattice(steps)?])
    }

    /// Human-readable model name used in titles.
    pub fn model_name(&self) -> &'static str {
        match self {
            PricingModel::Analytic => "Black-Scholes",
            PricingModel::Lattice { .. } => "Binomial Tree",
        }
    }

    /// Short identifier used on the command line and in output.
    pub fn id(&self) -> &'static str {
        match self {
            PricingModel::Analytic => "analytic",
            PricingModel::Lattice { .. } => "lattice",
        }
    }

    /// Lattice step count, if the model has one.
    pub fn steps(&self) -> Option<usize> {
        match self {
            PricingModel::Analytic => None,
            PricingModel::Lattice { steps } => Some(*steps),
        }
    }
}

impl OptionPricer for PricingModel {
    fn price(&self, params: &OptionParameters) -> Result<f64, PricingError> {
        match self {
            PricingModel::Analytic => BlackScholesPricer.price(params),
            PricingModel::Lattice { steps } => BinomialTree::new(*steps)?.price(params),
        }
    }
}

impl fmt::Display for PricingModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingModel::Analytic => write!(f, "{}", self.model_name()),
            PricingModel::Lattice { steps } => {
                write!(f, "{} ({} steps)", self.model_name(), steps)
            }
        }
    }
}
