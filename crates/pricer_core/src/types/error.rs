//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from parameter parsing, validation and pricing

use thiserror::Error;

/// Categorised pricing errors.
///
/// Every failure is fail-fast: pricers return the first error they meet and
/// callers never receive a partially computed value.
///
/// # Variants
/// - `InvalidOptionType`: Option type outside {call, put}
/// - `InvalidParameter`: Non-positive or non-finite market/contract input
/// - `InvalidStepCount`: Lattice with zero time steps
/// - `ArbitrageViolation`: Risk-neutral probability outside [0, 1]
/// - `LatticeOverflow`: Terminal lattice spots exceed the f64 range
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidOptionType("straddle".to_string());
/// assert_eq!(
///     format!("{}", err),
///     "Invalid option type: straddle. Use 'call' or 'put'"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// Option type not in {call, put}.
    #[error("Invalid option type: {0}. Use 'call' or 'put'")]
    InvalidOptionType(String),

    /// Parameter outside its admissible domain.
    #[error("Invalid parameter: {name} = {value}")]
    InvalidParameter {
        /// Parameter name (e.g. "volatility")
        name: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Lattice step count below one.
    #[error("Invalid step count: {0}. Must be at least 1")]
    InvalidStepCount(usize),

    /// Risk-neutral up-probability outside [0, 1].
    #[error("Arbitrage violation: risk-neutral probability q = {q} outside [0, 1]")]
    ArbitrageViolation {
        /// The offending probability
        q: f64,
    },

    /// Lattice spread σ√(T·N) too wide for the top node to be finite.
    #[error("Lattice overflow: spread σ√(T·N) = {spread} exceeds the f64 range")]
    LatticeOverflow {
        /// Log distance from the spot to the top node
        spread: f64,
    },
}

impl PricingError {
    /// Shorthand for [`PricingError::InvalidParameter`].
    pub fn invalid_parameter(name: &'static str, value: f64) -> Self {
        Self::InvalidParameter { name, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_option_type_display() {
        let err = PricingError::InvalidOptionType("straddle".to_string());
        assert_eq!(
            format!("{}", err),
            "Invalid option type: straddle. Use 'call' or 'put'"
        );
    }

    #[test]
    fn test_invalid_parameter_display() {
        let err = PricingError::invalid_parameter("volatility", -0.2);
        assert_eq!(format!("{}", err), "Invalid parameter: volatility = -0.2");
    }

    #[test]
    fn test_invalid_step_count_display() {
        let err = PricingError::InvalidStepCount(0);
        assert_eq!(format!("{}", err), "Invalid step count: 0. Must be at least 1");
    }

    #[test]
    fn test_arbitrage_violation_display() {
        let err = PricingError::ArbitrageViolation { q: 1.5 };
        assert!(format!("{}", err).contains("q = 1.5"));
    }

    #[test]
    fn test_lattice_overflow_display() {
        let err = PricingError::LatticeOverflow { spread: 948.5 };
        assert_eq!(
            format!("{}", err),
            "Lattice overflow: spread σ√(T·N) = 948.5 exceeds the f64 range"
        );
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = PricingError::InvalidStepCount(0);
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = PricingError::invalid_parameter("expiry", 0.0);
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
