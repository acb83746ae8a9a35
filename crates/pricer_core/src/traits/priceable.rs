//! Pricing capability contract.
//!
//! This module defines `OptionPricer`: anything that maps one
//! [`OptionParameters`] set to a scalar price.

use crate::types::{OptionParameters, OptionType, PricingError};

/// Trait for models that can price a European option.
///
/// # Design Philosophy
///
/// Implemented by each concrete pricer and by the dispatch enum in
/// `pricer_models`, which selects the model once and forwards model-specific
/// settings (such as lattice step count) itself. Callers never inspect the
/// model to decide which arguments to pass.
///
/// ```
/// use pricer_core::traits::OptionPricer;
/// use pricer_core::types::{OptionParameters, OptionType, PricingError};
///
/// struct Intrinsic;
///
/// impl OptionPricer for Intrinsic {
///     fn price(&self, params: &OptionParameters) -> Result<f64, PricingError> {
///         params.validate()?;
///         Ok(params.option_type.payoff(params.spot, params.strike))
///     }
/// }
///
/// let params = OptionParameters::new(110.0, 100.0, 1.0, 0.0, 0.2, OptionType::Call);
/// assert_eq!(Intrinsic.price(&params).unwrap(), 10.0);
/// ```
pub trait OptionPricer {
    /// Calculate the option price.
    ///
    /// # Invariants
    /// - The method must be pure (no side effects, deterministic)
    /// - Invalid inputs produce an error, never a NaN price
    fn price(&self, params: &OptionParameters) -> Result<f64, PricingError>;

    /// Prices the call and the put sharing every other parameter.
    ///
    /// # Returns
    /// `(call, put)`
    fn price_pair(&self, params: &OptionParameters) -> Result<(f64, f64), PricingError> {
        let call = self.price(&params.with_option_type(OptionType::Call))?;
        let put = self.price(&params.with_option_type(OptionType::Put))?;
        Ok((call, put))
    }
}
