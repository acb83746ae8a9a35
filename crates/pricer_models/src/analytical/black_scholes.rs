//! Black-Scholes pricing model for European options.
//!
//! This module provides the closed-form Black-Scholes price of a European
//! call or put.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T

use num_traits::Float;
use pricer_core::traits::OptionPricer;
use pricer_core::types::{OptionParameters, OptionType, PricingError};

use super::distributions::norm_cdf;

/// Black-Scholes model for European option pricing.
///
/// Holds the market state (spot, rate, volatility); strike, expiry and
/// option type are supplied per price request.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
/// use pricer_core::types::OptionType;
///
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
/// let call_price = bs.price(100.0, 1.0, OptionType::Call).unwrap();
/// let put_price = bs.price(100.0, 1.0, OptionType::Put).unwrap();
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call_price - put_price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BlackScholes<T: Float> {
    /// Spot price (S)
    spot: T,
    /// Risk-free interest rate (r)
    rate: T,
    /// Volatility (σ)
    volatility: T,
}

/// Positive and finite.
#[inline]
fn is_positive<T: Float>(value: T) -> bool {
    value.is_finite() && value > T::zero()
}

/// Lossy view of a rejected value for error reporting.
#[inline]
fn reported<T: Float>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

impl<T: Float> BlackScholes<T> {
    /// Creates a new Black-Scholes model.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (must be positive)
    /// * `rate` - Risk-free interest rate (annualised, must be non-negative)
    /// * `volatility` - Volatility (must be positive)
    ///
    /// # Errors
    /// [`PricingError::InvalidParameter`] naming the offending input.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// assert!(BlackScholes::new(100.0_f64, 0.05, 0.2).is_ok());
    ///
    /// // Invalid spot
    /// assert!(BlackScholes::new(-100.0_f64, 0.05, 0.2).is_err());
    ///
    /// // Invalid volatility
    /// assert!(BlackScholes::new(100.0_f64, 0.05, 0.0).is_err());
    /// ```
    pub fn new(spot: T, rate: T, volatility: T) -> Result<Self, PricingError> {
        if !is_positive(spot) {
            return Err(PricingError::invalid_parameter("spot", reported(spot)));
        }

        if !rate.is_finite() || rate < T::zero() {
            return Err(PricingError::invalid_parameter("rate", reported(rate)));
        }

        if !is_positive(volatility) {
            return Err(PricingError::invalid_parameter(
                "volatility",
                reported(volatility),
            ));
        }

        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Computes the d1 term of the Black-Scholes formula.
    ///
    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    ///
    /// Requires `strike > 0` and `expiry > 0`; [`BlackScholes::price`]
    /// checks both before calling.
    #[inline]
    pub fn d1(&self, strike: T, expiry: T) -> T {
        let half = T::from(0.5).unwrap_or_else(T::nan);
        let vol_sqrt_t = self.volatility * expiry.sqrt();

        let log_moneyness = (self.spot / strike).ln();
        let drift = (self.rate + half * self.volatility * self.volatility) * expiry;

        (log_moneyness + drift) / vol_sqrt_t
    }

    /// Computes the d2 term of the Black-Scholes formula.
    ///
    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self, strike: T, expiry: T) -> T {
        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    /// Computes the European option price.
    ///
    /// # Arguments
    /// * `strike` - Strike price (K), must be positive
    /// * `expiry` - Time to expiration in years (T), must be positive
    /// * `option_type` - Call or put
    ///
    /// # Errors
    /// [`PricingError::InvalidParameter`] for a non-positive strike or expiry.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    /// use pricer_core::types::OptionType;
    ///
    /// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
    /// let price = bs.price(100.0, 1.0, OptionType::Call).unwrap();
    /// assert!((price - 10.4506).abs() < 1e-3);
    ///
    /// assert!(bs.price(100.0, 0.0, OptionType::Call).is_err());
    /// ```
    pub fn price(&self, strike: T, expiry: T, option_type: OptionType) -> Result<T, PricingError> {
        if !is_positive(strike) {
            return Err(PricingError::invalid_parameter("strike", reported(strike)));
        }

        if !is_positive(expiry) {
            return Err(PricingError::invalid_parameter("expiry", reported(expiry)));
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let discounted_strike = strike * (-self.rate * expiry).exp();

        let price = match option_type {
            // C = S·N(d₁) - K·e^(-rT)·N(d₂)
            OptionType::Call => self.spot * norm_cdf(d1) - discounted_strike * norm_cdf(d2),
            // P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
            OptionType::Put => discounted_strike * norm_cdf(-d2) - self.spot * norm_cdf(-d1),
        };

        Ok(price)
    }
}

/// Closed-form price for one parameter set.
///
/// # Errors
/// [`PricingError::InvalidParameter`] if any field of `params` is outside
/// its domain.
///
/// # Examples
/// ```
/// use pricer_core::types::{OptionParameters, OptionType};
/// use pricer_models::analytical::black_scholes_price;
///
/// let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Put);
/// let put = black_scholes_price(&params).unwrap();
/// assert!((put - 5.5735).abs() < 1e-3);
/// ```
pub fn black_scholes_price(params: &OptionParameters) -> Result<f64, PricingError> {
    params.validate()?;
    BlackScholes::new(params.spot, params.rate, params.volatility)?.price(
        params.strike,
        params.expiry,
        params.option_type,
    )
}

/// Stateless [`OptionPricer`] over [`black_scholes_price`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlackScholesPricer;

impl OptionPricer for BlackScholesPricer {
    fn price(&self, params: &OptionParameters) -> Result<f64, PricingError> {
        black_scholes_price(params)
    }
}
