//! European option contract inputs.
//!
//! This module provides:
//! - `OptionType`: Call or put, parsed from user input
//! - `OptionParameters`: The full scalar parameter set consumed by a pricer

use std::fmt;
use std::str::FromStr;

use num_traits::Float;

use super::error::PricingError;

/// Type of a European option.
///
/// The set is closed: strings other than `call`/`put` fail to parse with
/// [`PricingError::InvalidOptionType`].
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
///
/// let call: OptionType = "Call".parse().unwrap();
/// assert_eq!(call, OptionType::Call);
/// assert_eq!(call.payoff(110.0_f64, 100.0), 10.0);
///
/// assert!("straddle".parse::<OptionType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Call option: max(S - K, 0)
    Call,
    /// Put option: max(K - S, 0)
    Put,
}

impl OptionType {
    /// Both option types, calls first.
    pub const ALL: [OptionType; 2] = [OptionType::Call, OptionType::Put];

    /// Exercise value at maturity.
    ///
    /// # Arguments
    /// * `spot` - Underlying price at maturity (S)
    /// * `strike` - Strike price (K)
    #[inline]
    pub fn payoff<T: Float>(&self, spot: T, strike: T) -> T {
        let intrinsic = match self {
            OptionType::Call => spot - strike,
            OptionType::Put => strike - spot,
        };
        intrinsic.max(T::zero())
    }

    /// Lower-case identifier used on the command line and in output.
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }

    /// Capitalised label used in titles.
    pub fn label(&self) -> &'static str {
        match self {
            OptionType::Call => "Call",
            OptionType::Put => "Put",
        }
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            _ => Err(PricingError::InvalidOptionType(s.to_string())),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Scalar inputs for pricing one European option.
///
/// A transient value object: built per call, owned by the caller.
///
/// # Invariants
/// Checked by [`OptionParameters::validate`], not by the constructor:
/// - `spot`, `strike`, `expiry`, `volatility` are finite and > 0
/// - `rate` is finite and >= 0
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionParameters {
    /// Spot price (S)
    pub spot: f64,
    /// Strike price (K)
    pub strike: f64,
    /// Time to maturity in years (T)
    pub expiry: f64,
    /// Continuously compounded risk-free rate (r)
    pub rate: f64,
    /// Volatility (σ)
    pub volatility: f64,
    /// Call or put
    pub option_type: OptionType,
}

impl OptionParameters {
    /// Creates a parameter set without validating it.
    pub fn new(
        spot: f64,
        strike: f64,
        expiry: f64,
        rate: f64,
        volatility: f64,
        option_type: OptionType,
    ) -> Self {
        Self {
            spot,
            strike,
            expiry,
            rate,
            volatility,
            option_type,
        }
    }

    /// Returns a copy with a different spot price.
    #[inline]
    pub fn with_spot(self, spot: f64) -> Self {
        Self { spot, ..self }
    }

    /// Returns a copy with a different volatility.
    #[inline]
    pub fn with_volatility(self, volatility: f64) -> Self {
        Self { volatility, ..self }
    }

    /// Returns a copy with a different option type.
    #[inline]
    pub fn with_option_type(self, option_type: OptionType) -> Self {
        Self {
            option_type,
            ..self
        }
    }

    /// Checks every field against its domain.
    ///
    /// # Errors
    /// [`PricingError::InvalidParameter`] naming the first offending field.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::{OptionParameters, OptionType, PricingError};
    ///
    /// let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.0, OptionType::Call);
    /// assert_eq!(
    ///     params.validate(),
    ///     Err(PricingError::invalid_parameter("volatility", 0.0))
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), PricingError> {
        let positive = [
            ("spot", self.spot),
            ("strike", self.strike),
            ("expiry", self.expiry),
            ("volatility", self.volatility),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(PricingError::invalid_parameter(name, value));
            }
        }

        if !self.rate.is_finite() || self.rate < 0.0 {
            return Err(PricingError::invalid_parameter("rate", self.rate));
        }

        Ok(())
    }

    /// Discount factor e^(-rT).
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.expiry).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn atm_call() -> OptionParameters {
        OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call)
    }

    #[test]
    fn test_parse_option_type() {
        assert_eq!("call".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!("put".parse::<OptionType>().unwrap(), OptionType::Put);
        assert_eq!(" PUT ".parse::<OptionType>().unwrap(), OptionType::Put);
    }

    #[test]
    fn test_parse_invalid_option_type() {
        for input in ["straddle", "", "calls", "c"] {
            match input.parse::<OptionType>() {
                Err(PricingError::InvalidOptionType(s)) => assert_eq!(s, input),
                other => panic!("Expected InvalidOptionType, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for option_type in OptionType::ALL {
            let parsed: OptionType = option_type.to_string().parse().unwrap();
            assert_eq!(parsed, option_type);
        }
    }

    #[test]
    fn test_payoff() {
        assert_eq!(OptionType::Call.payoff(110.0_f64, 100.0), 10.0);
        assert_eq!(OptionType::Call.payoff(90.0_f64, 100.0), 0.0);
        assert_eq!(OptionType::Put.payoff(90.0_f64, 100.0), 10.0);
        assert_eq!(OptionType::Put.payoff(110.0_f64, 100.0), 0.0);
    }

    #[test]
    fn test_validate_accepts_reference_point() {
        assert!(atm_call().validate().is_ok());
        assert!(atm_call().with_option_type(OptionType::Put).validate().is_ok());
    }

    #[test]
    fn test_validate_accepts_zero_rate() {
        let params = OptionParameters { rate: 0.0, ..atm_call() };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_positive_fields() {
        let cases = [
            (OptionParameters { spot: 0.0, ..atm_call() }, "spot"),
            (OptionParameters { strike: -1.0, ..atm_call() }, "strike"),
            (OptionParameters { expiry: 0.0, ..atm_call() }, "expiry"),
            (atm_call().with_volatility(-0.2), "volatility"),
            (OptionParameters { rate: -0.01, ..atm_call() }, "rate"),
        ];
        for (params, expected) in cases {
            match params.validate() {
                Err(PricingError::InvalidParameter { name, .. }) => assert_eq!(name, expected),
                other => panic!("Expected InvalidParameter({}), got {:?}", expected, other),
            }
        }
    }

    #[test]
    fn test_validate_rejects_nan() {
        let params = atm_call().with_spot(f64::NAN);
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_with_builders_leave_other_fields() {
        let params = atm_call().with_spot(95.0).with_volatility(0.3);
        assert_eq!(params.spot, 95.0);
        assert_eq!(params.volatility, 0.3);
        assert_eq!(params.strike, 100.0);
        assert_eq!(params.option_type, OptionType::Call);
    }

    #[test]
    fn test_discount_factor() {
        let df = atm_call().discount_factor();
        assert_relative_eq!(df, (-0.05_f64).exp(), epsilon = 1e-15);
    }

    const POSITIVE_FIELDS: [&str; 4] = ["spot", "strike", "expiry", "volatility"];

    fn with_field(field: usize, value: f64) -> OptionParameters {
        let mut params = atm_call();
        match field {
            0 => params.spot = value,
            1 => params.strike = value,
            2 => params.expiry = value,
            _ => params.volatility = value,
        }
        params
    }

    proptest! {
        #[test]
        fn parse_accepts_any_case_and_padding(
            is_call in any::<bool>(),
            upper_mask in any::<u8>(),
            leading in "[ \t]{0,3}",
            trailing in "[ \t]{0,3}",
        ) {
            let option_type = if is_call { OptionType::Call } else { OptionType::Put };
            let word: String = option_type
                .to_string()
                .chars()
                .enumerate()
                .map(|(i, c)| if upper_mask & (1 << i) != 0 { c.to_ascii_uppercase() } else { c })
                .collect();
            let input = format!("{}{}{}", leading, word, trailing);

            prop_assert_eq!(input.parse::<OptionType>(), Ok(option_type));
        }

        #[test]
        fn validate_rejects_bad_positive_field(
            field in 0_usize..4,
            bad in prop_oneof![
                Just(0.0),
                Just(-0.0),
                Just(f64::NAN),
                Just(f64::INFINITY),
                Just(f64::NEG_INFINITY),
                -1e6_f64..0.0,
            ],
        ) {
            match with_field(field, bad).validate() {
                Err(PricingError::InvalidParameter { name, .. }) => {
                    prop_assert_eq!(name, POSITIVE_FIELDS[field]);
                }
                other => prop_assert!(false, "Expected InvalidParameter, got {:?}", other),
            }
        }

        #[test]
        fn validate_rejects_bad_rate(
            rate in prop_oneof![
                Just(f64::NAN),
                Just(f64::INFINITY),
                Just(f64::NEG_INFINITY),
                -1e6_f64..-1e-12,
            ],
        ) {
            let params = OptionParameters { rate, ..atm_call() };
            match params.validate() {
                Err(PricingError::InvalidParameter { name, .. }) => prop_assert_eq!(name, "rate"),
                other => prop_assert!(false, "Expected InvalidParameter, got {:?}", other),
            }
        }

        #[test]
        fn validate_accepts_positive_inputs(
            spot in 1e-6_f64..1e6,
            strike in 1e-6_f64..1e6,
            expiry in 1e-6_f64..50.0,
            rate in 0.0_f64..1.0,
            volatility in 1e-6_f64..5.0,
        ) {
            let params = OptionParameters::new(spot, strike, expiry, rate, volatility, OptionType::Put);
            prop_assert_eq!(params.validate(), Ok(()));
        }
    }
}
