//! Integration tests for module exports.
//!
//! Verify that all public modules and types are correctly exported
//! and accessible via absolute paths.

/// Test that types are accessible via absolute path and re-export.
#[test]
fn test_types_module_exports() {
    use pricer_core::types::error::PricingError;
    use pricer_core::types::option::{OptionParameters, OptionType};

    let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Put);
    assert!(params.validate().is_ok());

    let err: PricingError = "butterfly".parse::<OptionType>().unwrap_err();
    assert!(matches!(err, PricingError::InvalidOptionType(_)));

    // Re-exports at module level
    let _: pricer_core::types::OptionType = pricer_core::types::OptionType::Call;
}

/// Test that the pricer trait is usable from outside the crate.
#[test]
fn test_traits_module_exports() {
    use pricer_core::traits::priceable::OptionPricer;
    use pricer_core::types::{OptionParameters, OptionType, PricingError};

    struct Forward;

    impl OptionPricer for Forward {
        fn price(&self, params: &OptionParameters) -> Result<f64, PricingError> {
            params.validate()?;
            let forward = params.spot - params.strike * params.discount_factor();
            Ok(match params.option_type {
                OptionType::Call => forward,
                OptionType::Put => -forward,
            })
        }
    }

    let params = OptionParameters::new(100.0, 100.0, 1.0, 0.0, 0.2, OptionType::Call);
    let (call, put) = Forward.price_pair(&params).unwrap();
    assert_eq!(call, 0.0);
    assert_eq!(put, 0.0);

    let bad = params.with_volatility(0.0);
    assert!(Forward.price_pair(&bad).is_err());
}
