//! Integration tests for the closed-form and lattice pricers.
//!
//! Exercises the public API only: reference prices, parity and the
//! lattice's convergence towards the closed form.

use approx::assert_relative_eq;
use pricer_core::traits::OptionPricer;
use pricer_core::types::{OptionParameters, OptionType, PricingError};
use pricer_models::PricingModel;

fn reference(option_type: OptionType) -> OptionParameters {
    OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, option_type)
}

#[test]
fn test_reference_prices() {
    let call = PricingModel::Analytic.price(&reference(OptionType::Call)).unwrap();
    let put = PricingModel::Analytic.price(&reference(OptionType::Put)).unwrap();
    assert_relative_eq!(call, 10.4506, epsilon = 1e-3);
    assert_relative_eq!(put, 5.5735, epsilon = 1e-3);
}

#[test]
fn test_lattice_converges_across_moneyness() {
    let lattice = PricingModel::lattice(500).unwrap();
    for spot in [80.0, 95.0, 100.0, 105.0, 120.0] {
        for option_type in OptionType::ALL {
            let params = reference(option_type).with_spot(spot);
            let analytic = PricingModel::Analytic.price(&params).unwrap();
            let tree = lattice.price(&params).unwrap();
            assert!(
                (tree - analytic).abs() < 0.02,
                "S = {}, {}: tree {} vs analytic {}",
                spot,
                option_type,
                tree,
                analytic
            );
        }
    }
}

#[test]
fn test_both_models_satisfy_parity() {
    let forward = 100.0 - 100.0 * (-0.05_f64).exp();
    for model in PricingModel::standard_set(100).unwrap() {
        let (call, put) = model.price_pair(&reference(OptionType::Call)).unwrap();
        assert_relative_eq!(call - put, forward, epsilon = 1e-8);
    }
}

#[test]
fn test_invalid_option_type_rejected_before_pricing() {
    let result = "straddle".parse::<OptionType>();
    assert_eq!(
        result,
        Err(PricingError::InvalidOptionType("straddle".to_string()))
    );
}

#[test]
fn test_non_positive_inputs_are_errors_for_both_models() {
    let bad = [
        reference(OptionType::Call).with_volatility(0.0),
        OptionParameters {
            expiry: -1.0,
            ..reference(OptionType::Put)
        },
    ];
    for model in PricingModel::standard_set(50).unwrap() {
        for params in &bad {
            assert!(
                matches!(model.price(params), Err(PricingError::InvalidParameter { .. })),
                "{} accepted {:?}",
                model,
                params
            );
        }
    }
}
