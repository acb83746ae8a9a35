//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: Cumulative distribution function (CDF)
//! - `norm_pdf`: Probability density function (PDF)
//!
//! Both are generic over `T: Float` so the closed-form pricer works for
//! `f32` and `f64` alike.

use num_traits::Float;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// sqrt(2 * pi)
const SQRT_2PI: f64 = 2.506_628_274_631_000_5;

/// Beyond this |x| the tail probability underflows f64.
const TAIL_CUTOFF: f64 = 37.0;

/// Switch point between the rational and the continued-fraction branch.
const RATIONAL_CUTOFF: f64 = 7.071_067_811_865_47;

/// Rational approximation numerator, highest power first (Hart 5666).
const NUMERATOR: [f64; 7] = [
    3.526_249_659_989_11e-2,
    0.700_383_064_443_688,
    6.373_962_203_531_65,
    33.912_866_078_383,
    112.079_291_497_871,
    221.213_596_169_931,
    220.206_867_912_376,
];

/// Rational approximation denominator, highest power first (Hart 5666).
const DENOMINATOR: [f64; 8] = [
    8.838_834_764_831_84e-2,
    1.755_667_163_182_64,
    16.064_177_579_207,
    86.780_732_202_946_1,
    296.564_248_779_674,
    637.333_633_378_831,
    793.826_512_519_948,
    440.413_735_824_752,
];

#[inline]
fn constant<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}

#[inline]
fn horner<T: Float>(coefficients: &[f64], x: T) -> T {
    coefficients
        .iter()
        .fold(T::zero(), |acc, &c| acc * x + constant(c))
}

/// Upper tail probability P(X > x) for x >= 0.
///
/// Hart's double precision algorithm as popularised by West (2005):
/// a rational approximation up to |x| ≈ 7.07 and a continued fraction beyond,
/// accurate to about 1e-14 absolute.
#[inline]
fn upper_tail<T: Float>(abs_x: T) -> T {
    if abs_x > constant(TAIL_CUTOFF) {
        return T::zero();
    }

    let half = constant::<T>(0.5);
    let exponential = (-half * abs_x * abs_x).exp();

    if abs_x < constant(RATIONAL_CUTOFF) {
        exponential * horner(&NUMERATOR, abs_x) / horner(&DENOMINATOR, abs_x)
    } else {
        // x + 1/(x + 2/(x + 3/(x + 4/(x + 0.65))))
        let mut fraction = abs_x + constant(0.65);
        for k in [4.0, 3.0, 2.0, 1.0] {
            fraction = abs_x + constant::<T>(k) / fraction;
        }
        exponential / fraction / constant(SQRT_2PI)
    }
}

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1).
///
/// # Mathematical Definition
/// Φ(x) = ∫_{-∞}^x φ(t) dt
///
/// # Accuracy
/// About 1e-14 absolute for all finite x. Symmetry Φ(-x) = 1 - Φ(x) holds
/// to rounding, which keeps put-call parity exact for the closed-form pricer.
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_cdf;
///
/// let cdf_0 = norm_cdf(0.0_f64);
/// assert!((cdf_0 - 0.5).abs() < 1e-12);
///
/// let cdf_neg = norm_cdf(-3.0_f64);
/// assert!(cdf_neg < 0.01);
///
/// let cdf_pos = norm_cdf(3.0_f64);
/// assert!(cdf_pos > 0.99);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let tail = upper_tail(x.abs());
    if x > T::zero() {
        T::one() - tail
    } else {
        tail
    }
}

/// Standard normal probability density function.
///
/// # Mathematical Definition
/// φ(x) = (1 / sqrt(2π)) * exp(-x² / 2)
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_pdf;
///
/// // φ(0) = 1 / sqrt(2π) ≈ 0.3989
/// assert!((norm_pdf(0.0_f64) - 0.3989422804).abs() < 1e-9);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    let half = constant::<T>(0.5);
    constant::<T>(FRAC_1_SQRT_2PI) * (-half * x * x).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ==========================================================
    // norm_cdf tests
    // ==========================================================

    #[test]
    fn test_norm_cdf_at_zero() {
        assert_relative_eq!(norm_cdf(0.0_f64), 0.5, epsilon = 1e-14);
    }

    #[test]
    fn test_norm_cdf_symmetry() {
        // Φ(-x) + Φ(x) = 1
        let test_values = [-6.0, -3.0, -2.0, -1.0, -0.5, 0.0, 0.5, 1.0, 2.0, 3.0, 6.0, 8.0];
        for x in test_values {
            assert_relative_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_norm_cdf_reference_values() {
        assert_relative_eq!(norm_cdf(1.0_f64), 0.8413447460685429, epsilon = 1e-12);
        assert_relative_eq!(norm_cdf(-1.0_f64), 0.15865525393145707, epsilon = 1e-12);
        assert_relative_eq!(norm_cdf(2.0_f64), 0.9772498680518208, epsilon = 1e-12);
        assert_relative_eq!(norm_cdf(-2.0_f64), 0.022750131948179195, epsilon = 1e-12);
        assert_relative_eq!(norm_cdf(3.0_f64), 0.9986501019683699, epsilon = 1e-12);
        // Black-Scholes ATM d1/d2 at S=K=100, T=1, r=5%, σ=20%
        assert_relative_eq!(norm_cdf(0.35_f64), 0.6368306511756191, epsilon = 1e-12);
        assert_relative_eq!(norm_cdf(0.15_f64), 0.5596176923702425, epsilon = 1e-12);
    }

    #[test]
    fn test_norm_cdf_far_tail() {
        // Continued fraction branch
        let tail = norm_cdf(-8.0_f64);
        assert_relative_eq!(tail, 6.22096057427178e-16, max_relative = 1e-7);

        assert_eq!(norm_cdf(-40.0_f64), 0.0);
        assert_eq!(norm_cdf(40.0_f64), 1.0);
    }

    #[test]
    fn test_norm_cdf_monotonic() {
        let values: Vec<f64> = (-50..=50).map(|i| i as f64 * 0.1).collect();
        for pair in values.windows(2) {
            assert!(
                norm_cdf(pair[1]) > norm_cdf(pair[0]),
                "CDF not monotonic at x = {}",
                pair[0]
            );
        }
    }

    #[test]
    fn test_norm_cdf_bounds() {
        for x in (-100..=100).map(|i| i as f64 * 0.5) {
            let result = norm_cdf(x);
            assert!((0.0..=1.0).contains(&result), "CDF out of [0, 1] at x = {}", x);
        }
    }

    #[test]
    fn test_norm_cdf_nan_propagates() {
        assert!(norm_cdf(f64::NAN).is_nan());
    }

    #[test]
    fn test_norm_cdf_f32_compatibility() {
        assert!((norm_cdf(0.0_f32) - 0.5).abs() < 1e-6);
    }

    // ==========================================================
    // norm_pdf tests
    // ==========================================================

    #[test]
    fn test_norm_pdf_reference_values() {
        assert_relative_eq!(norm_pdf(0.0_f64), FRAC_1_SQRT_2PI, epsilon = 1e-15);
        assert_relative_eq!(norm_pdf(1.0_f64), 0.24197072451914337, epsilon = 1e-14);
        assert_relative_eq!(norm_pdf(-2.0_f64), 0.05399096651318806, epsilon = 1e-14);
    }

    #[test]
    fn test_cdf_pdf_relationship() {
        // Numerical derivative of CDF should approximate PDF
        let h = 1e-5;
        for x in [-2.0, -1.0, 0.0, 1.0, 2.0] {
            let numerical_derivative = (norm_cdf(x + h) - norm_cdf(x - h)) / (2.0 * h);
            assert_relative_eq!(numerical_derivative, norm_pdf(x), epsilon = 1e-8);
        }
    }
}
