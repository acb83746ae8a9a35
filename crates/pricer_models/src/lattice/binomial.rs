//! Cox-Ross-Rubinstein binomial lattice for European options.
//!
//! The tree recombines, so layer `i` holds `i + 1` nodes and the whole
//! valuation runs in O(N²) time over a single O(N) buffer.
//!
//! ## Lattice Parameters
//!
//! - Δt = T / N
//! - u = e^(σ√Δt), d = 1 / u
//! - q = (e^(rΔt) - d) / (u - d)
//!
//! Only European exercise is supported: interior nodes are pure discounted
//! expectations with no comparison against intrinsic value.

use pricer_core::traits::OptionPricer;
use pricer_core::types::{OptionParameters, PricingError};

/// Default number of time steps (matches the heatmap's default tree depth).
pub const DEFAULT_STEPS: usize = 50;

/// Per-step quantities shared by every node of the lattice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeFactors {
    /// Time step Δt = T / N
    pub dt: f64,
    /// Up factor u = e^(σ√Δt)
    pub up: f64,
    /// Down factor d = 1 / u
    pub down: f64,
    /// Risk-neutral up-probability q
    pub probability: f64,
    /// One-step discount factor e^(-rΔt)
    pub discount: f64,
}

impl TreeFactors {
    /// Derives the step quantities without any range checks.
    pub fn new(params: &OptionParameters, steps: usize) -> Self {
        let dt = params.expiry / steps as f64;
        let up = (params.volatility * dt.sqrt()).exp();
        let down = 1.0 / up;
        let probability = ((params.rate * dt).exp() - down) / (up - down);

        Self {
            dt,
            up,
            down,
            probability,
            discount: (-params.rate * dt).exp(),
        }
    }

    /// Whether q is a probability, i.e. the tree is arbitrage free.
    #[inline]
    pub fn is_arbitrage_free(&self) -> bool {
        (0.0..=1.0).contains(&self.probability)
    }
}

/// Recombining binomial tree pricer.
///
/// # Examples
/// ```
/// use pricer_core::traits::OptionPricer;
/// use pricer_core::types::{OptionParameters, OptionType};
/// use pricer_models::lattice::BinomialTree;
///
/// let tree = BinomialTree::new(500).unwrap();
/// let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call);
/// let price = tree.price(&params).unwrap();
///
/// // Converges to the Black-Scholes value 10.4506
/// assert!((price - 10.4506).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BinomialTree {
    steps: usize,
}

impl Default for BinomialTree {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS,
        }
    }
}

impl BinomialTree {
    /// Creates a tree with `steps` time steps.
    ///
    /// # Errors
    /// [`PricingError::InvalidStepCount`] if `steps == 0`.
    pub fn new(steps: usize) -> Result<Self, PricingError> {
        if steps == 0 {
            return Err(PricingError::InvalidStepCount(steps));
        }
        Ok(Self { steps })
    }

    /// Number of time steps N.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Spot prices at maturity, lowest first: S·u^(2i-N) for i = 0..=N.
    ///
    /// Each node is taken from its own exponent, so nodes far below the spot
    /// underflow to zero on their own instead of zeroing the whole layer.
    /// Nodes far above it become infinite; [`OptionPricer::price`] rejects
    /// such a lattice.
    pub fn terminal_spots(&self, spot: f64, factors: &TreeFactors) -> Vec<f64> {
        let log_up = factors.up.ln();
        let steps = self.steps as f64;
        (0..=self.steps)
            .map(|i| spot * (log_up * (2.0 * i as f64 - steps)).exp())
            .collect()
    }

    fn backward_induction(&self, mut values: Vec<f64>, factors: &TreeFactors) -> f64 {
        let q = factors.probability;
        for layer in (1..=self.steps).rev() {
            // values[i] only reads values[i + 1], which this pass has not touched yet
            for i in 0..layer {
                values[i] = factors.discount * (q * values[i + 1] + (1.0 - q) * values[i]);
            }
        }
        values[0]
    }
}

impl OptionPricer for BinomialTree {
    /// Prices a European option on the lattice.
    ///
    /// # Errors
    /// - [`PricingError::InvalidParameter`] for an out-of-domain input
    /// - [`PricingError::ArbitrageViolation`] if q falls outside [0, 1],
    ///   which happens when r·√Δt exceeds σ (too few steps for the rate)
    /// - [`PricingError::LatticeOverflow`] if the top terminal spot is not
    ///   finite (σ√(T·N) beyond roughly 700)
    fn price(&self, params: &OptionParameters) -> Result<f64, PricingError> {
        params.validate()?;

        let factors = TreeFactors::new(params, self.steps);
        if !factors.is_arbitrage_free() {
            return Err(PricingError::ArbitrageViolation {
                q: factors.probability,
            });
        }

        let spots = self.terminal_spots(params.spot, &factors);
        if spots.iter().any(|spot| !spot.is_finite()) {
            return Err(PricingError::LatticeOverflow {
                spread: factors.up.ln() * self.steps as f64,
            });
        }

        let payoffs = spots
            .into_iter()
            .map(|spot| params.option_type.payoff(spot, params.strike))
            .collect();

        Ok(self.backward_induction(payoffs, &factors))
    }
}

/// Lattice price for one parameter set with `steps` time steps.
///
/// # Errors
/// [`PricingError::InvalidStepCount`] for `steps == 0`, otherwise as
/// [`BinomialTree`]'s [`OptionPricer::price`].
pub fn binomial_tree_price(params: &OptionParameters, steps: usize) -> Result<f64, PricingError> {
    BinomialTree::new(steps)?.price(params)
}
