//! Price grids over a spot × volatility mesh.
//!
//! `evaluate` prices every (volatility, spot) combination with one model and
//! returns a [`PriceGrid`] whose row `i` belongs to `vol_values[i]` and whose
//! column `j` belongs to `spot_values[j]`.

use pricer_core::traits::OptionPricer;
use pricer_core::types::{OptionParameters, OptionType};
use pricer_models::analytical::BlackScholesPricer;
use pricer_models::lattice::BinomialTree;
use pricer_models::PricingModel;
use tracing::debug;

use crate::error::{GridError, GridResult};

/// Contract terms held fixed across a grid: everything except spot and σ.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContractTerms {
    /// Strike price (K)
    pub strike: f64,
    /// Time to maturity in years (T)
    pub expiry: f64,
    /// Risk-free rate (r)
    pub rate: f64,
    /// Call or put
    pub option_type: OptionType,
}

impl ContractTerms {
    /// Creates contract terms.
    pub fn new(strike: f64, expiry: f64, rate: f64, option_type: OptionType) -> Self {
        Self {
            strike,
            expiry,
            rate,
            option_type,
        }
    }

    /// Full parameter set for one grid cell.
    #[inline]
    pub fn at(&self, spot: f64, volatility: f64) -> OptionParameters {
        OptionParameters::new(
            spot,
            self.strike,
            self.expiry,
            self.rate,
            volatility,
            self.option_type,
        )
    }

    /// Returns a copy priced as the other option type.
    pub fn with_option_type(self, option_type: OptionType) -> Self {
        Self {
            option_type,
            ..self
        }
    }
}

/// Matrix of prices indexed by (volatility index, spot index).
///
/// # Invariants
/// - `prices.len() == vol_values.len()`
/// - every row has `spot_values.len()` entries
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PriceGrid {
    spot_values: Vec<f64>,
    vol_values: Vec<f64>,
    prices: Vec<Vec<f64>>,
}

impl PriceGrid {
    /// Assembles a grid, checking the shape invariants.
    ///
    /// # Errors
    /// [`GridError::ShapeMismatch`] if `prices` is not
    /// `vol_values.len()` rows of `spot_values.len()` columns.
    pub fn new(
        spot_values: Vec<f64>,
        vol_values: Vec<f64>,
        prices: Vec<Vec<f64>>,
    ) -> GridResult<Self> {
        let well_formed = prices.len() == vol_values.len()
            && prices.iter().all(|row| row.len() == spot_values.len());
        if !well_formed {
            return Err(GridError::ShapeMismatch {
                expected_rows: vol_values.len(),
                expected_cols: spot_values.len(),
                rows: prices.len(),
            });
        }

        Ok(Self {
            spot_values,
            vol_values,
            prices,
        })
    }

    /// Number of rows (volatility values).
    #[inline]
    pub fn rows(&self) -> usize {
        self.vol_values.len()
    }

    /// Number of columns (spot values).
    #[inline]
    pub fn cols(&self) -> usize {
        self.spot_values.len()
    }

    /// Whether the grid has no cells.
    pub fn is_empty(&self) -> bool {
        self.rows() == 0 || self.cols() == 0
    }

    /// Spot axis, one value per column.
    pub fn spot_values(&self) -> &[f64] {
        &self.spot_values
    }

    /// Volatility axis, one value per row.
    pub fn vol_values(&self) -> &[f64] {
        &self.vol_values
    }

    /// All rows, top (first volatility) to bottom.
    pub fn prices(&self) -> &[Vec<f64>] {
        &self.prices
    }

    /// Row `row` of the grid.
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        self.prices.get(row).map(Vec::as_slice)
    }

    /// Price at (`row`, `col`).
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.prices.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Row-major iterator over `(row, col, price)`.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.prices.iter().enumerate().flat_map(|(i, row)| {
            row.iter().enumerate().map(move |(j, &price)| (i, j, price))
        })
    }

    /// Smallest and largest price, `None` for an empty grid.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.cells().map(|(_, _, price)| price).fold(None, |acc, price| {
            Some(match acc {
                None => (price, price),
                Some((lo, hi)) => (lo.min(price), hi.max(price)),
            })
        })
    }

    /// Smallest price, `None` for an empty grid.
    pub fn min(&self) -> Option<f64> {
        self.value_range().map(|(lo, _)| lo)
    }

    /// Largest price, `None` for an empty grid.
    pub fn max(&self) -> Option<f64> {
        self.value_range().map(|(_, hi)| hi)
    }
}

/// Prices one volatility row, stopping at the first failing cell.
pub(crate) fn price_row<P>(
    pricer: &P,
    terms: &ContractTerms,
    row: usize,
    volatility: f64,
    spot_values: &[f64],
) -> GridResult<Vec<f64>>
where
    P: OptionPricer + ?Sized,
{
    spot_values
        .iter()
        .enumerate()
        .map(|(col, &spot)| {
            pricer
                .price(&terms.at(spot, volatility))
                .map_err(|source| GridError::Cell {
                    row,
                    col,
                    spot,
                    volatility,
                    source,
                })
        })
        .collect()
}

/// Evaluates any pricer over the mesh.
///
/// Outer loop over volatility (rows), inner loop over spot (columns).
/// The first failing cell aborts the evaluation.
///
/// # Errors
/// [`GridError::Cell`] for the first cell whose price fails.
pub fn evaluate_with<P>(
    pricer: &P,
    spot_values: &[f64],
    vol_values: &[f64],
    terms: &ContractTerms,
) -> GridResult<PriceGrid>
where
    P: OptionPricer + ?Sized,
{
    let prices = vol_values
        .iter()
        .enumerate()
        .map(|(row, &volatility)| price_row(pricer, terms, row, volatility, spot_values))
        .collect::<GridResult<Vec<_>>>()?;

    PriceGrid::new(spot_values.to_vec(), vol_values.to_vec(), prices)
}

/// Evaluates `model` over the spot × volatility mesh.
///
/// The model is resolved to a concrete pricer once, before any cell is
/// priced, so a bad step count fails without touching the mesh.
///
/// # Errors
/// - [`GridError::Pricing`] for an invalid model (zero lattice steps)
/// - [`GridError::Cell`] for the first cell whose price fails
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
/// use pricer_grid::grid::{evaluate, ContractTerms};
/// use pricer_models::PricingModel;
///
/// let spots = [95.0, 100.0, 105.0];
/// let vols = [0.1, 0.2];
/// let terms = ContractTerms::new(100.0, 1.0, 0.05, OptionType::Call);
///
/// let grid = evaluate(&spots, &vols, &terms, &PricingModel::Analytic).unwrap();
/// assert_eq!((grid.rows(), grid.cols()), (2, 3));
/// assert!((grid.get(1, 1).unwrap() - 10.4506).abs() < 1e-3);
/// ```
pub fn evaluate(
    spot_values: &[f64],
    vol_values: &[f64],
    terms: &ContractTerms,
    model: &PricingModel,
) -> GridResult<PriceGrid> {
    debug!(
        model = %model,
        option_type = %terms.option_type,
        rows = vol_values.len(),
        cols = spot_values.len(),
        "Evaluating price grid"
    );

    match model {
        PricingModel::Analytic => evaluate_with(&BlackScholesPricer, spot_values, vol_values, terms),
        PricingModel::Lattice { steps } => {
            let tree = BinomialTree::new(*steps)?;
            evaluate_with(&tree, spot_values, vol_values, terms)
        }
    }
}
