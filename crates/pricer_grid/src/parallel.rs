//! Rayon-based row-parallel grid evaluation.
//!
//! Cells share no state, so volatility rows are priced independently on the
//! rayon pool and reassembled in order. The result is identical to
//! [`crate::grid::evaluate`], including which error is reported: rows are
//! inspected in order after the parallel pass.

use pricer_core::traits::OptionPricer;
use pricer_models::analytical::BlackScholesPricer;
use pricer_models::lattice::BinomialTree;
use pricer_models::PricingModel;
use rayon::prelude::*;
use tracing::debug;

use crate::error::GridResult;
use crate::grid::{price_row, ContractTerms, PriceGrid};

/// Minimum cell count before rayon is worth its scheduling overhead.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 256;

/// Parallel counterpart of [`crate::grid::evaluate_with`].
///
/// # Errors
/// [`crate::GridError::Cell`] for the first failing cell in row-major order.
pub fn evaluate_with_parallel<P>(
    pricer: &P,
    spot_values: &[f64],
    vol_values: &[f64],
    terms: &ContractTerms,
) -> GridResult<PriceGrid>
where
    P: OptionPricer + Sync + ?Sized,
{
    let rows: Vec<GridResult<Vec<f64>>> = vol_values
        .par_iter()
        .enumerate()
        .map(|(row, &volatility)| price_row(pricer, terms, row, volatility, spot_values))
        .collect();

    let prices = rows.into_iter().collect::<GridResult<Vec<_>>>()?;
    PriceGrid::new(spot_values.to_vec(), vol_values.to_vec(), prices)
}

/// Parallel counterpart of [`crate::grid::evaluate`].
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
/// use pricer_grid::axis::{linspace, spot_axis};
/// use pricer_grid::grid::{evaluate, ContractTerms};
/// use pricer_grid::parallel::evaluate_parallel;
/// use pricer_models::PricingModel;
///
/// let spots = spot_axis(100.0, 5.0).unwrap();
/// let vols = linspace(0.1, 0.3, 20);
/// let terms = ContractTerms::new(100.0, 1.0, 0.05, OptionType::Put);
/// let model = PricingModel::lattice(50).unwrap();
///
/// let parallel = evaluate_parallel(&spots, &vols, &terms, &model).unwrap();
/// let sequential = evaluate(&spots, &vols, &terms, &model).unwrap();
/// assert_eq!(parallel, sequential);
/// ```
pub fn evaluate_parallel(
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
        threads = rayon::current_num_threads(),
        "Evaluating price grid in parallel"
    );

    match model {
        PricingModel::Analytic => {
            evaluate_with_parallel(&BlackScholesPricer, spot_values, vol_values, terms)
        }
        PricingModel::Lattice { steps } => {
            let tree = BinomialTree::new(*steps)?;
            evaluate_with_parallel(&tree, spot_values, vol_values, terms)
        }
    }
}

/// Picks the parallel path once the mesh has at least `threshold` cells.
pub fn evaluate_auto(
    spot_values: &[f64],
    vol_values: &[f64],
    terms: &ContractTerms,
    model: &PricingModel,
    threshold: usize,
) -> GridResult<PriceGrid> {
    if spot_values.len() * vol_values.len() >= threshold {
        evaluate_parallel(spot_values, vol_values, terms, model)
    } else {
        crate::grid::evaluate(spot_values, vol_values, terms, model)
    }
}
