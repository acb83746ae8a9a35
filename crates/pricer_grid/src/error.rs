//! Error types for grid construction and evaluation.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Grid errors.
///
/// # Variants
/// - `Pricing`: Model-level failure detected before any cell is priced
/// - `Cell`: Pricing failed at a specific grid cell
/// - `InvalidAxis`: Axis parameters cannot produce a value sequence
/// - `ShapeMismatch`: Price rows disagree with the axis lengths
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
/// use pricer_grid::GridError;
///
/// let err = GridError::Cell {
///     row: 0,
///     col: 2,
///     spot: 97.0,
///     volatility: 0.0,
///     source: PricingError::invalid_parameter("volatility", 0.0),
/// };
/// assert!(format!("{}", err).contains("row 0, col 2"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    /// Failure independent of any single cell (e.g. zero lattice steps).
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Pricing failed at one cell; evaluation stopped there.
    #[error("Pricing failed at row {row}, col {col} (σ = {volatility}, S = {spot}): {source}")]
    Cell {
        /// Volatility index
        row: usize,
        /// Spot index
        col: usize,
        /// Spot price of the cell
        spot: f64,
        /// Volatility of the cell
        volatility: f64,
        /// Underlying pricing error
        #[source]
        source: PricingError,
    },

    /// Axis parameters cannot produce a value sequence.
    #[error("Invalid axis: {0}")]
    InvalidAxis(String),

    /// Price matrix dimensions disagree with the axes.
    #[error("Shape mismatch: expected {expected_rows}x{expected_cols} prices, got {rows} rows")]
    ShapeMismatch {
        /// Volatility axis length
        expected_rows: usize,
        /// Spot axis length
        expected_cols: usize,
        /// Rows actually supplied
        rows: usize,
    },
}

impl GridError {
    /// The pricing error behind this failure, if any.
    pub fn pricing_error(&self) -> Option<&PricingError> {
        match self {
            GridError::Pricing(err) | GridError::Cell { source: err, .. } => Some(err),
            GridError::InvalidAxis(_) | GridError::ShapeMismatch { .. } => None,
        }
    }
}

/// Result alias for grid operations.
pub type GridResult<T> = Result<T, GridError>;
