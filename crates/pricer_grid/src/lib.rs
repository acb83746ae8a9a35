//! # pricer_grid: Price Grids for Option Heatmaps
//!
//! Sweeps a pricing model over a spot × volatility mesh.
//!
//! This crate provides:
//! - Axis construction and tick selection (`axis`)
//! - The `PriceGrid` value type and sequential evaluator (`grid`)
//! - A rayon-backed row-parallel evaluator (`parallel`, feature `parallel`)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::types::OptionType;
//! use pricer_grid::axis::{linspace, spot_axis};
//! use pricer_grid::grid::{evaluate, ContractTerms};
//! use pricer_models::PricingModel;
//!
//! let spots = spot_axis(100.0, 5.0).unwrap();
//! let vols = linspace(0.1, 0.3, 20);
//! let terms = ContractTerms::new(100.0, 1.0, 0.05, OptionType::Call);
//!
//! let grid = evaluate(&spots, &vols, &terms, &PricingModel::Analytic).unwrap();
//! assert_eq!(grid.rows(), 20);
//! assert_eq!(grid.cols(), 11);
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel` (default): Enable `parallel::evaluate_parallel` via rayon
//! - `serde` (default): Enable serialisation for `PriceGrid` and `ContractTerms`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod axis;
pub mod error;
pub mod grid;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use error::{GridError, GridResult};
pub use grid::{evaluate, ContractTerms, PriceGrid};
