//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions for option pricing:
//! - Black-Scholes model for lognormal dynamics
//! - Standard normal CDF/PDF used by the formula
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: Supports both `f32` and `f64`
//! - **Explicit validation**: Non-positive σ or T is an error, never a NaN price

pub mod black_scholes;
pub mod distributions;

// Re-export main types at module level
pub use black_scholes::{black_scholes_price, BlackScholes, BlackScholesPricer};
pub use distributions::{norm_cdf, norm_pdf};
