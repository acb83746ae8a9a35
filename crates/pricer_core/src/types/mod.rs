//! Core option and error types.
//!
//! This module provides:
//! - `option`: Option type and scalar pricing inputs
//! - `error`: Structured error type for parsing, validation and pricing
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`OptionType`], [`OptionParameters`] from `option`
//! - [`PricingError`] from `error`

pub mod error;
pub mod option;

// Re-export commonly used types at module level
pub use error::PricingError;
pub use option::{OptionParameters, OptionType};
