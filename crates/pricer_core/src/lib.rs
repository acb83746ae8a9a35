//! # pricer_core: Foundation Types for the Option Pricing Heatmap
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Option contract inputs: `OptionType`, `OptionParameters` (`types::option`)
//! - Error taxonomy: `PricingError` (`types::error`)
//! - The pricing capability contract: `OptionPricer` (`traits::priceable`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::types::{OptionParameters, OptionType};
//!
//! let option_type: OptionType = "call".parse().unwrap();
//! let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, option_type);
//! assert!(params.validate().is_ok());
//!
//! // Anything other than call/put is rejected at the boundary
//! assert!("straddle".parse::<OptionType>().is_err());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `OptionType` and `OptionParameters`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod traits;
pub mod types;
