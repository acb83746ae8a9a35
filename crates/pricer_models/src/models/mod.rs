//! Pricing model selection.
//!
//! - `model_enum`: Closed tagged-variant enum over the supported pricers

pub mod model_enum;

pub use model_enum::PricingModel;
