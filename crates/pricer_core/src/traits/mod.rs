//! Core traits for option pricers.
//!
//! All pricers in the workspace are concrete types behind a closed enum;
//! the trait fixes the capability contract they share.

pub mod priceable;

pub use priceable::OptionPricer;
