//! Discrete-time lattice pricers.
//!
//! - `binomial`: Recombining Cox-Ross-Rubinstein tree (European exercise)

pub mod binomial;

pub use binomial::{binomial_tree_price, BinomialTree, TreeFactors, DEFAULT_STEPS};
