//! # Pricer Models (L2: Business Logic)
//!
//! European option pricers.
//!
//! This crate provides:
//! - Closed-form Black-Scholes pricing (`analytical`)
//! - Recombining binomial lattice pricing (`lattice`)
//! - The closed model set with static dispatch (`models`)
//!
//! ## Design Principles
//!
//! - **Enum-based models** for static dispatch, no name- or signature-based routing
//! - **Fail-fast validation**: every pricer validates its inputs before computing
//! - **Pure functions**: no shared state, every call is referentially transparent

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod lattice;
pub mod models;

pub use models::PricingModel;
