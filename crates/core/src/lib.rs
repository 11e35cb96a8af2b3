//! Sarraf Core - Domain entities, services, and traits.
//!
//! This crate contains the core logic of the Sarraf USD/LBP exchange
//! tracker. It is transport-agnostic: the REST endpoints it needs are
//! defined as traits that the `connect` crate implements.

pub mod constants;
pub mod errors;
pub mod limits;
pub mod rates;
pub mod transactions;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
