//! Sarraf Connect - REST client for the exchange platform backend.
//!
//! This crate implements the source/repository traits defined by
//! `sarraf-core` over the platform's HTTP API and owns the session's
//! bearer-token storage seam.

pub mod client;
pub mod token;

// Re-export commonly used types
pub use client::{ExchangeApiClient, DEFAULT_API_URL};
pub use token::{InMemoryTokenStore, TokenStore};
