//! # CleverTap Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - The reqwest-backed [`HttpRequestDispatcher`]
//! - Configuration loading from env and files
//! - Logging setup
//! - [`connect`] / [`init`] to build a ready client
//!
//! ## Architecture
//! - Implements traits defined in `clevertap-core`
//! - Contains all "impure" code (network, environment, files)

pub mod api;
pub mod client;
pub mod config;
pub mod errors;
pub mod http;
pub mod observability;

// Re-export commonly used items
pub use api::HttpRequestDispatcher;
pub use client::{connect, init};
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
