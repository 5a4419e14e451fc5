//! # CleverTap Domain
//!
//! Types and rules shared by every layer of the CleverTap client.
//!
//! This crate contains:
//! - Wire models (records, upload responses, query pages)
//! - Caller options and client configuration
//! - Input validation per operation kind
//! - The error type and Result alias
//!
//! ## Architecture
//! - No dependencies on other workspace crates
//! - No I/O; serde models and pure functions only

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
pub use validation::{validate, Operation, ValidationError, ValidationErrorKind};
