//! Infrastructure error handling

mod conversions;

pub use conversions::{status_error, InfraError};
