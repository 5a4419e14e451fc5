//! Shared test helpers for `clevertap-core` integration tests.
//!
//! The scripted dispatcher stands in for the HTTP transport so tests can
//! assert on the exact sequence of requests the orchestration layer issues.

pub mod dispatcher;
pub mod logs;
pub mod records;
