//! CleverTap REST transport
//!
//! Implements the core [`RequestDispatcher`](clevertap_core::RequestDispatcher)
//! port over HTTPS. Authentication headers are attached to every request;
//! bodies and responses are JSON.

pub mod dispatcher;

pub use dispatcher::HttpRequestDispatcher;
