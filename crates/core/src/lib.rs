//! # CleverTap Core
//!
//! Request orchestration - no HTTP code.
//!
//! This crate contains:
//! - The transport port ([`RequestDispatcher`])
//! - Batched uploads ([`BatchUploader`])
//! - Cursor-paginated queries ([`PaginatedFetcher`])
//! - The public operation surface ([`CleverTapService`])
//!
//! ## Architecture Principles
//! - Only depends on `clevertap-domain`
//! - Transport injected through a trait object
//! - Requests of one logical call are strictly sequential

pub mod batch;
pub mod completion;
pub mod fetch;
pub mod service;
pub mod transport_ports;

pub use batch::BatchUploader;
pub use completion::CompletionExt;
pub use fetch::PaginatedFetcher;
pub use service::CleverTapService;
pub use transport_ports::{ApiRequest, HttpMethod, RequestDispatcher};
