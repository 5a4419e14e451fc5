//! Cursor-paginated queries

pub mod paginator;

pub use paginator::PaginatedFetcher;
