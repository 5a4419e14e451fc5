//! Batched uploads
//!
//! Splits large record sets into bounded-size upload requests submitted one
//! at a time.

pub mod uploader;

pub use uploader::BatchUploader;
