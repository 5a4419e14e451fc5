//! Domain types and wire models

pub mod options;
pub mod query;
pub mod record;
pub mod region;
pub mod target;
pub mod upload;

pub use options::CallOptions;
pub use query::{FetchPage, ProfileLookup, QueryType};
pub use record::{Identity, Record, RecordKind, RecordPayload};
pub use region::Region;
pub use target::TargetAction;
pub use upload::{UnprocessedRecord, UploadOutcome, UploadResponse, UploadStatus};
