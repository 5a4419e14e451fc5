//! API constants
//!
//! Centralized location for protocol-level values shared by every layer.

// Endpoint composition
pub const API_HOSTNAME: &str = "api.clevertap.com";
pub const API_VERSION: u32 = 1;

// Authentication headers
pub const HEADER_ACCOUNT_ID: &str = "X-CleverTap-Account-Id";
pub const HEADER_PASSCODE: &str = "X-CleverTap-Passcode";
pub const CONTENT_TYPE_JSON: &str = "application/json";

// Upload batching (API accepts at most 100 records per request)
pub const UPLOAD_DEFAULT_BATCH_SIZE: usize = 100;
pub const UPLOAD_MAX_BATCH_SIZE: usize = 100;

// Paginated queries (API returns at most 5000 records per page)
pub const FETCH_DEFAULT_BATCH_SIZE: usize = 10;
pub const FETCH_MAX_BATCH_SIZE: usize = 5000;

// Transport
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// Endpoint paths relative to the API root
pub const ENDPOINT_UPLOAD: &str = "upload";
pub const ENDPOINT_PROFILE: &str = "profile.json";
pub const ENDPOINT_PROFILES_COUNT: &str = "counts/profiles.json";
pub const ENDPOINT_EVENTS_COUNT: &str = "counts/events.json";
pub const ENDPOINT_DELETE_PROFILE: &str = "delete/profiles.json";
pub const ENDPOINT_DEMERGE: &str = "demerge/profiles.json";
pub const ENDPOINT_SUBSCRIBE: &str = "subscribe";
pub const ENDPOINT_DISASSOCIATE: &str = "disassociate";
pub const ENDPOINT_MESSAGE_REPORTS: &str = "message/report.json";
pub const ENDPOINT_REAL_TIME_COUNTS: &str = "now.json";
pub const ENDPOINT_TOP_PROPERTY_COUNTS: &str = "counts/top.json";
pub const ENDPOINT_TRENDS: &str = "counts/trends.json";
