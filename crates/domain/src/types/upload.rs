//! Upload responses and the aggregate upload outcome

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{ClevertapError, Result};

/// Overall status reported for one upload request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadStatus {
    Success,
    Partial,
    Fail,
}

crate::impl_wire_name_conversions!(UploadStatus {
    Success => "success",
    Partial => "partial",
    Fail => "fail",
});

/// A record the service refused, as reported inside a batch response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnprocessedRecord {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub record: Option<Value>,
}

/// Typed view over one upload response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub status: UploadStatus,
    #[serde(default)]
    pub processed: u64,
    #[serde(default)]
    pub unprocessed: Vec<UnprocessedRecord>,
}

impl UploadResponse {
    /// Parse a raw response body.
    ///
    /// # Errors
    /// Returns `ClevertapError::Decode` if the body does not have the upload
    /// response shape.
    pub fn from_value(value: &Value) -> Result<Self> {
        Self::deserialize(value)
            .map_err(|e| ClevertapError::Decode(format!("Invalid upload response: {e}")))
    }
}

/// Aggregate result of an upload call
///
/// A single collected response is returned on its own rather than wrapped in
/// a one-element list.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadOutcome {
    /// Nothing was uploaded (empty input) or no response body came back.
    Empty,
    Single(Value),
    Batches(Vec<Value>),
}

impl UploadOutcome {
    /// Collapse accumulated batch responses into an outcome.
    pub fn from_responses(mut responses: Vec<Value>) -> Self {
        match responses.len() {
            0 => Self::Empty,
            1 => Self::Single(responses.remove(0)),
            _ => Self::Batches(responses),
        }
    }

    /// Raw responses in submission order.
    pub fn responses(&self) -> &[Value] {
        match self {
            Self::Empty => &[],
            Self::Single(value) => std::slice::from_ref(value),
            Self::Batches(values) => values,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// JSON form: `[]`, the single response object, or the list of responses.
    pub fn into_value(self) -> Value {
        match self {
            Self::Empty => Value::Array(Vec::new()),
            Self::Single(value) => value,
            Self::Batches(values) => Value::Array(values),
        }
    }

    /// Parse every response into its typed view.
    ///
    /// # Errors
    /// Returns the first decode failure.
    pub fn parsed(&self) -> Result<Vec<UploadResponse>> {
        self.responses().iter().map(UploadResponse::from_value).collect()
    }

    /// Sum of `processed` across all responses that carry the field.
    pub fn total_processed(&self) -> u64 {
        self.responses().iter().filter_map(|r| r.get("processed")).filter_map(Value::as_u64).sum()
    }
}
