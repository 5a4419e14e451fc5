//! Query types for event/profile lookups and paginated result pages

use serde_json::Value;

/// Paginated query endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryType {
    Events,
    Profiles,
}

crate::impl_wire_name_conversions!(QueryType {
    Events => "events",
    Profiles => "profiles",
});

impl QueryType {
    /// Endpoint path relative to the API root.
    pub fn endpoint(&self) -> String {
        format!("{}.json", self.as_str())
    }
}

/// Key used to look up a single user profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileLookup {
    Email(String),
    Identity(String),
    ObjectId(String),
}

impl ProfileLookup {
    /// Query-string parameter for the lookup.
    pub fn param(&self) -> (&'static str, &str) {
        match self {
            Self::Email(v) => ("email", v),
            Self::Identity(v) => ("identity", v),
            Self::ObjectId(v) => ("objectId", v),
        }
    }
}

/// One page of a paginated query response
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchPage {
    pub records: Vec<Value>,
    /// Continuation token; `None` marks the last page.
    pub cursor: Option<String>,
}

impl FetchPage {
    /// Split a raw page body into its records and continuation token.
    ///
    /// Non-object bodies (including `null`) are an empty terminal page. The
    /// token is read from `cursor`, then `next_cursor`; the first present,
    /// non-empty value wins.
    pub fn from_value(value: Value) -> Self {
        let Value::Object(mut body) = value else {
            return Self::default();
        };

        let records = match body.remove("records") {
            Some(Value::Array(records)) => records,
            _ => Vec::new(),
        };
        let cursor = cursor_token(body.get("cursor")).or_else(|| cursor_token(body.get("next_cursor")));

        Self { records, cursor }
    }

    pub fn is_last(&self) -> bool {
        self.cursor.is_none()
    }
}

fn cursor_token(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(token) if !token.is_empty() => Some(token.clone()),
        Value::Number(token) => Some(token.to_string()),
        _ => None,
    }
}
