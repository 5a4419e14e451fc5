//! Transport port interfaces
//!
//! The core never talks HTTP itself. Every call goes through a
//! [`RequestDispatcher`] that turns an [`ApiRequest`] into a parsed JSON body
//! or a transport error.

use std::collections::BTreeMap;

use async_trait::async_trait;
use clevertap_domain::{CallOptions, Result};
use serde_json::Value;

/// HTTP method used by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// Descriptor for a single API call, built fresh for each dispatch
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// Path relative to the API root, e.g. `events.json`.
    pub endpoint: String,
    pub method: HttpMethod,
    /// Query-string parameters in insertion order.
    pub query: Vec<(String, String)>,
    /// Caller-supplied headers; the dispatcher adds authentication.
    pub headers: BTreeMap<String, String>,
    pub body: Option<Value>,
    /// Trace this request at `info` level.
    pub debug: bool,
}

impl ApiRequest {
    fn new(endpoint: impl Into<String>, method: HttpMethod, options: &CallOptions) -> Self {
        Self {
            endpoint: endpoint.into(),
            method,
            query: Vec::new(),
            headers: options.headers.clone(),
            body: None,
            debug: options.debug,
        }
    }

    pub fn get(endpoint: impl Into<String>, options: &CallOptions) -> Self {
        Self::new(endpoint, HttpMethod::Get, options)
    }

    pub fn post(endpoint: impl Into<String>, body: Value, options: &CallOptions) -> Self {
        let mut request = Self::new(endpoint, HttpMethod::Post, options);
        request.body = Some(body);
        request
    }

    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Value of the first query parameter with the given name.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query.iter().find(|(key, _)| key == name).map(|(_, value)| value.as_str())
    }
}

/// Trait for executing API calls against the remote service
///
/// Implementations return the parsed response body, `Value::Null` for an
/// empty body, or a transport error. Calls are never retried by the core.
#[async_trait]
pub trait RequestDispatcher: Send + Sync {
    /// Perform one API call
    async fn dispatch(&self, request: ApiRequest) -> Result<Value>;
}
