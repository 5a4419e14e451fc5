//! Per-call options supplied by callers

use std::collections::BTreeMap;

/// Caller-facing options accepted by every public operation.
///
/// Immutable from the client's point of view: request descriptors are built
/// fresh from these values and never written back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallOptions {
    /// Requested records per request. `None` or `Some(0)` selects the
    /// operation's default; values above the protocol maximum are clamped.
    pub batch_size: Option<usize>,
    /// Promote orchestration diagnostics to `info` level.
    pub debug: bool,
    /// Extra transport headers. Authentication headers always take precedence.
    pub headers: BTreeMap<String, String>,
}

impl CallOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = Some(batch_size);
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Resolve the batch size for an operation with the given default and
    /// protocol maximum.
    pub fn effective_batch_size(&self, default: usize, max: usize) -> usize {
        self.batch_size.filter(|size| *size > 0).unwrap_or(default).min(max)
    }
}
