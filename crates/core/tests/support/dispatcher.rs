use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use clevertap_core::{ApiRequest, RequestDispatcher};
use clevertap_domain::{ClevertapError, Result as DomainResult};
use serde_json::{json, Value};

/// Reply produced for one dispatched request.
pub type Reply = DomainResult<Value>;

/// In-memory `RequestDispatcher` that records every request and answers
/// from a queue of scripted replies.
///
/// When the queue runs dry it answers with `fallback`, which defaults to a
/// successful upload body echoing the batch size.
#[derive(Clone, Default)]
pub struct ScriptedDispatcher {
    replies: Arc<Mutex<VecDeque<Reply>>>,
    requests: Arc<Mutex<Vec<ApiRequest>>>,
    in_flight: Arc<Mutex<usize>>,
    max_in_flight: Arc<Mutex<usize>>,
}

impl ScriptedDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue replies in the order they should be returned.
    pub fn with_replies(self, replies: Vec<Reply>) -> Self {
        self.replies.lock().unwrap().extend(replies);
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Highest number of requests observed in flight at the same time.
    pub fn max_in_flight(&self) -> usize {
        *self.max_in_flight.lock().unwrap()
    }

    /// Records carried in the `d` array of each upload request body.
    pub fn upload_batches(&self) -> Vec<Vec<Value>> {
        self.requests()
            .iter()
            .map(|request| {
                request
                    .body
                    .as_ref()
                    .and_then(|body| body.get("d"))
                    .and_then(Value::as_array)
                    .cloned()
                    .unwrap_or_default()
            })
            .collect()
    }
}

#[async_trait]
impl RequestDispatcher for ScriptedDispatcher {
    async fn dispatch(&self, request: ApiRequest) -> DomainResult<Value> {
        {
            let mut in_flight = self.in_flight.lock().unwrap();
            *in_flight += 1;
            let mut max = self.max_in_flight.lock().unwrap();
            *max = (*max).max(*in_flight);
        }

        let batch_len = request
            .body
            .as_ref()
            .and_then(|body| body.get("d"))
            .and_then(Value::as_array)
            .map_or(0, Vec::len);
        self.requests.lock().unwrap().push(request);

        tokio::task::yield_now().await;

        let reply = self.replies.lock().unwrap().pop_front().unwrap_or_else(|| {
            Ok(json!({"status": "success", "processed": batch_len, "unprocessed": []}))
        });

        *self.in_flight.lock().unwrap() -= 1;
        reply
    }
}

/// Transport failure used to exercise error propagation.
pub fn connection_refused() -> ClevertapError {
    ClevertapError::Network("HTTP connection failure".into())
}
