//! Sequential batch uploader

use std::sync::Arc;

use clevertap_domain::constants::{
    ENDPOINT_UPLOAD, UPLOAD_DEFAULT_BATCH_SIZE, UPLOAD_MAX_BATCH_SIZE,
};
use clevertap_domain::{CallOptions, ClevertapError, Result, UploadOutcome};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, info, instrument, warn};

use crate::transport_ports::{ApiRequest, RequestDispatcher};

/// Uploads records in contiguous, order-preserving batches
///
/// Batches are submitted strictly one after another: the next batch is only
/// sent once the previous response has arrived. Per-record rejections inside
/// a response are returned untouched; a transport error stops the upload and
/// is returned as-is. Batches already accepted are not rolled back.
pub struct BatchUploader {
    dispatcher: Arc<dyn RequestDispatcher>,
}

impl BatchUploader {
    /// Create a new uploader
    pub fn new(dispatcher: Arc<dyn RequestDispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Upload `records` and fold the per-batch responses into one outcome.
    ///
    /// Empty input completes immediately with [`UploadOutcome::Empty`] and
    /// performs no request.
    ///
    /// # Errors
    ///
    /// Returns the first transport error, or `ClevertapError::Internal` if a
    /// batch cannot be serialized.
    #[instrument(skip(self, records, options), fields(count = records.len()))]
    pub async fn upload<T>(&self, records: &[T], options: &CallOptions) -> Result<UploadOutcome>
    where
        T: Serialize + Sync,
    {
        if records.is_empty() {
            debug!("no records to upload");
            return Ok(UploadOutcome::Empty);
        }

        let batch_size =
            options.effective_batch_size(UPLOAD_DEFAULT_BATCH_SIZE, UPLOAD_MAX_BATCH_SIZE);
        let batch_count = records.len().div_ceil(batch_size);

        if options.debug {
            info!(records = records.len(), batches = batch_count, batch_size, "uploading records");
        } else {
            debug!(records = records.len(), batches = batch_count, batch_size, "uploading records");
        }

        let mut responses = Vec::with_capacity(batch_count);

        for (index, batch) in records.chunks(batch_size).enumerate() {
            let request = ApiRequest::post(ENDPOINT_UPLOAD, upload_body(batch)?, options);

            let response = match self.dispatcher.dispatch(request).await {
                Ok(response) => response,
                Err(err) => {
                    warn!(
                        batch = index + 1,
                        batches = batch_count,
                        kind = err.label(),
                        error = %err,
                        "upload batch failed; remaining batches not sent"
                    );
                    return Err(err);
                }
            };

            debug!(batch = index + 1, batches = batch_count, size = batch.len(), "batch uploaded");

            if response.is_null() {
                continue;
            }
            responses.push(response);
        }

        Ok(UploadOutcome::from_responses(responses))
    }
}

fn upload_body<T: Serialize>(batch: &[T]) -> Result<Value> {
    let records = serde_json::to_value(batch)
        .map_err(|e| ClevertapError::Internal(format!("Failed to serialize upload batch: {e}")))?;

    let mut body = Map::new();
    body.insert("d".to_string(), records);
    Ok(Value::Object(body))
}
