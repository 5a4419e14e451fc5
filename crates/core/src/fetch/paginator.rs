//! Paginated event/profile fetcher

use std::sync::Arc;

use clevertap_domain::constants::{FETCH_DEFAULT_BATCH_SIZE, FETCH_MAX_BATCH_SIZE};
use clevertap_domain::{CallOptions, ClevertapError, FetchPage, QueryType, Result};
use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::transport_ports::{ApiRequest, RequestDispatcher};

/// Runs a query and stitches cursor-paginated pages into one ordered list
///
/// The first request carries `batch_size` and the serialized `query`; every
/// following request carries only the `cursor` returned by the previous page.
/// Fetching stops at the first page without a cursor.
pub struct PaginatedFetcher {
    dispatcher: Arc<dyn RequestDispatcher>,
}

impl PaginatedFetcher {
    /// Create a new fetcher
    pub fn new(dispatcher: Arc<dyn RequestDispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Fetch every record matching `query`.
    ///
    /// # Errors
    ///
    /// Returns the first transport error, or `ClevertapError::Internal` if the
    /// query cannot be serialized.
    #[instrument(skip(self, query, options), fields(query_type = %query_type))]
    pub async fn fetch(
        &self,
        query_type: QueryType,
        query: &Value,
        options: &CallOptions,
    ) -> Result<Vec<Value>> {
        let page_size = options.effective_batch_size(FETCH_DEFAULT_BATCH_SIZE, FETCH_MAX_BATCH_SIZE);
        let serialized = serde_json::to_string(query)
            .map_err(|e| ClevertapError::Internal(format!("Failed to serialize query: {e}")))?;
        let endpoint = query_type.endpoint();

        let mut records = Vec::new();
        let mut cursor: Option<String> = None;
        let mut pages = 0usize;

        loop {
            let request = match cursor.take() {
                None => ApiRequest::get(endpoint.as_str(), options)
                    .with_query("batch_size", page_size.to_string())
                    .with_query("query", serialized.clone()),
                Some(token) => ApiRequest::get(endpoint.as_str(), options).with_query("cursor", token),
            };

            let page = FetchPage::from_value(self.dispatcher.dispatch(request).await?);
            pages += 1;

            debug!(page = pages, records = page.records.len(), has_more = !page.is_last(), "page received");

            records.extend(page.records);
            cursor = page.cursor;

            if cursor.is_none() {
                break;
            }
        }

        if options.debug {
            info!(pages, records = records.len(), page_size, "query completed");
        } else {
            debug!(pages, records = records.len(), page_size, "query completed");
        }

        Ok(records)
    }
}
