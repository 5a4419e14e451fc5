//! CleverTap service - public operation surface
//!
//! Validates caller input, then hands off to the batch uploader, the
//! paginated fetcher, or a single relayed request.

use std::sync::Arc;

use clevertap_domain::constants::{
    ENDPOINT_DELETE_PROFILE, ENDPOINT_DEMERGE, ENDPOINT_DISASSOCIATE, ENDPOINT_EVENTS_COUNT,
    ENDPOINT_MESSAGE_REPORTS, ENDPOINT_PROFILE, ENDPOINT_PROFILES_COUNT,
    ENDPOINT_REAL_TIME_COUNTS, ENDPOINT_SUBSCRIBE, ENDPOINT_TOP_PROPERTY_COUNTS, ENDPOINT_TRENDS,
};
use clevertap_domain::{
    validate, CallOptions, Operation, ProfileLookup, QueryType, Record, Result, TargetAction,
    UploadOutcome,
};
use serde_json::{Map, Value};
use tracing::{instrument, warn};

use crate::batch::BatchUploader;
use crate::fetch::PaginatedFetcher;
use crate::transport_ports::{ApiRequest, RequestDispatcher};

/// CleverTap API client service
pub struct CleverTapService {
    dispatcher: Arc<dyn RequestDispatcher>,
    uploader: BatchUploader,
    fetcher: PaginatedFetcher,
}

impl CleverTapService {
    /// Create a new service on top of a transport
    pub fn new(dispatcher: Arc<dyn RequestDispatcher>) -> Self {
        Self {
            uploader: BatchUploader::new(Arc::clone(&dispatcher)),
            fetcher: PaginatedFetcher::new(Arc::clone(&dispatcher)),
            dispatcher,
        }
    }

    /// Send events, profile updates and device tokens.
    ///
    /// Records go out in batches of at most 100. A single batch response is
    /// returned as [`UploadOutcome::Single`].
    ///
    /// # Errors
    /// Validation errors before any request; otherwise the first transport
    /// error.
    #[instrument(skip(self, records, options), fields(count = records.len()))]
    pub async fn upload(&self, records: &[Record], options: &CallOptions) -> Result<UploadOutcome> {
        check(Operation::Upload(records))?;
        self.uploader.upload(records, options).await
    }

    /// Attach existing device tokens to user profiles.
    ///
    /// # Errors
    /// Same as [`Self::upload`].
    pub async fn upload_device_tokens(
        &self,
        records: &[Record],
        options: &CallOptions,
    ) -> Result<UploadOutcome> {
        self.upload(records, options).await
    }

    /// Retrieve one user profile by email, identity or object id.
    ///
    /// # Errors
    /// Validation or transport error.
    #[instrument(skip(self, lookup, options))]
    pub async fn profile(&self, lookup: &ProfileLookup, options: &CallOptions) -> Result<Value> {
        check(Operation::ProfileLookup(lookup))?;
        let (param, value) = lookup.param();
        let request = ApiRequest::get(ENDPOINT_PROFILE, options).with_query(param, value);
        self.dispatcher.dispatch(request).await
    }

    /// Fetch every profile matching `query`, following pagination.
    ///
    /// # Errors
    /// Validation or transport error.
    pub async fn profiles(&self, query: &Value, options: &CallOptions) -> Result<Vec<Value>> {
        check(Operation::Profiles(query))?;
        self.fetcher.fetch(QueryType::Profiles, query, options).await
    }

    /// Fetch every event matching `query`, following pagination.
    ///
    /// # Errors
    /// Validation or transport error.
    pub async fn events(&self, query: &Value, options: &CallOptions) -> Result<Vec<Value>> {
        check(Operation::Events(query))?;
        self.fetcher.fetch(QueryType::Events, query, options).await
    }

    /// Count profiles matching `query`.
    ///
    /// # Errors
    /// Validation or transport error.
    pub async fn profiles_count(&self, query: &Value, options: &CallOptions) -> Result<Value> {
        check(Operation::ProfilesCount(query))?;
        self.relay(ENDPOINT_PROFILES_COUNT, query.clone(), options).await
    }

    /// Count events matching `query`.
    ///
    /// # Errors
    /// Validation or transport error.
    pub async fn events_count(&self, query: &Value, options: &CallOptions) -> Result<Value> {
        check(Operation::EventsCount(query))?;
        self.relay(ENDPOINT_EVENTS_COUNT, query.clone(), options).await
    }

    /// Delete a user profile identified by `identity` or `guid`.
    ///
    /// # Errors
    /// Validation or transport error.
    pub async fn delete_profile(&self, query: &Value, options: &CallOptions) -> Result<Value> {
        check(Operation::DeleteProfile(query))?;
        self.relay(ENDPOINT_DELETE_PROFILE, query.clone(), options).await
    }

    /// Split identities that were merged into one profile.
    ///
    /// # Errors
    /// Validation or transport error.
    pub async fn demerge(&self, query: &Value, options: &CallOptions) -> Result<Value> {
        check(Operation::Demerge(query))?;
        self.relay(ENDPOINT_DEMERGE, query.clone(), options).await
    }

    /// Set phone numbers or emails as subscribed or unsubscribed.
    ///
    /// # Errors
    /// Validation or transport error.
    pub async fn subscribe(&self, query: &Value, options: &CallOptions) -> Result<Value> {
        check(Operation::Subscribe(query))?;
        self.relay(ENDPOINT_SUBSCRIBE, query.clone(), options).await
    }

    /// Disconnect phone numbers from user profiles.
    ///
    /// # Errors
    /// Validation or transport error.
    pub async fn disassociate(&self, query: &Value, options: &CallOptions) -> Result<Value> {
        check(Operation::Disassociate(query))?;
        self.relay(ENDPOINT_DISASSOCIATE, query.clone(), options).await
    }

    /// Download the list of messages sent in a date range.
    ///
    /// # Errors
    /// Transport error.
    pub async fn message_reports(&self, query: &Value, options: &CallOptions) -> Result<Value> {
        self.relay(ENDPOINT_MESSAGE_REPORTS, query.clone(), options).await
    }

    /// Active users over the past five minutes.
    ///
    /// # Errors
    /// Transport error.
    pub async fn real_time_counts(&self, query: &Value, options: &CallOptions) -> Result<Value> {
        self.relay(ENDPOINT_REAL_TIME_COUNTS, query.clone(), options).await
    }

    /// Most and least frequent property values for an event.
    ///
    /// # Errors
    /// Transport error.
    pub async fn top_property_counts(&self, query: &Value, options: &CallOptions) -> Result<Value> {
        self.relay(ENDPOINT_TOP_PROPERTY_COUNTS, query.clone(), options).await
    }

    /// Daily, weekly or monthly event trends.
    ///
    /// # Errors
    /// Transport error.
    pub async fn trends(&self, query: &Value, options: &CallOptions) -> Result<Value> {
        self.relay(ENDPOINT_TRENDS, query.clone(), options).await
    }

    /// Create, estimate, list, inspect or stop push notification targets.
    ///
    /// `estimate` is sent as `create` with `estimate_only: true` added to a
    /// copy of the payload; the caller's payload is left untouched.
    ///
    /// # Errors
    /// Validation or transport error.
    #[instrument(skip(self, payload, options), fields(action = %action))]
    pub async fn targets(
        &self,
        action: TargetAction,
        payload: Option<&Value>,
        options: &CallOptions,
    ) -> Result<Value> {
        check(Operation::Target { action, payload })?;

        let mut body = payload.cloned().unwrap_or_else(|| Value::Object(Map::new()));
        if action == TargetAction::Estimate {
            if let Some(fields) = body.as_object_mut() {
                fields.insert("estimate_only".to_string(), Value::Bool(true));
            }
        }

        self.relay(&action.endpoint(), body, options).await
    }

    async fn relay(&self, endpoint: &str, body: Value, options: &CallOptions) -> Result<Value> {
        self.dispatcher.dispatch(ApiRequest::post(endpoint, body, options)).await
    }
}

fn check(operation: Operation<'_>) -> Result<()> {
    validate(operation).map_err(|err| {
        warn!(operation = operation.name(), kind = ?err.kind, error = %err, "rejected invalid input");
        err.into()
    })
}
