//! HTTP implementation of the request dispatcher port

use std::time::Duration;

use async_trait::async_trait;
use clevertap_core::{ApiRequest, HttpMethod, RequestDispatcher};
use clevertap_domain::constants::{CONTENT_TYPE_JSON, HEADER_ACCOUNT_ID, HEADER_PASSCODE};
use clevertap_domain::{
    ClevertapError, ClientConfig, Result, ValidationError, ValidationErrorKind,
};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde_json::Value;
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::errors::{status_error, InfraError};
use crate::http::HttpClient;

const DEFAULT_USER_AGENT: &str = concat!("clevertap-rust/", env!("CARGO_PKG_VERSION"));

/// Sends [`ApiRequest`]s to the CleverTap REST API
///
/// Caller headers are applied first; the account id, passcode and content
/// type always override them.
pub struct HttpRequestDispatcher {
    client: HttpClient,
    base_url: String,
    account_id: String,
    passcode: String,
}

impl HttpRequestDispatcher {
    /// Create a dispatcher for an account.
    ///
    /// # Errors
    /// Returns `ClevertapError::Config` if the configuration is incomplete or
    /// the base URL does not parse.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let base_url = config.api_base_url();
        Url::parse(&base_url)
            .map_err(|e| ClevertapError::Config(format!("Invalid base URL '{base_url}': {e}")))?;

        let client = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone().unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()))
            .build()?;

        Ok(Self {
            client,
            base_url,
            account_id: config.account_id.clone(),
            passcode: config.passcode.clone(),
        })
    }

    /// API root requests are resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, request: &ApiRequest) -> Result<Url> {
        let raw = format!("{}/{}", self.base_url, request.endpoint.trim_start_matches('/'));
        let mut url = Url::parse(&raw)
            .map_err(|e| ClevertapError::Internal(format!("Invalid request URL '{raw}': {e}")))?;

        if !request.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in &request.query {
                pairs.append_pair(name, value);
            }
        }

        Ok(url)
    }

    fn headers_for(&self, request: &ApiRequest) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        for (name, value) in &request.headers {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid_header(name))?;
            let value = HeaderValue::from_str(value).map_err(|_| invalid_header(name.as_str()))?;
            headers.insert(name, value);
        }

        headers.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON));
        headers.insert(
            auth_header_name(HEADER_ACCOUNT_ID)?,
            HeaderValue::from_str(&self.account_id).map_err(|_| invalid_credential(HEADER_ACCOUNT_ID))?,
        );
        let mut passcode =
            HeaderValue::from_str(&self.passcode).map_err(|_| invalid_credential(HEADER_PASSCODE))?;
        passcode.set_sensitive(true);
        headers.insert(auth_header_name(HEADER_PASSCODE)?, passcode);

        Ok(headers)
    }
}

#[async_trait]
impl RequestDispatcher for HttpRequestDispatcher {
    #[instrument(skip(self, request), fields(method = request.method.as_str(), endpoint = %request.endpoint))]
    async fn dispatch(&self, request: ApiRequest) -> Result<Value> {
        let url = self.url_for(&request)?;
        let headers = self.headers_for(&request)?;

        if request.debug {
            info!(params = request.query.len(), "dispatching CleverTap request");
        } else {
            debug!(params = request.query.len(), "dispatching CleverTap request");
        }

        let method = match request.method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
        };
        let mut builder = self.client.request(method, url).headers(headers);
        if let Some(body) = &request.body {
            let bytes = serde_json::to_vec(body).map_err(|e| {
                ClevertapError::Internal(format!("Failed to serialize request body: {e}"))
            })?;
            builder = builder.body(bytes);
        }

        let response = self.client.send(builder).await?;
        let status = response.status();
        let text = response.text().await.map_err(|e| ClevertapError::from(InfraError::from(e)))?;

        if !status.is_success() {
            warn!(%status, "CleverTap request returned an error status");
        } else if request.debug {
            info!(%status, bytes = text.len(), "CleverTap response received");
        }

        decode_body(status, &text)
    }
}

/// Parse a response body.
///
/// JSON bodies are returned whatever the status, since the API reports
/// per-request failures in the body. An empty successful body is `null`.
fn decode_body(status: StatusCode, text: &str) -> Result<Value> {
    match serde_json::from_str::<Value>(text) {
        Ok(value) => Ok(value),
        Err(_) if !status.is_success() => Err(status_error(status)),
        Err(_) if text.trim().is_empty() => Ok(Value::Null),
        Err(err) => Err(InfraError::from(err).into()),
    }
}

fn auth_header_name(name: &str) -> Result<HeaderName> {
    HeaderName::from_bytes(name.as_bytes())
        .map_err(|e| ClevertapError::Internal(format!("invalid header name {name}: {e}")))
}

fn invalid_header(name: &str) -> ClevertapError {
    ValidationError::new(
        ValidationErrorKind::InvalidValue,
        format!("request header {name} is not a valid HTTP header"),
    )
    .into()
}

fn invalid_credential(header: &str) -> ClevertapError {
    ClevertapError::Config(format!("{header} contains characters not allowed in an HTTP header"))
}

#[cfg(test)]
mod tests {
    use clevertap_domain::CallOptions;
    use serde_json::json;

    use super::*;

    fn dispatcher() -> HttpRequestDispatcher {
        HttpRequestDispatcher::new(
            &ClientConfig::new("W9R-486-4W5Z", "96f5b4a1").with_base_url("https://example.test/1/"),
        )
        .unwrap()
    }

    #[test]
    fn builds_urls_with_encoded_query() {
        let request = ApiRequest::get("events.json", &CallOptions::default())
            .with_query("batch_size", "10")
            .with_query("query", r#"{"event_name":"App Launched"}"#);

        let url = dispatcher().url_for(&request).unwrap();

        assert_eq!(url.path(), "/1/events.json");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs[0], ("batch_size".to_string(), "10".to_string()));
        assert_eq!(pairs[1].1, r#"{"event_name":"App Launched"}"#);
    }

    #[test]
    fn auth_headers_override_caller_headers() {
        let options = CallOptions::new()
            .with_header("X-CleverTap-Passcode", "spoofed")
            .with_header("Content-Type", "text/plain")
            .with_header("X-Request-Source", "tests");
        let request = ApiRequest::post("upload", json!({"d": []}), &options);

        let headers = dispatcher().headers_for(&request).unwrap();

        assert_eq!(headers.get("x-clevertap-passcode").unwrap(), "96f5b4a1");
        assert_eq!(headers.get("x-clevertap-account-id").unwrap(), "W9R-486-4W5Z");
        assert_eq!(headers.get("content-type").unwrap(), "application/json");
        assert_eq!(headers.get("x-request-source").unwrap(), "tests");
        assert_eq!(headers.get_all("x-clevertap-passcode").iter().count(), 1);
    }

    #[test]
    fn auth_header_names_come_from_constants() {
        let request = ApiRequest::get("profile.json", &CallOptions::default());

        let headers = dispatcher().headers_for(&request).unwrap();

        assert_eq!(headers.get(HEADER_ACCOUNT_ID).unwrap(), "W9R-486-4W5Z");
        assert_eq!(headers.get(HEADER_PASSCODE).unwrap(), "96f5b4a1");
        assert!(headers.get(HEADER_PASSCODE).unwrap().is_sensitive());
        assert_eq!(headers.len(), 3);
    }

    #[test]
    fn invalid_caller_header_is_rejected() {
        let options = CallOptions::new().with_header("bad header", "x");
        let request = ApiRequest::get("profile.json", &options);

        let err = dispatcher().headers_for(&request).unwrap_err();
        assert!(matches!(err, ClevertapError::Validation(_)));
    }

    #[test]
    fn missing_credentials_are_rejected() {
        let result = HttpRequestDispatcher::new(&ClientConfig::new("", "secret"));
        assert!(matches!(result, Err(ClevertapError::Config(_))));
    }

    #[test]
    fn decodes_bodies_by_status() {
        assert_eq!(decode_body(StatusCode::OK, "").unwrap(), Value::Null);
        assert_eq!(
            decode_body(StatusCode::BAD_REQUEST, r#"{"status":"fail","error":"bad"}"#).unwrap(),
            json!({"status": "fail", "error": "bad"})
        );
        assert!(matches!(decode_body(StatusCode::OK, "<html>"), Err(ClevertapError::Decode(_))));
        assert!(matches!(
            decode_body(StatusCode::UNAUTHORIZED, "Unauthorized"),
            Err(ClevertapError::Auth(_))
        ));
        assert!(matches!(
            decode_body(StatusCode::INTERNAL_SERVER_ERROR, ""),
            Err(ClevertapError::Network(_))
        ));
    }
}
