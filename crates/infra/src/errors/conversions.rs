//! Conversions from external infrastructure errors into domain errors.

use clevertap_domain::ClevertapError;
use reqwest::{Error as HttpError, StatusCode};
use serde_json::Error as JsonError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub ClevertapError);

impl From<InfraError> for ClevertapError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<ClevertapError> for InfraError {
    fn from(value: ClevertapError) -> Self {
        Self(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoClevertapError {
    fn into_clevertap(self) -> ClevertapError;
}

/// Map an HTTP status whose body could not be decoded.
///
/// 401 and 403 mean the account id or passcode was rejected; every other
/// status is reported as a network failure.
pub fn status_error(status: StatusCode) -> ClevertapError {
    let code = status.as_u16();
    let message = format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));

    match code {
        401 | 403 => ClevertapError::Auth(message),
        _ => ClevertapError::Network(message),
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → ClevertapError */
/* -------------------------------------------------------------------------- */

impl IntoClevertapError for HttpError {
    fn into_clevertap(self) -> ClevertapError {
        if self.is_timeout() {
            return ClevertapError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return ClevertapError::Network("HTTP connection failure".into());
        }

        if self.is_builder() {
            return ClevertapError::Internal(format!("invalid HTTP request: {self}"));
        }

        if self.is_decode() {
            return ClevertapError::Decode(format!("failed to read response body: {self}"));
        }

        if let Some(status) = self.status() {
            return status_error(status);
        }

        ClevertapError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        Self(value.into_clevertap())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → ClevertapError */
/* -------------------------------------------------------------------------- */

impl IntoClevertapError for JsonError {
    fn into_clevertap(self) -> ClevertapError {
        ClevertapError::Decode(format!("response body is not valid JSON: {self}"))
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        Self(value.into_clevertap())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
