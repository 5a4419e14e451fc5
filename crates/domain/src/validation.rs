//! Caller input validation
//!
//! Every public operation validates its input before a request is built.
//! Validation is selected by [`Operation`] and reports a structured
//! [`ValidationError`] instead of a formatted string.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::types::{ProfileLookup, Record, RecordPayload, TargetAction};

/// Category of a validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationErrorKind {
    /// Record or lookup lacks a usable identity value.
    MissingIdentity,
    /// Record is structurally unusable (e.g. event without a name).
    InvalidRecord,
    /// Query or request body is not a JSON object.
    InvalidQuery,
    /// Action requires a payload and none was given.
    MissingPayload,
    /// Payload lacks a required field.
    MissingField,
    /// Payload sets fields that exclude each other.
    ConflictingFields,
    /// Field is present but holds an unsupported value.
    InvalidValue,
}

/// Structured caller input error
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ValidationError {
    pub kind: ValidationErrorKind,
    pub message: String,
}

impl ValidationError {
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }
}

/// Operation whose input is being validated
#[derive(Debug, Clone, Copy)]
pub enum Operation<'a> {
    Upload(&'a [Record]),
    ProfileLookup(&'a ProfileLookup),
    Profiles(&'a Value),
    Events(&'a Value),
    ProfilesCount(&'a Value),
    EventsCount(&'a Value),
    DeleteProfile(&'a Value),
    Demerge(&'a Value),
    Subscribe(&'a Value),
    Disassociate(&'a Value),
    Target { action: TargetAction, payload: Option<&'a Value> },
}

impl Operation<'_> {
    /// Public operation name used in error messages.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Upload(_) => "upload",
            Self::ProfileLookup(_) => "profile",
            Self::Profiles(_) => "profiles",
            Self::Events(_) => "events",
            Self::ProfilesCount(_) => "profiles_count",
            Self::EventsCount(_) => "events_count",
            Self::DeleteProfile(_) => "delete_profile",
            Self::Demerge(_) => "demerge",
            Self::Subscribe(_) => "subscribe",
            Self::Disassociate(_) => "disassociate",
            Self::Target { .. } => "targets",
        }
    }
}

/// Validate the input of one operation.
///
/// # Errors
/// Returns the first problem found.
pub fn validate(operation: Operation<'_>) -> Result<(), ValidationError> {
    match operation {
        Operation::Upload(records) => records.iter().try_for_each(validate_record),
        Operation::ProfileLookup(lookup) => validate_lookup(lookup),
        Operation::Profiles(query)
        | Operation::Events(query)
        | Operation::ProfilesCount(query)
        | Operation::EventsCount(query)
        | Operation::DeleteProfile(query)
        | Operation::Demerge(query)
        | Operation::Subscribe(query)
        | Operation::Disassociate(query) => validate_query(operation.name(), query),
        Operation::Target { action, payload } => validate_target(action, payload),
    }
}

fn validate_record(record: &Record) -> Result<(), ValidationError> {
    if record.identity.value().trim().is_empty() {
        return Err(ValidationError::new(
            ValidationErrorKind::MissingIdentity,
            format!(
                "upload record must contain a non-empty identity, FBID, GPID or objectId field: {}",
                describe(record)
            ),
        ));
    }

    if let RecordPayload::Event { name, .. } = &record.payload {
        if name.trim().is_empty() {
            return Err(ValidationError::new(
                ValidationErrorKind::InvalidRecord,
                format!("upload record with type 'event' must contain an evtName: {}", describe(record)),
            ));
        }
    }

    Ok(())
}

fn validate_lookup(lookup: &ProfileLookup) -> Result<(), ValidationError> {
    let (param, value) = lookup.param();
    if value.trim().is_empty() {
        return Err(ValidationError::new(
            ValidationErrorKind::MissingIdentity,
            format!("profile lookup by {param} requires a non-empty value"),
        ));
    }
    Ok(())
}

fn validate_query(name: &str, query: &Value) -> Result<(), ValidationError> {
    if !query.is_object() {
        return Err(ValidationError::new(
            ValidationErrorKind::InvalidQuery,
            format!("CleverTap.{name}: query must be an object: {query}"),
        ));
    }
    Ok(())
}

fn validate_target(action: TargetAction, payload: Option<&Value>) -> Result<(), ValidationError> {
    if action.requires_campaign() {
        return validate_campaign(action, payload);
    }

    match action {
        TargetAction::Result | TargetAction::Stop => {
            if payload.and_then(|p| present(p, "id")).is_none() {
                return Err(ValidationError::new(
                    ValidationErrorKind::MissingField,
                    format!("Push targets action {action} requires a target id"),
                ));
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

fn validate_campaign(action: TargetAction, payload: Option<&Value>) -> Result<(), ValidationError> {
    let missing = |what: &str| {
        ValidationError::new(
            ValidationErrorKind::MissingField,
            format!("Push targets action {action} requires {what}"),
        )
    };

    let Some(payload) = payload.filter(|p| !p.is_null()) else {
        return Err(ValidationError::new(
            ValidationErrorKind::MissingPayload,
            format!("Push targets action {action} requires a payload"),
        ));
    };

    if present(payload, "name").is_none() {
        return Err(missing("a name"));
    }

    match (present(payload, "where"), present(payload, "segment")) {
        (None, None) => return Err(missing("a where or segment value")),
        (Some(_), Some(_)) => {
            return Err(ValidationError::new(
                ValidationErrorKind::ConflictingFields,
                format!(
                    "Push targets action {action} does not support both a where value and a segment value, specify one or the other"
                ),
            ))
        }
        (None, Some(segment)) if segment.as_str() != Some("all") => {
            return Err(ValidationError::new(
                ValidationErrorKind::InvalidValue,
                format!("Push targets action {action} segment value must be all"),
            ))
        }
        _ => {}
    }

    let Some(content) = present(payload, "content") else {
        return Err(missing("a content dict"));
    };
    if present(content, "title").is_none() || present(content, "body").is_none() {
        return Err(ValidationError::new(
            ValidationErrorKind::MissingField,
            format!("Push targets action {action} content dict requires a title and a body"),
        ));
    }

    if present(payload, "devices").is_none() {
        return Err(missing("a devices array"));
    }

    Ok(())
}

/// Field value when it exists and is not `null`, `false` or an empty string.
fn present<'v>(value: &'v Value, field: &str) -> Option<&'v Value> {
    value.get(field).filter(|v| match v {
        Value::Null | Value::Bool(false) => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    })
}

fn describe(record: &Record) -> String {
    serde_json::to_string(record).unwrap_or_else(|_| format!("{record:?}"))
}
