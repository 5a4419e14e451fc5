//! Upload records
//!
//! A record is one event, profile update or device token tied to a single
//! user identity. Records serialize to the flat wire shape the upload
//! endpoint expects, e.g.
//! `{"type": "event", "identity": "6264372124", "evtName": "...", "evtData": {...}}`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key identifying the user a record belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Identity {
    /// Custom identity set on the profile via the SDKs or the server API.
    #[serde(rename = "identity")]
    Identity(String),
    /// CleverTap generated object id.
    #[serde(rename = "objectId")]
    ObjectId(String),
    #[serde(rename = "FBID")]
    Fbid(String),
    #[serde(rename = "GPID")]
    Gpid(String),
}

impl Identity {
    /// Wire field name carrying this identity.
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Identity(_) => "identity",
            Self::ObjectId(_) => "objectId",
            Self::Fbid(_) => "FBID",
            Self::Gpid(_) => "GPID",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::Identity(v) | Self::ObjectId(v) | Self::Fbid(v) | Self::Gpid(v) => v,
        }
    }
}

/// Kind of record, mirrored by the wire `type` tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Event,
    Profile,
    Token,
}

crate::impl_wire_name_conversions!(RecordKind {
    Event => "event",
    Profile => "profile",
    Token => "token",
});

/// Kind-specific record body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RecordPayload {
    Event {
        #[serde(rename = "evtName")]
        name: String,
        #[serde(rename = "evtData")]
        data: Map<String, Value>,
    },
    Profile {
        #[serde(rename = "profileData")]
        data: Map<String, Value>,
    },
    Token {
        #[serde(rename = "tokenData")]
        data: Value,
    },
}

/// One unit submitted through the upload endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(flatten)]
    pub identity: Identity,
    /// Unix timestamp in seconds; the server stamps the record when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ts: Option<i64>,
    #[serde(flatten)]
    pub payload: RecordPayload,
}

impl Record {
    pub fn event(identity: Identity, name: impl Into<String>, data: Map<String, Value>) -> Self {
        Self { identity, ts: None, payload: RecordPayload::Event { name: name.into(), data } }
    }

    pub fn profile(identity: Identity, data: Map<String, Value>) -> Self {
        Self { identity, ts: None, payload: RecordPayload::Profile { data } }
    }

    pub fn token(identity: Identity, data: Value) -> Self {
        Self { identity, ts: None, payload: RecordPayload::Token { data } }
    }

    pub fn with_timestamp(mut self, ts: i64) -> Self {
        self.ts = Some(ts);
        self
    }

    pub const fn kind(&self) -> RecordKind {
        match self.payload {
            RecordPayload::Event { .. } => RecordKind::Event,
            RecordPayload::Profile { .. } => RecordKind::Profile,
            RecordPayload::Token { .. } => RecordKind::Token,
        }
    }
}
