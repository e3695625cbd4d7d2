//! # Wire Envelopes
//!
//! This module defines the structured request/response bodies exchanged with
//! the remote action dispatcher, and the decode step that turns a raw reply
//! into a typed result.
//!
//! # The Contract
//!
//! Every call serializes to a single request envelope:
//!
//! ```json
//! { "action": "AppActions.hello", "args": [], "payload": { "name": "x" }, "meta": { "token": "abc" } }
//! ```
//!
//! and every reply deserializes from:
//!
//! ```json
//! { "ok": true, "data": "Hello, x!" }
//! { "ok": false, "error": { "kind": "ValidationError", "message": "bad name" } }
//! ```
//!
//! The `meta` field is omitted on the wire when no provider is configured.
//! How the envelope travels (HTTP method, path, header placement) is a
//! transport decision; the shapes here are the contract.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ClientError;
use crate::meta::Meta;

/// Request envelope for a single action invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionRequest {
    /// Fully-qualified action name, `"Namespace.method"`. Opaque to the
    /// client; no namespace validation happens on this side.
    pub action: String,
    /// Ordered positional arguments, passed before the payload.
    pub args: Vec<Value>,
    /// Named parameters as a single structured value.
    pub payload: Value,
    /// Per-call metadata snapshot supplied by the configured provider.
    #[serde(default, skip_serializing_if = "Meta::is_empty")]
    pub meta: Meta,
}

/// A declared server-side failure: the action ran and reported an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionFailure {
    /// Machine-readable discriminant (e.g. `"ValidationError"`).
    pub kind: String,
    /// Human-readable description.
    pub message: String,
    /// Optional structured context (e.g. the offending field).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

/// Result of a call: the action either produced data or declared a failure.
///
/// Declared failures are modeled outcomes, not errors — `call` resolves with
/// this variant rather than returning `Err`. Only transport and protocol
/// conditions reject (see [`ClientError`]).
#[derive(Debug, Clone, PartialEq)]
pub enum ActionResponse<T> {
    Success { data: T },
    Failure(ActionFailure),
}

impl<T> ActionResponse<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, ActionResponse::Success { .. })
    }

    /// The decoded data, if the action succeeded.
    pub fn data(&self) -> Option<&T> {
        match self {
            ActionResponse::Success { data } => Some(data),
            ActionResponse::Failure(_) => None,
        }
    }

    /// The declared failure, if the action reported one.
    pub fn failure(&self) -> Option<&ActionFailure> {
        match self {
            ActionResponse::Success { .. } => None,
            ActionResponse::Failure(failure) => Some(failure),
        }
    }

    /// Collapse into a `Result` for callers that treat declared failures as
    /// terminal anyway.
    pub fn into_result(self) -> Result<T, ActionFailure> {
        match self {
            ActionResponse::Success { data } => Ok(data),
            ActionResponse::Failure(failure) => Err(failure),
        }
    }
}

/// Raw reply envelope as it appears on the wire.
#[derive(Debug, Deserialize)]
struct ReplyEnvelope {
    ok: bool,
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    error: Option<ActionFailure>,
}

/// Decode a raw reply body into a typed response.
///
/// A body that does not parse as the envelope, a failed reply without an
/// `error` object, and `data` that does not match `T` are all protocol
/// violations — never silently downgraded to a declared failure.
pub(crate) fn decode_reply<T: DeserializeOwned>(
    status: u16,
    body: &[u8],
) -> Result<ActionResponse<T>, ClientError> {
    let envelope: ReplyEnvelope = serde_json::from_slice(body).map_err(|e| {
        ClientError::Protocol(format!("reply (status {status}) is not an action envelope: {e}"))
    })?;

    if envelope.ok {
        let data = serde_json::from_value(envelope.data.unwrap_or(Value::Null))
            .map_err(|e| ClientError::Protocol(format!("`data` does not match the expected type: {e}")))?;
        Ok(ActionResponse::Success { data })
    } else {
        match envelope.error {
            Some(failure) => Ok(ActionResponse::Failure(failure)),
            None => Err(ClientError::Protocol(format!(
                "failed reply (status {status}) carries no `error` object"
            ))),
        }
    }
}
