//! # Client Errors
//!
//! This module defines the common error types used throughout the action
//! client. By centralizing error definitions, we ensure consistent error
//! handling across the dispatcher, the transports, and the generated
//! namespace wrappers.
//!
//! # Propagation Policy
//!
//! Only conditions meaning "the call itself could not be completed" surface
//! as an `Err`: an unreachable transport, a reply that is not a valid action
//! envelope, a failed meta provider, or params that cannot be encoded. A
//! remote action that ran and *declared* a failure is an expected outcome
//! and resolves to [`ActionResponse::Failure`](crate::envelope::ActionResponse)
//! instead — callers match on the tagged result, not on `Err`.

/// Boxed error carried by pluggable components (meta providers, transports).
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while issuing an action call.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request never reached the action dispatcher, or the connection
    /// dropped before a reply arrived. Never retried by the client; retry
    /// policy belongs to the caller or a transport override.
    #[error("transport failure: {message}")]
    Transport {
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    /// The reply does not conform to the action envelope. This indicates an
    /// integration bug and is never coerced into a declared failure.
    #[error("protocol violation: {0}")]
    Protocol(String),

    /// The configured meta provider failed, so the call was never dispatched.
    #[error("meta provider failed: {0}")]
    Meta(#[source] BoxError),

    /// Caller-supplied params could not be serialized into the payload.
    #[error("payload encoding failed: {0}")]
    Encode(#[source] serde_json::Error),
}

impl ClientError {
    /// Transport failure without an underlying cause.
    pub fn transport(message: impl Into<String>) -> Self {
        ClientError::Transport {
            message: message.into(),
            source: None,
        }
    }

    /// Transport failure wrapping the underlying I/O error.
    pub fn transport_with(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        ClientError::Transport {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Transport { .. })
    }

    pub fn is_protocol(&self) -> bool {
        matches!(self, ClientError::Protocol(_))
    }
}
