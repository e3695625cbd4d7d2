//! # Transport Seam
//!
//! The client never talks to the network directly; it hands the request
//! envelope to a [`Transport`] and decodes whatever raw reply comes back.
//! This is the injection point for everything the core deliberately leaves
//! out: retries, timeouts, backoff, cancellation, alternative protocols.
//!
//! The default is [`HttpTransport`]; tests swap in
//! [`MockTransport`](crate::client::MockTransport).

pub mod http;

pub use http::HttpTransport;

use async_trait::async_trait;

use crate::envelope::ActionRequest;
use crate::error::ClientError;

/// Raw reply from the action dispatcher, uninterpreted.
///
/// Decoding belongs to the client; a transport only reports what arrived.
#[derive(Debug, Clone)]
pub struct RawReply {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawReply {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Delivery mechanism for action requests.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Deliver the request envelope and return the raw reply.
    ///
    /// An `Err` here means the call never completed (connection refused,
    /// dropped mid-flight); it surfaces to the caller as a transport
    /// rejection.
    async fn send(&self, request: &ActionRequest) -> Result<RawReply, ClientError>;
}
