//! # The Dispatcher
//!
//! [`ActionClient`] turns a logical invocation — name, positional args,
//! payload — into a request envelope, attaches provider-supplied metadata,
//! dispatches it through the configured transport, and decodes the reply
//! into a typed result.
//!
//! # Architecture Note
//!
//! The client is a cheap-clone handle over an immutable, fully-resolved
//! configuration. Every call is independent end-to-end: no shared mutable
//! state, no ordering between in-flight calls, no internal retries. The two
//! suspension points are metadata resolution and transport dispatch; the
//! transport request is never issued before an asynchronous meta provider
//! has resolved.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::options::{ActionClientOptions, ClientConfig};
use crate::envelope::{decode_reply, ActionRequest, ActionResponse};
use crate::error::ClientError;
use crate::meta::Meta;

/// The callable dispatcher for server-defined actions.
///
/// Create one per application context and clone it freely; clones share the
/// same fixed configuration.
#[derive(Clone)]
pub struct ActionClient {
    config: Arc<ClientConfig>,
}

impl ActionClient {
    /// Resolve `options` over defaults and build a ready client.
    ///
    /// A configured meta factory is invoked here, once; from this point the
    /// configuration is immutable.
    pub fn new(options: ActionClientOptions) -> Self {
        Self {
            config: Arc::new(options.resolve()),
        }
    }

    /// Invoke the named action and decode its reply as `T`.
    ///
    /// Resolves to [`ActionResponse::Failure`] when the remote action ran
    /// and declared an error; returns `Err` only when the call itself could
    /// not be completed (transport, protocol, meta, encoding).
    #[instrument(skip(self, args, payload), fields(endpoint = %self.config.endpoint))]
    pub async fn call<T: DeserializeOwned>(
        &self,
        name: &str,
        args: Vec<Value>,
        payload: Value,
    ) -> Result<ActionResponse<T>, ClientError> {
        let meta = match &self.config.meta {
            Some(provider) => provider.meta().await.map_err(ClientError::Meta)?,
            None => Meta::new(),
        };

        let request = ActionRequest {
            action: name.to_owned(),
            args,
            payload,
            meta,
        };
        debug!(action = %request.action, "dispatching action");

        let reply = self.config.transport.send(&request).await?;
        let decoded = decode_reply(reply.status, &reply.body);

        match &decoded {
            Ok(ActionResponse::Success { .. }) => debug!(action = %request.action, "action succeeded"),
            Ok(ActionResponse::Failure(failure)) => {
                debug!(action = %request.action, kind = %failure.kind, "action declared failure")
            }
            Err(e) => warn!(action = %request.action, error = %e, "action call failed"),
        }
        decoded
    }
}
