//! # Mock Transport & Testing Guide
//!
//! `MockTransport` implements the same [`Transport`] contract as the
//! production HTTP transport but operates entirely in-memory. It lets you
//! set expectations and canned replies for unit tests, enabling fast,
//! deterministic testing of call logic without a running action dispatcher.
//!
//! # Testing Strategy
//!
//! In tests we rarely want a real server just to exercise the *client*
//! logic (envelope assembly, meta attachment, decode and error mapping).
//! Instead the mock records every dispatched [`ActionRequest`] for
//! inspection and replies from a queue of expectations:
//!
//! ```rust
//! use std::sync::Arc;
//! use serde_json::json;
//! use action_client::{ActionClient, ActionClientOptions, ActionResponse, MockTransport};
//!
//! #[tokio::main]
//! async fn main() {
//!     // 1. Set up expectations
//!     let mut mock = MockTransport::new();
//!     mock.expect_call("AppActions.hello").return_data(json!("Hello, x!"));
//!
//!     // 2. Build a client over the mock
//!     let client = ActionClient::new(
//!         ActionClientOptions::new().transport(Arc::new(mock.clone())),
//!     );
//!
//!     // 3. Exercise and assert
//!     let reply: ActionResponse<String> = client
//!         .call("AppActions.hello", Vec::new(), json!({ "name": "x" }))
//!         .await
//!         .unwrap();
//!     assert_eq!(reply.data(), Some(&"Hello, x!".to_string()));
//!     assert_eq!(mock.requests()[0].payload, json!({ "name": "x" }));
//!     mock.verify(); // ensures all expectations were met
//! }
//! ```
//!
//! # Failure Injection
//!
//! Conditions that are hard to reproduce against a real dispatcher are one
//! line here: `return_failure` for declared server-side failures,
//! `return_transport_error` for a simulated outage, `return_raw` for
//! malformed envelopes. `after` delays a reply so completion-order
//! inversions between concurrent calls become testable — expectations match
//! by action name, not arrival order.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::envelope::ActionRequest;
use crate::error::ClientError;
use crate::transport::{RawReply, Transport};

enum Outcome {
    Reply(RawReply),
    TransportError(String),
}

/// One expected call and its canned outcome.
struct Expectation {
    /// Fully-qualified action name; `None` matches any action.
    action: Option<String>,
    delay: Option<Duration>,
    outcome: Outcome,
}

/// In-memory transport with expectation tracking for fluent testing.
#[derive(Clone, Default)]
pub struct MockTransport {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    requests: Arc<Mutex<Vec<ActionRequest>>>,
}

impl MockTransport {
    /// Creates a new mock transport with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a call to the given fully-qualified action name.
    pub fn expect_call(&mut self, action: impl Into<String>) -> ExpectationBuilder {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            action: Some(action.into()),
            delay: None,
        }
    }

    /// Expects a call to any action.
    pub fn expect_any(&mut self) -> ExpectationBuilder {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            action: None,
            delay: None,
        }
    }

    /// Requests dispatched so far, in arrival order.
    pub fn requests(&self) -> Vec<ActionRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("not all expectations were met, {} remaining", exps.len());
        }
    }

    fn take_matching(&self, action: &str) -> Option<Expectation> {
        let mut exps = self.expectations.lock().unwrap();
        let position = exps.iter().position(|e| match &e.action {
            Some(expected) => expected == action,
            None => true,
        })?;
        exps.remove(position)
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: &ActionRequest) -> Result<RawReply, ClientError> {
        self.requests.lock().unwrap().push(request.clone());

        let expectation = match self.take_matching(&request.action) {
            Some(expectation) => expectation,
            None => panic!("no expectation matches action `{}`", request.action),
        };

        if let Some(delay) = expectation.delay {
            tokio::time::sleep(delay).await;
        }

        match expectation.outcome {
            Outcome::Reply(reply) => Ok(reply),
            Outcome::TransportError(message) => Err(ClientError::transport(message)),
        }
    }
}

/// Builder for one expectation; every `return_*` method enqueues it.
pub struct ExpectationBuilder {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    action: Option<String>,
    delay: Option<Duration>,
}

impl ExpectationBuilder {
    /// Delay the reply, forcing later calls to complete first.
    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Reply `{ "ok": true, "data": ... }`.
    pub fn return_data(self, data: Value) {
        let body = json!({ "ok": true, "data": data });
        self.finish(Outcome::Reply(reply_json(&body)));
    }

    /// Reply `{ "ok": false, "error": { "kind": ..., "message": ... } }`.
    pub fn return_failure(self, kind: &str, message: &str) {
        let body = json!({ "ok": false, "error": { "kind": kind, "message": message } });
        self.finish(Outcome::Reply(reply_json(&body)));
    }

    /// Reply with an arbitrary status and raw body (malformed envelopes,
    /// failure details, HTML error pages).
    pub fn return_raw(self, status: u16, body: impl Into<Vec<u8>>) {
        self.finish(Outcome::Reply(RawReply::new(status, body)));
    }

    /// Fail at the transport layer (simulated network outage).
    pub fn return_transport_error(self, message: &str) {
        self.finish(Outcome::TransportError(message.to_owned()));
    }

    fn finish(self, outcome: Outcome) {
        self.expectations.lock().unwrap().push_back(Expectation {
            action: self.action,
            delay: self.delay,
            outcome,
        });
    }
}

fn reply_json(body: &Value) -> RawReply {
    RawReply::new(200, serde_json::to_vec(body).expect("envelope serializes"))
}
