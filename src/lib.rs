//! # Action Client
//!
//! A typed, asynchronous client for invoking named, server-defined actions —
//! remote procedures grouped by namespace (e.g. `AppActions.hello`) — from a
//! front-end runtime.
//!
//! ## Architecture Overview
//!
//! The crate separates concerns into three layers:
//!
//! 1. **Dispatch Layer** ([`client`]) - envelope assembly, metadata
//!    injection, transport dispatch, reply decoding
//! 2. **Pluggable Seams** ([`meta`], [`transport`]) - where deployments
//!    differ: how per-call metadata is obtained and how envelopes travel
//! 3. **Interface Layer** ([`actions`]) - generated-style namespace wrappers
//!    that fix action names and param types for call-site ergonomics
//!
//! This separation means call logic is written **once** in the dispatcher,
//! and everything deployment-specific is injected through configuration.
//!
//! ## Core Abstractions
//!
//! ### [`ActionClient`] - The Dispatcher
//!
//! `call<T>(name, args, payload)` serializes a logical invocation into a
//! request envelope, merges in provider-supplied metadata, sends it through
//! the configured transport, and decodes the reply into an
//! [`ActionResponse<T>`]:
//!
//! ```no_run
//! use action_client::{create_actions, ActionClientOptions, HelloParams};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), action_client::ClientError> {
//!     let actions = create_actions(
//!         ActionClientOptions::new().base_url("http://127.0.0.1:8000"),
//!     );
//!
//!     let reply = actions.app.hello(HelloParams::named("Rust")).await?;
//!     if let Some(greeting) = reply.data() {
//!         println!("{greeting}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ### [`MetaProvider`] - Per-Call Metadata
//!
//! Anti-forgery tokens, session context, tenant hints: supplied on demand by
//! a pluggable provider, merged into every outgoing envelope. Configure a
//! ready instance or a factory; both normalize at construction. No provider
//! configured means no metadata attached — never an error.
//!
//! ### Tagged Results, Not Exceptions
//!
//! A remote action that ran and declared a failure resolves to
//! [`ActionResponse::Failure`] — an expected, modeled outcome. Only
//! conditions meaning "the call could not be completed" (unreachable
//! transport, malformed envelope) surface as [`ClientError`].
//!
//! ## Concurrency Model
//!
//! - Every call is independent end-to-end: no shared mutable state, no
//!   ordering, no deduplication between in-flight calls
//! - The client is a cheap-clone handle; clones share one immutable
//!   configuration
//! - Timeouts, retries, and cancellation are transport-layer concerns,
//!   injected via the `transport` override rather than hard-coded
//!
//! ## Testing
//!
//! The crate provides a [`MockTransport`] that implements the same
//! [`Transport`](transport::Transport) contract as the production HTTP
//! transport but operates entirely in-memory, with a fluent expectation
//! API. See the [`client::mock`] module for the full guide.

pub mod actions;
pub mod client;
pub mod envelope;
pub mod error;
pub mod lifecycle;
pub mod meta;
pub mod transport;

// Re-export core types for convenience
pub use actions::{ActionNamespace, AppActions, HelloParams};
pub use client::{ActionClient, ActionClientOptions, MockTransport};
pub use envelope::{ActionFailure, ActionRequest, ActionResponse};
pub use error::{BoxError, ClientError};
pub use lifecycle::{create_actions, setup_tracing, Actions};
pub use meta::{Meta, MetaFn, MetaProvider, MetaSource, StaticMeta};
pub use transport::{HttpTransport, RawReply, Transport};
