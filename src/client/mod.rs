//! The engine: option resolution, the dispatcher, and the mock transport.
//!
//! # Main Components
//!
//! - [`ActionClientOptions`] - defaultable configuration, resolved once
//! - [`ActionClient`] - the `call` dispatcher
//! - [`MockTransport`] - in-memory transport for testing call logic
//!
//! # Testing
//!
//! See the [`mock`] module for utilities to test callers without a running
//! action dispatcher.

pub mod core;
pub mod mock;
pub mod options;

// Re-export core types for convenience
pub use self::core::ActionClient;
pub use self::mock::MockTransport;
pub use self::options::{ActionClientOptions, DEFAULT_ACTIONS_PATH, DEFAULT_BASE_URL};
