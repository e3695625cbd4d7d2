//! Application wiring: the `create_actions` factory and logging bootstrap.

pub mod actions;
pub mod tracing;

pub use actions::{create_actions, Actions};
pub use tracing::setup_tracing;
