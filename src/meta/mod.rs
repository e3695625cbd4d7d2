//! # Meta Providers
//!
//! Every outgoing action call may carry metadata — anti-forgery tokens,
//! session context, tenant hints — that the client itself knows nothing
//! about. This module defines the contract for supplying it.
//!
//! # Architecture Note
//!
//! The client depends only on the [`MetaProvider`] trait, never on how the
//! metadata is obtained. One deployment reads a cookie, another calls a
//! token endpoint, a test returns a fixed map. Implementations are free to
//! cache, refresh, or recompute on every call; the client prescribes the
//! contract, not the internals.
//!
//! Two construction styles are accepted and normalized at client
//! construction via [`MetaSource`]: a ready provider instance, or a factory
//! invoked exactly once to produce one. No configured provider means no
//! metadata is attached — never an error.

pub mod providers;

pub use providers::{MetaFn, StaticMeta};

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::BoxError;

/// Per-call metadata: an opaque string-keyed map of JSON values.
///
/// A `Meta` is a snapshot taken for one call. It never represents ownership
/// of server-side state.
pub type Meta = serde_json::Map<String, serde_json::Value>;

/// Supplier of per-call metadata.
#[async_trait]
pub trait MetaProvider: Send + Sync {
    /// Produce the metadata to attach to the next outgoing call.
    ///
    /// Providers backed by I/O (cookie jars, token endpoints) may fail; a
    /// failure rejects the call before anything is dispatched.
    async fn meta(&self) -> Result<Meta, BoxError>;
}

/// Construction-time parameter: a ready provider, or a means of producing one.
///
/// Mirrors the two call-site styles the configuration surface accepts. Both
/// normalize to a single provider instance before the first call runs, so
/// the dispatch path never distinguishes them.
pub enum MetaSource {
    /// A provider instance used as-is.
    Instance(Arc<dyn MetaProvider>),
    /// A factory invoked once at client construction.
    Factory(Box<dyn FnOnce() -> Arc<dyn MetaProvider> + Send>),
}

impl MetaSource {
    /// Wrap a ready provider instance.
    pub fn instance(provider: impl MetaProvider + 'static) -> Self {
        MetaSource::Instance(Arc::new(provider))
    }

    /// Wrap a factory; it runs exactly once, at client construction.
    pub fn factory(make: impl FnOnce() -> Arc<dyn MetaProvider> + Send + 'static) -> Self {
        MetaSource::Factory(Box::new(make))
    }

    /// Normalize into a single provider instance.
    pub(crate) fn resolve(self) -> Arc<dyn MetaProvider> {
        match self {
            MetaSource::Instance(provider) => provider,
            MetaSource::Factory(make) => make(),
        }
    }
}

impl From<Arc<dyn MetaProvider>> for MetaSource {
    fn from(provider: Arc<dyn MetaProvider>) -> Self {
        MetaSource::Instance(provider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn factory_resolves_to_its_product() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let source = MetaSource::factory(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Arc::new(StaticMeta::new().with("token", "abc"))
        });

        let provider = source.resolve();
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        let meta = provider.meta().await.unwrap();
        assert_eq!(meta["token"], "abc");
    }

    #[tokio::test]
    async fn instance_passes_through() {
        let source = MetaSource::instance(StaticMeta::new().with("session", "s1"));
        let provider = source.resolve();
        let meta = provider.meta().await.unwrap();
        assert_eq!(meta["session"], "s1");
    }
}
