//! Built-in meta providers covering the common cases: a fixed map, and a
//! plain closure recomputed per call.

use async_trait::async_trait;
use serde_json::Value;

use super::{Meta, MetaProvider};
use crate::error::BoxError;

/// Fixed metadata, cloned into every call.
#[derive(Debug, Clone, Default)]
pub struct StaticMeta {
    entries: Meta,
}

impl StaticMeta {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(entries: Meta) -> Self {
        Self { entries }
    }

    /// Add an entry; chainable for the common single-token case.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }
}

#[async_trait]
impl MetaProvider for StaticMeta {
    async fn meta(&self) -> Result<Meta, BoxError> {
        Ok(self.entries.clone())
    }
}

/// Adapts a plain closure into a provider. The closure runs on every call,
/// so the metadata is always freshly computed.
pub struct MetaFn<F> {
    produce: F,
}

impl<F> MetaFn<F>
where
    F: Fn() -> Meta + Send + Sync,
{
    pub fn new(produce: F) -> Self {
        Self { produce }
    }
}

#[async_trait]
impl<F> MetaProvider for MetaFn<F>
where
    F: Fn() -> Meta + Send + Sync,
{
    async fn meta(&self) -> Result<Meta, BoxError> {
        Ok((self.produce)())
    }
}
