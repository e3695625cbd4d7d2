//! Configuration surface and its resolution into a fixed per-client config.
//!
//! All fields are optional and defaultable; a single pure resolution step
//! fills unset fields from defaults at client construction. After that the
//! configuration never changes for the lifetime of the client.

use std::sync::Arc;

use crate::meta::{MetaProvider, MetaSource};
use crate::transport::{HttpTransport, Transport};

/// Transport target used when `base_url` is unset.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Path the request envelope is posted to, appended to the base URL.
pub const DEFAULT_ACTIONS_PATH: &str = "/__actions";

/// Caller-facing configuration for [`ActionClient`](super::ActionClient).
///
/// `headers` applies to the default HTTP transport; a custom `transport`
/// override is responsible for its own header handling.
#[derive(Default)]
pub struct ActionClientOptions {
    pub base_url: Option<String>,
    pub actions_path: Option<String>,
    pub meta: Option<MetaSource>,
    pub transport: Option<Arc<dyn Transport>>,
    pub headers: Vec<(String, String)>,
}

impl ActionClientOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn actions_path(mut self, path: impl Into<String>) -> Self {
        self.actions_path = Some(path.into());
        self
    }

    /// Configure the meta source: instance or factory.
    pub fn meta(mut self, source: MetaSource) -> Self {
        self.meta = Some(source);
        self
    }

    /// Shorthand for the instance construction style.
    pub fn meta_provider(self, provider: impl MetaProvider + 'static) -> Self {
        self.meta(MetaSource::instance(provider))
    }

    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Add a static header sent with every call by the default transport.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Merge caller-supplied options over defaults. Pure apart from running
    /// a configured meta factory, which is invoked exactly once here.
    pub(crate) fn resolve(self) -> ClientConfig {
        let endpoint = join_endpoint(
            self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL),
            self.actions_path.as_deref().unwrap_or(DEFAULT_ACTIONS_PATH),
        );
        let transport = self.transport.unwrap_or_else(|| {
            Arc::new(HttpTransport::with_headers(endpoint.clone(), self.headers))
        });
        ClientConfig {
            endpoint,
            meta: self.meta.map(MetaSource::resolve),
            transport,
        }
    }
}

/// Fully-resolved, immutable per-client configuration.
pub(crate) struct ClientConfig {
    pub(crate) endpoint: String,
    pub(crate) meta: Option<Arc<dyn MetaProvider>>,
    pub(crate) transport: Arc<dyn Transport>,
}

fn join_endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
