//! # ActionNamespace Trait
//!
//! Provides the common surface for generated namespace wrappers, adding a
//! default `invoke` method built on top of the generic [`ActionClient`].

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::client::ActionClient;
use crate::envelope::ActionResponse;
use crate::error::ClientError;

/// Trait for generated namespace wrappers.
///
/// A wrapper fixes the namespace segment of the action name and forwards
/// typed params; it must not duplicate any dispatcher behavior. The default
/// `invoke` is the only logic wrappers are allowed to share.
#[async_trait]
pub trait ActionNamespace: Send + Sync {
    /// Namespace segment of the fully-qualified action name.
    const NAME: &'static str;

    /// Access the underlying dispatcher.
    fn client(&self) -> &ActionClient;

    /// Invoke `"{NAME}.{method}"` with `params` serialized as the payload.
    async fn invoke<P, T>(&self, method: &str, params: P) -> Result<ActionResponse<T>, ClientError>
    where
        P: Serialize + Send + Sync,
        T: DeserializeOwned,
    {
        let payload = serde_json::to_value(params).map_err(ClientError::Encode)?;
        let name = format!("{}.{method}", Self::NAME);
        self.client().call(&name, Vec::new(), payload).await
    }
}
