use serde::Serialize;

use super::namespace::ActionNamespace;
use crate::client::ActionClient;
use crate::envelope::ActionResponse;
use crate::error::ClientError;

/// Params for `AppActions.hello`. Unset fields fall back to the server-side
/// defaults for the action.
#[derive(Debug, Clone, Default, Serialize)]
pub struct HelloParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl HelloParams {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

/// Wrapper over the `AppActions` namespace.
#[derive(Clone)]
pub struct AppActions {
    client: ActionClient,
}

impl AppActions {
    pub fn new(client: ActionClient) -> Self {
        Self { client }
    }

    pub async fn hello(&self, params: HelloParams) -> Result<ActionResponse<String>, ClientError> {
        self.invoke("hello", params).await
    }
}

impl ActionNamespace for AppActions {
    const NAME: &'static str = "AppActions";

    fn client(&self) -> &ActionClient {
        &self.client
    }
}
