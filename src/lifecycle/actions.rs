use crate::actions::AppActions;
use crate::client::{ActionClient, ActionClientOptions};

/// A ready client plus one wrapper object per generated namespace.
///
/// `Actions` is the root handle an application keeps for its lifetime:
/// the raw `call` surface stays available through [`Actions::client`] for
/// actions without a generated wrapper.
///
/// # Example
///
/// ```ignore
/// let actions = create_actions(ActionClientOptions::new().base_url("http://127.0.0.1:8000"));
///
/// // Generated wrapper
/// let greeting = actions.app.hello(HelloParams::named("Ada")).await?;
///
/// // Raw surface
/// let raw: ActionResponse<Value> = actions.client.call("AppActions.hello", vec![], json!({})).await?;
/// ```
pub struct Actions {
    /// The underlying dispatcher; usable directly for unwrapped actions.
    pub client: ActionClient,

    /// Wrapper for the `AppActions` namespace.
    pub app: AppActions,
}

/// Builds one [`ActionClient`] from `options` and wires the namespace
/// wrappers over clones of it.
pub fn create_actions(options: ActionClientOptions) -> Actions {
    let client = ActionClient::new(options);
    Actions {
        app: AppActions::new(client.clone()),
        client,
    }
}
