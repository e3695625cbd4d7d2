//! Call-level behavior of the dispatcher against the in-memory transport:
//! envelope shape, metadata attachment, decode rules, and failure mapping.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::Notify;

use action_client::{
    ActionClient, ActionClientOptions, ActionResponse, BoxError, Meta, MetaProvider, MockTransport,
    StaticMeta,
};

fn client_over(mock: &MockTransport) -> ActionClient {
    ActionClient::new(ActionClientOptions::new().transport(Arc::new(mock.clone())))
}

#[tokio::test]
async fn envelope_carries_name_args_and_payload_exactly() {
    let mut mock = MockTransport::new();
    mock.expect_call("Math.add").return_data(json!(3));

    let client = client_over(&mock);
    let response: ActionResponse<i64> = client
        .call(
            "Math.add",
            vec![json!(1), json!(2)],
            json!({ "carry": true, "labels": ["a", "b"] }),
        )
        .await
        .expect("call completes");
    assert_eq!(response.data(), Some(&3));

    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].action, "Math.add");
    assert_eq!(requests[0].args, vec![json!(1), json!(2)]);
    assert_eq!(requests[0].payload, json!({ "carry": true, "labels": ["a", "b"] }));
    mock.verify();
}

#[tokio::test]
async fn no_meta_configured_means_empty_meta_on_the_wire() {
    let mut mock = MockTransport::new();
    mock.expect_call("AppActions.hello").return_data(json!("hi"));

    let client = client_over(&mock);
    client
        .call::<String>("AppActions.hello", Vec::new(), json!({}))
        .await
        .expect("call completes");

    let request = &mock.requests()[0];
    assert!(request.meta.is_empty());
    // The field disappears entirely in the wire form.
    let wire = serde_json::to_value(request).unwrap();
    assert!(wire.get("meta").is_none());
}

#[tokio::test]
async fn static_meta_is_attached_to_every_request() {
    let mut mock = MockTransport::new();
    mock.expect_call("A.one").return_data(json!(null));
    mock.expect_call("A.two").return_data(json!(null));

    let client = ActionClient::new(
        ActionClientOptions::new()
            .transport(Arc::new(mock.clone()))
            .meta_provider(StaticMeta::new().with("token", "abc")),
    );

    client.call::<Value>("A.one", Vec::new(), json!({})).await.unwrap();
    client.call::<Value>("A.two", Vec::new(), json!({})).await.unwrap();

    for request in mock.requests() {
        assert_eq!(request.meta["token"], json!("abc"));
    }
    mock.verify();
}

/// Provider that blocks until the test releases it.
struct GatedMeta {
    gate: Arc<Notify>,
}

#[async_trait]
impl MetaProvider for GatedMeta {
    async fn meta(&self) -> Result<Meta, BoxError> {
        self.gate.notified().await;
        let mut meta = Meta::new();
        meta.insert("token".into(), json!("late"));
        Ok(meta)
    }
}

#[tokio::test]
async fn dispatch_waits_for_an_async_meta_provider() {
    let mut mock = MockTransport::new();
    mock.expect_call("A.gated").return_data(json!("done"));

    let gate = Arc::new(Notify::new());
    let client = ActionClient::new(
        ActionClientOptions::new()
            .transport(Arc::new(mock.clone()))
            .meta_provider(GatedMeta { gate: gate.clone() }),
    );

    let call = tokio::spawn(async move {
        client
            .call::<String>("A.gated", Vec::new(), json!({}))
            .await
    });

    // The provider has not resolved; nothing may reach the transport.
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(mock.requests().is_empty());

    gate.notify_one();
    let response = call.await.unwrap().unwrap();
    assert_eq!(response.data(), Some(&"done".to_string()));

    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].meta["token"], json!("late"));
}

#[tokio::test]
async fn ok_reply_resolves_to_success() {
    let mut mock = MockTransport::new();
    mock.expect_call("AppActions.hello").return_data(json!("hi"));

    let client = client_over(&mock);
    let response: ActionResponse<String> = client
        .call("AppActions.hello", Vec::new(), json!({}))
        .await
        .unwrap();
    assert_eq!(response, ActionResponse::Success { data: "hi".into() });
}

#[tokio::test]
async fn declared_failure_resolves_instead_of_rejecting() {
    let mut mock = MockTransport::new();
    mock.expect_call("AppActions.hello")
        .return_failure("ValidationError", "bad name");

    let client = client_over(&mock);
    let response: ActionResponse<String> = client
        .call("AppActions.hello", Vec::new(), json!({ "name": 5 }))
        .await
        .expect("declared failures resolve, never reject");

    let failure = response.failure().expect("failure variant");
    assert_eq!(failure.kind, "ValidationError");
    assert_eq!(failure.message, "bad name");
}

#[tokio::test]
async fn failure_details_survive_decoding() {
    let mut mock = MockTransport::new();
    let body = json!({
        "ok": false,
        "error": { "kind": "ValidationError", "message": "bad name", "details": { "field": "name" } }
    });
    mock.expect_call("AppActions.hello")
        .return_raw(422, serde_json::to_vec(&body).unwrap());

    let client = client_over(&mock);
    let response: ActionResponse<String> = client
        .call("AppActions.hello", Vec::new(), json!({}))
        .await
        .unwrap();
    let failure = response.failure().unwrap();
    assert_eq!(failure.details, Some(json!({ "field": "name" })));
}

#[tokio::test]
async fn transport_outage_rejects_with_transport_error() {
    let mut mock = MockTransport::new();
    mock.expect_call("AppActions.hello")
        .return_transport_error("connection refused");

    let client = client_over(&mock);
    let err = client
        .call::<String>("AppActions.hello", Vec::new(), json!({}))
        .await
        .unwrap_err();
    assert!(err.is_transport(), "got {err:?}");
}

#[tokio::test]
async fn unparseable_reply_rejects_with_protocol_error() {
    let mut mock = MockTransport::new();
    mock.expect_call("AppActions.hello")
        .return_raw(502, b"<html>bad gateway</html>".to_vec());

    let client = client_over(&mock);
    let err = client
        .call::<String>("AppActions.hello", Vec::new(), json!({}))
        .await
        .unwrap_err();
    assert!(err.is_protocol(), "got {err:?}");
}

#[tokio::test]
async fn failed_reply_without_error_object_rejects_with_protocol_error() {
    let mut mock = MockTransport::new();
    mock.expect_call("AppActions.hello")
        .return_raw(200, serde_json::to_vec(&json!({ "ok": false })).unwrap());

    let client = client_over(&mock);
    let err = client
        .call::<String>("AppActions.hello", Vec::new(), json!({}))
        .await
        .unwrap_err();
    assert!(err.is_protocol(), "got {err:?}");
}

#[tokio::test]
async fn mistyped_data_rejects_rather_than_coercing() {
    let mut mock = MockTransport::new();
    mock.expect_call("AppActions.hello")
        .return_data(json!({ "nested": true }));

    let client = client_over(&mock);
    let err = client
        .call::<String>("AppActions.hello", Vec::new(), json!({}))
        .await
        .unwrap_err();
    assert!(err.is_protocol(), "got {err:?}");
}

#[tokio::test]
async fn concurrent_calls_resolve_independently_of_completion_order() {
    let mut mock = MockTransport::new();
    // The first-issued call completes last.
    mock.expect_call("Report.slow")
        .after(Duration::from_millis(50))
        .return_data(json!("slow"));
    mock.expect_call("Ping.fast").return_data(json!("fast"));

    let client = client_over(&mock);
    let slow = client.call::<String>("Report.slow", Vec::new(), json!({}));
    let fast = client.call::<String>("Ping.fast", Vec::new(), json!({}));

    let (slow, fast) = tokio::join!(slow, fast);
    assert_eq!(slow.unwrap().data(), Some(&"slow".to_string()));
    assert_eq!(fast.unwrap().data(), Some(&"fast".to_string()));
    mock.verify();
}
