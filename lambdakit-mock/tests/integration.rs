//! Integration tests for the request mocker
//!
//! Runs a local axum listener that records the last received invocation and
//! verifies the wire format each entry point produces.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::Mutex;

use lambdakit_mock::{
    post_api_gateway_request, post_lambda_request, post_raw_request, MockError, MOCK_REQUEST_ID,
};

/// The last request the capture listener received.
#[derive(Debug, Clone)]
struct ReceivedRequest {
    lambda_name: String,
    content_type: String,
    body: Value,
}

#[derive(Clone, Default)]
struct Captured {
    inner: Arc<Mutex<Option<ReceivedRequest>>>,
}

impl Captured {
    async fn take(&self) -> ReceivedRequest {
        self.inner
            .lock()
            .await
            .take()
            .expect("listener should have received a request")
    }

    async fn is_empty(&self) -> bool {
        self.inner.lock().await.is_none()
    }
}

async fn capture(
    State(state): State<Captured>,
    Path(lambda_name): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Json<Value> {
    let content_type = headers
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    *state.inner.lock().await = Some(ReceivedRequest {
        lambda_name,
        content_type,
        body,
    });
    Json(json!({ "ok": true }))
}

/// Start the capture listener on a random port and return its base URL.
async fn start_capture_listener() -> (String, Captured, tokio::task::JoinHandle<()>) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    let state = Captured::default();
    let router = Router::new()
        .route("/:lambda_name", post(capture))
        .with_state(state.clone());

    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    // Give the listener a moment to start
    tokio::time::sleep(Duration::from_millis(50)).await;

    (format!("http://127.0.0.1:{port}"), state, handle)
}

#[tokio::test]
async fn raw_request_omits_event_key_when_absent() {
    let (base_url, captured, _handle) = start_capture_listener().await;

    let context = json!({"custom": "context"});
    let response = post_raw_request("myFn", &context, None::<&Value>, &base_url)
        .await
        .unwrap();
    assert!(response.status().is_success());

    let received = captured.take().await;
    assert_eq!(received.lambda_name, "myFn");
    assert_eq!(received.content_type, "application/json");
    assert_eq!(received.body["context"], context);
    assert!(received.body.get("event").is_none());
}

#[tokio::test]
async fn raw_request_includes_event_payload() {
    let (base_url, captured, _handle) = start_capture_listener().await;

    let context = json!({"custom": "context"});
    let event = json!({"n": 42});
    post_raw_request("myFn", &context, Some(&event), &base_url)
        .await
        .unwrap();

    let received = captured.take().await;
    assert_eq!(received.body["event"], event);
}

#[tokio::test]
async fn lambda_request_carries_synthetic_context() {
    let (base_url, captured, _handle) = start_capture_listener().await;

    post_lambda_request("myFn", Some(&json!({"hello": "world"})), &base_url)
        .await
        .unwrap();

    let received = captured.take().await;
    let context = &received.body["context"];
    assert_eq!(context["AWSRequestID"], MOCK_REQUEST_ID);
    assert_eq!(context["MemoryLimitInMB"], "128");
    assert_eq!(context["FunctionVersion"], "[LATEST]");
    assert!(context["InvokeID"]
        .as_str()
        .unwrap()
        .ends_with(MOCK_REQUEST_ID));
    assert!(context["LogStreamName"]
        .as_str()
        .unwrap()
        .contains("[$LATEST]"));
    assert_eq!(received.body["event"], json!({"hello": "world"}));
}

#[tokio::test]
async fn api_gateway_request_end_to_end() {
    let (base_url, captured, _handle) = start_capture_listener().await;

    let params = HashMap::from([(
        "method.request.header.X-Test".to_string(),
        "v".to_string(),
    )]);
    let response = post_api_gateway_request("myFn", "GET", &params, None::<&Value>, &base_url)
        .await
        .unwrap();
    assert!(response.status().is_success());

    let received = captured.take().await;
    assert_eq!(received.lambda_name, "myFn");

    let event = &received.body["event"];
    assert_eq!(event["headers"]["method.request.header.X-Test"], "v");
    assert_eq!(event["context"]["method"], "GET");
    assert_eq!(event["method"], "GET");
    assert!(event["data"].is_null());
    assert_eq!(event["queryParams"], json!({}));
    assert_eq!(event["pathParams"], json!({}));
    assert_eq!(event["context"]["stage"], "mock");
    assert_eq!(event["context"]["identity"]["sourceIp"], "127.0.0.1");
}

#[tokio::test]
async fn unsupported_category_fails_before_sending() {
    let (base_url, captured, _handle) = start_capture_listener().await;

    let params = HashMap::from([(
        "method.request.cookie.session".to_string(),
        "abc".to_string(),
    )]);
    let err = post_api_gateway_request("myFn", "GET", &params, None::<&Value>, &base_url)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        MockError::UnsupportedParameterCategory(key) if key == "method.request.cookie.session"
    ));
    assert!(captured.is_empty().await, "nothing should have been sent");
}

#[tokio::test]
async fn unreachable_listener_is_a_transport_error() {
    // Bind then drop to find a port with nothing listening on it.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let err = post_lambda_request(
        "myFn",
        None::<&Value>,
        &format!("http://127.0.0.1:{port}"),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, MockError::Transport(_)));
}

#[tokio::test]
async fn malformed_base_url_is_a_transport_error() {
    let err = post_lambda_request("myFn", None::<&Value>, "not a base url")
        .await
        .unwrap_err();
    assert!(matches!(err, MockError::Transport(_)));
}
