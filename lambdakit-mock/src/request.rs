//! Mock invocation envelope construction and delivery

use std::collections::HashMap;

use chrono::Utc;
use reqwest::{header, Client, Response};
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

use crate::context::MockLambdaContext;
use crate::gateway::ApiGatewayRequestMock;

#[derive(Debug, Error)]
pub enum MockError {
    #[error("failed to serialize mock request body: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to deliver mock request: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unsupported whitelist parameter category: {0}")]
    UnsupportedParameterCategory(String),
}

/// Build the `{context, event}` wrapper. The `event` key is omitted
/// entirely when there is no payload, not serialized as null.
fn envelope<C, E>(context: &C, event_data: Option<&E>) -> Result<Value, MockError>
where
    C: Serialize + ?Sized,
    E: Serialize + ?Sized,
{
    let mut body = Map::new();
    body.insert("context".to_string(), serde_json::to_value(context)?);
    if let Some(event) = event_data {
        body.insert("event".to_string(), serde_json::to_value(event)?);
    }
    Ok(Value::Object(body))
}

/// POST a mock invocation envelope to the handler listening at
/// `{base_url}/{lambda_name}` and return the raw response.
///
/// The caller supplies the full invocation context, which is useful for
/// advanced cases needing precise control over the mock. Most tests should
/// use [`post_lambda_request`] or [`post_api_gateway_request`] instead.
///
/// The response is returned uninterpreted; delivery failures (bad base URL,
/// connection refused) surface as [`MockError::Transport`] with no retries.
pub async fn post_raw_request<C, E>(
    lambda_name: &str,
    context: &C,
    event_data: Option<&E>,
    base_url: &str,
) -> Result<Response, MockError>
where
    C: Serialize + ?Sized,
    E: Serialize + ?Sized,
{
    let body = serde_json::to_vec(&envelope(context, event_data)?)?;

    let url = format!("{base_url}/{lambda_name}");
    debug!(%url, "posting mock invocation");
    let response = Client::new()
        .post(&url)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .await?;
    Ok(response)
}

/// POST a mock invocation with a synthesized, time-seeded Lambda context.
///
/// `event_data` is optional event-specific payload; `base_url` is the
/// address of the local test listener.
pub async fn post_lambda_request<E>(
    lambda_name: &str,
    event_data: Option<&E>,
    base_url: &str,
) -> Result<Response, MockError>
where
    E: Serialize + ?Sized,
{
    let context = MockLambdaContext::new(Utc::now());
    post_raw_request(lambda_name, &context, event_data, base_url).await
}

/// POST a mock invocation whose event is an API Gateway request mock built
/// from `whitelist_param_values` (keys of the form
/// `method.request.<category>.<name>`).
///
/// The optional `event_data` is embedded in the gateway mock's `data` field,
/// mirroring how input mapping templates pass it through.
pub async fn post_api_gateway_request<E>(
    lambda_name: &str,
    http_method: &str,
    whitelist_param_values: &HashMap<String, String>,
    event_data: Option<&E>,
    base_url: &str,
) -> Result<Response, MockError>
where
    E: Serialize + ?Sized,
{
    let data = match event_data {
        Some(event) => serde_json::to_value(event)?,
        None => Value::Null,
    };
    let mock = ApiGatewayRequestMock::new(http_method, whitelist_param_values, data)?;
    post_lambda_request(lambda_name, Some(&mock), base_url).await
}
