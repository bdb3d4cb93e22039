//! Synthetic Lambda invocation context

use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;

use crate::MOCK_REQUEST_ID;

/// Invocation metadata mirroring what the proxying tier hands a handler.
///
/// All values are synthetic. Time-derived fields are seeded from the
/// supplied instant; the serialized field names are fixed literals the
/// listener under test matches byte-for-byte.
#[derive(Debug, Clone, Serialize)]
pub struct MockLambdaContext {
    #[serde(rename = "AWSRequestID")]
    pub aws_request_id: String,
    #[serde(rename = "InvokeID")]
    pub invoke_id: String,
    #[serde(rename = "LogGroupName")]
    pub log_group_name: String,
    #[serde(rename = "LogStreamName")]
    pub log_stream_name: String,
    #[serde(rename = "FunctionName")]
    pub function_name: String,
    #[serde(rename = "MemoryLimitInMB")]
    pub memory_limit_in_mb: String,
    #[serde(rename = "FunctionVersion")]
    pub function_version: String,
    #[serde(rename = "InvokedFunctionARN")]
    pub invoked_function_arn: String,
}

impl MockLambdaContext {
    /// Build a context seeded from `now`.
    #[must_use]
    pub fn new(now: DateTime<Utc>) -> Self {
        let unix = now.timestamp();
        Self {
            aws_request_id: MOCK_REQUEST_ID.to_string(),
            invoke_id: format!("{unix}-{MOCK_REQUEST_ID}"),
            log_group_name: "/aws/lambda/LambdaKitApplicationMockLogGroup-9ZX7FITHEAG8"
                .to_string(),
            log_stream_name: format!(
                "{}/{}/{}/[$LATEST]{}",
                now.year(),
                now.month(),
                now.day(),
                unix
            ),
            function_name: "LambdaKitFunction".to_string(),
            memory_limit_in_mb: "128".to_string(),
            function_version: "[LATEST]".to_string(),
            invoked_function_arn: format!(
                "arn:aws:lambda:us-west-2:123412341234:function:LambdaKitMockFunction-{unix}"
            ),
        }
    }
}
