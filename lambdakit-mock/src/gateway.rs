//! API Gateway request mock

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use crate::request::MockError;
use crate::MOCK_REQUEST_ID;

/// Caller identity block inside the gateway context. Mostly empty for a
/// mock: no API key, no Cognito material, loopback source.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiGatewayIdentity {
    pub account_id: String,
    pub api_key: String,
    pub caller: String,
    pub cognito_authentication_provider: String,
    pub cognito_authentication_type: String,
    pub cognito_identity_id: String,
    pub cognito_identity_pool_id: String,
    pub source_ip: String,
    pub user: String,
    pub user_agent: String,
    pub user_arn: String,
}

impl ApiGatewayIdentity {
    fn mock() -> Self {
        Self {
            account_id: "123412341234".to_string(),
            source_ip: "127.0.0.1".to_string(),
            user: "Unknown".to_string(),
            user_agent: "Mozilla/Gecko".to_string(),
            ..Self::default()
        }
    }
}

/// Gateway-level request context: stage, resource, and caller identity.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiGatewayContext {
    pub app_id: String,
    pub method: String,
    pub request_id: String,
    pub resource_id: String,
    pub resource_path: String,
    pub stage: String,
    pub identity: ApiGatewayIdentity,
}

impl ApiGatewayContext {
    fn mock(http_method: &str) -> Self {
        Self {
            app_id: format!("lambdakitApp{}", std::process::id()),
            method: http_method.to_string(),
            request_id: MOCK_REQUEST_ID.to_string(),
            resource_id: "anon42".to_string(),
            resource_path: "/mock".to_string(),
            stage: "mock".to_string(),
            identity: ApiGatewayIdentity::mock(),
        }
    }
}

/// The event payload an API Gateway integration hands to a handler:
/// method, passed-through parameters, and the gateway context.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiGatewayRequestMock {
    pub method: String,
    pub data: Value,
    pub headers: HashMap<String, String>,
    pub query_params: HashMap<String, String>,
    pub path_params: HashMap<String, String>,
    pub context: ApiGatewayContext,
}

impl ApiGatewayRequestMock {
    /// Build a gateway request mock for `http_method`, distributing each
    /// whitelisted parameter into its category map.
    ///
    /// Whitelist keys carry their namespace, `method.request.<category>.<name>`,
    /// and the full key is preserved as the map key. Categories other than
    /// `header`, `querystring` and `path` are rejected, as are keys too short
    /// to carry a category segment.
    pub fn new(
        http_method: &str,
        whitelist_param_values: &HashMap<String, String>,
        data: Value,
    ) -> Result<Self, MockError> {
        let mut mock = Self {
            method: http_method.to_string(),
            data,
            headers: HashMap::new(),
            query_params: HashMap::new(),
            path_params: HashMap::new(),
            context: ApiGatewayContext::mock(http_method),
        };

        for (key, value) in whitelist_param_values {
            let category = key
                .split('.')
                .nth(2)
                .ok_or_else(|| MockError::UnsupportedParameterCategory(key.clone()))?;
            match category {
                "header" => mock.headers.insert(key.clone(), value.clone()),
                "querystring" => mock.query_params.insert(key.clone(), value.clone()),
                "path" => mock.path_params.insert(key.clone(), value.clone()),
                _ => return Err(MockError::UnsupportedParameterCategory(key.clone())),
            };
        }

        Ok(mock)
    }
}
