//! Local invocation mocking for lambdakit
//!
//! Simulates the proxying tier between an API Gateway and a Lambda handler
//! by building the `{context, event}` JSON envelope and POSTing it to a
//! handler listening on localhost. Intended for integration tests that run
//! without deploying to AWS.
//!
//! Three entry points, in ascending convenience:
//! - [`post_raw_request`] — caller supplies the full invocation context
//! - [`post_lambda_request`] — synthesizes a time-seeded Lambda context
//! - [`post_api_gateway_request`] — additionally wraps the event in an API
//!   Gateway request mock built from whitelisted parameters

pub mod context;
pub mod gateway;
pub mod request;

pub use context::MockLambdaContext;
pub use gateway::{ApiGatewayContext, ApiGatewayIdentity, ApiGatewayRequestMock};
pub use request::{post_api_gateway_request, post_lambda_request, post_raw_request, MockError};

/// Request ID carried by every synthetic invocation context.
pub const MOCK_REQUEST_ID: &str = "12341234-1234-1234-1234-123412341234";
