//! Symbolic intrinsic-function values
//!
//! Cross-resource references are emitted as unresolved JSON intrinsics.
//! Resolution happens in the deploying engine at stack-creation time, never
//! here; a `Fn::GetAtt` may legally point at a resource that is added to the
//! template after it.

use serde_json::{json, Value};

/// Reference to an attribute of another resource in the same template,
/// e.g. a CloudFront distribution's generated `DomainName`.
#[must_use]
pub fn get_att(logical_name: &str, attribute: &str) -> Value {
    json!({ "Fn::GetAtt": [logical_name, attribute] })
}

/// Reference to another resource's physical ID.
#[must_use]
pub fn reference(logical_name: &str) -> Value {
    json!({ "Ref": logical_name })
}
