//! Template resource map

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("duplicate logical resource name: {0}")]
    DuplicateResource(String),

    #[error("failed to serialize resource properties: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Typed CloudFormation resource properties.
///
/// Implementors serialize to the `Properties` block of a resource node and
/// declare their `Type` identifier.
pub trait ResourceProperties: Serialize {
    /// CloudFormation type identifier, e.g. `AWS::CloudFront::Distribution`.
    const TYPE: &'static str;
}

/// A resource node within the template: `{"Type": ..., "Properties": ...}`.
#[derive(Debug, Clone, Serialize)]
pub struct ResourceNode {
    #[serde(rename = "Type")]
    pub resource_type: String,
    #[serde(rename = "Properties")]
    pub properties: Value,
}

/// A CloudFormation template under construction.
///
/// Decorator hooks mutate the resource map through [`Template::add_resource`];
/// the finished template serializes to deployable CloudFormation JSON.
#[derive(Debug, Clone, Serialize)]
pub struct Template {
    #[serde(rename = "AWSTemplateFormatVersion")]
    pub format_version: String,
    #[serde(rename = "Description", skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(rename = "Resources")]
    resources: BTreeMap<String, ResourceNode>,
}

impl Template {
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            format_version: "2010-09-09".to_string(),
            description: description.into(),
            resources: BTreeMap::new(),
        }
    }

    /// Add a resource under a logical name.
    ///
    /// Logical names must be unique within the template since generated
    /// resources cross-reference each other by name.
    pub fn add_resource<R: ResourceProperties>(
        &mut self,
        logical_name: &str,
        properties: &R,
    ) -> Result<(), TemplateError> {
        if self.resources.contains_key(logical_name) {
            return Err(TemplateError::DuplicateResource(logical_name.to_string()));
        }
        let node = ResourceNode {
            resource_type: R::TYPE.to_string(),
            properties: serde_json::to_value(properties)?,
        };
        debug!(logical_name, resource_type = R::TYPE, "adding resource");
        self.resources.insert(logical_name.to_string(), node);
        Ok(())
    }

    /// Look up a resource node by logical name.
    #[must_use]
    pub fn resource(&self, logical_name: &str) -> Option<&ResourceNode> {
        self.resources.get(logical_name)
    }

    /// Number of resources currently in the template.
    #[must_use]
    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::new("")
    }
}
