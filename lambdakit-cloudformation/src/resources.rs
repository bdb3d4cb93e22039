//! Typed resource properties
//!
//! Only the resource types the decorators emit are modelled. Field names
//! serialize to the exact CloudFormation property names; fields that may
//! hold an unresolved intrinsic are typed as `serde_json::Value`.

use serde::Serialize;
use serde_json::Value;

use crate::template::ResourceProperties;

/// `AWS::Route53::RecordSet` properties.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Route53RecordSet {
    pub hosted_zone_name: String,
    pub name: String,
    #[serde(rename = "Type")]
    pub record_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias_target: Option<Route53AliasTarget>,
}

impl ResourceProperties for Route53RecordSet {
    const TYPE: &'static str = "AWS::Route53::RecordSet";
}

/// Alias target of a Route53 record set. `DNSName` typically points at
/// another resource's generated domain name via `Fn::GetAtt`.
#[derive(Debug, Clone, Serialize)]
pub struct Route53AliasTarget {
    #[serde(rename = "HostedZoneId")]
    pub hosted_zone_id: String,
    #[serde(rename = "DNSName")]
    pub dns_name: Value,
}

/// `AWS::CloudFront::Distribution` properties.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CloudFrontDistribution {
    pub distribution_config: CloudFrontDistributionConfig,
}

impl ResourceProperties for CloudFrontDistribution {
    const TYPE: &'static str = "AWS::CloudFront::Distribution";
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CloudFrontDistributionConfig {
    pub aliases: Vec<String>,
    pub default_root_object: String,
    pub origins: Vec<CloudFrontOrigin>,
    pub enabled: bool,
    pub default_cache_behavior: CloudFrontDefaultCacheBehavior,
}

/// A distribution origin. `DomainName` is usually a `Fn::GetAtt` reference
/// to the origin bucket's generated domain name.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CloudFrontOrigin {
    pub domain_name: Value,
    pub id: String,
    #[serde(rename = "S3OriginConfig")]
    pub s3_origin_config: CloudFrontS3OriginConfig,
}

/// S3 origin marker. Serializes to `{}` when no origin access identity is
/// configured.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CloudFrontS3OriginConfig {
    #[serde(
        rename = "OriginAccessIdentity",
        skip_serializing_if = "Option::is_none"
    )]
    pub origin_access_identity: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CloudFrontDefaultCacheBehavior {
    pub forwarded_values: CloudFrontForwardedValues,
    pub target_origin_id: String,
    pub viewer_protocol_policy: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CloudFrontForwardedValues {
    pub query_string: bool,
}
