//! Distribution decorator hook

use std::collections::HashMap;

use serde_json::Value;
use tracing::debug;

use lambdakit_cloudformation::resources::{
    CloudFrontDefaultCacheBehavior, CloudFrontDistribution, CloudFrontDistributionConfig,
    CloudFrontForwardedValues, CloudFrontOrigin, CloudFrontS3OriginConfig, Route53AliasTarget,
    Route53RecordSet,
};
use lambdakit_cloudformation::{get_att, resource_name, Template, TemplateError};

use crate::site::S3Site;

/// Hosted zone ID shared by every CloudFront distribution. Alias records
/// targeting a distribution must use this exact value.
pub const CLOUDFRONT_HOSTED_ZONE_ID: &str = "Z2FDTNDATAQYW2";

/// Parameters the host synthesis pipeline passes to a decorator hook.
#[derive(Debug)]
pub struct HookContext<'a> {
    /// Opaque workflow context shared across hooks.
    pub context: &'a HashMap<String, Value>,
    /// Name of the service being synthesized.
    pub service_name: &'a str,
    /// Physical ID of the deployment artifact bucket.
    pub s3_bucket: &'a str,
    /// Build identifier for this synthesis run.
    pub build_id: &'a str,
    /// True when the pipeline is doing a dry run.
    pub noop: bool,
}

/// A template mutator invoked once per synthesis pass, after the service's
/// own resources have been defined.
pub trait ServiceDecoratorHook {
    fn decorate(
        &self,
        ctx: &HookContext<'_>,
        template: &mut Template,
    ) -> Result<(), TemplateError>;
}

impl<F> ServiceDecoratorHook for F
where
    F: Fn(&HookContext<'_>, &mut Template) -> Result<(), TemplateError>,
{
    fn decorate(
        &self,
        ctx: &HookContext<'_>,
        template: &mut Template,
    ) -> Result<(), TemplateError> {
        self(ctx, template)
    }
}

/// Returns a decorator hook that provisions a CloudFront distribution whose
/// origin is the supplied static-site bucket, plus a Route53 alias record
/// for it in the `domain_name` hosted zone.
///
/// The site's bucket name is assigned immediately: `subdomain.domain_name`,
/// or `domain_name` alone when `subdomain` is empty. The hosted zone for
/// `domain_name` must already exist.
pub fn cloudfront_site_distribution_decorator(
    site: &mut S3Site,
    subdomain: &str,
    domain_name: &str,
) -> DistributionDecorator {
    let bucket_name = if subdomain.is_empty() {
        domain_name.to_string()
    } else {
        format!("{subdomain}.{domain_name}")
    };
    site.bucket_name = Some(bucket_name.clone());

    DistributionDecorator {
        bucket_name,
        domain_name: domain_name.to_string(),
        index_document: site.index_document().to_string(),
        site_resource_name: site.logical_resource_name(),
    }
}

/// Hook returned by [`cloudfront_site_distribution_decorator`]. Captures the
/// site configuration it needs at construction time; the site itself is not
/// touched again.
#[derive(Debug, Clone)]
pub struct DistributionDecorator {
    bucket_name: String,
    domain_name: String,
    index_document: String,
    site_resource_name: String,
}

impl ServiceDecoratorHook for DistributionDecorator {
    fn decorate(
        &self,
        ctx: &HookContext<'_>,
        template: &mut Template,
    ) -> Result<(), TemplateError> {
        let dns_record_resource_name = resource_name("DNSRecord", "DNSRecord");
        let distro_resource_name = resource_name("CloudFrontDistro", "CloudFrontDistro");

        // The record lives in the zone for the bare domain.
        let hosted_zone_name = format!("{}.", self.domain_name);
        let dns_record = Route53RecordSet {
            hosted_zone_name,
            name: self.bucket_name.clone(),
            record_type: "A".to_string(),
            alias_target: Some(Route53AliasTarget {
                hosted_zone_id: CLOUDFRONT_HOSTED_ZONE_ID.to_string(),
                dns_name: get_att(&distro_resource_name, "DomainName"),
            }),
        };
        template.add_resource(&dns_record_resource_name, &dns_record)?;

        let distro = CloudFrontDistribution {
            distribution_config: CloudFrontDistributionConfig {
                aliases: vec![self.bucket_name.clone()],
                default_root_object: self.index_document.clone(),
                origins: vec![CloudFrontOrigin {
                    domain_name: get_att(&self.site_resource_name, "DomainName"),
                    id: "S3Origin".to_string(),
                    s3_origin_config: CloudFrontS3OriginConfig::default(),
                }],
                enabled: true,
                default_cache_behavior: CloudFrontDefaultCacheBehavior {
                    forwarded_values: CloudFrontForwardedValues {
                        query_string: false,
                    },
                    target_origin_id: "S3Origin".to_string(),
                    viewer_protocol_policy: "allow-all".to_string(),
                },
            },
        };
        template.add_resource(&distro_resource_name, &distro)?;

        debug!(
            service_name = ctx.service_name,
            build_id = ctx.build_id,
            noop = ctx.noop,
            bucket = %self.bucket_name,
            "added CloudFront distribution and DNS alias"
        );
        Ok(())
    }
}
