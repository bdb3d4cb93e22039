//! CloudFront distribution decorator for lambdakit
//!
//! Places a CloudFront distribution and a Route53 alias record in front of
//! an S3-hosted static site by mutating the service's CloudFormation
//! template at synthesis time.

pub mod decorator;
pub mod site;

pub use decorator::{
    cloudfront_site_distribution_decorator, DistributionDecorator, HookContext,
    ServiceDecoratorHook, CLOUDFRONT_HOSTED_ZONE_ID,
};
pub use site::{S3Site, WebsiteConfiguration};
