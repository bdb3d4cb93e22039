//! Static site bucket configuration

use lambdakit_cloudformation::resource_name;

/// Caller-owned configuration for an S3-hosted static site.
///
/// The bucket name is assigned by
/// [`cloudfront_site_distribution_decorator`](crate::cloudfront_site_distribution_decorator)
/// at construction time; decorators otherwise treat the configuration as
/// read-only.
#[derive(Debug, Clone, Default)]
pub struct S3Site {
    /// Physical bucket name. Set from the subdomain/domain pair when a
    /// distribution decorator is constructed.
    pub bucket_name: Option<String>,

    /// Optional S3 website hosting configuration.
    pub website_configuration: Option<WebsiteConfiguration>,
}

/// S3 website hosting settings.
#[derive(Debug, Clone, Default)]
pub struct WebsiteConfiguration {
    /// Index document suffix served for directory requests.
    pub index_document: Option<String>,

    /// Error document key.
    pub error_document: Option<String>,
}

impl S3Site {
    /// Logical name of the site bucket resource within the synthesized
    /// template. Stable so other resources can `Fn::GetAtt` against it.
    #[must_use]
    pub fn logical_resource_name(&self) -> String {
        resource_name("S3Site", "S3Site")
    }

    /// Index document to serve at the site root: the configured suffix when
    /// present and non-empty, `index.html` otherwise.
    #[must_use]
    pub fn index_document(&self) -> &str {
        self.website_configuration
            .as_ref()
            .and_then(|config| config.index_document.as_deref())
            .filter(|suffix| !suffix.is_empty())
            .unwrap_or("index.html")
    }
}
