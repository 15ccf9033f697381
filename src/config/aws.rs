//! AWS SDK configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Overrides for the AWS SDK default configuration chain
///
/// Both fields are optional; inside Lambda the region comes from the
/// execution environment. An endpoint override points both clients at an
/// emulator such as LocalStack.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AwsConfig {
    /// Region override
    pub region: Option<String>,

    /// Endpoint URL override
    pub endpoint_url: Option<String>,
}

impl AwsConfig {
    /// Check whether a custom endpoint is configured
    pub fn has_custom_endpoint(&self) -> bool {
        self.endpoint_url.is_some()
    }

    /// Validate AWS configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(region) = &self.region {
            if region.trim().is_empty() {
                return Err(ValidationError::BlankRegion);
            }
        }
        if let Some(url) = &self.endpoint_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ValidationError::InvalidEndpointUrl(url.clone()));
            }
        }
        Ok(())
    }
}
