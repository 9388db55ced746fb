use aws_config::{BehaviorVersion, SdkConfig};
use aws_sdk_dynamodb::config::Region;
use std::env;

/// Overrides the store endpoint when set to a non-empty value.
pub const ENDPOINT_ENV_VAR: &str = "LOCALSTACK_ENDPOINT_URL";
pub const DEFAULT_ENDPOINT_URL: &str = "http://localhost:4566";
pub const REGION: &str = "us-east-1";
pub const TABLE_NAME: &str = "core-routes-encryption-local";

/// Where seeded records go. Built once at startup and handed to whatever
/// needs a client; region and table name are fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeederConfig {
    endpoint_url: String,
    region: &'static str,
    table_name: &'static str,
}

impl SeederConfig {
    pub fn from_env() -> Self {
        Self::with_endpoint(env::var(ENDPOINT_ENV_VAR).ok())
    }

    pub fn with_endpoint(endpoint_url: Option<String>) -> Self {
        let endpoint_url = endpoint_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT_URL.to_string());

        Self {
            endpoint_url,
            region: REGION,
            table_name: TABLE_NAME,
        }
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    pub fn region(&self) -> &str {
        self.region
    }

    pub fn table_name(&self) -> &str {
        self.table_name
    }

    /// Loads the shared AWS config pointed at the configured endpoint.
    /// Credentials still come from the default provider chain.
    pub async fn load_sdk_config(&self) -> SdkConfig {
        aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(self.region))
            .endpoint_url(&self.endpoint_url)
            .load()
            .await
    }
}

impl Default for SeederConfig {
    fn default() -> Self {
        Self::with_endpoint(None)
    }
}
