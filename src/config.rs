use crate::error::{Error, Result};
use crate::retry::RetryPolicy;
use std::env;
use std::time::Duration;

const SERVICE: &str = "operationsinsights";
const REALM_DOMAIN: &str = "oraclecloud.com";

pub const ENDPOINT_ENV: &str = "OPSI_ENDPOINT";
pub const REGION_ENV: &str = "OPSI_REGION";

/// Returns the service endpoint for a region, e.g.
/// `https://operationsinsights.us-ashburn-1.oci.oraclecloud.com`.
pub fn endpoint_for_region(region: &str) -> String {
    format!("https://{}.{}.oci.{}", SERVICE, region, REALM_DOMAIN)
}

/// Client-wide configuration.
///
/// The configuration is fixed once a client is built. Derived fields are
/// recomputed by the setters, never implicitly.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    endpoint: String,
    region: Option<String>,
    retry_policy: Option<RetryPolicy>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ClientConfig {
    /// Configuration for an explicit endpoint.
    pub fn new<S: ToString>(endpoint: S) -> Self {
        Self {
            endpoint: endpoint.to_string().trim_end_matches('/').to_string(),
            region: None,
            retry_policy: None,
            timeout: None,
            user_agent: None,
        }
    }

    /// Configuration for the public endpoint of a region.
    pub fn for_region<S: ToString>(region: S) -> Self {
        let mut config = Self::new("");
        config.set_region(region);
        config
    }

    /// Reads `OPSI_ENDPOINT`, falling back to `OPSI_REGION`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Result<Self> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        match (non_empty(ENDPOINT_ENV), non_empty(REGION_ENV)) {
            (Some(endpoint), region) => {
                let mut config = Self::new(endpoint);
                config.region = region;
                Ok(config)
            }
            (None, Some(region)) => Ok(Self::for_region(region)),
            (None, None) => Err(Error::Config(format!(
                "neither {} nor {} is set",
                ENDPOINT_ENV, REGION_ENV
            ))),
        }
    }

    /// Point the configuration at a region. The endpoint is recomputed.
    pub fn set_region<S: ToString>(&mut self, region: S) {
        let region = region.to_string();
        self.endpoint = endpoint_for_region(&region);
        self.region = Some(region);
    }

    /// Use an explicit endpoint. The region, if any, is kept for reference only.
    pub fn set_endpoint<S: ToString>(&mut self, endpoint: S) {
        self.endpoint = endpoint.to_string().trim_end_matches('/').to_string();
    }

    /// The policy used by calls that do not override it. `None` means calls
    /// are attempted once.
    pub fn set_retry_policy(&mut self, policy: Option<RetryPolicy>) {
        self.retry_policy = policy;
    }

    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = Some(policy);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn retry_policy(&self) -> Option<&RetryPolicy> {
        self.retry_policy.as_ref()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }
}
