use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use crate::api::namecheap::DEFAULT_TIMEOUT;

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

fn default_auto_detect() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct Config {
    /// Minutes between update rounds, at most a year. Absent means a single
    /// round.
    #[validate(range(
        min = 1,
        max = 525600,
        message = "Update interval must be between 1 minute and one year"
    ))]
    #[serde(default)]
    pub update_interval: Option<u64>,

    #[validate(range(min = 1, message = "Timeout must be greater than 0"))]
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Overrides the provider endpoint, mostly useful for testing.
    #[serde(default)]
    pub endpoint: Option<String>,

    #[validate(length(min = 1, message = "At least one profile is required"), nested)]
    pub profiles: Vec<Profile>,
}

#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct Profile {
    #[validate(length(min = 1, message = "Profile name cannot be empty"))]
    pub name: String,

    /// Subdomain, or `@` for the bare domain.
    #[validate(length(min = 1, message = "Host cannot be empty"))]
    pub host: String,

    #[validate(length(min = 1, message = "Domain cannot be empty"))]
    pub domain: String,

    #[validate(length(min = 1, message = "Dynamic DNS password cannot be empty"))]
    pub dynamic_dns_password: String,

    #[serde(default = "default_auto_detect")]
    pub auto_detect_ip_address: bool,

    /// Only used when `auto_detect_ip_address` is false. Left empty, the
    /// provider records the address the request came from.
    #[serde(default)]
    pub ip_address: String,
}

// Keeps the password out of logs.
impl fmt::Debug for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Profile")
            .field("name", &self.name)
            .field("host", &self.host)
            .field("domain", &self.domain)
            .field("dynamic_dns_password", &"<REDACTED>")
            .field("auto_detect_ip_address", &self.auto_detect_ip_address)
            .field("ip_address", &self.ip_address)
            .finish()
    }
}
