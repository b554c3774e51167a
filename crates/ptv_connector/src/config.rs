//! Client configuration and credentials

use serde::{Deserialize, Serialize};

/// Configuration for the PTV Timetable API client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PtvConfig {
    /// Base URL of the timetable API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Advisory request timeout in seconds, for hosts that build the
    /// shared HTTP client themselves
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://timetableapi.ptv.vic.gov.au".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for PtvConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl PtvConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            timeout_secs: 5,
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.base_url.ends_with('/') {
            return Err("base_url must not end with a slash".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}

/// Developer credentials for the timetable API. The key is only ever used
/// as a signing input and is never sent on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// Registered developer id, sent as the `devid` query parameter
    pub dev_id: String,
    /// Secret signing key
    pub api_key: String,
}

impl Credentials {
    /// Create new credentials
    #[must_use]
    pub fn new(dev_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            dev_id: dev_id.into(),
            api_key: api_key.into(),
        }
    }
}
