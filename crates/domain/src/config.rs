//! Client configuration

use serde::{Deserialize, Serialize};

use crate::constants::{API_HOSTNAME, API_VERSION, DEFAULT_TIMEOUT_SECS};
use crate::errors::{ClevertapError, Result};
use crate::types::Region;

/// Account credentials and transport settings for one CleverTap project
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    pub account_id: String,
    #[serde(skip_serializing)]
    pub passcode: String,
    /// Data-center region. `None` falls back to [`Region::default`].
    #[serde(default)]
    pub region: Option<Region>,
    /// Overrides the region-derived base URL (proxies, test servers).
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl ClientConfig {
    /// Create a configuration for the given account with default settings.
    pub fn new(account_id: impl Into<String>, passcode: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            passcode: passcode.into(),
            region: None,
            base_url: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }

    pub fn with_region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Region in effect once defaults are applied.
    pub fn effective_region(&self) -> Region {
        self.region.unwrap_or_default()
    }

    /// API root all endpoints are resolved against, without a trailing slash.
    pub fn api_base_url(&self) -> String {
        match &self.base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("https://{}.{}/{}", self.effective_region(), API_HOSTNAME, API_VERSION),
        }
    }

    /// Check that the credentials required by every request are present.
    ///
    /// # Errors
    /// Returns `ClevertapError::Config` when the account id or passcode is
    /// blank, or the timeout is zero.
    pub fn validate(&self) -> Result<()> {
        if self.account_id.trim().is_empty() {
            return Err(ClevertapError::Config("Please provide a CleverTap Account Id".into()));
        }
        if self.passcode.trim().is_empty() {
            return Err(ClevertapError::Config(
                "Please provide a CleverTap Account Passcode".into(),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(ClevertapError::Config("timeout_secs must be greater than zero".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_derived_from_region() {
        let config = ClientConfig::new("W9R-486-4W5Z", "secret").with_region(Region::India);
        assert_eq!(config.api_base_url(), "https://in1.api.clevertap.com/1");
    }

    #[test]
    fn missing_region_defaults_to_europe() {
        let config = ClientConfig::new("W9R-486-4W5Z", "secret");
        assert_eq!(config.effective_region(), Region::Europe);
        assert_eq!(config.api_base_url(), "https://eu1.api.clevertap.com/1");
    }

    #[test]
    fn base_url_override_wins_and_is_trimmed() {
        let config =
            ClientConfig::new("W9R-486-4W5Z", "secret").with_base_url("http://127.0.0.1:9000/1/");
        assert_eq!(config.api_base_url(), "http://127.0.0.1:9000/1");
    }

    #[test]
    fn validate_rejects_blank_credentials() {
        assert!(matches!(
            ClientConfig::new("", "secret").validate(),
            Err(ClevertapError::Config(msg)) if msg.contains("Account Id")
        ));
        assert!(matches!(
            ClientConfig::new("W9R-486-4W5Z", "  ").validate(),
            Err(ClevertapError::Config(msg)) if msg.contains("Passcode")
        ));
        assert!(ClientConfig::new("W9R-486-4W5Z", "secret").validate().is_ok());
    }

    #[test]
    fn passcode_is_never_serialized() {
        let json = serde_json::to_value(ClientConfig::new("W9R-486-4W5Z", "secret")).unwrap();
        assert!(json.get("passcode").is_none());
        assert_eq!(json["account_id"], "W9R-486-4W5Z");
    }
}
