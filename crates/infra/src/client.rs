//! Client bootstrap
//!
//! Wires the HTTP dispatcher into a ready [`CleverTapService`].

use std::sync::Arc;

use clevertap_core::CleverTapService;
use clevertap_domain::{ClevertapError, ClientConfig, Region, Result};
use tracing::info;

use crate::api::HttpRequestDispatcher;

/// Build a service from a complete configuration.
///
/// # Errors
/// Returns `ClevertapError::Config` if credentials are missing or the base URL
/// is invalid.
pub fn connect(config: &ClientConfig) -> Result<CleverTapService> {
    if config.region.is_none() && config.base_url.is_none() {
        info!(region = %Region::default(), "no region specified, using default region");
    }

    let dispatcher = HttpRequestDispatcher::new(config)?;
    info!(account_id = %config.account_id, base_url = dispatcher.base_url(), "CleverTap client ready");

    Ok(CleverTapService::new(Arc::new(dispatcher)))
}

/// Build a service from an account id, passcode and optional region token.
///
/// # Errors
/// Returns `ClevertapError::Config` for blank credentials or an unknown region.
pub fn init(account_id: &str, passcode: &str, region: Option<&str>) -> Result<CleverTapService> {
    let mut config = ClientConfig::new(account_id, passcode);

    if let Some(region) = region {
        let region = region.parse::<Region>().map_err(|_| {
            ClevertapError::Config(format!(
                "Invalid region '{region}', expected one of: {}",
                Region::ALL.map(|r| r.as_str()).join(", ")
            ))
        })?;
        config.region = Some(region);
    }

    connect(&config)
}
