use url::Url;

use crate::domain::AppError;
use crate::ports::Environment;

pub const DEFAULT_API_URL: &str = "https://api.sanity.io/v2021-06-07";

/// Override for the API base URL.
pub const API_URL_ENV: &str = "SANITY_API_URL";

/// Sanity management API client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanityApiConfig {
    /// Versioned API base, e.g. `https://api.sanity.io/v2021-06-07`.
    pub api_url: Url,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for SanityApiConfig {
    fn default() -> Self {
        Self {
            api_url: Url::parse(DEFAULT_API_URL).expect("Default API URL must be valid"),
            timeout_secs: 30,
        }
    }
}

impl SanityApiConfig {
    /// Default configuration with the base URL taken from `SANITY_API_URL` when set.
    pub fn from_env(env: &(impl Environment + ?Sized)) -> Result<Self, AppError> {
        let mut config = Self::default();
        if let Some(raw) = env.var(API_URL_ENV) {
            config.api_url = Url::parse(&raw).map_err(|e| {
                AppError::config_error(format!("Invalid {} '{}': {}", API_URL_ENV, raw, e))
            })?;
        }
        Ok(config)
    }
}
