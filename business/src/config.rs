use std::env::vars;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use ustr::Ustr;

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("failed to read configuration from environment: {0}")]
    Env(String),

    #[error("API_BASE_URL must start with http:// or https://, got `{0}`")]
    InvalidBaseUrl(String),

    #[error("REQUEST_TIMEOUT_SECS must be greater than zero")]
    ZeroTimeout,
}

#[derive(Debug, Clone)]
pub struct BusinessConfig {
    pub api_base_url: String,
    /// Bearer token attached to every request when present.
    ///
    /// Obtaining it is the host application's concern.
    pub access_token: Option<String>,
    pub request_timeout: Duration,
}

// Raw environment view; every field optional so compile-time defaults apply.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    api_base_url: Option<String>,
    api_token: Option<String>,
    request_timeout_secs: Option<u64>,
}

impl BusinessConfig {
    pub fn new(base_url: String) -> Self {
        Self {
            api_base_url: base_url,
            ..Self::default()
        }
    }

    /// Compile-time defaults overridden by `API_BASE_URL`, `API_TOKEN` and
    /// `REQUEST_TIMEOUT_SECS` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw: RawConfig =
            serde_env::from_iter(vars()).map_err(|e| ConfigError::Env(e.to_string()))?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(url) = raw.api_base_url {
            let url = url.trim().trim_end_matches('/').to_owned();
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidBaseUrl(url));
            }
            log::info!("Using API_BASE_URL from environment: {url}");
            config.api_base_url = url;
        }

        config.access_token = raw.api_token.filter(|token| !token.trim().is_empty());

        if let Some(secs) = raw.request_timeout_secs {
            if secs == 0 {
                return Err(ConfigError::ZeroTimeout);
            }
            config.request_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn api_url(&self) -> Ustr {
        if self.api_base_url.is_empty() {
            Ustr::from("/api")
        } else {
            Ustr::from(format!("{}/api", self.api_base_url).as_str())
        }
    }

    /// Collection URL for a resource endpoint, e.g. `.../api/suppliers`.
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.api_url())
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            api_base_url: if cfg!(feature = "env_test") {
                "https://payables-test.lqxclqxc.com".to_owned()
            } else if cfg!(feature = "env_pr") {
                "https://payables-pr.lqxclqxc.com".to_owned()
            } else if cfg!(feature = "env_internal") {
                "https://payables-internal.lqxclqxc.com".to_owned()
            } else if cfg!(feature = "env_nightly") {
                "https://payables-nightly.lqxclqxc.com".to_owned()
            } else {
                "https://payables.lqxclqxc.com".to_owned()
            },
            access_token: None,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}
