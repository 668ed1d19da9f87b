//! REST API configuration.
//!
//! The browser bundle has no process environment, so overrides are baked in
//! at build time:
//! - `ADMIN_API_BASE_URL`: absolute `http(s)://` URL or a `/`-rooted path
//!   (default `/`, same origin)
//! - `ADMIN_API_TIMEOUT_MS`: request timeout in milliseconds (default 5000)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "/";
pub const DEFAULT_API_TIMEOUT_MS: u32 = 5000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid API base URL '{0}' (expected http(s):// URL or /-rooted path)")]
    InvalidBaseUrl(String),
    #[error("invalid API timeout '{0}' (expected positive milliseconds)")]
    InvalidTimeout(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without a trailing slash; empty means same-origin root.
    pub base_url: String,
    pub timeout_ms: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: String::new(), timeout_ms: DEFAULT_API_TIMEOUT_MS }
    }
}

impl ApiConfig {
    /// Build a validated config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the base URL is neither absolute nor
    /// `/`-rooted, or the timeout is zero.
    pub fn new(base_url: &str, timeout_ms: u32) -> Result<Self, ConfigError> {
        let trimmed = base_url.trim();
        let valid = trimmed.starts_with("http://") || trimmed.starts_with("https://") || trimmed.starts_with('/');
        if !valid {
            return Err(ConfigError::InvalidBaseUrl(base_url.to_owned()));
        }
        if timeout_ms == 0 {
            return Err(ConfigError::InvalidTimeout(timeout_ms.to_string()));
        }
        Ok(Self { base_url: trimmed.trim_end_matches('/').to_owned(), timeout_ms })
    }

    /// Config from the build-time environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when an override is present but invalid.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(option_env!("ADMIN_API_BASE_URL"), option_env!("ADMIN_API_TIMEOUT_MS"))
    }

    fn from_values(base_url: Option<&str>, timeout_ms: Option<&str>) -> Result<Self, ConfigError> {
        let timeout_ms = match timeout_ms {
            None => DEFAULT_API_TIMEOUT_MS,
            Some(raw) => raw.trim().parse::<u32>().map_err(|_| ConfigError::InvalidTimeout(raw.to_owned()))?,
        };
        Self::new(base_url.unwrap_or(DEFAULT_API_BASE_URL), timeout_ms)
    }

    /// Join `path` onto the base URL with exactly one `/` between them.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
