//! Application configuration
//!
//! Built once at startup and handed to views through context.

use thiserror::Error;

/// Default API server
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Rows per list page
pub const DEFAULT_PAGE_SIZE: usize = 4;

/// How long a success notice stays up before navigating away
pub const DEFAULT_SUCCESS_REDIRECT_DELAY_MS: u32 = 4000;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    api_base_url: String,
    page_size: usize,
    success_redirect_delay_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            success_redirect_delay_ms: DEFAULT_SUCCESS_REDIRECT_DELAY_MS,
        }
    }
}

impl AppConfig {
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Configuration baked in at compile time. WASM has no process
    /// environment, so `TODO_API_URL` is read by the compiler.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut builder = Self::builder();
        if let Some(url) = option_env!("TODO_API_URL") {
            builder = builder.api_base_url(url);
        }
        builder.build()
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Full URL for an API path such as `/api/todos`
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn success_redirect_delay_ms(&self) -> u32 {
        self.success_redirect_delay_ms
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    api_base_url: Option<String>,
    page_size: Option<usize>,
    success_redirect_delay_ms: Option<u32>,
}

impl AppConfigBuilder {
    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = Some(url.into());
        self
    }

    pub fn page_size(mut self, size: usize) -> Self {
        self.page_size = Some(size);
        self
    }

    pub fn success_redirect_delay_ms(mut self, ms: u32) -> Self {
        self.success_redirect_delay_ms = Some(ms);
        self
    }

    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let url = self
            .api_base_url
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let url = url.trim_end_matches('/').to_string();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidUrl(url));
        }

        let page_size = self.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        if page_size == 0 {
            return Err(ConfigError::InvalidValue("page_size must be at least 1"));
        }

        Ok(AppConfig {
            api_base_url: url,
            page_size,
            success_redirect_delay_ms: self
                .success_redirect_delay_ms
                .unwrap_or(DEFAULT_SUCCESS_REDIRECT_DELAY_MS),
        })
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("invalid value: {0}")]
    InvalidValue(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url(), "http://localhost:8080");
        assert_eq!(config.page_size(), 4);
        assert_eq!(config.success_redirect_delay_ms(), 4000);
    }

    #[test]
    fn test_api_url_strips_trailing_slash() {
        let config = AppConfig::builder()
            .api_base_url("https://api.example.com/")
            .build()
            .unwrap();
        assert_eq!(config.api_url("/api/todos"), "https://api.example.com/api/todos");
    }

    #[test]
    fn test_rejects_bad_values() {
        assert_eq!(
            AppConfig::builder().api_base_url("ftp://x").build(),
            Err(ConfigError::InvalidUrl("ftp://x".into()))
        );
        assert!(AppConfig::builder().page_size(0).build().is_err());
    }
}
