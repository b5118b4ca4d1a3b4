//! Configuration for the course-content client.
//!
//! Supports configuration via:
//! - Explicit values
//! - Environment variables
//! - Builder pattern

use crate::errors::{ConfigurationError, CourseContentResult};
use std::time::Duration;
use url::Url;

/// Configuration for the course-content client.
#[derive(Debug, Clone)]
pub struct CourseContentConfig {
    /// Base URL for API requests, e.g. `http://localhost:8080/api`.
    pub base_url: Url,
    /// Request timeout, applied to every call including uploads.
    pub timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for CourseContentConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(crate::DEFAULT_BASE_URL).expect("default base URL is valid"),
            timeout: Duration::from_secs(crate::DEFAULT_TIMEOUT_SECS),
            user_agent: format!("course-content-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl CourseContentConfig {
    /// Create a new configuration builder.
    pub fn builder() -> CourseContentConfigBuilder {
        CourseContentConfigBuilder::new()
    }

    /// Create configuration from environment variables.
    ///
    /// Reads:
    /// - `COURSE_CONTENT_BASE_URL` - API base URL
    /// - `COURSE_CONTENT_TIMEOUT_SECS` - request timeout in seconds
    pub fn from_env() -> CourseContentResult<Self> {
        let mut builder = CourseContentConfigBuilder::new();

        if let Ok(url) = std::env::var("COURSE_CONTENT_BASE_URL") {
            builder = builder.base_url(&url)?;
        }

        if let Ok(timeout) = std::env::var("COURSE_CONTENT_TIMEOUT_SECS") {
            if let Ok(secs) = timeout.parse::<u64>() {
                builder = builder.timeout(Duration::from_secs(secs));
            }
        }

        builder.build()
    }

    /// Build the full URL string for an endpoint.
    ///
    /// Joins with a plain string concatenation rather than [`Url::join`],
    /// which would replace the base URL's trailing path segment (`/api`).
    pub fn build_url(&self, endpoint: &str) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        let path = endpoint.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> CourseContentResult<()> {
        match self.base_url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(ConfigurationError::InvalidBaseUrl(format!(
                "unsupported scheme: {}",
                other
            ))
            .into()),
        }
    }
}

/// Builder for [`CourseContentConfig`].
#[derive(Debug, Default)]
pub struct CourseContentConfigBuilder {
    config: CourseContentConfig,
}

impl CourseContentConfigBuilder {
    /// Create a new builder with default values.
    pub fn new() -> Self {
        Self {
            config: CourseContentConfig::default(),
        }
    }

    /// Set the base URL.
    pub fn base_url(mut self, url: &str) -> Result<Self, ConfigurationError> {
        self.config.base_url =
            Url::parse(url).map_err(|e| ConfigurationError::InvalidBaseUrl(e.to_string()))?;
        Ok(self)
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Build the configuration.
    pub fn build(self) -> CourseContentResult<CourseContentConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CourseContentConfig::default();
        assert_eq!(config.base_url.as_str(), "http://localhost:8080/api");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_config_builder() {
        let config = CourseContentConfig::builder()
            .base_url("https://content.example.edu/api")
            .unwrap()
            .timeout(Duration::from_secs(60))
            .user_agent("course-tool/2.0")
            .build()
            .unwrap();

        assert_eq!(config.base_url.as_str(), "https://content.example.edu/api");
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.user_agent, "course-tool/2.0");
    }

    #[test]
    fn test_build_url_preserves_base_path() {
        let config = CourseContentConfig::default();

        assert_eq!(
            config.build_url("/files/upload"),
            "http://localhost:8080/api/files/upload"
        );
        assert_eq!(
            config.build_url("files/all"),
            "http://localhost:8080/api/files/all"
        );
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        assert!(CourseContentConfig::builder().base_url("not a url").is_err());

        let result = CourseContentConfig::builder()
            .base_url("ftp://localhost/api")
            .unwrap()
            .build();
        assert!(result.is_err());
    }
}
