//! Course-content client implementation.
//!
//! Provides the main entry point for interacting with the backend.

use crate::config::{CourseContentConfig, CourseContentConfigBuilder};
use crate::errors::{ConfigurationError, CourseContentResult};
use crate::services::FilesService;
use crate::transport::{HttpTransport, ReqwestTransport};
use std::sync::Arc;

mod executor;
pub use executor::RequestExecutor;

/// Main client for the course-content API.
///
/// Cheap to clone; all clones share the same transport and configuration.
#[derive(Clone)]
pub struct CourseContentClient {
    config: Arc<CourseContentConfig>,
    executor: Arc<RequestExecutor>,
}

impl CourseContentClient {
    /// Create a new client with the given configuration.
    pub fn new(config: CourseContentConfig) -> CourseContentResult<Self> {
        config.validate()?;
        let config = Arc::new(config);
        let transport = Arc::new(ReqwestTransport::new(config.timeout)?);
        Ok(Self::from_parts(config, transport))
    }

    /// Create a client with a custom transport.
    ///
    /// Used to inject a mock transport in tests or to share a pre-built
    /// reqwest client.
    pub fn with_transport(
        config: CourseContentConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> CourseContentResult<Self> {
        config.validate()?;
        Ok(Self::from_parts(Arc::new(config), transport))
    }

    fn from_parts(config: Arc<CourseContentConfig>, transport: Arc<dyn HttpTransport>) -> Self {
        let executor = Arc::new(RequestExecutor::new(config.clone(), transport));
        Self { config, executor }
    }

    /// Create a new client builder.
    pub fn builder() -> CourseContentClientBuilder {
        CourseContentClientBuilder::new()
    }

    /// Access the files service for upload and browsing operations.
    pub fn files(&self) -> FilesService {
        FilesService::new(self.executor.clone())
    }

    /// Get the configuration.
    pub fn config(&self) -> &CourseContentConfig {
        &self.config
    }
}

impl std::fmt::Debug for CourseContentClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CourseContentClient")
            .field("base_url", &self.config.base_url.as_str())
            .field("timeout", &self.config.timeout)
            .finish()
    }
}

/// Builder for [`CourseContentClient`].
#[derive(Debug, Default)]
pub struct CourseContentClientBuilder {
    config_builder: CourseContentConfigBuilder,
}

impl CourseContentClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            config_builder: CourseContentConfig::builder(),
        }
    }

    /// Set the base URL.
    pub fn base_url(mut self, url: &str) -> Result<Self, ConfigurationError> {
        self.config_builder = self.config_builder.base_url(url)?;
        Ok(self)
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: std::time::Duration) -> Self {
        self.config_builder = self.config_builder.timeout(timeout);
        self
    }

    /// Set the user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.user_agent(user_agent);
        self
    }

    /// Build the client.
    pub fn build(self) -> CourseContentResult<CourseContentClient> {
        let config = self.config_builder.build()?;
        CourseContentClient::new(config)
    }
}
