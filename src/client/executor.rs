//! Request executor with URL building and error normalization.

use crate::config::CourseContentConfig;
use crate::errors::{
    ConfigurationError, CourseContentError, CourseContentResult, ResponseError,
};
use crate::transport::{HttpRequest, HttpResponse, HttpTransport, RequestBody};
use bytes::Bytes;
use http::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use http::Method;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// Executes HTTP requests against the API and applies the client's error
/// contract: every non-2xx response becomes
/// [`CourseContentError::Api`]`{ message, status }`, where `message` comes
/// from the response body's `message` field when present and falls back to
/// the operation's default string.
///
/// Calls are single-shot; no retries are attempted.
pub struct RequestExecutor {
    config: Arc<CourseContentConfig>,
    transport: Arc<dyn HttpTransport>,
}

impl RequestExecutor {
    /// Create a new request executor.
    pub(crate) fn new(config: Arc<CourseContentConfig>, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    /// Execute a request against an API endpoint and deserialize the JSON
    /// response.
    pub async fn execute_json<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<RequestBody>,
        default_message: &str,
    ) -> CourseContentResult<T> {
        let url = self.endpoint_url(endpoint)?;
        let response = self.dispatch(method, url, body, default_message).await?;

        serde_json::from_slice(&response.body).map_err(|e| {
            ResponseError::Deserialization {
                message: e.to_string(),
            }
            .into()
        })
    }

    /// Execute a request against an already-resolved URL and return the raw
    /// response bytes.
    pub async fn execute_raw(
        &self,
        method: Method,
        url: Url,
        default_message: &str,
    ) -> CourseContentResult<Bytes> {
        let response = self.dispatch(method, url, None, default_message).await?;
        Ok(response.body)
    }

    /// Build the full URL for an API endpoint.
    pub fn endpoint_url(&self, endpoint: &str) -> CourseContentResult<Url> {
        let joined = self.config.build_url(endpoint);
        Url::parse(&joined)
            .map_err(|e| ConfigurationError::InvalidBaseUrl(format!("{}: {}", joined, e)).into())
    }

    /// Resolve a possibly-relative resource locator against the base URL.
    ///
    /// Absolute URLs (as returned in `FileItem::file_url`) are used as-is.
    pub fn resolve_url(&self, raw: &str) -> CourseContentResult<Url> {
        match Url::parse(raw) {
            Ok(url) => Ok(url),
            Err(_) => self.endpoint_url(raw),
        }
    }

    async fn dispatch(
        &self,
        method: Method,
        url: Url,
        body: Option<RequestBody>,
        default_message: &str,
    ) -> CourseContentResult<HttpResponse> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&self.config.user_agent).map_err(|e| {
                ConfigurationError::InvalidConfiguration {
                    message: format!("invalid user agent: {}", e),
                }
            })?,
        );

        let request = HttpRequest {
            method,
            url,
            headers,
            body,
            timeout: Some(self.config.timeout),
        };

        let response = self.transport.send(request).await?;

        if !response.status.is_success() {
            return Err(normalize_api_error(&response, default_message));
        }

        Ok(response)
    }
}

impl std::fmt::Debug for RequestExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestExecutor")
            .field("base_url", &self.config.base_url.as_str())
            .finish()
    }
}

/// Map a non-2xx response to the normalized error shape.
fn normalize_api_error(response: &HttpResponse, default_message: &str) -> CourseContentError {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: Option<String>,
    }

    let message = serde_json::from_slice::<ErrorBody>(&response.body)
        .ok()
        .and_then(|body| body.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| default_message.to_string());

    debug!(status = %response.status, %message, "API request failed");

    CourseContentError::Api {
        message,
        status: response.status.as_u16(),
    }
}
