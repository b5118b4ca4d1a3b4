//! HTTP transport layer for the course-content client.
//!
//! Provides low-level HTTP communication with the backend. The trait is
//! object-safe so the client and services can hold an `Arc<dyn HttpTransport>`
//! and swap in a mock for tests; JSON handling and error normalization live
//! one layer up, in the request executor.

use crate::errors::TransportError;
use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode};
use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use tracing::{debug, instrument, warn};
use url::Url;

/// HTTP transport trait for making API requests.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send an HTTP request and receive the buffered response.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// HTTP request representation.
#[derive(Debug)]
pub struct HttpRequest {
    /// HTTP method.
    pub method: Method,
    /// Request URL.
    pub url: Url,
    /// Request headers.
    pub headers: HeaderMap,
    /// Request body.
    pub body: Option<RequestBody>,
    /// Request timeout.
    pub timeout: Option<Duration>,
}

impl HttpRequest {
    /// Create a new GET request.
    pub fn get(url: Url, headers: HeaderMap) -> Self {
        Self {
            method: Method::GET,
            url,
            headers,
            body: None,
            timeout: None,
        }
    }

    /// Create a new POST request.
    pub fn post(url: Url, headers: HeaderMap, body: RequestBody) -> Self {
        Self {
            method: Method::POST,
            url,
            headers,
            body: Some(body),
            timeout: None,
        }
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Request body variants.
#[derive(Debug)]
pub enum RequestBody {
    /// Multipart form body (file uploads).
    Multipart(MultipartForm),
}

/// Multipart form for file uploads.
#[derive(Debug, Default)]
pub struct MultipartForm {
    /// Text fields.
    pub fields: Vec<(String, String)>,
    /// Files to upload.
    pub files: Vec<FileUpload>,
}

impl MultipartForm {
    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a text field.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Add a file.
    pub fn file(mut self, upload: FileUpload) -> Self {
        self.files.push(upload);
        self
    }
}

/// File upload data.
#[derive(Debug, Clone)]
pub struct FileUpload {
    /// Form field name.
    pub field_name: String,
    /// File name.
    pub file_name: String,
    /// File content.
    pub content: Bytes,
    /// MIME type.
    pub mime_type: String,
}

impl FileUpload {
    /// Create a new file upload, guessing the MIME type from the file name.
    pub fn new(
        field_name: impl Into<String>,
        file_name: impl Into<String>,
        content: impl Into<Bytes>,
    ) -> Self {
        let file_name = file_name.into();
        let mime_type = mime_guess::from_path(&file_name)
            .first_or_octet_stream()
            .to_string();

        Self {
            field_name: field_name.into(),
            file_name,
            content: content.into(),
            mime_type,
        }
    }

    /// Override the MIME type.
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = mime_type.into();
        self
    }
}

/// Buffered HTTP response.
#[derive(Debug)]
pub struct HttpResponse {
    /// Response status code.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Response body.
    pub body: Bytes,
}

impl HttpResponse {
    /// Create a new HTTP response.
    pub fn new(status: StatusCode, headers: HeaderMap, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }
}

/// Default HTTP transport implementation using reqwest.
pub struct ReqwestTransport {
    client: Client,
    default_timeout: Duration,
}

impl ReqwestTransport {
    /// Create a new transport with the given default timeout.
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = ClientBuilder::new()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()
            .map_err(|e| TransportError::Http(e.to_string()))?;

        Ok(Self {
            client,
            default_timeout: timeout,
        })
    }

    /// Create a new transport with a pre-built client.
    pub fn with_client(client: Client, default_timeout: Duration) -> Self {
        Self {
            client,
            default_timeout,
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    #[instrument(skip(self, request), fields(method = %request.method, url = %request.url))]
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let timeout = request.timeout.unwrap_or(self.default_timeout);

        let mut req_builder = self
            .client
            .request(request.method, request.url)
            .headers(request.headers)
            .timeout(timeout);

        if let Some(body) = request.body {
            match body {
                RequestBody::Multipart(multipart) => {
                    let mut form = reqwest::multipart::Form::new();

                    for (name, value) in multipart.fields {
                        form = form.text(name, value);
                    }

                    for file in multipart.files {
                        let part = reqwest::multipart::Part::bytes(file.content.to_vec())
                            .file_name(file.file_name)
                            .mime_str(&file.mime_type)
                            .map_err(|e| TransportError::Http(e.to_string()))?;
                        form = form.part(file.field_name, part);
                    }

                    req_builder = req_builder.multipart(form);
                }
            }
        }

        let response = req_builder.send().await.map_err(TransportError::from)?;

        let status = response.status();
        let headers = response.headers().clone();
        if !status.is_success() {
            warn!(status = %status, "request failed with non-success status");
        }

        let body = response.bytes().await.map_err(TransportError::from)?;
        debug!(status = %status, body_len = body.len(), "received response");

        Ok(HttpResponse::new(status, headers, body))
    }
}

impl std::fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestTransport")
            .field("default_timeout", &self.default_timeout)
            .finish()
    }
}
