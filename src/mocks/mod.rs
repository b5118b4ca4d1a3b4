//! Mock implementations for testing.
//!
//! Provides a queued-response mock transport that records every request it
//! receives, for verifying service behavior without a live backend.

use crate::errors::TransportError;
use crate::transport::{HttpRequest, HttpResponse, HttpTransport, RequestBody};
use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use parking_lot::Mutex;
use serde::Serialize;
use std::collections::VecDeque;
use std::sync::Arc;

/// Mock response configuration.
#[derive(Debug, Clone)]
pub struct MockResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body.
    pub body: String,
    /// Transport error to return instead of a response.
    pub error: Option<TransportError>,
    /// Delay before responding, in milliseconds.
    pub delay_ms: Option<u64>,
}

impl MockResponse {
    /// A 200 response with a JSON-serialized body.
    pub fn json<T: Serialize>(data: &T) -> Self {
        Self {
            status: 200,
            body: serde_json::to_string(data).expect("fixture serializes"),
            error: None,
            delay_ms: None,
        }
    }

    /// A 200 response with a raw body.
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
            error: None,
            delay_ms: None,
        }
    }

    /// A response with an explicit status and raw body.
    pub fn with_status(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            error: None,
            delay_ms: None,
        }
    }

    /// A transport-level failure.
    pub fn error(error: TransportError) -> Self {
        Self {
            status: 0,
            body: String::new(),
            error: Some(error),
            delay_ms: None,
        }
    }

    /// Add a delay before the response is produced.
    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay_ms = Some(ms);
        self
    }
}

/// Summary of a recorded multipart body.
#[derive(Debug, Clone)]
pub struct MultipartSummary {
    /// Text fields.
    pub fields: Vec<(String, String)>,
    /// Files: `(field_name, file_name, mime_type)`.
    pub files: Vec<(String, String, String)>,
}

/// Recorded request for verification.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Request method.
    pub method: String,
    /// Request URL.
    pub url: String,
    /// Multipart body summary, if the request carried one.
    pub multipart: Option<MultipartSummary>,
}

/// Mock HTTP transport for testing.
pub struct MockHttpTransport {
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    default_response: Option<MockResponse>,
}

impl MockHttpTransport {
    /// Create a new mock transport with an empty queue.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            default_response: None,
        }
    }

    /// Queue a response.
    pub fn add_response(self, response: MockResponse) -> Self {
        self.responses.lock().push_back(response);
        self
    }

    /// Queue a 200 JSON response.
    pub fn add_json_response<T: Serialize>(self, data: &T) -> Self {
        self.add_response(MockResponse::json(data))
    }

    /// Set the response returned when the queue is empty.
    pub fn with_default_response(mut self, response: MockResponse) -> Self {
        self.default_response = Some(response);
        self
    }

    /// All recorded requests, in order.
    pub fn recorded_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }

    /// The most recent recorded request.
    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests.lock().last().cloned()
    }

    /// Number of requests received so far.
    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }

    fn record(&self, request: &HttpRequest) {
        let multipart = request.body.as_ref().map(|body| match body {
            RequestBody::Multipart(form) => MultipartSummary {
                fields: form.fields.clone(),
                files: form
                    .files
                    .iter()
                    .map(|f| {
                        (
                            f.field_name.clone(),
                            f.file_name.clone(),
                            f.mime_type.clone(),
                        )
                    })
                    .collect(),
            },
        });

        self.requests.lock().push(RecordedRequest {
            method: request.method.to_string(),
            url: request.url.to_string(),
            multipart,
        });
    }

    fn next_response(&self) -> Option<MockResponse> {
        let mut queue = self.responses.lock();
        queue.pop_front().or_else(|| self.default_response.clone())
    }
}

impl Default for MockHttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for MockHttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.record(&request);

        let response = self
            .next_response()
            .ok_or_else(|| TransportError::Http("no mock response configured".to_string()))?;

        if let Some(delay) = response.delay_ms {
            tokio::time::sleep(std::time::Duration::from_millis(delay)).await;
        }

        if let Some(error) = response.error {
            return Err(error);
        }

        let status = StatusCode::from_u16(response.status)
            .map_err(|e| TransportError::Http(format!("invalid mock status: {}", e)))?;

        Ok(HttpResponse::new(
            status,
            HeaderMap::new(),
            Bytes::from(response.body),
        ))
    }
}

impl std::fmt::Debug for MockHttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockHttpTransport")
            .field("pending_responses", &self.responses.lock().len())
            .field("recorded_requests", &self.requests.lock().len())
            .finish()
    }
}
