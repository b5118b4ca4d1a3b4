//! Error types for the course-content client.
//!
//! Every failure a caller can observe flows through [`CourseContentError`].
//! Non-2xx API responses are normalized to the [`CourseContentError::Api`]
//! shape: a human-readable message (the response body's `message` field when
//! present, else the operation's default string) and the HTTP status code.

use thiserror::Error;

/// Result type for course-content operations.
pub type CourseContentResult<T> = Result<T, CourseContentError>;

/// Root error type for the course-content client.
#[derive(Error, Debug)]
pub enum CourseContentError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Client-side validation error, raised before any network call.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Network error.
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    /// Response parsing error.
    #[error("Response error: {0}")]
    Response(#[from] ResponseError),

    /// Normalized API error from a non-2xx response.
    ///
    /// Displays as the bare message so it can be surfaced to the user
    /// verbatim.
    #[error("{message}")]
    Api {
        /// Human-readable message, from the response body when present.
        message: String,
        /// HTTP status code of the response.
        status: u16,
    },
}

impl CourseContentError {
    /// HTTP status code associated with this error.
    ///
    /// API errors carry the response's status; validation and configuration
    /// errors map to 400; everything else (network failures, timeouts,
    /// malformed responses) defaults to 500.
    pub fn status(&self) -> u16 {
        match self {
            Self::Api { status, .. } => *status,
            Self::Validation(_) | Self::Configuration(_) => 400,
            _ => 500,
        }
    }

    /// True if this error was raised before any request was sent.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    /// Invalid base URL.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration {
        /// Error message.
        message: String,
    },
}

/// Client-side validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// The declared MIME type is not one of the supported values.
    #[error("Unsupported file type: {mime_type}")]
    UnsupportedFileType {
        /// The rejected MIME type.
        mime_type: String,
    },

    /// No file was provided.
    #[error("No file selected")]
    MissingFile,
}

/// Network errors.
#[derive(Error, Debug)]
pub enum NetworkError {
    /// The request exceeded the configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// Could not reach the backend.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Other transport-level HTTP failure.
    #[error("HTTP error: {0}")]
    Http(String),
}

/// Response parsing errors.
#[derive(Error, Debug)]
pub enum ResponseError {
    /// The response body could not be deserialized.
    #[error("Failed to deserialize response: {message}")]
    Deserialization {
        /// Error message from the deserializer.
        message: String,
    },
}

/// Transport-level errors, produced below the normalization layer.
#[derive(Error, Debug, Clone)]
pub enum TransportError {
    /// Timeout.
    #[error("Timeout: {0}")]
    Timeout(String),

    /// Network error.
    #[error("Network error: {0}")]
    Network(String),

    /// HTTP error.
    #[error("HTTP error: {0}")]
    Http(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout(err.to_string())
        } else if err.is_connect() {
            TransportError::Network(err.to_string())
        } else {
            TransportError::Http(err.to_string())
        }
    }
}

impl From<TransportError> for CourseContentError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Timeout(_) => CourseContentError::Network(NetworkError::Timeout),
            TransportError::Network(msg) => {
                CourseContentError::Network(NetworkError::ConnectionFailed(msg))
            }
            TransportError::Http(msg) => CourseContentError::Network(NetworkError::Http(msg)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_displays_bare_message() {
        let error = CourseContentError::Api {
            message: "File too large".to_string(),
            status: 413,
        };
        assert_eq!(error.to_string(), "File too large");
        assert_eq!(error.status(), 413);
    }

    #[test]
    fn test_status_defaults_to_500() {
        let error = CourseContentError::Network(NetworkError::Timeout);
        assert_eq!(error.status(), 500);

        let error = CourseContentError::Response(ResponseError::Deserialization {
            message: "unexpected end of input".to_string(),
        });
        assert_eq!(error.status(), 500);
    }

    #[test]
    fn test_validation_is_a_client_error() {
        let error = CourseContentError::Validation(ValidationError::UnsupportedFileType {
            mime_type: "text/plain".to_string(),
        });
        assert!(error.is_validation());
        assert_eq!(error.status(), 400);
    }

    #[test]
    fn test_transport_error_mapping() {
        let error: CourseContentError = TransportError::Timeout("deadline elapsed".to_string()).into();
        assert!(matches!(
            error,
            CourseContentError::Network(NetworkError::Timeout)
        ));
    }
}
