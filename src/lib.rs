//! Course Content Client
//!
//! Typed client for a course-content REST backend, covering the two
//! operations the backend exposes to end users — uploading a file and
//! browsing the uploaded collection — plus the presentation helpers and
//! view-state machines that sit on top of them:
//!
//! - **Files service**: multipart upload, full-collection listing, metadata
//!   lookup, and raw downloads, with every failure normalized to a
//!   `{message, status}` shape.
//! - **Media helpers**: one shared MIME classification table driving
//!   validation, labels, icons, and badge styles, plus byte-count and
//!   timestamp formatting.
//! - **UI state machines**: the file list view, the upload dialog, and the
//!   screen composition that wires an upload success to a list refresh.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use course_content_client::services::files::UploadFileRequest;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = course_content_client::create_client_from_env()?;
//!
//! // Upload a file
//! let request = UploadFileRequest::new("lecture-notes.pdf", std::fs::read("notes.pdf")?);
//! let response = client.files().upload(request).await?;
//! println!("{}", response.message);
//!
//! // Browse the collection
//! for file in client.files().list().await? {
//!     println!("{} {} ({})", file.kind().icon(), file.file_name, file.formatted_size());
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
pub mod client;
pub mod config;
pub mod errors;
pub mod transport;
pub mod types;

// Services
pub mod services;

// Presentation helpers
pub mod media;

// View state machines
pub mod ui;

// Testing utilities
pub mod fixtures;
pub mod mocks;

// Tests
#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use client::{CourseContentClient, CourseContentClientBuilder};
pub use config::{CourseContentConfig, CourseContentConfigBuilder};
pub use errors::{CourseContentError, CourseContentResult};
pub use types::FileItem;

/// Default base URL for the course-content API.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Default request timeout in seconds, applied to every call including
/// uploads.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Create a client with the given configuration.
pub fn create_client(config: CourseContentConfig) -> CourseContentResult<CourseContentClient> {
    CourseContentClient::new(config)
}

/// Create a client from environment variables.
///
/// Reads:
/// - `COURSE_CONTENT_BASE_URL` - API base URL (defaults to
///   `http://localhost:8080/api`)
/// - `COURSE_CONTENT_TIMEOUT_SECS` - request timeout in seconds (defaults
///   to 30)
pub fn create_client_from_env() -> CourseContentResult<CourseContentClient> {
    let config = CourseContentConfig::from_env()?;
    create_client(config)
}
