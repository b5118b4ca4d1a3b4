//! Files service for the course-content API.
//!
//! Provides upload, listing, metadata lookup, and download operations.

mod requests;
mod responses;
mod service;

pub use requests::UploadFileRequest;
pub use responses::UploadResponse;
pub use service::FilesService;
