//! Files service implementation.

use crate::client::RequestExecutor;
use crate::errors::{CourseContentResult, ValidationError};
use crate::media;
use crate::services::files::{UploadFileRequest, UploadResponse};
use crate::transport::{FileUpload, MultipartForm, RequestBody};
use crate::types::FileItem;
use bytes::Bytes;
use http::Method;
use std::sync::Arc;
use tracing::instrument;

/// Multipart form field the backend reads the file from.
const FILE_FIELD: &str = "file";

/// Service for file upload and browsing operations.
///
/// Every call is single-shot; failed calls surface the normalized
/// `{message, status}` error and are retried only by explicit user action.
pub struct FilesService {
    executor: Arc<RequestExecutor>,
}

impl FilesService {
    /// Create a new files service.
    pub(crate) fn new(executor: Arc<RequestExecutor>) -> Self {
        Self { executor }
    }

    /// Upload a file as multipart form data.
    ///
    /// The declared MIME type is validated against the supported set before
    /// any request is sent; an unsupported type fails with a validation
    /// error and no network traffic.
    #[instrument(skip(self, request), fields(file_name = %request.file_name, mime_type = %request.mime_type, size = request.size()))]
    pub async fn upload(&self, request: UploadFileRequest) -> CourseContentResult<UploadResponse> {
        if !media::is_supported_mime(&request.mime_type) {
            return Err(ValidationError::UnsupportedFileType {
                mime_type: request.mime_type,
            }
            .into());
        }

        let UploadFileRequest {
            file_name,
            mime_type,
            content,
        } = request;

        let form = MultipartForm::new()
            .file(FileUpload::new(FILE_FIELD, file_name, content).with_mime_type(mime_type));

        self.executor
            .execute_json(
                Method::POST,
                "/files/upload",
                Some(RequestBody::Multipart(form)),
                "Upload failed",
            )
            .await
    }

    /// Fetch the full file collection in a single request.
    ///
    /// The backend returns the collection ordered by upload date, newest
    /// first; the order is preserved.
    #[instrument(skip(self))]
    pub async fn list(&self) -> CourseContentResult<Vec<FileItem>> {
        self.executor
            .execute_json(Method::GET, "/files/all", None, "Failed to load files")
            .await
    }

    /// Fetch a single file's metadata by id.
    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> CourseContentResult<FileItem> {
        self.executor
            .execute_json(
                Method::GET,
                &format!("/files/{}", id),
                None,
                "Failed to fetch file",
            )
            .await
    }

    /// Download a file's content.
    ///
    /// The item's `file_url` is used as-is when absolute and resolved
    /// against the base URL when relative.
    #[instrument(skip(self, file), fields(file_name = %file.file_name))]
    pub async fn download(&self, file: &FileItem) -> CourseContentResult<Bytes> {
        let url = self.executor.resolve_url(&file.file_url)?;
        self.executor
            .execute_raw(Method::GET, url, "Download failed")
            .await
    }
}

impl std::fmt::Debug for FilesService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilesService").finish()
    }
}
