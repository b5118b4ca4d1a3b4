//! Test fixtures for API responses.
//!
//! Provides realistic data for unit tests.

use crate::services::files::UploadResponse;
use crate::types::FileItem;

/// A file item with the given identity and metadata.
pub fn file_item(id: i64, file_name: &str, file_type: &str, file_size: u64) -> FileItem {
    FileItem {
        id,
        file_name: file_name.to_string(),
        file_type: file_type.to_string(),
        file_size,
        upload_date: "2025-11-03T09:15:00".to_string(),
        file_url: format!(
            "http://localhost:8080/api/files/download/{}",
            file_name
        ),
    }
}

/// A 2 MB PDF.
pub fn pdf_file() -> FileItem {
    file_item(1, "lecture-notes.pdf", "application/pdf", 2_097_152)
}

/// A 48 MB MP4 video.
pub fn video_file() -> FileItem {
    file_item(2, "week1-lecture.mp4", "video/mp4", 50_331_648)
}

/// A 150 KB PNG.
pub fn image_file() -> FileItem {
    file_item(3, "diagram.png", "image/png", 153_600)
}

/// A file with a MIME type the UI does not recognize.
pub fn unknown_file() -> FileItem {
    file_item(4, "archive.zip", "application/zip", 1_024)
}

/// The backend's response to a successful upload.
pub fn upload_response(file_name: &str, file_size: u64) -> UploadResponse {
    UploadResponse {
        message: "File uploaded successfully".to_string(),
        file_url: format!(
            "http://localhost:8080/api/files/download/{}",
            file_name
        ),
        file_name: file_name.to_string(),
        file_size,
    }
}
