//! Data model for the course-content API.

use crate::media::{self, FileKind};
use serde::{Deserialize, Serialize};

/// A file stored by the backend.
///
/// Created server-side on successful upload; immutable from the client's
/// perspective. There is no delete operation in this client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileItem {
    /// Unique server-assigned identifier.
    pub id: i64,
    /// Original file name.
    pub file_name: String,
    /// Declared MIME type.
    pub file_type: String,
    /// File size in bytes.
    pub file_size: u64,
    /// Upload timestamp, ISO-8601.
    pub upload_date: String,
    /// Resource locator for the file content; absolute or relative to the
    /// API base URL.
    pub file_url: String,
}

impl FileItem {
    /// Classification of the declared MIME type.
    pub fn kind(&self) -> FileKind {
        FileKind::from_mime(&self.file_type)
    }

    /// Human-readable size, e.g. `"2 MB"`.
    pub fn formatted_size(&self) -> String {
        media::format_file_size(self.file_size)
    }

    /// Human-readable upload date, e.g. `"Aug 6, 2026, 02:30 PM"`.
    pub fn formatted_upload_date(&self) -> String {
        media::format_upload_date(&self.upload_date)
    }
}
