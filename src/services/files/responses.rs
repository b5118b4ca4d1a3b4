//! Response types for the files service.

use serde::{Deserialize, Serialize};

/// Response from a successful upload.
///
/// Transient: produced once per upload, consumed to trigger a list refresh,
/// not persisted by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    /// Server status message, e.g. `"File uploaded successfully"`.
    pub message: String,
    /// Resource locator for the uploaded file.
    pub file_url: String,
    /// Stored file name.
    pub file_name: String,
    /// Stored file size in bytes.
    pub file_size: u64,
}
