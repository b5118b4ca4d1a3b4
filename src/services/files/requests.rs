//! Request types for the files service.

use bytes::Bytes;

/// A file staged for upload.
///
/// Also serves as the upload dialog's selected-file value, so the declared
/// MIME type validated at selection time is exactly the one sent to the
/// backend.
#[derive(Debug, Clone)]
pub struct UploadFileRequest {
    /// Original file name, including extension.
    pub file_name: String,
    /// Declared MIME type.
    pub mime_type: String,
    /// File content.
    pub content: Bytes,
}

impl UploadFileRequest {
    /// Create a new upload request, guessing the MIME type from the file
    /// name's extension.
    pub fn new(file_name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        let file_name = file_name.into();
        let mime_type = mime_guess::from_path(&file_name)
            .first_or_octet_stream()
            .to_string();

        Self {
            file_name,
            mime_type,
            content: content.into(),
        }
    }

    /// Override the declared MIME type.
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = mime_type.into();
        self
    }

    /// File size in bytes.
    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_guessed_from_extension() {
        let request = UploadFileRequest::new("week1-lecture.mp4", vec![0u8; 8]);
        assert_eq!(request.mime_type, "video/mp4");
        assert_eq!(request.size(), 8);

        let request = UploadFileRequest::new("notes.txt", vec![0u8; 8]);
        assert_eq!(request.mime_type, "text/plain");
    }

    #[test]
    fn test_mime_override() {
        let request =
            UploadFileRequest::new("photo.jpg", vec![0u8; 8]).with_mime_type("image/jpg");
        assert_eq!(request.mime_type, "image/jpg");
    }
}
