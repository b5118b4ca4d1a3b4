//! Upload dialog state machine.

use crate::errors::CourseContentError;
use crate::media::FileKind;
use crate::services::files::UploadFileRequest;

/// Inline error shown when a selected file has an unsupported MIME type.
pub const INVALID_FILE_TYPE_MESSAGE: &str =
    "Invalid file type. Please select PDF, MP4, JPG, JPEG, or PNG files.";

/// Inline error shown when submit is attempted with no file selected.
pub const MISSING_FILE_MESSAGE: &str = "Please select a file";

/// Fallback error when an upload failure carries no message.
pub const UPLOAD_FALLBACK_MESSAGE: &str = "Failed to upload file";

/// State machine for the upload dialog.
///
/// Transitions: closed → open (no file) → open (file selected) ⇄ open
/// (error) → submitting → closed on success, or back to open (error) on
/// failure. Closing by any path resets the selection and the error, so
/// reopening always starts clean.
#[derive(Debug, Default)]
pub struct UploadDialog {
    open: bool,
    submitting: bool,
    error: Option<String>,
    selected: Option<UploadFileRequest>,
}

impl UploadDialog {
    /// Create a closed dialog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the dialog.
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close the dialog by any path (cancel, outside click, success).
    ///
    /// Clears the selection, any error, and the in-flight flag; a completion
    /// arriving for a dismissed submission is ignored.
    pub fn close(&mut self) {
        self.open = false;
        self.submitting = false;
        self.selected = None;
        self.error = None;
    }

    /// Handle a file selection.
    ///
    /// A supported MIME type replaces any prior selection and clears the
    /// error; an unsupported one is rejected, clears any prior selection,
    /// and shows the inline error. Returns whether the file was accepted.
    pub fn select_file(&mut self, file: UploadFileRequest) -> bool {
        if crate::media::is_supported_mime(&file.mime_type) {
            self.selected = Some(file);
            self.error = None;
            true
        } else {
            self.selected = None;
            self.error = Some(INVALID_FILE_TYPE_MESSAGE.to_string());
            false
        }
    }

    /// Start a submission.
    ///
    /// Returns the file to upload, or `None` when submission is blocked
    /// (dialog closed, no valid selection, or already in flight). Clears
    /// the pending error before the call executes.
    pub fn begin_submit(&mut self) -> Option<UploadFileRequest> {
        if !self.open || self.submitting {
            return None;
        }
        let Some(file) = self.selected.clone() else {
            self.error = Some(MISSING_FILE_MESSAGE.to_string());
            return None;
        };
        self.submitting = true;
        self.error = None;
        Some(file)
    }

    /// Record a successful submission: reset the form and close.
    pub fn complete_submit_success(&mut self) {
        self.submitting = false;
        self.selected = None;
        self.error = None;
        self.open = false;
    }

    /// Record a failed submission: stay open with the failure's message.
    pub fn complete_submit_failure(&mut self, error: &CourseContentError) {
        if !self.submitting {
            return;
        }
        self.submitting = false;
        let message = error.to_string();
        self.error = Some(if message.is_empty() {
            UPLOAD_FALLBACK_MESSAGE.to_string()
        } else {
            message
        });
    }

    /// True when the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        self.open && !self.submitting && self.selected.is_some()
    }

    /// True while the dialog is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// True while a submission is in flight.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Current inline error, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The currently selected file, if any.
    pub fn selected(&self) -> Option<&UploadFileRequest> {
        self.selected.as_ref()
    }

    /// Detail line for the selected file, e.g. `"Type: PDF • Size: 2.00 MB"`.
    ///
    /// The size is raw megabytes with two fixed decimals, matching the
    /// dialog's preview rather than the list's unit-scaled formatting.
    pub fn selected_summary(&self) -> Option<String> {
        self.selected.as_ref().map(|file| {
            let kind = FileKind::from_mime(&file.mime_type);
            let megabytes = file.size() as f64 / (1024.0 * 1024.0);
            format!("Type: {} • Size: {:.2} MB", kind.label(), megabytes)
        })
    }
}
