//! Screen composition: dialog, list view, and the refresh counter that
//! links them.

use crate::client::CourseContentClient;
use crate::services::files::UploadResponse;
use crate::ui::files_list::{FetchMode, FetchTicket, FilesListView};
use crate::ui::upload_dialog::UploadDialog;
use tracing::{debug, warn};

/// Top-level container for the upload-and-browse screen.
///
/// Holds a single refresh counter, starting at 0 and incremented by exactly
/// 1 on every successful upload. The list view observes the counter and
/// refetches only when its value changes.
pub struct ContentScreen {
    client: CourseContentClient,
    /// Upload dialog state.
    pub dialog: UploadDialog,
    /// File list view state.
    pub files_view: FilesListView,
    refresh_counter: u64,
}

impl ContentScreen {
    /// Create a screen for the given client.
    pub fn new(client: CourseContentClient) -> Self {
        Self {
            client,
            dialog: UploadDialog::new(),
            files_view: FilesListView::new(),
            refresh_counter: 0,
        }
    }

    /// Current refresh counter value.
    pub fn refresh_counter(&self) -> u64 {
        self.refresh_counter
    }

    /// Perform the initial mount: fetch the collection once.
    pub async fn start(&mut self) {
        self.sync_files().await;
    }

    /// User-triggered refresh or retry; keeps loaded data visible.
    pub async fn refresh_files(&mut self) {
        let ticket = self.files_view.begin_fetch(FetchMode::Refresh);
        self.run_fetch(ticket).await;
    }

    /// Submit the dialog's selected file.
    ///
    /// On success the dialog closes, the refresh counter increments by one,
    /// the list refetches, and the server's response is returned (the
    /// success-callback payload). On failure the dialog stays open with the
    /// failure's message and `None` is returned. Submission is a no-op when
    /// the dialog blocks it (no valid selection or already in flight).
    pub async fn submit_upload(&mut self) -> Option<UploadResponse> {
        let file = self.dialog.begin_submit()?;

        match self.client.files().upload(file).await {
            Ok(response) => {
                debug!(file_name = %response.file_name, "upload succeeded");
                self.dialog.complete_submit_success();
                self.refresh_counter += 1;
                self.sync_files().await;
                Some(response)
            }
            Err(error) => {
                warn!(error = %error, "upload failed");
                self.dialog.complete_submit_failure(&error);
                None
            }
        }
    }

    async fn sync_files(&mut self) {
        if let Some(ticket) = self.files_view.observe_signal(self.refresh_counter) {
            self.run_fetch(ticket).await;
        }
    }

    async fn run_fetch(&mut self, ticket: FetchTicket) {
        let result = self.client.files().list().await;
        self.files_view.resolve(ticket, result);
    }
}

impl std::fmt::Debug for ContentScreen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentScreen")
            .field("refresh_counter", &self.refresh_counter)
            .field("dialog_open", &self.dialog.is_open())
            .field("files", &self.files_view.files().len())
            .finish()
    }
}
