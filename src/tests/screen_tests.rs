//! Screen composition tests: the upload dialog, the list view, and the
//! refresh counter wiring between them.

use crate::client::CourseContentClient;
use crate::config::CourseContentConfig;
use crate::fixtures;
use crate::media::BadgeVariant;
use crate::mocks::{MockHttpTransport, MockResponse};
use crate::services::files::UploadFileRequest;
use crate::ui::{ContentScreen, ListPhase, INVALID_FILE_TYPE_MESSAGE};
use std::sync::Arc;

fn screen_with(transport: MockHttpTransport) -> (ContentScreen, Arc<MockHttpTransport>) {
    let transport = Arc::new(transport);
    let client =
        CourseContentClient::with_transport(CourseContentConfig::default(), transport.clone())
            .expect("default config is valid");
    (ContentScreen::new(client), transport)
}

#[tokio::test]
async fn test_mount_fetches_once_and_loads() {
    let (mut screen, transport) = screen_with(
        MockHttpTransport::new().add_json_response(&vec![fixtures::pdf_file()]),
    );

    screen.start().await;

    assert_eq!(screen.files_view.phase(), &ListPhase::Loaded);
    assert_eq!(screen.files_view.files().len(), 1);
    assert_eq!(transport.request_count(), 1);
}

#[tokio::test]
async fn test_empty_collection_renders_placeholder_state() {
    let (mut screen, _) =
        screen_with(MockHttpTransport::new().add_json_response(&Vec::<crate::FileItem>::new()));

    screen.start().await;

    assert!(screen.files_view.is_empty());
}

#[tokio::test]
async fn test_fetch_failure_renders_retryable_error() {
    let (mut screen, _) = screen_with(
        MockHttpTransport::new()
            .add_response(MockResponse::with_status(500, ""))
            .add_json_response(&vec![fixtures::pdf_file()]),
    );

    screen.start().await;
    assert_eq!(screen.files_view.error(), Some("Failed to load files"));

    // The user presses Try Again.
    screen.refresh_files().await;
    assert_eq!(screen.files_view.phase(), &ListPhase::Loaded);
    assert_eq!(screen.files_view.files().len(), 1);
}

#[tokio::test]
async fn test_upload_success_closes_dialog_and_refetches_once() {
    let (mut screen, transport) = screen_with(
        MockHttpTransport::new()
            // Mount fetch: empty collection.
            .add_json_response(&Vec::<crate::FileItem>::new())
            // Upload.
            .add_json_response(&fixtures::upload_response("lecture-notes.pdf", 2_097_152))
            // Counter-triggered refetch: the new file appears.
            .add_json_response(&vec![fixtures::pdf_file()]),
    );

    screen.start().await;
    assert!(screen.files_view.is_empty());
    assert_eq!(screen.refresh_counter(), 0);

    screen.dialog.open();
    let selected = screen
        .dialog
        .select_file(UploadFileRequest::new("lecture-notes.pdf", vec![0u8; 2_097_152]));
    assert!(selected);
    assert_eq!(
        screen.dialog.selected_summary().as_deref(),
        Some("Type: PDF • Size: 2.00 MB")
    );

    let response = screen.submit_upload().await.expect("upload succeeds");
    assert_eq!(response.file_name, "lecture-notes.pdf");

    assert!(!screen.dialog.is_open());
    assert_eq!(screen.refresh_counter(), 1, "incremented by exactly 1");
    assert_eq!(transport.request_count(), 3, "mount + upload + one refetch");

    let files = screen.files_view.files();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].file_name, "lecture-notes.pdf");
    assert_eq!(files[0].kind().label(), "PDF");
    assert_eq!(files[0].kind().badge(), BadgeVariant::Destructive);
}

#[tokio::test]
async fn test_invalid_selection_blocks_submission_without_network() {
    let (mut screen, transport) = screen_with(MockHttpTransport::new());

    screen.dialog.open();
    assert!(!screen
        .dialog
        .select_file(UploadFileRequest::new("todo.txt", vec![0u8; 64])));

    assert_eq!(screen.dialog.error(), Some(INVALID_FILE_TYPE_MESSAGE));
    assert!(!screen.dialog.can_submit());
    assert!(screen.submit_upload().await.is_none());
    assert_eq!(transport.request_count(), 0, "no network call occurs");
}

#[tokio::test]
async fn test_upload_failure_keeps_dialog_open_and_counter_unchanged() {
    let (mut screen, transport) = screen_with(
        MockHttpTransport::new()
            .add_json_response(&Vec::<crate::FileItem>::new())
            .add_response(MockResponse::with_status(
                500,
                r#"{"message":"Could not store file lecture-notes.pdf. Please try again!"}"#,
            )),
    );

    screen.start().await;
    screen.dialog.open();
    screen
        .dialog
        .select_file(UploadFileRequest::new("lecture-notes.pdf", vec![0u8; 128]));

    assert!(screen.submit_upload().await.is_none());

    assert!(screen.dialog.is_open());
    assert_eq!(
        screen.dialog.error(),
        Some("Could not store file lecture-notes.pdf. Please try again!")
    );
    assert_eq!(screen.refresh_counter(), 0);
    assert_eq!(transport.request_count(), 2, "mount + failed upload only");
}
