//! Integration tests driving the real reqwest transport against a local
//! mock server.

use course_content_client::services::files::UploadFileRequest;
use course_content_client::{CourseContentClient, CourseContentError};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> CourseContentClient {
    CourseContentClient::builder()
        .base_url(&format!("{}/api", server.uri()))
        .expect("mock server URL is valid")
        .build()
        .expect("client builds")
}

#[tokio::test]
async fn list_round_trips_the_collection() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/files/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 1,
                "fileName": "lecture-notes.pdf",
                "fileType": "application/pdf",
                "fileSize": 2_097_152,
                "uploadDate": "2025-11-03T09:15:00",
                "fileUrl": "http://localhost:8080/api/files/download/abc.pdf"
            }
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let files = client.files().list().await.unwrap();

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].file_name, "lecture-notes.pdf");
    assert_eq!(files[0].kind().label(), "PDF");
}

#[tokio::test]
async fn upload_posts_multipart_and_accepts_201() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/files/upload"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "message": "File uploaded successfully",
            "fileUrl": "http://localhost:8080/api/files/download/abc.png",
            "fileName": "diagram.png",
            "fileSize": 153_600
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let request = UploadFileRequest::new("diagram.png", vec![0u8; 32]);
    let response = client.files().upload(request).await.unwrap();

    assert_eq!(response.message, "File uploaded successfully");
    assert_eq!(response.file_size, 153_600);
}

#[tokio::test]
async fn error_body_message_is_surfaced_with_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/files/99"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "message": "File not found 99" })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let error = client.files().get(99).await.unwrap_err();

    match error {
        CourseContentError::Api { message, status } => {
            assert_eq!(message, "File not found 99");
            assert_eq!(status, 404);
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn bodyless_error_falls_back_to_default_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/files/all"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let error = client.files().list().await.unwrap_err();

    assert_eq!(error.to_string(), "Failed to load files");
    assert_eq!(error.status(), 500);
}

#[tokio::test]
async fn slow_response_surfaces_as_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/files/all"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let client = CourseContentClient::builder()
        .base_url(&format!("{}/api", server.uri()))
        .unwrap()
        .timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let error = client.files().list().await.unwrap_err();
    assert!(matches!(error, CourseContentError::Network(_)));
    assert_eq!(error.status(), 500);
}
