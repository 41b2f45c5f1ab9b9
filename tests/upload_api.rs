use std::path::Path;
use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use tempfile::TempDir;

use sheetforge::api::handlers::AppState;
use sheetforge::api::routes::create_router;
use sheetforge::services::entities::RuleBasedRecognizer;

fn test_server(out_dir: &Path) -> TestServer {
    let state = AppState {
        out_dir: Arc::new(out_dir.to_path_buf()),
        recognizer: RuleBasedRecognizer::shared(),
    };
    TestServer::new(create_router(state)).unwrap()
}

fn artifact_count(out_dir: &Path) -> usize {
    std::fs::read_dir(out_dir).unwrap().count()
}

#[tokio::test]
async fn upload_converts_and_names_the_artifact() {
    let out_dir = TempDir::new().unwrap();
    let server = test_server(out_dir.path());

    let form = MultipartForm::new().add_part(
        "file",
        Part::bytes(b"name,qty\nwidget,2\n".to_vec()).file_name("inventory.csv"),
    );
    let response = server.post("/upload").multipart(form).await;

    response.assert_status(StatusCode::OK);
    let body = response.text();
    assert!(body.contains("inventory_converted.xlsx"), "body: {body}");
    assert!(out_dir.path().join("inventory_converted.xlsx").exists());
}

#[tokio::test]
async fn missing_file_part_is_a_bad_request() {
    let out_dir = TempDir::new().unwrap();
    let server = test_server(out_dir.path());

    let form = MultipartForm::new().add_text("comment", "no file here");
    let response = server.post("/upload").multipart(form).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(artifact_count(out_dir.path()), 0);
}

#[tokio::test]
async fn unsupported_extension_is_a_bad_request_naming_the_extension() {
    let out_dir = TempDir::new().unwrap();
    let server = test_server(out_dir.path());

    let form = MultipartForm::new().add_part(
        "file",
        Part::bytes(b"whatever".to_vec()).file_name("notes.xyz"),
    );
    let response = server.post("/upload").multipart(form).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.text().contains("xyz"));
    assert_eq!(artifact_count(out_dir.path()), 0);
}

#[tokio::test]
async fn malformed_content_is_unprocessable() {
    let out_dir = TempDir::new().unwrap();
    let server = test_server(out_dir.path());

    let form = MultipartForm::new().add_part(
        "file",
        Part::bytes(b"{definitely not json".to_vec()).file_name("data.json"),
    );
    let response = server.post("/upload").multipart(form).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(artifact_count(out_dir.path()), 0);
}

#[tokio::test]
async fn index_serves_the_upload_form() {
    let out_dir = TempDir::new().unwrap();
    let server = test_server(out_dir.path());

    let response = server.get("/").await;
    response.assert_status(StatusCode::OK);
    assert!(response.text().contains("multipart/form-data"));
}
