//! Credential sources wired through `ProfileClient::from_config`.

mod common;

use std::fs;

use campus_profile::client::ProfileClient;
use campus_profile::config::ProfileConfig;
use campus_profile::controller::{ProfileController, ViewState};
use campus_profile::error::{GENERIC_FETCH_MESSAGE, MISSING_TOKEN_MESSAGE};
use common::*;
use tempfile::TempDir;
use wiremock::matchers::{header, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn server_expecting(token: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("Authorization", format!("Bearer {}", token).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(student_profile_json()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_token_read_from_credentials_file() {
    let server = server_expecting("file-token").await;
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".credentials.json");
    fs::write(&path, r#"{"token": "file-token"}"#).unwrap();

    let config = ProfileConfig::new()
        .with_base_url(server.uri())
        .with_credentials_file(&path);
    let mut controller = ProfileController::new(ProfileClient::from_config(&config));

    assert!(controller.load_profile().await.profile().is_some());
}

#[tokio::test]
async fn test_explicit_token_wins_over_file() {
    let server = server_expecting("flag-token").await;
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".credentials.json");
    fs::write(&path, r#"{"token": "file-token"}"#).unwrap();

    let config = ProfileConfig::new()
        .with_base_url(server.uri())
        .with_credentials_file(&path)
        .with_token("flag-token");
    let mut controller = ProfileController::new(ProfileClient::from_config(&config));

    assert!(controller.load_profile().await.profile().is_some());
}

#[tokio::test]
async fn test_missing_file_means_no_token() {
    let server = server_expecting("unused").await;
    let dir = TempDir::new().unwrap();

    let config = ProfileConfig::new()
        .with_base_url(server.uri())
        .with_credentials_file(dir.path().join("absent.json"));
    let mut controller = ProfileController::new(ProfileClient::from_config(&config));

    assert_eq!(
        controller.load_profile().await,
        &ViewState::Error(MISSING_TOKEN_MESSAGE.to_string())
    );
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_corrupt_file_is_generic_error() {
    let server = server_expecting("unused").await;
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".credentials.json");
    fs::write(&path, "not json at all").unwrap();

    let config = ProfileConfig::new()
        .with_base_url(server.uri())
        .with_credentials_file(&path);
    let mut controller = ProfileController::new(ProfileClient::from_config(&config));

    assert_eq!(
        controller.load_profile().await,
        &ViewState::Error(GENERIC_FETCH_MESSAGE.to_string())
    );
}
