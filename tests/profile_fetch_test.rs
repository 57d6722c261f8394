//! End-to-end fetch tests against a local HTTP server.

mod common;

use std::sync::Arc;
use std::time::Duration;

use campus_profile::auth::Credentials;
use campus_profile::client::ProfileClient;
use campus_profile::config::ProfileConfig;
use campus_profile::controller::{ProfileController, ViewState};
use campus_profile::error::{GENERIC_FETCH_MESSAGE, MISSING_TOKEN_MESSAGE};
use campus_profile::models::Role;
use common::*;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_loads_profile_with_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .and(header("Authorization", format!("Bearer {}", TEST_TOKEN).as_str()))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(teacher_profile_json()))
        .expect(1)
        .mount(&server)
        .await;

    let mut controller = ProfileController::new(client_for(&server, TEST_TOKEN));
    let state = controller.load_profile().await;

    let profile = state.profile().expect("profile should be loaded");
    assert_eq!(profile.name(), Some("Jane Doe"));
    assert_eq!(profile.role(), Some(&Role::Teacher));
    assert_eq!(profile.roles(), &[Role::Teacher, Role::CourseCoordinator]);
    assert_eq!(profile.staff_id(), Some("T-042"));
    assert_eq!(profile.course_count(), 3);
    assert_eq!(profile.school().unwrap().display(), "School of Engineering (SOE)");
}

#[tokio::test]
async fn test_dump_keeps_unmodelled_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(teacher_profile_json()))
        .mount(&server)
        .await;

    let mut controller = ProfileController::new(client_for(&server, TEST_TOKEN));
    let state = controller.load_profile().await;

    let dump = state.profile().unwrap().to_pretty_json();
    let reparsed: serde_json::Value = serde_json::from_str(&dump).unwrap();
    assert_eq!(reparsed, teacher_profile_json());
    assert!(dump.contains("\"__v\""));
}

#[tokio::test]
async fn test_null_body_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&server)
        .await;

    let mut controller = ProfileController::new(client_for(&server, TEST_TOKEN));
    assert_eq!(controller.load_profile().await, &ViewState::Empty);
}

#[tokio::test]
async fn test_empty_body_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let mut controller = ProfileController::new(client_for(&server, TEST_TOKEN));
    assert_eq!(controller.load_profile().await, &ViewState::Empty);
}

#[tokio::test]
async fn test_unauthorized_shows_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Token expired"})),
        )
        .mount(&server)
        .await;

    let mut controller = ProfileController::new(client_for(&server, TEST_TOKEN));
    assert_eq!(
        controller.load_profile().await,
        &ViewState::Error("Token expired".to_string())
    );
}

#[tokio::test]
async fn test_server_error_without_message_is_generic() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let mut controller = ProfileController::new(client_for(&server, TEST_TOKEN));
    assert_eq!(
        controller.load_profile().await,
        &ViewState::Error(GENERIC_FETCH_MESSAGE.to_string())
    );
}

#[tokio::test]
async fn test_malformed_success_body_is_generic_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&server)
        .await;

    let mut controller = ProfileController::new(client_for(&server, TEST_TOKEN));
    assert_eq!(
        controller.load_profile().await,
        &ViewState::Error(GENERIC_FETCH_MESSAGE.to_string())
    );
}

#[tokio::test]
async fn test_timeout_is_generic_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(student_profile_json())
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let config = ProfileConfig::new()
        .with_base_url(server.uri())
        .with_token(TEST_TOKEN)
        .with_timeout(Duration::from_millis(200));
    let mut controller = ProfileController::new(ProfileClient::from_config(&config));

    assert_eq!(
        controller.load_profile().await,
        &ViewState::Error(GENERIC_FETCH_MESSAGE.to_string())
    );
}

#[tokio::test]
async fn test_unreachable_backend_is_generic_error() {
    // Start and drop a server so the port is (almost certainly) closed
    let uri = {
        let server = MockServer::start().await;
        server.uri()
    };

    let config = ProfileConfig::new().with_base_url(uri).with_token(TEST_TOKEN);
    let mut controller = ProfileController::new(ProfileClient::from_config(&config));

    assert_eq!(
        controller.load_profile().await,
        &ViewState::Error(GENERIC_FETCH_MESSAGE.to_string())
    );
}

#[tokio::test]
async fn test_missing_token_sends_no_request() {
    let (client, http) = MockProfileSetup::new().build();
    let mut controller = ProfileController::new(client);

    assert_eq!(
        controller.load_profile().await,
        &ViewState::Error(MISSING_TOKEN_MESSAGE.to_string())
    );
    assert!(http.get_requests().is_empty());
}

#[tokio::test]
async fn test_failed_refresh_hides_previous_profile() {
    let (client, _http) = MockProfileSetup::new()
        .with_token(TEST_TOKEN)
        .then_json(200, student_profile_json())
        .then_json(503, json!({"message": "Maintenance"}))
        .build();
    let mut controller = ProfileController::new(client);

    assert!(controller.load_profile().await.profile().is_some());
    assert_eq!(
        controller.load_profile().await,
        &ViewState::Error("Maintenance".to_string())
    );
    assert!(controller.profile().is_none());
}

#[tokio::test]
async fn test_transport_error_then_recovery() {
    let (client, http) = MockProfileSetup::new()
        .with_token(TEST_TOKEN)
        .with_transport_error(HttpError::ConnectionFailed("refused".to_string()))
        .build();
    let mut controller = ProfileController::new(client);

    assert_eq!(
        controller.load_profile().await,
        &ViewState::Error(GENERIC_FETCH_MESSAGE.to_string())
    );

    http.set_response(MOCK_URL, MockResponse::json(200, student_profile_json()));
    assert!(controller.load_profile().await.profile().is_some());
    assert_eq!(http.get_requests().len(), 2);
}

#[tokio::test]
async fn test_token_is_loaded_for_every_fetch() {
    let credentials = InMemoryCredentials::with_token("first");
    let http = MockHttpClient::new();
    http.set_default_response(MockResponse::json(200, student_profile_json()));
    let client = ProfileClient::new(
        Arc::new(http.clone()),
        Arc::new(credentials.clone()),
        MOCK_URL,
    );
    let mut controller = ProfileController::new(client);

    controller.load_profile().await;
    credentials.set_credentials(Some(Credentials::with_token("second")));
    controller.load_profile().await;

    assert_eq!(credentials.load_count(), 2);
    let sent: Vec<_> = http
        .get_requests()
        .into_iter()
        .map(|r| r.headers.get("Authorization").cloned())
        .collect();
    assert_eq!(
        sent,
        vec![
            Some("Bearer first".to_string()),
            Some("Bearer second".to_string())
        ]
    );
}
