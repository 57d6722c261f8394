//! Common fixtures for integration tests.

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use std::sync::Arc;
use std::time::Duration;

use campus_profile::adapters::{ReqwestHttpClient, StaticCredentials};
use campus_profile::app::{App, AppMessage};
use campus_profile::client::ProfileClient;
use campus_profile::config::PROFILE_PATH;
use serde_json::{json, Value};
use wiremock::MockServer;

pub const TEST_TOKEN: &str = "test-session-token";

/// A populated teacher record as the backend sends it.
pub fn teacher_profile_json() -> Value {
    json!({
        "_id": "65f0c0ffee0000000000beef",
        "name": "Jane Doe",
        "email": "jane.doe@campus.edu",
        "role": "teacher",
        "roles": ["teacher", "cc"],
        "teacherId": "T-042",
        "school": {"_id": "s1", "name": "School of Engineering", "code": "SOE"},
        "department": {"_id": "d1", "name": "Computer Science", "code": "CSE"},
        "coursesAssigned": ["c1", "c2", "c3"],
        "createdAt": "2024-03-04T10:00:00.000Z",
        "updatedAt": "2024-09-15T08:30:00.000Z",
        "__v": 0
    })
}

/// A sparse student record.
pub fn student_profile_json() -> Value {
    json!({
        "_id": "65f0c0ffee0000000000cafe",
        "name": "Ravi Kumar",
        "role": "student",
        "regNo": "2021CS001"
    })
}

/// Profile endpoint URL on `server`.
pub fn profile_url(server: &MockServer) -> String {
    format!("{}{}", server.uri(), PROFILE_PATH)
}

/// A real reqwest-backed client pointed at `server`.
pub fn client_for(server: &MockServer, token: &str) -> ProfileClient {
    ProfileClient::new(
        Arc::new(ReqwestHttpClient::new()),
        Arc::new(StaticCredentials::new(token)),
        profile_url(server),
    )
}

/// Wait for the next message sent to `app`, failing the test after 5s.
pub async fn next_message(app: &mut App) -> AppMessage {
    let rx = app
        .message_rx
        .as_mut()
        .expect("message receiver already taken");
    tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("timed out waiting for fetch result")
        .expect("channel closed")
}

/// Poll until `server` has seen `count` requests.
pub async fn wait_for_requests(server: &MockServer, count: usize) {
    for _ in 0..200 {
        let seen = server
            .received_requests()
            .await
            .map(|r| r.len())
            .unwrap_or(0);
        if seen >= count {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("server never received {} requests", count);
}
