use axum::http::StatusCode;
use mockall::predicate;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use std::sync::Arc;
use timetabler_core::errors::TimetableError;
use timetabler_db::mock::MockScheduleStore;

use crate::test_utils::{TestContext, add_sample_courses, generator_path};

#[tokio::test]
async fn test_schedule_is_empty_before_apply() {
    let server = TestContext::new().server();

    let response = server.get("/api/users/asha/schedule").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!([]));
}

#[tokio::test]
async fn test_apply_without_ranking_is_a_conflict() {
    let server = TestContext::new().server();

    let response = server
        .post(&generator_path("asha", "/timetables/apply"))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "No generated timetables to apply" })
    );
}

#[tokio::test]
async fn test_apply_replaces_stored_schedule_with_current() {
    let server = TestContext::new().server();
    add_sample_courses(&server, "asha").await;
    server.post(&generator_path("asha", "/generate")).await;

    let first = server
        .post(&generator_path("asha", "/timetables/apply"))
        .await
        .json::<Value>();
    let stored = server.get("/api/users/asha/schedule").await.json::<Value>();
    assert_eq!(stored, first["timetable"]["sections"]);

    server.post(&generator_path("asha", "/timetables/next")).await;
    let second = server
        .post(&generator_path("asha", "/timetables/apply"))
        .await
        .json::<Value>();
    let stored = server.get("/api/users/asha/schedule").await.json::<Value>();
    assert_eq!(second["index"], json!(1));
    assert_eq!(stored, second["timetable"]["sections"]);

    let untouched = server.get("/api/users/ravi/schedule").await.json::<Value>();
    assert_eq!(untouched, json!([]));
}

#[tokio::test]
async fn test_store_failure_is_a_server_error() {
    let mut store = MockScheduleStore::new();
    store
        .expect_replace_selected_sections()
        .with(predicate::eq("asha"), predicate::always())
        .times(1)
        .returning(|_, _| Err(TimetableError::Database(eyre::eyre!("connection refused"))));

    let server = TestContext::with_store(Arc::new(store)).server();
    add_sample_courses(&server, "asha").await;
    server.post(&generator_path("asha", "/generate")).await;

    let response = server
        .post(&generator_path("asha", "/timetables/apply"))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Database error: connection refused" })
    );
}
