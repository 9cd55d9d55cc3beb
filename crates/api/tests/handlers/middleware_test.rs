use axum::{body, http::StatusCode};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};
use timetabler_api::middleware::error_handling::{AppError, map_error};
use timetabler_core::errors::TimetableError;

#[rstest]
#[case::not_found(TimetableError::NotFound("Course X is not selected".into()), StatusCode::NOT_FOUND)]
#[case::validation(TimetableError::Validation("bad".into()), StatusCode::BAD_REQUEST)]
#[case::unknown_course(TimetableError::UnknownCourse("X".into()), StatusCode::NOT_FOUND)]
#[case::no_section_types(TimetableError::NoSectionTypes("X".into()), StatusCode::UNPROCESSABLE_ENTITY)]
#[case::duplicate(TimetableError::DuplicateCourse("X".into()), StatusCode::CONFLICT)]
#[case::no_timetables(TimetableError::NoTimetables, StatusCode::CONFLICT)]
#[case::database(TimetableError::Database(eyre::eyre!("Database error")), StatusCode::INTERNAL_SERVER_ERROR)]
#[case::internal(
    TimetableError::Internal(Box::new(std::io::Error::other("Internal error"))),
    StatusCode::INTERNAL_SERVER_ERROR
)]
fn test_error_status_mapping(#[case] error: TimetableError, #[case] expected: StatusCode) {
    let response = map_error(error);

    assert_eq!(response.status(), expected);
}

#[test]
fn test_error_body_carries_message() {
    let response = map_error(TimetableError::DuplicateCourse("CS F111".to_string()));

    let bytes = tokio_test::block_on(body::to_bytes(response.into_body(), usize::MAX)).unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(body, json!({ "error": "Course already selected: CS F111" }));
}

#[test]
fn test_eyre_report_becomes_database_error() {
    let error: AppError = eyre::eyre!("pool timed out").into();

    assert!(matches!(error.0, TimetableError::Database(_)));
    assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
