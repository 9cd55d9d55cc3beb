use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::test_utils::TestContext;

#[tokio::test]
async fn test_search_matches_code_and_name() {
    let server = TestContext::new().server();

    let response = server
        .get("/api/catalog/courses")
        .add_query_param("q", "math")
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!([{ "courseCode": "MATH F112", "courseName": "Mathematics II", "credits": 3 }])
    );
}

#[tokio::test]
async fn test_search_honours_limit_and_exclusions() {
    let server = TestContext::new().server();

    let limited = server
        .get("/api/catalog/courses")
        .add_query_param("limit", 1)
        .await
        .json::<Vec<Value>>();
    assert_eq!(limited.len(), 1);

    let excluded = server
        .get("/api/catalog/courses")
        .add_query_param("exclude", "CS F111")
        .await
        .json::<Vec<Value>>();
    let codes: Vec<&str> = excluded
        .iter()
        .filter_map(|c| c["courseCode"].as_str())
        .collect();
    assert!(!codes.contains(&"CS F111"));
    assert!(codes.contains(&"MATH F112"));
}

#[tokio::test]
async fn test_instructors_are_sorted_and_unique() {
    let server = TestContext::new().server();

    let instructors = server
        .get("/api/catalog/instructors")
        .await
        .json::<Vec<String>>();

    assert_eq!(
        instructors,
        vec!["Anita Rao", "K. Menon", "Meera Iyer", "P. Das", "R. Sharma", "Vikram Singh"]
    );
}

#[tokio::test]
async fn test_slot_table_lists_week_layout() {
    let server = TestContext::new().server();

    let table = server.get("/api/catalog/slots").await.json::<Value>();

    assert_eq!(table["days"].as_array().map(Vec::len), Some(6));
    assert_eq!(table["days"][3], json!({ "code": "Th", "name": "Thursday" }));
    assert_eq!(table["slots"].as_array().map(Vec::len), Some(11));
    assert_eq!(table["slots"][0], json!({ "slot": 1, "label": "08:00-09:00" }));
    assert_eq!(table["slots"][10], json!({ "slot": 11, "label": "18:00-19:00" }));
}

#[tokio::test]
async fn test_health_reports_catalog_size() {
    let server = TestContext::new().server();

    let health = server.get("/health").await.json::<Value>();

    assert_eq!(health, json!({ "status": "ok", "courses": 3 }));
}
