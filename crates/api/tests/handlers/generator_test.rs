use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use timetabler_core::generator::GeneratorOptions;

use crate::test_utils::{TestContext, add_sample_courses, generator_path};

#[tokio::test]
async fn test_add_course_resolves_required_types() {
    let server = TestContext::new().server();

    let response = server
        .post(&generator_path("asha", "/courses"))
        .json(&json!({ "courseCode": "  CS F111 " }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(
        response.json::<Value>(),
        json!({
            "courseCode": "CS F111",
            "courseName": "Computer Programming",
            "credits": 4,
            "requiredSections": ["L", "P"]
        })
    );
}

#[tokio::test]
async fn test_add_course_failures_map_to_statuses() {
    let server = TestContext::new().server();
    let path = generator_path("asha", "/courses");

    let unknown = server.post(&path).json(&json!({ "courseCode": "PHY F999" })).await;
    unknown.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        unknown.json::<Value>(),
        json!({ "error": "Unknown course: PHY F999" })
    );

    server
        .post(&path)
        .json(&json!({ "courseCode": "BITS F423T" }))
        .await
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    server
        .post(&path)
        .json(&json!({ "courseCode": "CS F111" }))
        .await
        .assert_status(StatusCode::CREATED);
    server
        .post(&path)
        .json(&json!({ "courseCode": "CS F111" }))
        .await
        .assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_sessions_are_per_user() {
    let server = TestContext::new().server();
    add_sample_courses(&server, "asha").await;

    let asha = server.get(&generator_path("asha", "")).await.json::<Value>();
    let ravi = server.get(&generator_path("ravi", "")).await.json::<Value>();

    assert_eq!(asha["courses"].as_array().map(Vec::len), Some(2));
    assert_eq!(asha["timetableCount"], Value::Null);
    assert_eq!(ravi["courses"], json!([]));
    assert_eq!(ravi["constraints"]["maxHoursPerDay"], json!(8));
}

#[test_log::test(tokio::test)]
async fn test_generate_ranks_every_feasible_timetable() {
    let server = TestContext::new().server();
    add_sample_courses(&server, "asha").await;

    let response = server.post(&generator_path("asha", "/generate")).await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["count"], json!(6));
    assert_eq!(body["truncated"], json!(false));
    assert_eq!(body["message"], Value::Null);
    assert_eq!(body["currentIndex"], json!(0));
    assert_eq!(body["current"]["sections"].as_array().map(Vec::len), Some(4));

    let mut scores = vec![body["current"]["score"].as_f64().unwrap()];
    for _ in 1..6 {
        let view = server
            .post(&generator_path("asha", "/timetables/next"))
            .await
            .json::<Value>();
        scores.push(view["timetable"]["score"].as_f64().unwrap());
    }
    assert!(scores.windows(2).all(|w| w[0] >= w[1]), "{:?}", scores);
}

#[tokio::test]
async fn test_avoided_slot_removes_clashing_lectures() {
    let server = TestContext::new().server();
    add_sample_courses(&server, "asha").await;

    server
        .put(&generator_path("asha", "/constraints"))
        .json(&json!({ "avoidSlots": [{ "day": "M", "slot": 2 }] }))
        .await
        .assert_status_ok();

    let body = server
        .post(&generator_path("asha", "/generate"))
        .await
        .json::<Value>();

    assert_eq!(body["count"], json!(2));
    let lectures: Vec<&str> = body["current"]["sections"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|s| s["sectionType"] == "L")
        .filter_map(|s| s["section"].as_str())
        .collect();
    assert_eq!(lectures, vec!["L2", "L2"]);
}

#[tokio::test]
async fn test_infeasible_constraints_report_no_timetable() {
    let server = TestContext::new().server();
    add_sample_courses(&server, "asha").await;

    server
        .put(&generator_path("asha", "/constraints"))
        .json(&json!({ "maxHoursPerDay": 1 }))
        .await
        .assert_status_ok();

    let body = server
        .post(&generator_path("asha", "/generate"))
        .await
        .json::<Value>();

    assert_eq!(body["count"], json!(0));
    assert_eq!(body["current"], Value::Null);
    assert_eq!(
        body["message"],
        json!("no valid timetable under current constraints")
    );

    server
        .get(&generator_path("asha", "/timetables/current"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_invalid_constraints_are_rejected() {
    let server = TestContext::new().server();

    server
        .put(&generator_path("asha", "/constraints"))
        .json(&json!({ "maxHoursPerDay": 0 }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    server
        .put(&generator_path("asha", "/constraints"))
        .json(&json!({ "avoidLabSlots": [12] }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_navigation_is_clamped() {
    let server = TestContext::new().server();
    add_sample_courses(&server, "asha").await;
    server.post(&generator_path("asha", "/generate")).await;

    let first = server
        .post(&generator_path("asha", "/timetables/previous"))
        .await
        .json::<Value>();
    assert_eq!(first["index"], json!(0));

    let mut last = Value::Null;
    for _ in 0..10 {
        last = server
            .post(&generator_path("asha", "/timetables/next"))
            .await
            .json::<Value>();
    }
    assert_eq!(last["index"], json!(5));
    assert_eq!(last["count"], json!(6));

    let current = server
        .get(&generator_path("asha", "/timetables/current"))
        .await
        .json::<Value>();
    assert_eq!(current, last);
}

#[tokio::test]
async fn test_editing_courses_discards_ranking() {
    let server = TestContext::new().server();
    add_sample_courses(&server, "asha").await;
    server.post(&generator_path("asha", "/generate")).await;

    let removed = server
        .delete(&generator_path("asha", "/courses/MATH%20F112"))
        .await;
    removed.assert_status_ok();
    assert_eq!(removed.json::<Value>()["courseCode"], json!("MATH F112"));

    server
        .get(&generator_path("asha", "/timetables/current"))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    server
        .delete(&generator_path("asha", "/courses/MATH%20F112"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cap_truncates_generation() {
    let context = TestContext::with_options(GeneratorOptions { max_timetables: 4 });
    let server = context.server();
    add_sample_courses(&server, "asha").await;

    let body = server
        .post(&generator_path("asha", "/generate"))
        .await
        .json::<Value>();

    assert_eq!(body["count"], json!(4));
    assert_eq!(body["truncated"], json!(true));
}

#[tokio::test]
async fn test_generate_without_courses_is_empty() {
    let server = TestContext::new().server();

    let body = server
        .post(&generator_path("asha", "/generate"))
        .await
        .json::<Value>();

    assert_eq!(body["count"], json!(0));
    assert_eq!(body["truncated"], json!(false));
}

#[tokio::test]
async fn test_reads_for_unknown_user_create_no_session() {
    let context = TestContext::new();
    let server = context.server();

    let snapshot = server.get(&generator_path("ghost", "")).await;
    snapshot.assert_status_ok();
    assert_eq!(snapshot.json::<Value>()["courses"], json!([]));

    server
        .get(&generator_path("ghost", "/timetables/current"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server
        .post(&generator_path("ghost", "/timetables/next"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server
        .post(&generator_path("ghost", "/timetables/previous"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server
        .post(&generator_path("ghost", "/timetables/apply"))
        .await
        .assert_status(StatusCode::CONFLICT);
    server
        .delete(&generator_path("ghost", "/courses/CS%20F111"))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    assert!(context.state.sessions.lock().await.is_empty());
}

#[tokio::test]
async fn test_remove_course_ignores_surrounding_spaces() {
    let server = TestContext::new().server();
    server
        .post(&generator_path("asha", "/courses"))
        .json(&json!({ "courseCode": " CS F111 " }))
        .await
        .assert_status(StatusCode::CREATED);

    let removed = server
        .delete(&generator_path("asha", "/courses/%20CS%20F111"))
        .await;

    removed.assert_status_ok();
    assert_eq!(removed.json::<Value>()["courseCode"], json!("CS F111"));
}
