use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use timetabler_core::{catalog::CourseSummary, models::Day, slots};
use tracing::debug;

use crate::ApiState;

#[derive(Debug, Default, Deserialize)]
pub struct CourseSearchQuery {
    #[serde(default)]
    pub q: String,
    pub limit: Option<usize>,
    /// Comma-separated course codes to leave out of the results.
    #[serde(default)]
    pub exclude: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotLabel {
    pub slot: u8,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayLabel {
    pub code: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SlotTableResponse {
    pub days: Vec<DayLabel>,
    pub slots: Vec<SlotLabel>,
}

/// Search is capped by the configured limit even when the query asks for more.
#[axum::debug_handler]
pub async fn search_courses(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<CourseSearchQuery>,
) -> Json<Vec<CourseSummary>> {
    let limit = query
        .limit
        .map_or(state.search_limit, |l| l.min(state.search_limit));
    let exclude: Vec<&str> = query
        .exclude
        .split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .collect();

    let hits = state.catalog.search(&query.q, &exclude, limit);
    debug!("Course search {:?} matched {} courses", query.q, hits.len());

    Json(hits)
}

#[axum::debug_handler]
pub async fn list_instructors(State(state): State<Arc<ApiState>>) -> Json<Vec<String>> {
    Json(state.catalog.instructors())
}

#[axum::debug_handler]
pub async fn slot_table() -> Json<SlotTableResponse> {
    let days = Day::ALL
        .iter()
        .map(|day| DayLabel {
            code: day.code(),
            name: day.name(),
        })
        .collect();
    let slots = slots::SLOT_MAP
        .iter()
        .map(|&(slot, label)| SlotLabel { slot, label })
        .collect();

    Json(SlotTableResponse { days, slots })
}
