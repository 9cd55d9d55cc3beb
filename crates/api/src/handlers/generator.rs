use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use timetabler_core::{
    errors::{TimetableError, TimetableResult},
    generator::{GenerationReport, GeneratorSession, RankedTimetables},
    models::{CourseSelection, GeneratedTimetable, GeneratorConstraints},
};
use tracing::{debug, info};

use crate::{ApiState, middleware::error_handling::AppError};

/// Shown when a run finds nothing that satisfies the constraints.
pub const NO_TIMETABLE_MESSAGE: &str = "no valid timetable under current constraints";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCourseRequest {
    pub course_code: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub courses: Vec<CourseSelection>,
    pub constraints: GeneratorConstraints,
    /// `None` until generation has run for the current inputs.
    pub timetable_count: Option<usize>,
    pub current_index: Option<usize>,
}

impl SessionResponse {
    fn from_session(session: &GeneratorSession) -> Self {
        let ranking = session.ranking();
        Self {
            courses: session.courses().to_vec(),
            constraints: session.constraints().clone(),
            timetable_count: ranking.map(RankedTimetables::len),
            current_index: ranking
                .filter(|r| !r.is_empty())
                .map(RankedTimetables::current_index),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub count: usize,
    pub truncated: bool,
    pub visited: u64,
    pub pruned: u64,
    pub current_index: Option<usize>,
    pub current: Option<GeneratedTimetable>,
    pub message: Option<String>,
    pub generated_at: DateTime<Utc>,
}

impl GenerateResponse {
    fn from_report(report: &GenerationReport) -> Self {
        let ranking = &report.ranking;
        Self {
            count: ranking.len(),
            truncated: report.truncated,
            visited: report.visited,
            pruned: report.pruned,
            current_index: ranking.current().map(|_| ranking.current_index()),
            current: ranking.current().cloned(),
            message: report
                .is_empty()
                .then(|| NO_TIMETABLE_MESSAGE.to_string()),
            generated_at: Utc::now(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableView {
    pub index: usize,
    pub count: usize,
    pub timetable: GeneratedTimetable,
}

fn not_generated() -> TimetableError {
    TimetableError::NotFound("No timetables generated for the current selection".to_string())
}

fn current_view(ranking: Option<&RankedTimetables>) -> TimetableResult<TimetableView> {
    let ranking = ranking.ok_or_else(not_generated)?;
    let timetable = ranking
        .current()
        .ok_or_else(|| TimetableError::NotFound(NO_TIMETABLE_MESSAGE.to_string()))?;

    Ok(TimetableView {
        index: ranking.current_index(),
        count: ranking.len(),
        timetable: timetable.clone(),
    })
}

#[axum::debug_handler]
pub async fn get_session(
    State(state): State<Arc<ApiState>>,
    Path(user_id): Path<String>,
) -> Json<SessionResponse> {
    let Some(session) = state.existing_session(&user_id).await else {
        return Json(SessionResponse::from_session(&GeneratorSession::new()));
    };
    let session = session.lock().await;

    Json(SessionResponse::from_session(&session))
}

#[axum::debug_handler]
pub async fn add_course(
    State(state): State<Arc<ApiState>>,
    Path(user_id): Path<String>,
    Json(payload): Json<AddCourseRequest>,
) -> Result<(StatusCode, Json<CourseSelection>), AppError> {
    let session = state.session(&user_id).await;
    let mut session = session.lock().await;

    let selection = session.add_course(&state.catalog, &payload.course_code)?.clone();
    debug!("{} added {}", user_id, selection.course_code);

    Ok((StatusCode::CREATED, Json(selection)))
}

#[axum::debug_handler]
pub async fn remove_course(
    State(state): State<Arc<ApiState>>,
    Path((user_id, course_code)): Path<(String, String)>,
) -> Result<Json<CourseSelection>, AppError> {
    let session = state.existing_session(&user_id).await.ok_or_else(|| {
        TimetableError::NotFound(format!("Course {} is not selected", course_code.trim()))
    })?;
    let mut session = session.lock().await;

    let removed = session.remove_course(&course_code)?;
    debug!("{} removed {}", user_id, removed.course_code);

    Ok(Json(removed))
}

#[axum::debug_handler]
pub async fn set_constraints(
    State(state): State<Arc<ApiState>>,
    Path(user_id): Path<String>,
    Json(constraints): Json<GeneratorConstraints>,
) -> Result<Json<GeneratorConstraints>, AppError> {
    let session = state.session(&user_id).await;
    let mut session = session.lock().await;

    session.set_constraints(constraints)?;

    Ok(Json(session.constraints().clone()))
}

/// Runs generation on a blocking worker while the user's session stays locked.
#[axum::debug_handler]
pub async fn generate(
    State(state): State<Arc<ApiState>>,
    Path(user_id): Path<String>,
) -> Result<Json<GenerateResponse>, AppError> {
    let session = state.session(&user_id).await;
    let mut session = session.lock_owned().await;
    let catalog = Arc::clone(&state.catalog);
    let options = state.options;

    let response = tokio::task::spawn_blocking(move || -> TimetableResult<GenerateResponse> {
        let report = session.generate(&catalog, &options)?;
        Ok(GenerateResponse::from_report(report))
    })
    .await
    .map_err(|e| TimetableError::Internal(Box::new(e)))??;

    info!(
        "Generated {} timetables for {} (truncated={})",
        response.count, user_id, response.truncated
    );

    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn current_timetable(
    State(state): State<Arc<ApiState>>,
    Path(user_id): Path<String>,
) -> Result<Json<TimetableView>, AppError> {
    let session = state
        .existing_session(&user_id)
        .await
        .ok_or_else(not_generated)?;
    let session = session.lock().await;

    Ok(Json(current_view(session.ranking())?))
}

#[axum::debug_handler]
pub async fn next_timetable(
    State(state): State<Arc<ApiState>>,
    Path(user_id): Path<String>,
) -> Result<Json<TimetableView>, AppError> {
    let session = state
        .existing_session(&user_id)
        .await
        .ok_or_else(not_generated)?;
    let mut session = session.lock().await;

    if let Some(ranking) = session.ranking_mut() {
        ranking.next();
    }

    Ok(Json(current_view(session.ranking())?))
}

#[axum::debug_handler]
pub async fn previous_timetable(
    State(state): State<Arc<ApiState>>,
    Path(user_id): Path<String>,
) -> Result<Json<TimetableView>, AppError> {
    let session = state
        .existing_session(&user_id)
        .await
        .ok_or_else(not_generated)?;
    let mut session = session.lock().await;

    if let Some(ranking) = session.ranking_mut() {
        ranking.previous();
    }

    Ok(Json(current_view(session.ranking())?))
}

/// Replaces the user's stored schedule with the current candidate.
#[axum::debug_handler]
pub async fn apply_timetable(
    State(state): State<Arc<ApiState>>,
    Path(user_id): Path<String>,
) -> Result<Json<TimetableView>, AppError> {
    let session = state
        .existing_session(&user_id)
        .await
        .ok_or(TimetableError::NoTimetables)?;
    let session = session.lock().await;

    let ranking = session.ranking().ok_or(TimetableError::NoTimetables)?;
    let timetable = ranking.apply(state.store.as_ref(), &user_id).await?;

    Ok(Json(TimetableView {
        index: ranking.current_index(),
        count: ranking.len(),
        timetable: timetable.clone(),
    }))
}
