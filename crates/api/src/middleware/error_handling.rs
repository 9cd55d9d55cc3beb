//! # Error Handling Middleware
//!
//! Maps [`TimetableError`] onto HTTP status codes and a JSON body of the form
//! `{"error": "<message>"}`, so every handler reports failures the same way.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use timetabler_core::errors::TimetableError;
use tracing::error;

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use timetabler_api::middleware::error_handling::AppError;
/// use timetabler_core::{catalog::Catalog, errors::TimetableError};
///
/// fn course_name(catalog: &Catalog, code: &str) -> Result<Json<String>, AppError> {
///     let course = catalog
///         .course(code)
///         .ok_or_else(|| TimetableError::UnknownCourse(code.to_string()))?;
///     Ok(Json(course.course_name.clone()))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub TimetableError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            TimetableError::NotFound(_) => StatusCode::NOT_FOUND,
            TimetableError::Validation(_) => StatusCode::BAD_REQUEST,
            TimetableError::UnknownCourse(_) => StatusCode::NOT_FOUND,
            TimetableError::NoSectionTypes(_) => StatusCode::UNPROCESSABLE_ENTITY,
            TimetableError::DuplicateCourse(_) => StatusCode::CONFLICT,
            TimetableError::NoTimetables => StatusCode::CONFLICT,
            TimetableError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            TimetableError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {}", self.0);
        }

        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

/// Allows `?` on `TimetableResult` inside handlers.
impl From<TimetableError> for AppError {
    fn from(err: TimetableError) -> Self {
        AppError(err)
    }
}

/// Repository errors surface as database failures.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(TimetableError::Database(err))
    }
}

/// Maps a TimetableError to an HTTP response
pub fn map_error(err: TimetableError) -> Response {
    AppError(err).into_response()
}
