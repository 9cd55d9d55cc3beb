use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimetableError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unknown course: {0}")]
    UnknownCourse(String),

    #[error("Course {0} has no lecture, tutorial or practical sections")]
    NoSectionTypes(String),

    #[error("Course already selected: {0}")]
    DuplicateCourse(String),

    #[error("No generated timetables to apply")]
    NoTimetables,

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type TimetableResult<T> = Result<T, TimetableError>;
