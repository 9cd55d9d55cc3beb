//! In-memory course catalog.
//!
//! The shape follows the published course-data JSON: a metadata header and a map
//! from course code to course record, where each course maps section names to
//! instructors and weekly meeting blocks.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::errors::{TimetableError, TimetableResult};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogMetadata {
    pub acad_year: u32,
    pub semester: u32,
}

/// One weekly meeting block of a section as recorded in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingBlock {
    #[serde(default)]
    pub room: String,
    #[serde(default)]
    pub days: Vec<String>,
    #[serde(default)]
    pub hours: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSection {
    #[serde(default)]
    pub instructor: Vec<String>,
    #[serde(default)]
    pub schedule: Vec<MeetingBlock>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamDates {
    pub midsem: String,
    pub compre: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogCourse {
    #[serde(default)]
    pub units: u32,
    pub course_name: String,
    #[serde(default)]
    pub sections: BTreeMap<String, CatalogSection>,
    #[serde(default)]
    pub exams: Vec<ExamDates>,
}

impl CatalogCourse {
    pub fn has_sections(&self) -> bool {
        !self.sections.is_empty()
    }
}

/// Search hit returned by [`Catalog::search`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSummary {
    pub course_code: String,
    pub course_name: String,
    pub credits: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub metadata: CatalogMetadata,
    #[serde(default)]
    pub courses: BTreeMap<String, CatalogCourse>,
}

impl Catalog {
    pub fn from_json_str(json: &str) -> TimetableResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| TimetableError::Validation(format!("Invalid catalog document: {}", e)))
    }

    pub fn course(&self, code: &str) -> Option<&CatalogCourse> {
        self.courses.get(code)
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Case-insensitive match on code or name.
    ///
    /// Courses without sections and codes listed in `exclude` never match. An
    /// empty query matches every remaining course.
    pub fn search(&self, query: &str, exclude: &[&str], limit: usize) -> Vec<CourseSummary> {
        let query = query.trim().to_lowercase();
        self.courses
            .iter()
            .filter(|(code, course)| {
                if !course.has_sections() || exclude.contains(&code.as_str()) {
                    return false;
                }
                query.is_empty()
                    || code.to_lowercase().contains(&query)
                    || course.course_name.to_lowercase().contains(&query)
            })
            .take(limit)
            .map(|(code, course)| CourseSummary {
                course_code: code.clone(),
                course_name: course.course_name.clone(),
                credits: course.units,
            })
            .collect()
    }

    /// Every instructor named anywhere in the catalog, sorted and de-duplicated.
    pub fn instructors(&self) -> Vec<String> {
        let names: BTreeSet<&str> = self
            .courses
            .values()
            .flat_map(|course| course.sections.values())
            .flat_map(|section| section.instructor.iter().map(String::as_str))
            .collect();
        names.into_iter().map(str::to_string).collect()
    }
}
