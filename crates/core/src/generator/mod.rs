//! # Timetable generator
//!
//! Generation is a pure function of the selected courses, the constraints and
//! the catalog. It runs synchronously on the calling thread; hosts that must
//! stay responsive should call it from a blocking worker.

pub mod adapter;
pub mod enumerator;
pub mod ranking;
pub mod session;
pub mod validator;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    catalog::Catalog,
    errors::{TimetableError, TimetableResult},
    models::{CourseSelection, GeneratorConstraints, SectionGroup},
};

pub use enumerator::{EnumerationOutcome, Enumerator};
pub use ranking::RankedTimetables;
pub use session::GeneratorSession;
pub use validator::{Rejection, Validator, Verdict};

/// Default cap on accepted candidates per run.
pub const DEFAULT_MAX_TIMETABLES: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorOptions {
    /// Enumeration stops once this many candidates have been accepted.
    pub max_timetables: usize,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            max_timetables: DEFAULT_MAX_TIMETABLES,
        }
    }
}

/// Ranked result of one generation run plus search statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationReport {
    pub ranking: RankedTimetables,
    pub visited: u64,
    pub pruned: u64,
    pub truncated: bool,
}

impl GenerationReport {
    pub fn is_empty(&self) -> bool {
        self.ranking.is_empty()
    }
}

/// Enumerates, validates and ranks every feasible timetable for `courses`.
///
/// An empty course list produces an empty report. Finding no feasible
/// combination is not an error either; the report is simply empty.
pub fn generate_timetables(
    catalog: &Catalog,
    courses: &[CourseSelection],
    constraints: &GeneratorConstraints,
    options: &GeneratorOptions,
) -> TimetableResult<GenerationReport> {
    constraints.validate()?;

    if courses.is_empty() {
        return Ok(GenerationReport::default());
    }

    let mut course_groups: Vec<Vec<SectionGroup>> = Vec::with_capacity(courses.len());
    for course in courses {
        let groups = adapter::section_groups(catalog, course);
        if groups.is_empty() {
            return Err(TimetableError::UnknownCourse(course.course_code.clone()));
        }
        course_groups.push(groups);
    }

    let enumerator = Enumerator::new(&course_groups, options.max_timetables);
    let validator = Validator::new(constraints);
    debug!(
        "Enumerating {} courses over {} levels, at most {} combinations",
        courses.len(),
        enumerator.depth(),
        enumerator.combinations()
    );

    let outcome = enumerator.run(&validator);
    debug!(
        "Generation finished: {} accepted, {} visited, {} pruned, truncated={}",
        outcome.accepted.len(),
        outcome.visited,
        outcome.pruned,
        outcome.truncated
    );

    Ok(GenerationReport {
        ranking: RankedTimetables::new(outcome.accepted),
        visited: outcome.visited,
        pruned: outcome.pruned,
        truncated: outcome.truncated,
    })
}
