use serde::Serialize;
use tracing::debug;

use super::{GenerationReport, GeneratorOptions, RankedTimetables, adapter, generate_timetables};
use crate::{
    catalog::Catalog,
    errors::{TimetableError, TimetableResult},
    models::{CourseSelection, GeneratorConstraints},
};

/// Transient per-user generator state: chosen courses, constraints and the
/// last ranking. Any edit to courses or constraints discards the ranking.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorSession {
    courses: Vec<CourseSelection>,
    constraints: GeneratorConstraints,
    #[serde(skip)]
    report: Option<GenerationReport>,
}

impl GeneratorSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_constraints(constraints: GeneratorConstraints) -> TimetableResult<Self> {
        constraints.validate()?;
        Ok(Self {
            constraints,
            ..Self::default()
        })
    }

    pub fn courses(&self) -> &[CourseSelection] {
        &self.courses
    }

    pub fn constraints(&self) -> &GeneratorConstraints {
        &self.constraints
    }

    pub fn report(&self) -> Option<&GenerationReport> {
        self.report.as_ref()
    }

    pub fn ranking(&self) -> Option<&RankedTimetables> {
        self.report.as_ref().map(|r| &r.ranking)
    }

    pub fn ranking_mut(&mut self) -> Option<&mut RankedTimetables> {
        self.report.as_mut().map(|r| &mut r.ranking)
    }

    /// Resolves `code` against the catalog and appends it.
    pub fn add_course(&mut self, catalog: &Catalog, code: &str) -> TimetableResult<&CourseSelection> {
        let code = code.trim();
        if self.courses.iter().any(|c| c.course_code == code) {
            return Err(TimetableError::DuplicateCourse(code.to_string()));
        }

        let selection = adapter::resolve_course(catalog, code)?;
        debug!(
            "Adding course {} requiring {:?}",
            selection.course_code, selection.required_sections
        );
        self.courses.push(selection);
        self.report = None;

        Ok(&self.courses[self.courses.len() - 1])
    }

    pub fn remove_course(&mut self, code: &str) -> TimetableResult<CourseSelection> {
        let code = code.trim();
        let index = self
            .courses
            .iter()
            .position(|c| c.course_code == code)
            .ok_or_else(|| TimetableError::NotFound(format!("Course {} is not selected", code)))?;

        self.report = None;
        Ok(self.courses.remove(index))
    }

    pub fn set_constraints(&mut self, constraints: GeneratorConstraints) -> TimetableResult<()> {
        constraints.validate()?;
        self.constraints = constraints;
        self.report = None;
        Ok(())
    }

    /// Regenerates the ranking from the current courses and constraints.
    pub fn generate(
        &mut self,
        catalog: &Catalog,
        options: &GeneratorOptions,
    ) -> TimetableResult<&GenerationReport> {
        let report = generate_timetables(catalog, &self.courses, &self.constraints, options)?;
        Ok(self.report.insert(report))
    }
}
