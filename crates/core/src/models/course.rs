use serde::{Deserialize, Serialize};

use super::SectionType;

/// A course the user asked the generator to place.
///
/// Built by [`crate::generator::adapter::resolve_course`], which refuses to
/// produce one with an empty `required_sections` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSelection {
    pub course_code: String,
    pub course_name: String,
    pub credits: u32,
    pub required_sections: Vec<SectionType>,
}
