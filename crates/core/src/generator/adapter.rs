//! Translation from catalog records to the generator's section groups.

use tracing::debug;

use crate::{
    catalog::{Catalog, CatalogCourse, CatalogSection},
    errors::{TimetableError, TimetableResult},
    models::{CourseSelection, Day, LogicalSection, SectionGroup, SectionOption, SectionType},
    slots,
};

/// Looks a course up and derives which section types it requires.
///
/// Fails with [`TimetableError::UnknownCourse`] when the code is missing and
/// with [`TimetableError::NoSectionTypes`] when no section named `L`, `T` or
/// `P` has a meeting block. A course with no required types would be satisfied
/// by every candidate without ever being placed, so it is refused here.
pub fn resolve_course(catalog: &Catalog, code: &str) -> TimetableResult<CourseSelection> {
    let course = catalog
        .course(code)
        .ok_or_else(|| TimetableError::UnknownCourse(code.to_string()))?;

    let required_sections = required_types(course);
    if required_sections.is_empty() {
        return Err(TimetableError::NoSectionTypes(code.to_string()));
    }

    Ok(CourseSelection {
        course_code: code.to_string(),
        course_name: course.course_name.clone(),
        credits: course.units,
        required_sections,
    })
}

/// Section types with at least one scheduled section, in L, T, P order.
pub fn required_types(course: &CatalogCourse) -> Vec<SectionType> {
    SectionType::ALL
        .into_iter()
        .filter(|&ty| {
            course.sections.iter().any(|(name, section)| {
                SectionType::from_section_name(name) == Some(ty) && is_scheduled(section)
            })
        })
        .collect()
}

/// True when the section has a block with a known day and a slot in range.
fn is_scheduled(section: &CatalogSection) -> bool {
    section.schedule.iter().any(|block| {
        block.days.iter().any(|code| Day::from_code(code).is_some())
            && block
                .hours
                .iter()
                .any(|&hour| u8::try_from(hour).is_ok_and(slots::is_valid_slot))
    })
}

/// Builds one group per required section type, each holding every named
/// section of that type expanded into its meeting blocks.
///
/// Sections that expand to no usable block are never a choice, and types left
/// with no sections are dropped. An unknown course yields no groups.
pub fn section_groups(catalog: &Catalog, selection: &CourseSelection) -> Vec<SectionGroup> {
    let Some(course) = catalog.course(&selection.course_code) else {
        debug!("Course {} missing from catalog", selection.course_code);
        return Vec::new();
    };

    selection
        .required_sections
        .iter()
        .filter_map(|&section_type| {
            let sections: Vec<LogicalSection> = course
                .sections
                .iter()
                .filter(|(name, _)| SectionType::from_section_name(name) == Some(section_type))
                .filter_map(|(name, section)| {
                    let blocks = expand_blocks(selection, section_type, name, section);
                    if blocks.is_empty() {
                        debug!(
                            "Skipping unscheduled section {} {}",
                            selection.course_code, name
                        );
                        return None;
                    }
                    Some(LogicalSection {
                        course_code: selection.course_code.clone(),
                        section_type,
                        name: name.clone(),
                        blocks,
                    })
                })
                .collect();

            if sections.is_empty() {
                None
            } else {
                Some(SectionGroup {
                    course_code: selection.course_code.clone(),
                    section_type,
                    sections,
                })
            }
        })
        .collect()
}

fn expand_blocks(
    selection: &CourseSelection,
    section_type: SectionType,
    name: &str,
    section: &CatalogSection,
) -> Vec<SectionOption> {
    section
        .schedule
        .iter()
        .filter_map(|block| {
            let mut days: Vec<Day> = Vec::with_capacity(block.days.len());
            for code in &block.days {
                match Day::from_code(code) {
                    Some(day) if !days.contains(&day) => days.push(day),
                    Some(_) => {}
                    None => debug!(
                        "Ignoring day {:?} in {} {}",
                        code, selection.course_code, name
                    ),
                }
            }

            let mut slot_list: Vec<u8> = Vec::with_capacity(block.hours.len());
            for &hour in &block.hours {
                if let Ok(slot) = u8::try_from(hour) {
                    if slots::is_valid_slot(slot) && !slot_list.contains(&slot) {
                        slot_list.push(slot);
                    }
                }
            }

            if days.is_empty() || slot_list.is_empty() {
                debug!(
                    "Ignoring block without a usable day or slot in {} {}",
                    selection.course_code, name
                );
                return None;
            }

            Some(SectionOption {
                course_code: selection.course_code.clone(),
                course_title: selection.course_name.clone(),
                section_type,
                section: name.to_string(),
                instructor: section.instructor.clone(),
                room: block.room.clone(),
                days,
                slots: slot_list,
            })
        })
        .collect()
}
