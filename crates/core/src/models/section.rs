use serde::{Deserialize, Serialize};
use std::fmt;

use super::Day;

/// Category of meeting a course may require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SectionType {
    #[serde(rename = "L")]
    Lecture,
    #[serde(rename = "T")]
    Tutorial,
    #[serde(rename = "P")]
    Practical,
}

impl SectionType {
    /// Catalog-declared order.
    pub const ALL: [SectionType; 3] = [
        SectionType::Lecture,
        SectionType::Tutorial,
        SectionType::Practical,
    ];

    pub fn prefix(self) -> char {
        match self {
            SectionType::Lecture => 'L',
            SectionType::Tutorial => 'T',
            SectionType::Practical => 'P',
        }
    }

    /// Classifies a section name such as `L1` or `P3` by its first letter.
    pub fn from_section_name(name: &str) -> Option<Self> {
        match name.chars().next()? {
            'L' => Some(SectionType::Lecture),
            'T' => Some(SectionType::Tutorial),
            'P' => Some(SectionType::Practical),
            _ => None,
        }
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prefix())
    }
}

/// One meeting block of one named section.
///
/// This is also the record written to the selected-schedule store, hence the
/// camelCase field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionOption {
    pub course_code: String,
    pub course_title: String,
    pub section_type: SectionType,
    pub section: String,
    pub instructor: Vec<String>,
    pub room: String,
    pub days: Vec<Day>,
    pub slots: Vec<u8>,
}

impl SectionOption {
    /// True when both blocks belong to the same named section of the same course.
    pub fn same_logical_section(&self, other: &SectionOption) -> bool {
        self.course_code == other.course_code && self.section == other.section
    }

    pub fn meets_on(&self, day: Day) -> bool {
        self.days.contains(&day)
    }

    pub fn occupies(&self, day: Day, slot: u8) -> bool {
        self.meets_on(day) && self.slots.contains(&slot)
    }

    /// Every (day, slot) cell this block covers.
    pub fn cells(&self) -> impl Iterator<Item = (Day, u8)> + '_ {
        self.days
            .iter()
            .flat_map(move |&day| self.slots.iter().map(move |&slot| (day, slot)))
    }

    /// Hours this block contributes to each day it meets on.
    pub fn hours_per_meeting(&self) -> u32 {
        self.slots.len() as u32
    }

    pub fn is_practical(&self) -> bool {
        self.section_type == SectionType::Practical
    }
}

/// A named section with all of its meeting blocks, chosen or skipped as one unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogicalSection {
    pub course_code: String,
    pub section_type: SectionType,
    pub name: String,
    pub blocks: Vec<SectionOption>,
}

/// Every logical section of one type for one course, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionGroup {
    pub course_code: String,
    pub section_type: SectionType,
    pub sections: Vec<LogicalSection>,
}

impl SectionGroup {
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
