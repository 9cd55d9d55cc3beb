pub mod constraints;
pub mod course;
pub mod day;
pub mod section;
pub mod timetable;

pub use constraints::{AvoidSlot, GeneratorConstraints};
pub use course::CourseSelection;
pub use day::Day;
pub use section::{LogicalSection, SectionGroup, SectionOption, SectionType};
pub use timetable::{GeneratedTimetable, HoursPerDay};
