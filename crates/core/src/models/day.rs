use serde::{Deserialize, Serialize};
use std::fmt;

/// A teaching day. Sunday is not part of the academic week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Day {
    #[serde(rename = "M")]
    Monday,
    #[serde(rename = "T")]
    Tuesday,
    #[serde(rename = "W")]
    Wednesday,
    #[serde(rename = "Th")]
    Thursday,
    #[serde(rename = "F")]
    Friday,
    #[serde(rename = "S")]
    Saturday,
}

impl Day {
    /// Every teaching day in week order.
    pub const ALL: [Day; 6] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
    ];

    /// Parses a catalog day code (`M`, `T`, `W`, `Th`, `F`, `S`).
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "M" => Some(Day::Monday),
            "T" => Some(Day::Tuesday),
            "W" => Some(Day::Wednesday),
            "Th" => Some(Day::Thursday),
            "F" => Some(Day::Friday),
            "S" => Some(Day::Saturday),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Day::Monday => "M",
            Day::Tuesday => "T",
            Day::Wednesday => "W",
            Day::Thursday => "Th",
            Day::Friday => "F",
            Day::Saturday => "S",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
