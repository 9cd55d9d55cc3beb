use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::Day;
use crate::{
    errors::{TimetableError, TimetableResult},
    slots,
};

/// Daily-hour cap used when the user has not chosen one.
pub const DEFAULT_MAX_HOURS_PER_DAY: u32 = 8;

/// A single (day, slot) cell the user wants kept free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AvoidSlot {
    pub day: Day,
    pub slot: u8,
}

/// User preferences applied to every generated candidate.
///
/// The generator receives this as an immutable value; the toggle helpers exist
/// for hosts that edit constraints one click at a time before generating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorConstraints {
    pub max_hours_per_day: u32,
    pub avoid_back_to_back: bool,
    pub avoid_slots: BTreeSet<AvoidSlot>,
    pub avoid_lab_days: BTreeSet<Day>,
    pub avoid_lab_slots: BTreeSet<u8>,
    pub avoid_instructors: Vec<String>,
}

impl Default for GeneratorConstraints {
    fn default() -> Self {
        Self {
            max_hours_per_day: DEFAULT_MAX_HOURS_PER_DAY,
            avoid_back_to_back: false,
            avoid_slots: BTreeSet::new(),
            avoid_lab_days: BTreeSet::new(),
            avoid_lab_slots: BTreeSet::new(),
            avoid_instructors: Vec::new(),
        }
    }
}

impl GeneratorConstraints {
    /// Checks value ranges. Called before constraints are accepted into a session.
    pub fn validate(&self) -> TimetableResult<()> {
        if self.max_hours_per_day == 0 {
            return Err(TimetableError::Validation(
                "maxHoursPerDay must be at least 1".to_string(),
            ));
        }

        if let Some(bad) = self.avoid_slots.iter().find(|s| !slots::is_valid_slot(s.slot)) {
            return Err(TimetableError::Validation(format!(
                "avoidSlots contains slot {} on {}, expected 1-11",
                bad.slot, bad.day
            )));
        }

        if let Some(bad) = self.avoid_lab_slots.iter().find(|&&s| !slots::is_valid_slot(s)) {
            return Err(TimetableError::Validation(format!(
                "avoidLabSlots contains slot {}, expected 1-11",
                bad
            )));
        }

        Ok(())
    }

    /// Adds the cell if absent, removes it otherwise. Returns whether it is now avoided.
    pub fn toggle_avoid_slot(&mut self, day: Day, slot: u8) -> bool {
        let cell = AvoidSlot { day, slot };
        if self.avoid_slots.remove(&cell) {
            false
        } else {
            self.avoid_slots.insert(cell)
        }
    }

    pub fn toggle_lab_day(&mut self, day: Day) -> bool {
        if self.avoid_lab_days.remove(&day) {
            false
        } else {
            self.avoid_lab_days.insert(day)
        }
    }

    pub fn toggle_lab_slot(&mut self, slot: u8) -> bool {
        if self.avoid_lab_slots.remove(&slot) {
            false
        } else {
            self.avoid_lab_slots.insert(slot)
        }
    }

    /// Adds a trimmed instructor pattern. Blank and repeated patterns are ignored.
    pub fn add_avoid_instructor(&mut self, pattern: &str) -> bool {
        let pattern = pattern.trim();
        if pattern.is_empty() || self.avoid_instructors.iter().any(|p| p == pattern) {
            return false;
        }
        self.avoid_instructors.push(pattern.to_string());
        true
    }

    pub fn remove_avoid_instructor(&mut self, pattern: &str) -> bool {
        let before = self.avoid_instructors.len();
        self.avoid_instructors.retain(|p| p != pattern);
        self.avoid_instructors.len() != before
    }

    pub fn is_slot_avoided(&self, day: Day, slot: u8) -> bool {
        self.avoid_slots.contains(&AvoidSlot { day, slot })
    }
}
