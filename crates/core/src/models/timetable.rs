use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Day, SectionOption};

/// Scheduled hours for each of the six teaching days. Days without classes hold 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HoursPerDay(BTreeMap<Day, u32>);

impl Default for HoursPerDay {
    fn default() -> Self {
        Self(Day::ALL.iter().map(|&day| (day, 0)).collect())
    }
}

impl HoursPerDay {
    /// Sums the hours of every block on every day it meets.
    pub fn from_sections(sections: &[SectionOption]) -> Self {
        let mut hours = Self::default();
        for section in sections {
            for &day in &section.days {
                hours.add(day, section.hours_per_meeting());
            }
        }
        hours
    }

    pub fn get(&self, day: Day) -> u32 {
        self.0.get(&day).copied().unwrap_or(0)
    }

    pub fn add(&mut self, day: Day, hours: u32) {
        *self.0.entry(day).or_insert(0) += hours;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Day, u32)> + '_ {
        self.0.iter().map(|(&day, &hours)| (day, hours))
    }

    pub fn max(&self) -> u32 {
        self.0.values().copied().max().unwrap_or(0)
    }

    pub fn free_days(&self) -> usize {
        Day::ALL.iter().filter(|&&day| self.get(day) == 0).count()
    }

    /// Population variance over all six days.
    pub fn variance(&self) -> f64 {
        let values: Vec<f64> = Day::ALL.iter().map(|&day| f64::from(self.get(day))).collect();
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        values.iter().map(|h| (h - mean).powi(2)).sum::<f64>() / n
    }
}

/// One accepted candidate. Immutable once produced by the validator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedTimetable {
    pub sections: Vec<SectionOption>,
    pub score: f64,
    pub hours_per_day: HoursPerDay,
}
