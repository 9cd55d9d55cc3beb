//! Hard-constraint checks and soft-preference scoring for complete candidates.
//!
//! Checks run in a fixed order and the first failure wins:
//!
//! 1. clash between blocks of different logical sections
//! 2. a day above `max_hours_per_day`
//! 3. a block on an avoided (day, slot) cell
//! 4. a practical on an avoided lab day or lab slot
//! 5. an instructor matching an avoided pattern
//!
//! Scoring starts at [`BASE_SCORE`], subtracts [`BACK_TO_BACK_PENALTY`] for
//! every adjacency when back-to-back classes are avoided, subtracts
//! [`VARIANCE_WEIGHT`] times the variance of daily hours and adds
//! [`FREE_DAY_BONUS`] per empty day. Scores are unbounded in both directions.

use tracing::trace;

use crate::models::{Day, GeneratedTimetable, GeneratorConstraints, HoursPerDay, SectionOption};

pub const BASE_SCORE: f64 = 100.0;
pub const BACK_TO_BACK_PENALTY: f64 = 10.0;
pub const VARIANCE_WEIGHT: f64 = 2.0;
pub const FREE_DAY_BONUS: f64 = 5.0;

/// Which hard check rejected a candidate. Kept for logging only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Clash,
    DailyHours,
    AvoidedSlot,
    AvoidedLab,
    AvoidedInstructor,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Rejected(Rejection),
    Accepted { score: f64, hours_per_day: HoursPerDay },
}

/// Constraint table prepared once per generation run.
#[derive(Debug, Clone)]
pub struct Validator<'a> {
    constraints: &'a GeneratorConstraints,
    avoided_instructors: Vec<String>,
}

impl<'a> Validator<'a> {
    pub fn new(constraints: &'a GeneratorConstraints) -> Self {
        let avoided_instructors = constraints
            .avoid_instructors
            .iter()
            .map(|p| p.to_lowercase())
            .filter(|p| !p.is_empty())
            .collect();

        Self {
            constraints,
            avoided_instructors,
        }
    }

    pub fn validate(&self, sections: &[SectionOption]) -> Verdict {
        if has_clash(sections) {
            return Verdict::Rejected(Rejection::Clash);
        }

        let hours_per_day = HoursPerDay::from_sections(sections);
        if hours_per_day.max() > self.constraints.max_hours_per_day {
            return Verdict::Rejected(Rejection::DailyHours);
        }

        if sections.iter().any(|s| self.occupies_avoided_slot(s)) {
            return Verdict::Rejected(Rejection::AvoidedSlot);
        }

        if sections.iter().any(|s| self.violates_lab_placement(s)) {
            return Verdict::Rejected(Rejection::AvoidedLab);
        }

        if sections.iter().any(|s| self.teaches_avoided(s)) {
            return Verdict::Rejected(Rejection::AvoidedInstructor);
        }

        let score = self.score(sections, &hours_per_day);
        Verdict::Accepted {
            score,
            hours_per_day,
        }
    }

    /// Validates and, on success, packages the candidate.
    pub fn accept(&self, sections: &[SectionOption]) -> Option<GeneratedTimetable> {
        match self.validate(sections) {
            Verdict::Accepted {
                score,
                hours_per_day,
            } => Some(GeneratedTimetable {
                sections: sections.to_vec(),
                score,
                hours_per_day,
            }),
            Verdict::Rejected(reason) => {
                trace!("Candidate with {} blocks rejected: {:?}", sections.len(), reason);
                None
            }
        }
    }

    /// True when no completion of `partial + next` can pass the hard checks.
    ///
    /// Every condition tested here only gets worse as more blocks are added,
    /// so pruning on it never drops a candidate the full check would accept.
    pub fn rules_out(&self, partial: &[SectionOption], next: &[SectionOption]) -> bool {
        if next.iter().any(|block| self.block_violation(block).is_some()) {
            return true;
        }

        let clashes = next.iter().any(|block| {
            partial
                .iter()
                .any(|chosen| !chosen.same_logical_section(block) && blocks_clash(chosen, block))
        });
        if clashes {
            return true;
        }

        let mut hours = HoursPerDay::from_sections(partial);
        for block in next {
            for &day in &block.days {
                hours.add(day, block.hours_per_meeting());
            }
        }
        hours.max() > self.constraints.max_hours_per_day
    }

    /// Checks 3 to 5, which depend on one block alone.
    fn block_violation(&self, section: &SectionOption) -> Option<Rejection> {
        if self.occupies_avoided_slot(section) {
            Some(Rejection::AvoidedSlot)
        } else if self.violates_lab_placement(section) {
            Some(Rejection::AvoidedLab)
        } else if self.teaches_avoided(section) {
            Some(Rejection::AvoidedInstructor)
        } else {
            None
        }
    }

    fn occupies_avoided_slot(&self, section: &SectionOption) -> bool {
        section
            .cells()
            .any(|(day, slot)| self.constraints.is_slot_avoided(day, slot))
    }

    fn violates_lab_placement(&self, section: &SectionOption) -> bool {
        if !section.is_practical() {
            return false;
        }
        section
            .days
            .iter()
            .any(|day| self.constraints.avoid_lab_days.contains(day))
            || section
                .slots
                .iter()
                .any(|slot| self.constraints.avoid_lab_slots.contains(slot))
    }

    fn teaches_avoided(&self, section: &SectionOption) -> bool {
        if self.avoided_instructors.is_empty() {
            return false;
        }
        section.instructor.iter().any(|name| {
            let name = name.to_lowercase();
            self.avoided_instructors.iter().any(|p| name.contains(p.as_str()))
        })
    }

    fn score(&self, sections: &[SectionOption], hours_per_day: &HoursPerDay) -> f64 {
        let mut score = BASE_SCORE;

        if self.constraints.avoid_back_to_back {
            score -= BACK_TO_BACK_PENALTY * back_to_back_count(sections) as f64;
        }

        score -= VARIANCE_WEIGHT * hours_per_day.variance();
        score += FREE_DAY_BONUS * hours_per_day.free_days() as f64;

        score
    }
}

/// Convenience wrapper for one-off checks.
pub fn validate(sections: &[SectionOption], constraints: &GeneratorConstraints) -> Verdict {
    Validator::new(constraints).validate(sections)
}

/// True when two blocks share at least one (day, slot) cell.
pub fn blocks_clash(a: &SectionOption, b: &SectionOption) -> bool {
    a.cells().any(|(day, slot)| b.occupies(day, slot))
}

/// Pairwise clash test, skipping pairs inside one logical section.
pub fn has_clash(sections: &[SectionOption]) -> bool {
    sections.iter().enumerate().any(|(i, a)| {
        sections[i + 1..]
            .iter()
            .any(|b| !a.same_logical_section(b) && blocks_clash(a, b))
    })
}

/// Number of (block pair, shared day) combinations with adjacent slots.
///
/// Every pair of distinct blocks counts, including two blocks of one section.
pub fn back_to_back_count(sections: &[SectionOption]) -> usize {
    let mut count = 0;
    for (i, a) in sections.iter().enumerate() {
        for b in &sections[i + 1..] {
            let adjacent = a
                .slots
                .iter()
                .any(|&s1| b.slots.iter().any(|&s2| s1.abs_diff(s2) == 1));
            if !adjacent {
                continue;
            }
            count += Day::ALL
                .iter()
                .filter(|&&day| a.meets_on(day) && b.meets_on(day))
                .count();
        }
    }
    count
}
