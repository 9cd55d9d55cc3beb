//! Depth-first walk over one logical section per (course, section type).

use crate::models::{GeneratedTimetable, SectionGroup, SectionOption};

use super::validator::Validator;

/// What one enumeration run produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnumerationOutcome {
    /// Accepted candidates in discovery order.
    pub accepted: Vec<GeneratedTimetable>,
    /// Complete candidates handed to the validator.
    pub visited: u64,
    /// Subtrees skipped because no leaf below them could be accepted.
    pub pruned: u64,
    /// The accepted-candidate cap was reached; more candidates may exist.
    pub truncated: bool,
}

/// Enumerates candidates over a fixed sequence of levels.
///
/// A level is one [`SectionGroup`]: courses in the order given, and within a
/// course its groups in the order given. Sections inside a group are tried in
/// their stored order, so identical input always produces identical output.
#[derive(Debug, Clone)]
pub struct Enumerator<'a> {
    levels: Vec<&'a SectionGroup>,
    limit: usize,
}

struct SearchState {
    chosen: Vec<SectionOption>,
    outcome: EnumerationOutcome,
}

impl<'a> Enumerator<'a> {
    pub fn new(courses: &'a [Vec<SectionGroup>], limit: usize) -> Self {
        let levels = courses
            .iter()
            .flat_map(|groups| groups.iter())
            .filter(|group| !group.is_empty())
            .collect();

        Self { levels, limit }
    }

    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// Upper bound on complete candidates, saturating on overflow.
    pub fn combinations(&self) -> u64 {
        self.levels
            .iter()
            .fold(1u64, |acc, group| acc.saturating_mul(group.sections.len() as u64))
    }

    pub fn run(&self, validator: &Validator<'_>) -> EnumerationOutcome {
        let mut state = SearchState {
            chosen: Vec::new(),
            outcome: EnumerationOutcome::default(),
        };

        if self.limit == 0 {
            state.outcome.truncated = true;
            return state.outcome;
        }

        self.descend(0, &mut state, validator);
        state.outcome
    }

    fn descend(&self, depth: usize, state: &mut SearchState, validator: &Validator<'_>) {
        if state.outcome.truncated {
            return;
        }

        let Some(group) = self.levels.get(depth) else {
            state.outcome.visited += 1;
            if let Some(timetable) = validator.accept(&state.chosen) {
                state.outcome.accepted.push(timetable);
                if state.outcome.accepted.len() >= self.limit {
                    state.outcome.truncated = true;
                }
            }
            return;
        };

        for section in &group.sections {
            if state.outcome.truncated {
                return;
            }

            if validator.rules_out(&state.chosen, &section.blocks) {
                state.outcome.pruned += 1;
                continue;
            }

            let mark = state.chosen.len();
            state.chosen.extend(section.blocks.iter().cloned());
            self.descend(depth + 1, state, validator);
            state.chosen.truncate(mark);
        }
    }
}
