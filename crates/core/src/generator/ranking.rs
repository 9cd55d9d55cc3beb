use serde::Serialize;
use tracing::info;

use crate::{
    errors::{TimetableError, TimetableResult},
    models::GeneratedTimetable,
    store::SelectedScheduleStore,
};

/// Accepted candidates ordered by score, with a cursor for browsing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedTimetables {
    timetables: Vec<GeneratedTimetable>,
    current: usize,
}

impl RankedTimetables {
    /// Sorts by score, highest first. Equal scores keep discovery order.
    pub fn new(mut timetables: Vec<GeneratedTimetable>) -> Self {
        timetables.sort_by(|a, b| b.score.total_cmp(&a.score));
        Self {
            timetables,
            current: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.timetables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timetables.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GeneratedTimetable> {
        self.timetables.iter()
    }

    pub fn get(&self, index: usize) -> Option<&GeneratedTimetable> {
        self.timetables.get(index)
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> Option<&GeneratedTimetable> {
        self.timetables.get(self.current)
    }

    /// Moves the cursor forward, stopping at the last candidate.
    pub fn next(&mut self) -> usize {
        self.select(self.current.saturating_add(1))
    }

    /// Moves the cursor back, stopping at the first candidate.
    pub fn previous(&mut self) -> usize {
        self.select(self.current.saturating_sub(1))
    }

    /// Moves the cursor to `index`, clamped to the list bounds.
    pub fn select(&mut self, index: usize) -> usize {
        self.current = index.min(self.timetables.len().saturating_sub(1));
        self.current
    }

    /// Replaces `owner`'s selected schedule with every block of the current candidate.
    ///
    /// Neither the ranking nor the cursor changes.
    pub async fn apply<S>(&self, store: &S, owner: &str) -> TimetableResult<&GeneratedTimetable>
    where
        S: SelectedScheduleStore + ?Sized,
    {
        let timetable = self.current().ok_or(TimetableError::NoTimetables)?;

        store
            .replace_selected_sections(owner, &timetable.sections)
            .await?;

        info!(
            "Applied timetable {} of {} for {} ({} blocks, score {:.2})",
            self.current + 1,
            self.len(),
            owner,
            timetable.sections.len(),
            timetable.score
        );
        Ok(timetable)
    }
}
