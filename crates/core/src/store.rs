//! Boundary to the externally owned "current selected schedule".
//!
//! The generator never reads this store; it only replaces its contents when a
//! ranked timetable is applied.

use async_trait::async_trait;

use crate::{errors::TimetableResult, models::SectionOption};

#[async_trait]
pub trait SelectedScheduleStore: Send + Sync {
    /// Overwrites the owner's whole selected schedule. Never merges.
    async fn replace_selected_sections(
        &self,
        owner: &str,
        sections: &[SectionOption],
    ) -> TimetableResult<()>;

    /// The owner's selected schedule, empty when nothing was stored yet.
    async fn selected_sections(&self, owner: &str) -> TimetableResult<Vec<SectionOption>>;
}
