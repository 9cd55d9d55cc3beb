use async_trait::async_trait;
use timetabler_core::{
    errors::{TimetableError, TimetableResult},
    models::SectionOption,
    store::SelectedScheduleStore,
};

use super::user_data;
use crate::DbPool;

/// Document key holding a user's current selected schedule.
pub const SELECTED_SECTIONS_KEY: &str = "selectedSections";

/// Selected-schedule store backed by the `user_data` table.
#[derive(Debug, Clone)]
pub struct PgScheduleStore {
    pool: DbPool,
}

impl PgScheduleStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SelectedScheduleStore for PgScheduleStore {
    async fn replace_selected_sections(
        &self,
        owner: &str,
        sections: &[SectionOption],
    ) -> TimetableResult<()> {
        let value =
            serde_json::to_value(sections).map_err(|e| TimetableError::Internal(Box::new(e)))?;

        user_data::set_value(&self.pool, owner, SELECTED_SECTIONS_KEY, &value).await?;
        Ok(())
    }

    async fn selected_sections(&self, owner: &str) -> TimetableResult<Vec<SectionOption>> {
        let Some(row) = user_data::get_value(&self.pool, owner, SELECTED_SECTIONS_KEY).await?
        else {
            return Ok(Vec::new());
        };

        serde_json::from_value(row.value).map_err(|e| TimetableError::Internal(Box::new(e)))
    }
}
