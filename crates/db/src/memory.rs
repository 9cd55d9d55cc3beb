use async_trait::async_trait;
use std::collections::HashMap;
use timetabler_core::{
    errors::TimetableResult, models::SectionOption, store::SelectedScheduleStore,
};
use tokio::sync::RwLock;

/// Process-local selected-schedule store, used when no database is configured.
#[derive(Debug, Default)]
pub struct MemoryScheduleStore {
    schedules: RwLock<HashMap<String, Vec<SectionOption>>>,
}

impl MemoryScheduleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn owners(&self) -> Vec<String> {
        let mut owners: Vec<String> = self.schedules.read().await.keys().cloned().collect();
        owners.sort();
        owners
    }
}

#[async_trait]
impl SelectedScheduleStore for MemoryScheduleStore {
    async fn replace_selected_sections(
        &self,
        owner: &str,
        sections: &[SectionOption],
    ) -> TimetableResult<()> {
        self.schedules
            .write()
            .await
            .insert(owner.to_string(), sections.to_vec());
        Ok(())
    }

    async fn selected_sections(&self, owner: &str) -> TimetableResult<Vec<SectionOption>> {
        Ok(self
            .schedules
            .read()
            .await
            .get(owner)
            .cloned()
            .unwrap_or_default())
    }
}
