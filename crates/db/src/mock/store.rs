use async_trait::async_trait;
use mockall::mock;
use timetabler_core::{
    errors::TimetableResult, models::SectionOption, store::SelectedScheduleStore,
};

// Mock selected-schedule store for testing
mock! {
    pub ScheduleStore {}

    #[async_trait]
    impl SelectedScheduleStore for ScheduleStore {
        async fn replace_selected_sections(
            &self,
            owner: &str,
            sections: &[SectionOption],
        ) -> TimetableResult<()>;

        async fn selected_sections(
            &self,
            owner: &str,
        ) -> TimetableResult<Vec<SectionOption>>;
    }
}
