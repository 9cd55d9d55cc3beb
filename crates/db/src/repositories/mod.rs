pub mod selected_sections;
pub mod user_data;
