use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;
use timetabler_core::models::SectionOption;

use crate::{ApiState, middleware::error_handling::AppError};

/// The stored schedule, empty when the user never applied a timetable.
#[axum::debug_handler]
pub async fn get_selected_schedule(
    State(state): State<Arc<ApiState>>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<SectionOption>>, AppError> {
    let sections = state.store.selected_sections(&user_id).await?;

    Ok(Json(sections))
}
