use axum::{Router, routing::get};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new().route(
        "/api/users/:user_id/schedule",
        get(handlers::schedule::get_selected_schedule),
    )
}
