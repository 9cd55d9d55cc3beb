use axum::{Router, routing::get};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/catalog/courses", get(handlers::catalog::search_courses))
        .route(
            "/api/catalog/instructors",
            get(handlers::catalog::list_instructors),
        )
        .route("/api/catalog/slots", get(handlers::catalog::slot_table))
}
