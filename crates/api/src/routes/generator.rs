use axum::{
    Router,
    routing::{delete, get, post, put},
};
use std::sync::Arc;

use crate::{ApiState, handlers::generator};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/users/:user_id/generator", get(generator::get_session))
        .route(
            "/api/users/:user_id/generator/courses",
            post(generator::add_course),
        )
        .route(
            "/api/users/:user_id/generator/courses/:course_code",
            delete(generator::remove_course),
        )
        .route(
            "/api/users/:user_id/generator/constraints",
            put(generator::set_constraints),
        )
        .route(
            "/api/users/:user_id/generator/generate",
            post(generator::generate),
        )
        .route(
            "/api/users/:user_id/generator/timetables/current",
            get(generator::current_timetable),
        )
        .route(
            "/api/users/:user_id/generator/timetables/next",
            post(generator::next_timetable),
        )
        .route(
            "/api/users/:user_id/generator/timetables/previous",
            post(generator::previous_timetable),
        )
        .route(
            "/api/users/:user_id/generator/timetables/apply",
            post(generator::apply_timetable),
        )
}
