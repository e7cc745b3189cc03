use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::employees::adapters::inbound::http as employees_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/internalemployees",
            get(employees_http::list_internal_employees).post(employees_http::create_internal_employee),
        )
        .route(
            "/api/internalemployees/{employee_id}",
            get(employees_http::get_internal_employee),
        )
        .route(
            "/api/internalemployees/{employee_id}/courses/{course_id}",
            post(employees_http::attend_course),
        )
        .route(
            "/api/internalemployees/{employee_id}/raise",
            post(employees_http::give_raise),
        )
        .route(
            "/api/internalemployees/{employee_id}/promotion",
            post(employees_http::promote_internal_employee),
        )
        .route(
            "/api/internalemployees/{employee_id}/absence",
            post(employees_http::notify_of_absence),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
