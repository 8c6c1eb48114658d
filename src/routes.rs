use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tracing::info;

use crate::handlers::api::{
    check_interval_free, find_free_interval, get_free_intervals, get_schedule, get_taken_slots,
    AppState,
};
use crate::handlers::health::health_check;

/// Build the application router, mounting every route under `path_prefix`.
pub fn create_router(app_state: Arc<AppState>, path_prefix: &str) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/", get(get_schedule))
        .route("/find_free_interval", post(find_free_interval))
        .route("/:date/taken_slots", get(get_taken_slots))
        .route("/:date/free_intervals", get(get_free_intervals))
        .route("/:date/is_free", post(check_interval_free));

    let router = if path_prefix.is_empty() {
        api_routes
    } else {
        info!("Serving schedule API under prefix {}", path_prefix);
        Router::new().nest(path_prefix, api_routes)
    };

    router.with_state(app_state)
}
