use axum::{routing::get, Router};

use crate::state::AppState;

pub mod dashboard;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(dashboard::health_check))
        .route("/api/logs", get(dashboard::get_logs))
        .route("/api/interfaces", get(dashboard::get_interfaces))
        .with_state(state)
}
