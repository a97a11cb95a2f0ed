pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::roster::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/dashboard", get(handlers::handle_get_dashboard))
        .route("/api/v1/candidates", get(handlers::handle_list_candidates))
        .route("/api/v1/candidates/:id", get(handlers::handle_get_candidate))
        .route("/api/v1/selection", get(handlers::handle_get_selection))
        .route(
            "/api/v1/selection/:id/toggle",
            post(handlers::handle_toggle_selection),
        )
        .route("/api/v1/compare", get(handlers::handle_get_compare))
        .route("/api/v1/tab", put(handlers::handle_set_tab))
        .route("/api/v1/reload", post(handlers::handle_reload))
        .with_state(state)
}
