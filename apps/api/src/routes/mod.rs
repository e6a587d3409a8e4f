pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::export::handlers as export_handlers;
use crate::generation::handlers as letter_handlers;
use crate::profile::handlers as profile_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Profile API
        .route(
            "/api/v1/profile",
            get(profile_handlers::handle_get_profile).put(profile_handlers::handle_save_profile),
        )
        // Letters API
        .route(
            "/api/v1/letters/analyze",
            post(letter_handlers::handle_analyze),
        )
        .route(
            "/api/v1/letters/generate",
            post(letter_handlers::handle_generate),
        )
        .route("/api/v1/letters/export", post(export_handlers::handle_export))
        .with_state(state)
}
