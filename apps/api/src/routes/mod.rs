pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::profile::handlers::handle_create_persona;
use crate::recs::handlers::handle_create_locations;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/persona", post(handle_create_persona))
        .route("/api/v1/locations", post(handle_create_locations))
        .with_state(state)
}
