use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .merge(handlers::document::routes())
        .merge(handlers::categories::routes())
        .merge(handlers::services::routes())
        .with_state(state)
}

pub fn create_legacy_routes(state: AppState) -> Router {
    Router::new()
        .merge(handlers::legacy::routes())
        .with_state(state)
}
