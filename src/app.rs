use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/fuels", get(handlers::get_fuels))
        .route("/api/quote", post(handlers::quote))
        .route("/api/key", post(handlers::key))
        .with_state(state)
}
