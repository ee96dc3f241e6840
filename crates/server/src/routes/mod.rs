use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;

use crate::AppState;

pub mod assignees;
pub mod columns;
pub mod tasks;

pub fn router(state: AppState) -> Router {
    let api = Router::<AppState>::new()
        .merge(tasks::router())
        .merge(columns::router())
        .merge(assignees::router());

    Router::<AppState>::new()
        .route("/health", get(health))
        .nest("/api", api)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
