use axum::{Json, Router, extract::State, routing::get};
use db::models::column::Column;

use crate::AppState;

pub async fn get_columns(State(state): State<AppState>) -> Json<Vec<Column>> {
    let store = state.store().read().await;
    Json(store.columns().to_vec())
}

pub fn router() -> Router<AppState> {
    Router::new().route("/columns", get(get_columns))
}
