use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, put},
};
use db::models::task::{Task, UpdateTask};

use crate::{AppState, error::ApiError};

pub async fn get_tasks(State(state): State<AppState>) -> Json<Vec<Task>> {
    let store = state.store().read().await;
    Json(store.tasks().to_vec())
}

pub async fn update_task(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
    Json(payload): Json<UpdateTask>,
) -> Result<Json<Task>, ApiError> {
    let task = state.store().write().await.update_task(&task_id, payload)?;

    tracing::info!(task_id = %task.id, "updated task");
    Ok(Json(task))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tasks", get(get_tasks))
        .route("/tasks/{task_id}", put(update_task))
}
