use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    routing::get,
};
use db::models::assignee::{Assignee, CreateAssignee};

use crate::{AppState, error::ApiError};

pub async fn get_assignees(State(state): State<AppState>) -> Json<Vec<Assignee>> {
    let store = state.store().read().await;
    Json(store.assignees().to_vec())
}

pub async fn get_assignee(
    State(state): State<AppState>,
    Path(assignee_id): Path<String>,
) -> Result<Json<Assignee>, ApiError> {
    let assignee = state.store().read().await.assignee(&assignee_id)?;
    Ok(Json(assignee))
}

pub async fn create_assignee(
    State(state): State<AppState>,
    payload: Result<Json<CreateAssignee>, JsonRejection>,
) -> Result<(StatusCode, Json<Assignee>), ApiError> {
    let Json(payload) = payload?;
    let assignee = state.store().write().await.create_assignee(payload)?;

    tracing::info!(assignee_id = %assignee.id, "created assignee");
    Ok((StatusCode::CREATED, Json(assignee)))
}

/// Deleting an assignee also removes it from every task.
pub async fn delete_assignee(
    State(state): State<AppState>,
    Path(assignee_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.store().write().await.delete_assignee(&assignee_id)?;

    tracing::info!(assignee_id = %assignee_id, "deleted assignee");
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/assignees", get(get_assignees).post(create_assignee))
        .route(
            "/assignees/{assignee_id}",
            get(get_assignee).delete(delete_assignee),
        )
}
