use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),
    /// Assignee body that is not JSON or whose fields have the wrong type.
    #[error("Missing fields")]
    MalformedAssignee(#[from] JsonRejection),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Store(store_err) => match store_err {
                StoreError::TaskNotFound(_) | StoreError::AssigneeNotFound(_) => {
                    StatusCode::NOT_FOUND
                }
                StoreError::MissingFields => StatusCode::BAD_REQUEST,
                StoreError::AssigneeExists(_) => StatusCode::CONFLICT,
            },
            ApiError::MalformedAssignee(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        match &self {
            ApiError::Store(StoreError::TaskNotFound(id)) => {
                tracing::warn!(task_id = %id, "task not found")
            }
            ApiError::Store(StoreError::AssigneeNotFound(id)) => {
                tracing::warn!(assignee_id = %id, "assignee not found")
            }
            ApiError::Store(StoreError::AssigneeExists(id)) => {
                tracing::warn!(assignee_id = %id, "assignee already exists")
            }
            ApiError::Store(StoreError::MissingFields) => {
                tracing::warn!("assignee payload is missing fields")
            }
            ApiError::MalformedAssignee(rejection) => {
                tracing::warn!(reason = %rejection.body_text(), "malformed assignee payload")
            }
        }

        (status_code, self.to_string()).into_response()
    }
}
