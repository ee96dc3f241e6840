use std::env;

use async_trait::async_trait;
use db::models::{
    assignee::{Assignee, CreateAssignee},
    column::Column,
    task::{Task, UpdateTask},
};
use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;

const DEFAULT_API_BASE: &str = "http://localhost:3001";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_base: String,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        let api_base =
            env::var("TASK_ADMIN_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        Self { api_base }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InvalidInput,
    Conflict,
    NetworkFailure,
}

#[derive(Debug, Error)]
pub enum TaskApiError {
    #[error("{message}")]
    Status { status: StatusCode, message: String },
    /// Non-success status without a body to explain it.
    #[error("Something went wrong")]
    EmptyResponse { status: StatusCode },
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    #[error("invalid api url: {0}")]
    InvalidUrl(String),
}

impl TaskApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TaskApiError::Status { status, .. } => match *status {
                StatusCode::NOT_FOUND => ErrorKind::NotFound,
                StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                    ErrorKind::InvalidInput
                }
                StatusCode::CONFLICT => ErrorKind::Conflict,
                _ => ErrorKind::NetworkFailure,
            },
            TaskApiError::EmptyResponse { .. }
            | TaskApiError::Transport(_)
            | TaskApiError::InvalidUrl(_) => ErrorKind::NetworkFailure,
        }
    }
}

/// Operations the table needs from the task backend.
#[async_trait]
pub trait TaskApi: Send + Sync {
    async fn fetch_columns(&self) -> Result<Vec<Column>, TaskApiError>;

    async fn fetch_assignees(&self) -> Result<Vec<Assignee>, TaskApiError>;

    async fn fetch_tasks(&self) -> Result<Vec<Task>, TaskApiError>;

    async fn update_task(&self, id: &str, update: &UpdateTask) -> Result<Task, TaskApiError>;

    async fn get_assignee(&self, id: &str) -> Result<Assignee, TaskApiError>;

    async fn create_assignee(&self, candidate: &CreateAssignee)
    -> Result<Assignee, TaskApiError>;

    async fn delete_assignee(&self, id: &str) -> Result<(), TaskApiError>;
}

#[derive(Debug, Clone)]
pub struct TaskApiClient {
    client: Client,
    api_base: Url,
}

impl TaskApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self, TaskApiError> {
        let api_base = Url::parse(&config.api_base)
            .map_err(|err| TaskApiError::InvalidUrl(format!("{}: {err}", config.api_base)))?;
        if api_base.cannot_be_a_base() {
            return Err(TaskApiError::InvalidUrl(config.api_base.clone()));
        }

        Ok(Self {
            client: Client::new(),
            api_base,
        })
    }

    /// `segments` are appended under `/api`, each percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, TaskApiError> {
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|_| TaskApiError::InvalidUrl(self.api_base.to_string()))?
            .pop_if_empty()
            .push("api")
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, TaskApiError> {
        let response = self.client.get(self.endpoint(segments)?).send().await?;
        Ok(handle_response(response).await?.json().await?)
    }

    async fn put_task(&self, id: &str, update: &UpdateTask) -> Result<Task, TaskApiError> {
        let url = self.endpoint(&["tasks", id])?;
        let response = self.client.put(url).json(update).send().await?;
        Ok(handle_response(response).await?.json().await?)
    }

    async fn post_assignee(&self, candidate: &CreateAssignee) -> Result<Assignee, TaskApiError> {
        let url = self.endpoint(&["assignees"])?;
        let response = self.client.post(url).json(candidate).send().await?;
        Ok(handle_response(response).await?.json().await?)
    }

    async fn send_delete(&self, segments: &[&str]) -> Result<(), TaskApiError> {
        let response = self.client.delete(self.endpoint(segments)?).send().await?;
        handle_response(response).await?;
        Ok(())
    }
}

/// Non-success statuses become errors carrying the response body text.
async fn handle_response(response: Response) -> Result<Response, TaskApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response.text().await.unwrap_or_default();
    if message.trim().is_empty() {
        return Err(TaskApiError::EmptyResponse { status });
    }
    Err(TaskApiError::Status { status, message })
}

#[async_trait]
impl TaskApi for TaskApiClient {
    async fn fetch_columns(&self) -> Result<Vec<Column>, TaskApiError> {
        self.get_json(&["columns"])
            .await
            .inspect_err(|err| tracing::error!(?err, "error fetching columns"))
    }

    async fn fetch_assignees(&self) -> Result<Vec<Assignee>, TaskApiError> {
        self.get_json(&["assignees"])
            .await
            .inspect_err(|err| tracing::error!(?err, "error fetching assignees"))
    }

    async fn fetch_tasks(&self) -> Result<Vec<Task>, TaskApiError> {
        self.get_json(&["tasks"])
            .await
            .inspect_err(|err| tracing::error!(?err, "error fetching tasks"))
    }

    async fn update_task(&self, id: &str, update: &UpdateTask) -> Result<Task, TaskApiError> {
        self.put_task(id, update)
            .await
            .inspect_err(|err| tracing::error!(?err, task_id = %id, "error updating task"))
    }

    async fn get_assignee(&self, id: &str) -> Result<Assignee, TaskApiError> {
        self.get_json(&["assignees", id])
            .await
            .inspect_err(|err| tracing::error!(?err, assignee_id = %id, "error fetching assignee"))
    }

    async fn create_assignee(
        &self,
        candidate: &CreateAssignee,
    ) -> Result<Assignee, TaskApiError> {
        self.post_assignee(candidate)
            .await
            .inspect_err(|err| tracing::error!(?err, "error creating assignee"))
    }

    async fn delete_assignee(&self, id: &str) -> Result<(), TaskApiError> {
        self.send_delete(&["assignees", id])
            .await
            .inspect_err(|err| tracing::error!(?err, assignee_id = %id, "error deleting assignee"))
    }
}
