//! JSON-over-HTTP task service client.

use async_trait::async_trait;
use reqwest::StatusCode;

use super::models::{NewTaskModel, PatchModel, TaskModel};
use crate::board::domain::{Task, TaskId};
use crate::board::ports::{TaskDraft, TaskPatch, TaskService, TaskServiceError, TaskServiceResult};

/// Task service backed by a JSON CRUD server.
///
/// Speaks the `json-server` dialect: `GET`/`POST` on `/todos` and
/// `PATCH`/`DELETE` on `/todos/{id}`. No retries; every call is a single
/// round trip.
#[derive(Debug, Clone)]
pub struct HttpTaskService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTaskService {
    /// Creates a client for the service rooted at `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Creates a client reusing an existing connection pool.
    #[must_use]
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        Self {
            client,
            base_url: base.trim_end_matches('/').to_owned(),
        }
    }

    fn todos_url(&self) -> String {
        format!("{}/todos", self.base_url)
    }

    fn todo_url(&self, id: TaskId) -> String {
        format!("{}/todos/{id}", self.base_url)
    }

    /// Maps a non-success status to the port error, treating 404 as
    /// [`TaskServiceError::NotFound`].
    fn check_status(status: StatusCode, id: Option<TaskId>) -> TaskServiceResult<()> {
        if status.is_success() {
            return Ok(());
        }
        match (status, id) {
            (StatusCode::NOT_FOUND, Some(task_id)) => Err(TaskServiceError::NotFound(task_id)),
            _ => Err(TaskServiceError::InvalidResponse(format!(
                "unexpected status {status}"
            ))),
        }
    }
}

#[async_trait]
impl TaskService for HttpTaskService {
    async fn list(&self) -> TaskServiceResult<Vec<Task>> {
        let response = self
            .client
            .get(self.todos_url())
            .send()
            .await
            .map_err(TaskServiceError::transport)?;
        Self::check_status(response.status(), None)?;
        let models: Vec<TaskModel> = response
            .json()
            .await
            .map_err(TaskServiceError::transport)?;
        models.into_iter().map(TaskModel::into_domain).collect()
    }

    async fn create(&self, draft: TaskDraft) -> TaskServiceResult<Task> {
        tracing::debug!(text = %draft.text(), "creating remote task");
        let response = self
            .client
            .post(self.todos_url())
            .json(&NewTaskModel::from(&draft))
            .send()
            .await
            .map_err(TaskServiceError::transport)?;
        Self::check_status(response.status(), None)?;
        let model: TaskModel = response
            .json()
            .await
            .map_err(TaskServiceError::transport)?;
        model.into_domain()
    }

    async fn update(&self, id: TaskId, patch: TaskPatch) -> TaskServiceResult<Task> {
        tracing::debug!(%id, "patching remote task");
        let response = self
            .client
            .patch(self.todo_url(id))
            .json(&PatchModel::from(&patch))
            .send()
            .await
            .map_err(TaskServiceError::transport)?;
        Self::check_status(response.status(), Some(id))?;
        let model: TaskModel = response
            .json()
            .await
            .map_err(TaskServiceError::transport)?;
        model.into_domain()
    }

    async fn delete(&self, id: TaskId) -> TaskServiceResult<()> {
        tracing::debug!(%id, "deleting remote task");
        let response = self
            .client
            .delete(self.todo_url(id))
            .send()
            .await
            .map_err(TaskServiceError::transport)?;
        Self::check_status(response.status(), Some(id))
    }
}
