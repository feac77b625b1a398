use std::sync::Arc;

use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::task::task_dto::{CreateTaskRequest, UpdateTaskRequest};
use crate::task::task_models::{Task, TaskChanges, TaskFilter};
use crate::task::task_repository::TaskRepository;
use crate::task::task_validation::ValidationError;

/// Service layer for task‑related business logic.
#[derive(Clone)]
pub struct TaskService {
    repo: Arc<dyn TaskRepository>,
}

impl TaskService {
    pub fn new(repo: Arc<dyn TaskRepository>) -> Self {
        Self { repo }
    }

    /// Applies at most one filter; title wins over description.
    pub async fn list_tasks(&self, filter: TaskFilter) -> Result<Vec<Task>> {
        if let Some(title) = filter.title {
            return self.repo.find_by_title_contains(&title).await;
        }

        if let Some(description) = filter.description {
            return self.repo.find_by_description_contains(&description).await;
        }

        self.repo.find_all().await
    }

    #[instrument(skip(self, payload))]
    pub async fn create_task(&self, payload: CreateTaskRequest) -> Result<Task> {
        let task = Task::new(payload.title, payload.description);
        self.repo.insert(&task).await?;

        tracing::info!(task_id = %task.id, "Created task");
        Ok(task)
    }

    #[instrument(skip(self, payload))]
    pub async fn update_task(&self, task_id: &str, payload: UpdateTaskRequest) -> Result<Uuid> {
        check_update(&payload)?;

        let task = self.find_existing(task_id).await?;

        let changes = TaskChanges {
            title: payload.title,
            description: payload.description,
            completed_at: None,
        };
        self.apply(task.id, changes).await?;

        tracing::info!(task_id = %task.id, "Updated task");
        Ok(task.id)
    }

    #[instrument(skip(self))]
    pub async fn toggle_complete(&self, task_id: &str) -> Result<Uuid> {
        let task = self.find_existing(task_id).await?;

        self.apply(task.id, TaskChanges::toggle_completion(&task))
            .await?;

        tracing::info!(task_id = %task.id, completed = !task.is_completed(), "Toggled task completion");
        Ok(task.id)
    }

    #[instrument(skip(self))]
    pub async fn delete_task(&self, task_id: &str) -> Result<Uuid> {
        let task = self.find_existing(task_id).await?;

        if self.repo.delete(task.id).await? == 0 {
            return Err(AppError::task_not_found());
        }

        tracing::info!(task_id = %task.id, "Deleted task");
        Ok(task.id)
    }

    /// Looks a task up by its raw path id. Ids that are not UUIDs cannot match
    /// any stored task.
    async fn find_existing(&self, task_id: &str) -> Result<Task> {
        let id = Uuid::parse_str(task_id).map_err(|_| AppError::task_not_found())?;

        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(AppError::task_not_found)
    }

    async fn apply(&self, id: Uuid, changes: TaskChanges) -> Result<()> {
        // the row may have been deleted between lookup and update
        if self.repo.update_fields(id, changes).await? == 0 {
            return Err(AppError::task_not_found());
        }
        Ok(())
    }
}

/// An update must carry at least one non-empty field, and no field it
/// carries may be empty. Empty strings count as absent for the first rule.
fn check_update(payload: &UpdateTaskRequest) -> std::result::Result<(), ValidationError> {
    let is_blank = |field: &Option<String>| field.as_deref().map_or(true, str::is_empty);
    if is_blank(&payload.title) && is_blank(&payload.description) {
        return Err(ValidationError::NoFieldsProvided);
    }

    payload.validate().map_err(|_| ValidationError::EmptyField)
}
