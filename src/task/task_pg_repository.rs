use async_trait::async_trait;
use uuid::Uuid;

use crate::{db::DbPool, error::Result};

use super::{
    task_models::{Task, TaskChanges},
    task_repository::TaskRepository,
};

const SELECT_TASKS: &str =
    "SELECT id, title, description, completed_at, created_at, updated_at FROM tasks";

#[derive(Clone)]
pub struct PgTaskRepository {
    pool: DbPool,
}

impl PgTaskRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn find_where_contains(&self, column: &str, needle: &str) -> Result<Vec<Task>> {
        // strpos keeps `%` and `_` in the needle literal, unlike LIKE
        let query = format!(
            "{} WHERE strpos({}, $1) > 0 ORDER BY created_at ASC",
            SELECT_TASKS, column
        );

        let tasks = sqlx::query_as::<_, Task>(&query)
            .bind(needle)
            .fetch_all(&self.pool)
            .await?;
        Ok(tasks)
    }
}

#[async_trait]
impl TaskRepository for PgTaskRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Task>> {
        let task = sqlx::query_as::<_, Task>(&format!("{} WHERE id = $1", SELECT_TASKS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(task)
    }

    async fn find_all(&self) -> Result<Vec<Task>> {
        let tasks = sqlx::query_as::<_, Task>(&format!("{} ORDER BY created_at ASC", SELECT_TASKS))
            .fetch_all(&self.pool)
            .await?;
        Ok(tasks)
    }

    async fn find_by_title_contains(&self, needle: &str) -> Result<Vec<Task>> {
        self.find_where_contains("title", needle).await
    }

    async fn find_by_description_contains(&self, needle: &str) -> Result<Vec<Task>> {
        self.find_where_contains("description", needle).await
    }

    async fn insert(&self, task: &Task) -> Result<()> {
        sqlx::query(
            "INSERT INTO tasks (id, title, description, completed_at, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(task.id)
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.completed_at)
        .bind(task.created_at)
        .bind(task.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update_fields(&self, id: Uuid, changes: TaskChanges) -> Result<u64> {
        let touches_completion = changes.completed_at.is_some();

        let result = sqlx::query(
            "UPDATE tasks SET
                title = COALESCE($1, title),
                description = COALESCE($2, description),
                completed_at = CASE WHEN $3 THEN $4 ELSE completed_at END,
                updated_at = NOW()
             WHERE id = $5",
        )
        .bind(changes.title)
        .bind(changes.description)
        .bind(touches_completion)
        .bind(changes.completed_at.flatten())
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: Uuid) -> Result<u64> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
