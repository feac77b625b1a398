use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;

use super::task_models::{Task, TaskChanges};

/// Storage operations for tasks. Each call maps to a single statement
/// against the store and is applied immediately.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Task>>;

    /// All tasks in insertion order.
    async fn find_all(&self) -> Result<Vec<Task>>;

    /// Tasks whose title contains `needle` (case-sensitive).
    async fn find_by_title_contains(&self, needle: &str) -> Result<Vec<Task>>;

    /// Tasks whose description contains `needle` (case-sensitive).
    async fn find_by_description_contains(&self, needle: &str) -> Result<Vec<Task>>;

    async fn insert(&self, task: &Task) -> Result<()>;

    /// Applies `changes` and refreshes `updated_at`. Returns the number of rows touched.
    async fn update_fields(&self, id: Uuid, changes: TaskChanges) -> Result<u64>;

    /// Returns the number of rows removed.
    async fn delete(&self, id: Uuid) -> Result<u64>;
}
