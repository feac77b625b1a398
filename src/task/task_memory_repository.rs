use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::Result;

use super::{
    task_models::{Task, TaskChanges},
    task_repository::TaskRepository,
};

/// Process-local task store. Keeps tasks in insertion order.
#[derive(Debug, Default, Clone)]
pub struct InMemoryTaskRepository {
    tasks: Arc<RwLock<Vec<Task>>>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }

    async fn find_matching<F>(&self, predicate: F) -> Vec<Task>
    where
        F: Fn(&Task) -> bool,
    {
        let tasks = self.tasks.read().await;
        tasks.iter().filter(|t| predicate(t)).cloned().collect()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Task>> {
        let tasks = self.tasks.read().await;
        Ok(tasks.iter().find(|t| t.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Task>> {
        Ok(self.tasks.read().await.clone())
    }

    async fn find_by_title_contains(&self, needle: &str) -> Result<Vec<Task>> {
        Ok(self.find_matching(|t| t.title.contains(needle)).await)
    }

    async fn find_by_description_contains(&self, needle: &str) -> Result<Vec<Task>> {
        Ok(self.find_matching(|t| t.description.contains(needle)).await)
    }

    async fn insert(&self, task: &Task) -> Result<()> {
        self.tasks.write().await.push(task.clone());
        Ok(())
    }

    async fn update_fields(&self, id: Uuid, changes: TaskChanges) -> Result<u64> {
        let mut tasks = self.tasks.write().await;

        match tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.apply_changes(changes);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<u64> {
        let mut tasks = self.tasks.write().await;
        let before = tasks.len();
        tasks.retain(|t| t.id != id);
        Ok((before - tasks.len()) as u64)
    }
}
