use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Builds a fresh, incomplete task with a server-generated id.
    pub fn new(title: String, description: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            completed_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Applies a set of field changes and refreshes `updated_at`.
    pub fn apply_changes(&mut self, changes: TaskChanges) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        if let Some(completed_at) = changes.completed_at {
            self.completed_at = completed_at;
        }
        self.updated_at = Utc::now();
    }
}

/// Partial update of a stored task. `None` leaves a column untouched;
/// `completed_at: Some(None)` clears the completion time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed_at: Option<Option<DateTime<Utc>>>,
}

impl TaskChanges {
    pub fn toggle_completion(task: &Task) -> Self {
        let completed_at = if task.is_completed() {
            None
        } else {
            Some(Utc::now())
        };

        Self {
            completed_at: Some(completed_at),
            ..Self::default()
        }
    }
}

/// Which single filter a list request applies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub title: Option<String>,
    pub description: Option<String>,
}
