use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::task_models::Task;

#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema)]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate, ToSchema)]
pub struct UpdateTaskRequest {
    #[serde(default, deserialize_with = "present_string")]
    #[validate(length(min = 1))]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "present_string")]
    #[validate(length(min = 1))]
    pub description: Option<String>,
}

/// Optional string field that may be omitted but never `null`.
fn present_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(Some)
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TaskListResponse {
    pub tasks: Vec<Task>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TaskIdResponse {
    pub id: Uuid,
}
