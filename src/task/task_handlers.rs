use std::collections::HashMap;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde_json::Value;

use crate::{error::Result, state::AppState};
use super::{
    task_dto::{TaskIdResponse, TaskListResponse},
    task_validation::{self, ValidationError},
};

type QueryPairs = Vec<(String, String)>;

fn id_from_path(
    params: std::result::Result<Path<HashMap<String, String>>, PathRejection>,
) -> Result<String> {
    let Path(params) = params.map_err(|_| ValidationError::MissingField("id"))?;
    Ok(task_validation::parse_id_param(&params)?)
}

fn json_body(body: std::result::Result<Json<Value>, JsonRejection>) -> Result<Value> {
    let Json(body) = body.map_err(|_| ValidationError::InvalidBody)?;
    Ok(body)
}

/// List tasks, optionally filtered by title or description
#[utoipa::path(
    get,
    path = "/tasks",
    params(
        ("title" = Option<String>, Query, description = "Substring the title must contain"),
        ("description" = Option<String>, Query, description = "Substring the description must contain; ignored when title is given")
    ),
    responses(
        (status = 200, description = "List of tasks", body = TaskListResponse),
        (status = 400, description = "Malformed query")
    ),
    tag = "tasks"
)]
pub async fn get_tasks(
    State(state): State<AppState>,
    query: std::result::Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Json<TaskListResponse>> {
    let Query(pairs) =
        query.map_err(|rejection| ValidationError::InvalidQuery(rejection.body_text()))?;
    let filter = task_validation::parse_list_filter(&pairs)?;

    let tasks = state.task_service.list_tasks(filter).await?;

    Ok(Json(TaskListResponse { tasks }))
}

/// Create a new task
#[utoipa::path(
    post,
    path = "/tasks",
    request_body = crate::task::CreateTaskRequest,
    responses(
        (status = 201, description = "Task created"),
        (status = 400, description = "Validation error")
    ),
    tag = "tasks"
)]
pub async fn create_task(
    State(state): State<AppState>,
    body: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<StatusCode> {
    let payload = task_validation::parse_create_body(&json_body(body)?)?;

    state.task_service.create_task(payload).await?;

    Ok(StatusCode::CREATED)
}

/// Update the title and/or description of a task
#[utoipa::path(
    put,
    path = "/tasks/{id}",
    params(
        ("id" = String, Path, description = "Task ID")
    ),
    request_body = crate::task::UpdateTaskRequest,
    responses(
        (status = 200, description = "Task updated", body = TaskIdResponse),
        (status = 400, description = "No fields provided or empty field"),
        (status = 404, description = "Task not found")
    ),
    tag = "tasks"
)]
pub async fn update_task(
    State(state): State<AppState>,
    params: std::result::Result<Path<HashMap<String, String>>, PathRejection>,
    body: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<TaskIdResponse>> {
    let task_id = id_from_path(params)?;
    let payload = task_validation::parse_update_body(&json_body(body)?)?;

    let id = state.task_service.update_task(&task_id, payload).await?;

    Ok(Json(TaskIdResponse { id }))
}

/// Toggle the completion state of a task
#[utoipa::path(
    put,
    path = "/tasks/{id}/complete",
    params(
        ("id" = String, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Completion toggled", body = TaskIdResponse),
        (status = 404, description = "Task not found")
    ),
    tag = "tasks"
)]
pub async fn toggle_task_complete(
    State(state): State<AppState>,
    params: std::result::Result<Path<HashMap<String, String>>, PathRejection>,
) -> Result<Json<TaskIdResponse>> {
    let task_id = id_from_path(params)?;

    let id = state.task_service.toggle_complete(&task_id).await?;

    Ok(Json(TaskIdResponse { id }))
}

/// Delete a task
#[utoipa::path(
    delete,
    path = "/tasks/{id}",
    params(
        ("id" = String, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task deleted", body = TaskIdResponse),
        (status = 404, description = "Task not found")
    ),
    tag = "tasks"
)]
pub async fn delete_task(
    State(state): State<AppState>,
    params: std::result::Result<Path<HashMap<String, String>>, PathRejection>,
) -> Result<Json<TaskIdResponse>> {
    let task_id = id_from_path(params)?;

    let id = state.task_service.delete_task(&task_id).await?;

    Ok(Json(TaskIdResponse { id }))
}
