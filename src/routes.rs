use crate::{
    error::handle_panic,
    state::AppState,
    task::{task_handlers, CreateTaskRequest, Task, TaskIdResponse, TaskListResponse, UpdateTaskRequest},
};
use axum::{
    routing::{get, put},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        task_handlers::get_tasks,
        task_handlers::create_task,
        task_handlers::update_task,
        task_handlers::toggle_task_complete,
        task_handlers::delete_task,
    ),
    components(
        schemas(
            Task,
            CreateTaskRequest,
            UpdateTaskRequest,
            TaskListResponse,
            TaskIdResponse,
        )
    ),
    tags(
        (name = "tasks", description = "Task management endpoints")
    )
)]
struct ApiDoc;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let task_routes = Router::new()
        .route(
            "/",
            get(task_handlers::get_tasks).post(task_handlers::create_task),
        )
        .route(
            "/:id",
            put(task_handlers::update_task).delete(task_handlers::delete_task),
        )
        .route("/:id/complete", put(task_handlers::toggle_task_complete));

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/tasks", task_routes)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
