pub mod task_dto;
pub mod task_handlers;
pub mod task_memory_repository;
pub mod task_models;
pub mod task_pg_repository;
pub mod task_repository;
pub mod task_service;
pub mod task_validation;

pub use task_dto::{CreateTaskRequest, TaskIdResponse, TaskListResponse, UpdateTaskRequest};
pub use task_memory_repository::InMemoryTaskRepository;
pub use task_models::Task;
pub use task_pg_repository::PgTaskRepository;
pub use task_repository::TaskRepository;
pub use task_service::TaskService;
pub use task_validation::ValidationError;
