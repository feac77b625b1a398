use std::sync::Arc;

use anyhow::Context;

use crate::task::{TaskRepository, TaskService};

#[derive(Clone)]
pub struct AppState {
    pub task_service: TaskService,
}

impl AppState {
    pub fn new(repo: Arc<dyn TaskRepository>) -> Self {
        Self {
            task_service: TaskService::new(repo),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    /// When unset the service keeps tasks in memory.
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL").ok(),
            database_max_connections: std::env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .context("DATABASE_MAX_CONNECTIONS must be a number")?,
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3333".to_string())
                .parse()
                .context("PORT must be a number")?,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
