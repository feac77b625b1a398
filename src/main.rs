mod db;
mod error;
mod routes;
mod state;
mod task;

use db::{create_pool, run_migrations};
use routes::create_router;
use state::{AppState, Config};
use std::sync::Arc;
use task::{InMemoryTaskRepository, PgTaskRepository, TaskRepository};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,task_service=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let repo: Arc<dyn TaskRepository> = match config.database_url.as_deref() {
        Some(database_url) => {
            tracing::info!("Connecting to database...");
            let db = create_pool(database_url, config.database_max_connections).await?;

            tracing::info!("Running migrations...");
            run_migrations(&db).await?;

            Arc::new(PgTaskRepository::new(db))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, tasks are kept in memory");
            Arc::new(InMemoryTaskRepository::new())
        }
    };

    let app = create_router(AppState::new(repo));

    let addr = config.addr();
    tracing::info!("Server starting on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
