use complaint_box::{
    config::{AppConfig, database},
    errors::Result,
    http::{self, AppState},
};
use dotenvy::dotenv;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (as early as possible)
    dotenv().ok(); // Make it non-fatal, env vars can be set externally
    info!("Attempted to load .env file.");

    // 3. Load the main application configuration
    let config = AppConfig::load()?;
    info!("Successfully processed application configuration.");

    // 4. Initialize the database and ensure the complaints table exists
    database::prepare_storage_dir(&config.database_url)?;
    let db = database::create_connection(&config.database_url)
        .await
        .inspect(|_| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to initialize database: {}", e))?;
    database::ensure_schema(&db)
        .await
        .inspect(|_| info!("Complaints table ensured successfully."))
        .inspect_err(|e| error!("Failed to ensure complaints table: {}", e))?;

    // 5. Serve until ctrl-c / SIGTERM
    let state = AppState {
        db,
        config: Arc::new(config),
    };
    http::serve(state).await?;

    Ok(())
}
