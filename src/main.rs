use dotenvy::dotenv;
use habit_forge::{
    api::{self, AppState},
    config::{ServerConfig, database},
    core::SeaOrmHabitRepository,
    errors::Result,
};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Server settings
    let server_config = ServerConfig::from_env()
        .inspect_err(|e| error!("Invalid server configuration: {}", e))?;

    // 4. Connect to the database (fatal on failure)
    let database_url = database::get_database_url();
    let db = database::create_connection(&database_url)
        .await
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    database::create_tables(&db)
        .await
        .inspect(|_| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to initialize database: {}", e))?;

    // 5. Serve until shutdown, then release the connection
    let habits = Arc::new(SeaOrmHabitRepository::new(db));
    api::serve(&server_config, AppState::new(habits.clone())).await?;

    match Arc::try_unwrap(habits) {
        Ok(repo) => {
            repo.into_connection().close().await?;
            info!("Database connection closed.");
        }
        Err(_) => warn!("Database connection still in use at shutdown; dropping it."),
    }
    Ok(())
}
