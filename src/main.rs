//! Bootstrap binary: prepares the local database for the store system.
//!
//! Initializes logging, loads configuration, opens the `SQLite` file, and
//! creates any missing tables. The desktop shell runs this once at startup
//! before constructing its screens.

use dotenvy::dotenv;
use huellitas::config;
use huellitas::errors::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Env vars may also be set externally; a missing .env is fine
    dotenv().ok();

    let app_config = config::load_app_configuration()?;
    info!(store = %app_config.store.name, "Loaded application configuration");

    let db = config::database::create_connection(&app_config.database_url).await?;
    config::database::create_tables(&db).await?;
    info!(url = %app_config.database_url, "Database initialized");

    Ok(())
}
