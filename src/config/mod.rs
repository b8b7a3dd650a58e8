//! Configuration management for the Huellitas core.

/// Database configuration and connection management
pub mod database;

/// Store profile loading from config.toml
pub mod store;

use crate::errors::Result;

/// Fully resolved application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Connection URL for the local SQLite database
    pub database_url: String,
    /// Store identity printed on receipts
    pub store: store::StoreProfile,
}

/// Loads the complete application configuration.
///
/// Resolves the database URL from the environment (falling back to the local
/// default file) and reads the optional `config.toml` store profile from the
/// working directory. A missing `config.toml` is not an error; a malformed
/// one is.
pub fn load_app_configuration() -> Result<AppConfig> {
    let database_url = database::get_database_url();
    let store = store::load_store_profile("config.toml")?;
    Ok(AppConfig {
        database_url,
        store,
    })
}
