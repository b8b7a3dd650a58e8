//! Store profile loading from config.toml
//!
//! The profile identifies the shop itself (name, address, phone) and is
//! printed in the header of rendered receipts. The file is optional: a
//! missing config.toml yields the default profile.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Identity of the store, printed on receipts and statements.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StoreProfile {
    /// Display name of the shop
    #[serde(default = "default_store_name")]
    pub name: String,
    /// Street address
    #[serde(default)]
    pub address: Option<String>,
    /// Contact phone
    #[serde(default)]
    pub phone: Option<String>,
}

impl Default for StoreProfile {
    fn default() -> Self {
        Self {
            name: default_store_name(),
            address: None,
            phone: None,
        }
    }
}

fn default_store_name() -> String {
    "Huellitas".to_string()
}

/// Shape of the whole config.toml file
#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    store: Option<StoreProfile>,
}

/// Parses a store profile out of raw config.toml contents.
///
/// A file without a `[store]` section yields the default profile.
pub fn parse_store_profile(contents: &str) -> Result<StoreProfile> {
    let parsed: ConfigFile = toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })?;
    Ok(parsed.store.unwrap_or_default())
}

/// Loads the store profile from a config.toml file.
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_store_profile<P: AsRef<Path>>(path: P) -> Result<StoreProfile> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(StoreProfile::default());
    }

    let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    parse_store_profile(&contents)
}
