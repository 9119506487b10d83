use std::collections::HashMap;

use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u8,
}

/// Environment variable naming the database URL.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
/// Environment variable naming the pool size.
pub const DATABASE_MAX_CONNECTIONS_VAR: &str = "DATABASE_MAX_CONNECTIONS";

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables and an optional
    /// `config.toml` into a `Settings`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Self::load_from(&std::env::vars().collect())
    }

    /// ## Summary
    /// Builds settings from the given variables layered over `config.toml`.
    ///
    /// `DATABASE_URL` and `DATABASE_MAX_CONNECTIONS` map onto the `database`
    /// table directly. Other nested keys use a double underscore, as in
    /// `DATABASE__URL`.
    ///
    /// ## Errors
    /// Returns an error if a variable cannot be parsed, or if building or
    /// deserializing the configuration fails.
    pub fn load_from(vars: &HashMap<String, String>) -> Result<Self> {
        let max_connections = vars
            .get(DATABASE_MAX_CONNECTIONS_VAR)
            .filter(|value| !value.trim().is_empty())
            .map(|value| {
                value.trim().parse::<u8>().map_err(|e| {
                    CoreError::InvalidConfiguration(format!(
                        "{DATABASE_MAX_CONNECTIONS_VAR} is not a pool size: {e}"
                    ))
                })
            })
            .transpose()?;
        let url = vars
            .get(DATABASE_URL_VAR)
            .filter(|value| !value.trim().is_empty())
            .cloned();

        let settings = Config::builder()
            .set_default("database.max_connections", 4)?
            .add_source(config::File::with_name("config.toml").required(false))
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true)
                    .source(Some(vars.clone())),
            )
            .set_override_option("database.url", url)?
            .set_override_option("database.max_connections", max_connections.map(i64::from))?
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Rejects settings the pool could not be built from.
    ///
    /// ## Errors
    /// Returns `InvalidConfiguration` for an empty database URL or a zero-sized pool.
    pub fn validate(&self) -> CoreResult<()> {
        if self.database.url.trim().is_empty() {
            return Err(CoreError::InvalidConfiguration(
                "database.url must not be empty".to_string(),
            ));
        }
        if self.database.max_connections == 0 {
            return Err(CoreError::InvalidConfiguration(
                "database.max_connections must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
