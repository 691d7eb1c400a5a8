// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Environment-based configuration for the backend process

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::{info, warn};

/// Address the listener binds when `HOST` is unset
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Port the listener binds when `PORT` is unset
pub const DEFAULT_PORT: u16 = 5001;
/// Store location when `DATABASE_URL` is unset
pub const DEFAULT_DATABASE_URL: &str = "sqlite:./muscleup.db";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface the HTTP listener binds to
    pub host: String,
    /// Port the HTTP listener binds to
    pub port: u16,
    /// Development mode; lowers the default log level to debug
    pub debug: bool,
    /// Database configuration
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database URL (SQLite path)
    pub url: String,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// Reads `HOST`, `PORT`, `DEBUG`, and `DATABASE_URL`, falling back to the
    /// defaults above for anything unset.
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        if let Err(e) = dotenv::dotenv() {
            warn!("No .env file found or failed to load: {}", e);
        }

        let config = ServerConfig {
            host: env_var_or("HOST", DEFAULT_HOST),
            port: env_var_or("PORT", &DEFAULT_PORT.to_string())
                .parse()
                .context("Invalid PORT value")?,
            debug: parse_bool_flag(&env_var_or("DEBUG", "true"))
                .context("Invalid DEBUG value")?,
            database: DatabaseConfig {
                url: env_var_or("DATABASE_URL", DEFAULT_DATABASE_URL),
            },
        };

        config.validate()?;
        info!("Configuration loaded: {}:{}", config.host, config.port);
        Ok(config)
    }

    /// Sanity-check the loaded values
    pub fn validate(&self) -> Result<()> {
        if self.host.is_empty() {
            bail!("HOST must not be empty");
        }
        if self.port == 0 {
            bail!("PORT must be non-zero");
        }
        if self.database.url.is_empty() {
            bail!("DATABASE_URL must not be empty");
        }
        Ok(())
    }
}

/// Read an environment variable, falling back to a default
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Interpret a boolean-like environment value
pub fn parse_bool_flag(value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => bail!("Expected a boolean-like value, got {other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment mutation and the default checks share one test so parallel
    // test threads never observe each other's variables.
    #[test]
    fn test_from_env_defaults_and_overrides() {
        env::remove_var("HOST");
        env::remove_var("PORT");
        env::remove_var("DEBUG");
        env::remove_var("DATABASE_URL");

        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5001);
        assert!(config.debug);
        assert_eq!(config.database.url, DEFAULT_DATABASE_URL);

        env::set_var("PORT", "8080");
        env::set_var("DEBUG", "false");
        env::set_var("HOST", "127.0.0.1");
        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert!(!config.debug);

        env::set_var("PORT", "not-a-port");
        let result = ServerConfig::from_env();
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Invalid PORT value"));

        env::set_var("PORT", "8080");
        env::set_var("DEBUG", "maybe");
        let result = ServerConfig::from_env();
        assert!(result.is_err());

        env::remove_var("HOST");
        env::remove_var("PORT");
        env::remove_var("DEBUG");
    }

    #[test]
    fn test_parse_bool_flag() {
        assert!(parse_bool_flag("true").unwrap());
        assert!(parse_bool_flag("True").unwrap());
        assert!(parse_bool_flag("1").unwrap());
        assert!(!parse_bool_flag("false").unwrap());
        assert!(!parse_bool_flag("0").unwrap());
        assert!(parse_bool_flag("definitely").is_err());
    }

    #[test]
    fn test_validate_rejects_empty_host() {
        let config = ServerConfig {
            host: String::new(),
            port: 5001,
            debug: true,
            database: DatabaseConfig {
                url: DEFAULT_DATABASE_URL.to_string(),
            },
        };
        assert!(config.validate().is_err());
    }
}
