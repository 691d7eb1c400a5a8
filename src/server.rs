// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! HTTP server assembly and startup
//!
//! Binds the address from [`ServerConfig`] and serves the application's
//! route tree until the process is terminated.

use crate::config::ServerConfig;
use crate::database::Database;
use crate::health::{middleware, HealthChecker};
use anyhow::{Context, Result};
use std::net::{IpAddr, SocketAddr};
use tracing::info;
use warp::Filter;

/// The MuscleUp backend HTTP server
pub struct AppServer {
    config: ServerConfig,
    database: Database,
}

impl AppServer {
    pub fn new(config: ServerConfig, database: Database) -> Self {
        Self { config, database }
    }

    /// Resolve the configured host and port into a socket address
    pub fn bind_address(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .config
            .host
            .parse()
            .with_context(|| format!("Invalid HOST value: {}", self.config.host))?;
        Ok(SocketAddr::new(ip, self.config.port))
    }

    /// Run the HTTP listener; returns only when the server is stopped
    pub async fn run(self) -> Result<()> {
        let addr = self.bind_address()?;

        let health_checker = HealthChecker::new(self.database.clone());

        let cors = warp::cors()
            .allow_any_origin()
            .allow_headers(vec!["content-type"])
            .allow_methods(vec!["GET", "POST", "OPTIONS"]);

        // Root route announces the service for humans poking at the port
        let root = warp::path::end().and(warp::get()).map(|| {
            warp::reply::json(&serde_json::json!({
                "service": "muscleup-backend",
                "version": env!("CARGO_PKG_VERSION"),
            }))
        });

        let routes = middleware::routes(health_checker).or(root).with(cors);

        info!("Server running on http://{}", addr);
        info!("Debug mode: {}", self.config.debug);

        warp::serve(routes).run(addr).await;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DatabaseConfig, ServerConfig};

    fn config_with_host(host: &str) -> ServerConfig {
        ServerConfig {
            host: host.to_string(),
            port: 5001,
            debug: true,
            database: DatabaseConfig {
                url: "sqlite::memory:".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_bind_address_default_host() {
        let database = Database::new("sqlite::memory:").await.unwrap();
        let server = AppServer::new(config_with_host("0.0.0.0"), database);

        let addr = server.bind_address().unwrap();
        assert_eq!(addr.to_string(), "0.0.0.0:5001");
    }

    #[tokio::test]
    async fn test_bind_address_rejects_garbage_host() {
        let database = Database::new("sqlite::memory:").await.unwrap();
        let server = AppServer::new(config_with_host("not-an-address"), database);

        let result = server.bind_address();
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Invalid HOST value"));
    }
}
