// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Structured logging configuration
//!
//! Both binaries initialize tracing through this module before anything else
//! runs. The level comes from `RUST_LOG`; with no explicit level set, the
//! `DEBUG` flag picks between `debug` (development default) and `info`.

use anyhow::Result;
use std::env;
use std::io;
use tracing::info;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (trace, debug, info, warn, error)
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Service name announced at startup
    pub service_name: String,
    /// Environment (development, staging, production)
    pub environment: String,
}

#[derive(Debug, Clone)]
pub enum LogFormat {
    /// JSON format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            service_name: "muscleup-backend".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Pick the level filter: explicit `RUST_LOG` wins, otherwise the debug flag
fn level_from_env(rust_log: Option<&str>, debug: bool) -> String {
    match rust_log {
        Some(level) => level.to_string(),
        None if debug => "debug".to_string(),
        None => "info".to_string(),
    }
}

fn format_from_env(value: Option<&str>) -> LogFormat {
    match value {
        Some("json") => LogFormat::Json,
        Some("compact") => LogFormat::Compact,
        _ => LogFormat::Pretty,
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    pub fn from_env() -> Self {
        let debug = env::var("DEBUG")
            .ok()
            .and_then(|v| crate::config::parse_bool_flag(&v).ok())
            .unwrap_or(true);

        Self {
            level: level_from_env(env::var("RUST_LOG").ok().as_deref(), debug),
            format: format_from_env(env::var("LOG_FORMAT").ok().as_deref()),
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| "muscleup-backend".to_string()),
            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Initialize the global tracing subscriber
    pub fn init(&self) -> Result<()> {
        let env_filter = EnvFilter::try_new(&self.level)
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let registry = tracing_subscriber::registry().with(env_filter);

        match self.format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .with_target(true)
                    .with_writer(io::stdout)
                    .json();
                registry.with(json_layer).init();
            }
            LogFormat::Pretty => {
                let pretty_layer = fmt::layer()
                    .with_target(true)
                    .with_writer(io::stdout);
                registry.with(pretty_layer).init();
            }
            LogFormat::Compact => {
                let compact_layer = fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(io::stdout);
                registry.with(compact_layer).init();
            }
        }

        info!(
            service.name = %self.service_name,
            service.version = %env!("CARGO_PKG_VERSION"),
            environment = %self.environment,
            log.level = %self.level,
            "Logging initialized"
        );

        Ok(())
    }
}

/// Initialize logging from environment
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}
