// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Health check endpoints and monitoring utilities

use crate::database::Database;
use serde::{Deserialize, Serialize};
use std::time::{Instant, SystemTime, UNIX_EPOCH};
use tracing::error;

/// Overall health status
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall service status
    pub status: HealthStatus,
    /// Service information
    pub service: ServiceInfo,
    /// Individual component checks
    pub checks: Vec<ComponentHealth>,
    /// Response timestamp
    pub timestamp: u64,
}

/// Service information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    /// Service name
    pub name: String,
    /// Service version
    pub version: String,
    /// Environment (development, staging, production)
    pub environment: String,
    /// Service uptime in seconds
    pub uptime_seconds: u64,
}

/// Individual component health status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentHealth {
    /// Component name
    pub name: String,
    /// Component status
    pub status: HealthStatus,
    /// Status description
    pub message: String,
    /// Check duration in milliseconds
    pub duration_ms: u64,
    /// Additional metadata
    pub metadata: Option<serde_json::Value>,
}

/// Health checker for the MuscleUp backend
pub struct HealthChecker {
    /// Service start time
    start_time: Instant,
    /// Database reference
    database: Database,
}

impl HealthChecker {
    /// Create a new health checker
    pub fn new(database: Database) -> Self {
        Self {
            start_time: Instant::now(),
            database,
        }
    }

    fn service_info(&self) -> ServiceInfo {
        ServiceInfo {
            name: "muscleup-backend".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment: std::env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
            uptime_seconds: self.start_time.elapsed().as_secs(),
        }
    }

    /// Fast check suitable for liveness probes; no store round-trip
    pub async fn basic_health(&self) -> HealthResponse {
        let checks = vec![ComponentHealth {
            name: "service".to_string(),
            status: HealthStatus::Healthy,
            message: "Service is running".to_string(),
            duration_ms: 0,
            metadata: None,
        }];

        HealthResponse {
            status: HealthStatus::Healthy,
            service: self.service_info(),
            checks,
            timestamp: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs(),
        }
    }

    /// Full check including database connectivity; used for readiness
    pub async fn full_health(&self) -> HealthResponse {
        let mut response = self.basic_health().await;

        let db_check = self.check_database().await;
        response.status = db_check.status.clone();
        response.checks.push(db_check);

        response
    }

    /// Check database connectivity and report table counts
    async fn check_database(&self) -> ComponentHealth {
        let start = Instant::now();

        let result = async {
            self.database.ping().await?;
            let exercises = self.database.count_exercises().await?;
            let users = self.database.count_users().await?;
            anyhow::Ok(serde_json::json!({
                "type": "sqlite",
                "exercises": exercises,
                "users": users,
            }))
        }
        .await;

        match result {
            Ok(metadata) => ComponentHealth {
                name: "database".to_string(),
                status: HealthStatus::Healthy,
                message: "Database is accessible and responsive".to_string(),
                duration_ms: start.elapsed().as_millis() as u64,
                metadata: Some(metadata),
            },
            Err(e) => {
                error!("Database health check failed: {}", e);
                ComponentHealth {
                    name: "database".to_string(),
                    status: HealthStatus::Unhealthy,
                    message: format!("Database check failed: {}", e),
                    duration_ms: start.elapsed().as_millis() as u64,
                    metadata: None,
                }
            }
        }
    }
}

/// Health check routes for the HTTP server
pub mod middleware {
    use super::*;
    use warp::{Filter, Reply};

    /// Create health check routes
    pub fn routes(
        health_checker: HealthChecker,
    ) -> impl Filter<Extract = impl Reply, Error = warp::Rejection> + Clone {
        let health_checker = std::sync::Arc::new(health_checker);

        let health = warp::path("health")
            .and(warp::get())
            .and(with_health_checker(health_checker.clone()))
            .and_then(health_handler);

        // Readiness is the same full check under the conventional probe path
        let ready = warp::path("ready")
            .and(warp::get())
            .and(with_health_checker(health_checker.clone()))
            .and_then(health_handler);

        let live = warp::path("live")
            .and(warp::get())
            .and(with_health_checker(health_checker))
            .and_then(liveness_handler);

        health.or(ready).or(live)
    }

    fn with_health_checker(
        health_checker: std::sync::Arc<HealthChecker>,
    ) -> impl Filter<Extract = (std::sync::Arc<HealthChecker>,), Error = std::convert::Infallible> + Clone
    {
        warp::any().map(move || health_checker.clone())
    }

    async fn health_handler(
        health_checker: std::sync::Arc<HealthChecker>,
    ) -> Result<impl Reply, warp::Rejection> {
        let response = health_checker.full_health().await;
        let status_code = match response.status {
            HealthStatus::Healthy => warp::http::StatusCode::OK,
            HealthStatus::Unhealthy => warp::http::StatusCode::SERVICE_UNAVAILABLE,
        };

        Ok(warp::reply::with_status(
            warp::reply::json(&response),
            status_code,
        ))
    }

    async fn liveness_handler(
        health_checker: std::sync::Arc<HealthChecker>,
    ) -> Result<impl Reply, warp::Rejection> {
        let response = health_checker.basic_health().await;
        Ok(warp::reply::json(&response))
    }
}
