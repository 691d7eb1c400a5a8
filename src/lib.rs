// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # MuscleUp Backend
//!
//! Backend server and database seeder for the MuscleUp fitness tracking
//! application. The crate ships two binaries:
//!
//! - `init-db`: creates the SQLite schema and seeds it with the reference
//!   exercise catalog, a demo account, and a day of sample activity data
//! - `muscleup-backend`: serves the HTTP API
//!
//! ## Quick Start
//!
//! 1. Initialize and seed the database with `init-db`
//! 2. Start the server with `muscleup-backend`
//! 3. Sign in with the demo credentials printed by the seeder
//!
//! Both binaries read `HOST`, `PORT`, `DEBUG`, and `DATABASE_URL` from the
//! environment (a `.env` file is honored), with development-friendly
//! defaults.
//!
//! ## Architecture
//!
//! - **Models**: typed representations of the five store entities
//! - **Database**: SQLite schema, migrations, and natural-key conditional
//!   inserts
//! - **Seed**: idempotent reference/demo data population
//! - **Server**: warp route tree and listener startup
//! - **Config / Logging / Health**: process environment handling, tracing
//!   setup, and monitoring endpoints
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use muscleup_backend::database::Database;
//! use muscleup_backend::seed::Seeder;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Opening the database creates any missing tables
//!     let database = Database::new("sqlite:./muscleup.db").await?;
//!
//!     // Safe to run repeatedly; existing rows are skipped
//!     let report = Seeder::new(&database).run().await?;
//!     println!("Demo user: {}", report.user.email);
//!
//!     Ok(())
//! }
//! ```

/// Common data models for the MuscleUp store
pub mod models;

/// Environment-based configuration
pub mod config;

/// SQLite storage and migrations
pub mod database;

/// Idempotent reference and demo data seeding
pub mod seed;

/// HTTP server assembly
pub mod server;

/// Structured logging setup
pub mod logging;

/// Health checks and monitoring
pub mod health;
