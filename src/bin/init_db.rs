// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Database Initialization Binary
//!
//! Creates the MuscleUp schema and populates it with the exercise catalog,
//! demo account, and sample activity data. Safe to re-run: rows that already
//! exist are skipped.

use anyhow::Result;
use clap::Parser;
use muscleup_backend::{
    config::ServerConfig,
    database::Database,
    logging,
    seed::{ActivityOutcome, Seeder, DEMO_EMAIL, DEMO_PASSWORD},
};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "init-db")]
#[command(about = "Initialize and seed the MuscleUp database")]
pub struct Args {
    /// Database URL (overrides DATABASE_URL from the environment)
    #[arg(short, long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    logging::init_from_env()?;

    let args = Args::parse();
    let config = ServerConfig::from_env()?;
    let database_url = args.database_url.unwrap_or(config.database.url);

    info!("Initializing MuscleUp database: {}", database_url);

    // Opening the database creates any missing tables
    let database = Database::new(&database_url).await?;
    info!("Database tables created");

    let seeder = Seeder::new(&database);
    let report = seeder.run().await?;

    info!(
        "Exercise catalog: {} entries ({} newly inserted)",
        report.catalog.processed, report.catalog.inserted
    );
    info!("Demo user ready: {} ({})", report.user.email, report.user.id);

    match report.activity {
        ActivityOutcome::Seeded(counts) => info!(
            "Sample activity ready: {} workout logs, {} nutrition logs, {} progress records inserted",
            counts.workout_logs, counts.nutrition_logs, counts.progress_records
        ),
        // Earlier stages stay committed; re-run after fixing the catalog
        ActivityOutcome::MissingExercises(missing) => warn!(
            "Sample activity not seeded; missing exercises: {}",
            missing.join(", ")
        ),
    }

    info!("Database initialization complete");
    info!("Demo login credentials: {DEMO_EMAIL} / {DEMO_PASSWORD}");
    info!("Start the backend with: muscleup-backend");

    Ok(())
}
