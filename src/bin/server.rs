// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # MuscleUp Backend Server Binary
//!
//! Reads configuration from the environment, opens the database, and runs
//! the HTTP listener until terminated.

use anyhow::Result;
use clap::Parser;
use muscleup_backend::{config::ServerConfig, database::Database, logging, server::AppServer};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "muscleup-backend")]
#[command(about = "MuscleUp fitness tracking backend server")]
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
    let database_url = args
        .database_url
        .unwrap_or_else(|| config.database.url.clone());

    info!("Starting MuscleUp backend server");

    let database = Database::new(&database_url).await?;
    info!("Database initialized: {}", database_url);

    let server = AppServer::new(config, database);

    if let Err(e) = server.run().await {
        error!("Server error: {}", e);
        return Err(e);
    }

    Ok(())
}
