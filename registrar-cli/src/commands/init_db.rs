//! Schema-only command

use anyhow::{Context, Result};
use clap::Parser;

use registrar_server::{create_pool, schema};

use super::DEFAULT_DATABASE_URL;

/// Arguments for the init-db command
#[derive(Parser, Debug)]
pub struct InitDbArgs {
    /// Database URL (e.g. sqlite://students.db)
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,
}

/// Create the tables and exit. Safe to run against an existing database.
pub async fn run_init_db(args: InitDbArgs) -> Result<()> {
    let pool = create_pool(&args.database_url)
        .await
        .with_context(|| format!("Failed to open database {}", args.database_url))?;

    schema::init(&pool)
        .await
        .context("Failed to initialize schema")?;

    pool.close().await;
    println!("Database ready: {}", args.database_url);
    Ok(())
}
