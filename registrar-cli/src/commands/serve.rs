//! HTTP server command
//!
//! Opens the database, makes sure the tables exist, and serves the pages.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use registrar_server::{create_pool, run_server, schema, ServerConfig};

use super::DEFAULT_DATABASE_URL;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// Database URL (e.g. sqlite://students.db)
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    pub timeout: u64,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!("Opening database at {}", args.database_url);
    let pool = create_pool(&args.database_url)
        .await
        .context("Failed to create database pool")?;

    schema::init(&pool)
        .await
        .context("Failed to initialize schema")?;

    let config = ServerConfig {
        bind_addr: args.bind,
        request_timeout: Duration::from_secs(args.timeout),
    };

    // Blocks until shutdown
    run_server(pool.clone(), config)
        .await
        .context("Server error")?;

    pool.close().await;
    Ok(())
}
