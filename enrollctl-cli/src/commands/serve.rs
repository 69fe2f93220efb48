//! HTTP server command
//!
//! Runs the enrollment registry server until Ctrl+C or SIGTERM. State lives
//! in memory only and is gone once the process exits.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use enrollctl_server::run_server;

use crate::config::EnrollctlConfig;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:50051)
    #[arg(long, short = 'b', env = "ENROLLCTL_BIND")]
    pub bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, config: &EnrollctlConfig) -> Result<()> {
    let server_config = config.server_config(args.bind, args.cors_permissive);
    tracing::info!("Starting enrollctl server on {}", server_config.bind_addr);

    run_server(server_config).await.context("Server error")?;

    Ok(())
}
