mod domain;
mod ids;
mod auth;
mod config;
mod api;
mod clients;

mod app_system;

#[cfg(test)]
mod mock_framework;

mod actor_framework;
mod user_actor;
mod complaint_actor;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::app_system::{setup_tracing, ComplaintSystem};
use crate::config::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_tracing();

    info!("Starting complaint desk");

    // Both table actors start here and live until shutdown
    let system = ComplaintSystem::new(cli.mailbox_size());
    let app = api::router(system.app_state());

    let addr = cli.listen_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server is running on http://{}", addr);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed");
    if let Err(e) = &served {
        error!(error = %e, "Server stopped unexpectedly");
    }

    // The router (and its clients) is gone once serve returns
    system.shutdown().await?;
    served
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Ctrl-C received, shutting down"),
        Err(e) => {
            error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await
        }
    }
}
