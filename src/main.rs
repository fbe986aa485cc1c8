mod domain;
mod clients;

mod app_system;
mod http;

#[cfg(test)]
mod mock_framework;

mod actor_framework;
mod user_actor;

use clap::Parser;
use tracing::{info, warn};
use crate::app_system::{setup_tracing, AppError, Config, DirectorySystem};
use crate::http::create_app;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = Config::parse();
    config.validate()?;
    info!(bind = %config.bind, "Starting user directory");

    let system = DirectorySystem::new(config.channel_capacity);
    let app = create_app(system.service());

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .map_err(|source| AppError::Bind { addr: config.bind, source })?;
    info!(addr = %config.bind, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Serve)?;

    system.shutdown().await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        // Without a signal handler, serve until the process is killed
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
