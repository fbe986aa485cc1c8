use std::net::SocketAddr;
use thiserror::Error;

/// Errors that stop the process from starting or shutting down cleanly.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
    #[error("Actor task failed: {0}")]
    Shutdown(#[from] tokio::task::JoinError),
}
