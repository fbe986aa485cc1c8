use std::net::SocketAddr;
use clap::Parser;
use super::AppError;

/// Runtime configuration. Flags take priority over environment variables.
#[derive(Debug, Clone, Parser)]
#[command(name = "user_directory", version, about = "In-memory user directory served over HTTP")]
pub struct Config {
    /// Address the HTTP API listens on
    #[arg(long, env = "USER_DIRECTORY_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// Number of requests that may queue for the directory actor
    #[arg(long, env = "USER_DIRECTORY_CHANNEL_CAPACITY", default_value_t = 32)]
    pub channel_capacity: usize,
}

impl Config {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.channel_capacity == 0 {
            return Err(AppError::Config("channel capacity must be greater than zero".to_string()));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 8080)),
            channel_capacity: 32,
        }
    }
}
