//! System orchestration, configuration, startup, and shutdown logic.

pub mod config;
pub mod directory_system;
pub mod error;
pub mod telemetry;

pub use config::*;
pub use directory_system::*;
pub use error::*;
pub use telemetry::*;
