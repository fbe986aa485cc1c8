//! JSON-over-HTTP surface for the user directory.

mod error;
mod routes;

pub use error::*;
pub use routes::*;
