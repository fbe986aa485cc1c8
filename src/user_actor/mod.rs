//! User-specific domain logic hooked into the resource actor.

pub mod entity;
pub mod error;

pub use error::*;
