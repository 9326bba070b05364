//! Shared types for Agendum: configuration, errors, conversation messages,
//! stored turns and structured trace events.

pub mod config;
pub mod error;
pub mod message;
pub mod trace;
pub mod turn;

pub use error::{Error, Result};
pub use message::{Message, Role};
pub use turn::Turn;
