//! Core runtime: the operations behind every HTTP route and CLI command.
//!
//! Each operation runs to completion within the calling task. History is
//! read fresh from the turn store on every call; nothing derived is cached.

pub mod appointments;
pub mod chat;
pub mod recorder;
pub mod summary;

pub use appointments::{find_appointments, parse_appointments, AppointmentList};
pub use chat::run_chat;
pub use summary::generate_summary;
