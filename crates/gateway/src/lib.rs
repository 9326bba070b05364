//! Agendum: a single-user chat assistant that remembers every exchange and
//! derives appointment lists and daily summaries from the history.

pub mod api;
pub mod bootstrap;
pub mod cli;
pub mod error;
pub mod runtime;
pub mod state;
