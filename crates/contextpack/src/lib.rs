//! Turns stored history into the message sequences sent to the model.

pub mod builder;
pub mod prompts;
pub mod report;
pub mod truncation;

pub use builder::{join_texts, ContextAssembler};
pub use report::ContextReport;
