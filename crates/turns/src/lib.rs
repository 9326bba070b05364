//! The turn log: an append-only, ordered record of every saved chat and
//! completed exchange.

pub mod jsonl;
pub mod listing;
pub mod memory;
pub mod store;

pub use jsonl::JsonlTurnStore;
pub use listing::{group_by_date, turns_on, ChatListing, DateGroups, SNIPPET_CHARS};
pub use memory::MemoryTurnStore;
pub use store::TurnStore;
