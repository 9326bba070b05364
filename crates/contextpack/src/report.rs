use serde::{Deserialize, Serialize};

use ag_domain::trace::TraceEvent;

/// What went into an assembled context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextReport {
    pub turns_total: usize,
    pub turns_included: usize,
    /// Character count of the assembled context string.
    pub context_chars: usize,
    /// True when the window dropped turns or cut the newest one.
    pub windowed: bool,
    /// True when the single included turn was cut from the front.
    pub truncated_front: bool,
}

impl ContextReport {
    pub fn emit(&self) {
        TraceEvent::ContextBuilt {
            turns_total: self.turns_total,
            turns_included: self.turns_included,
            context_chars: self.context_chars,
            windowed: self.windowed,
        }
        .emit();
    }
}
