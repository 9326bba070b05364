use serde::Serialize;

/// Structured trace events emitted across all Agendum crates.
///
/// Events never carry credentials or full turn text; only sizes, ids and
/// classifications.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event")]
pub enum TraceEvent {
    ContextBuilt {
        turns_total: usize,
        turns_included: usize,
        context_chars: usize,
        windowed: bool,
    },
    LlmRequest {
        provider: String,
        model: String,
        messages: usize,
        duration_ms: u64,
        prompt_tokens: Option<u32>,
        completion_tokens: Option<u32>,
    },
    LlmFailure {
        provider: String,
        kind: String,
        duration_ms: u64,
    },
    TurnAppended {
        turn_id: u64,
        chars: usize,
    },
    AppointmentsExtracted {
        raw_lines: usize,
        unique: usize,
    },
    SummaryGenerated {
        turns: usize,
        summary_chars: usize,
    },
}

impl TraceEvent {
    pub fn emit(&self) {
        let json = serde_json::to_string(self).unwrap_or_default();
        tracing::info!(trace_event = %json, "ag_event");
    }
}
