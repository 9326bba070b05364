//! Summary of today's conversations.

use chrono::NaiveDate;

use ag_contextpack::{join_texts, prompts};
use ag_domain::message::Message;
use ag_domain::trace::TraceEvent;
use ag_providers::Credential;
use ag_turns::turns_on;

use crate::error::ApiError;
use crate::state::AppState;

/// Summarize the turns recorded on `today` (in the configured zone).
///
/// Returns [`ApiError::NotFound`] without calling the model when there is
/// nothing to summarize.
pub async fn generate_summary(
    state: &AppState,
    credential: &Credential,
    today: NaiveDate,
) -> Result<String, ApiError> {
    let history = state.turns.list_ascending().await?;
    let todays = turns_on(&history, today, state.tz);
    if todays.is_empty() {
        return Err(ApiError::NotFound("no chats found for today".into()));
    }

    let prompt = prompts::summary_prompt(&join_texts(&todays));
    let summary = state
        .gateway
        .generate(vec![Message::user(prompt)], credential)
        .await
        .into_result()?;

    TraceEvent::SummaryGenerated {
        turns: todays.len(),
        summary_chars: summary.chars().count(),
    }
    .emit();
    Ok(summary)
}
