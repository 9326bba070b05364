//! One chat exchange: assemble history, call the model, record the result.

use ag_contextpack::ContextAssembler;
use ag_providers::Credential;

use crate::error::ApiError;
use crate::runtime::recorder;
use crate::state::AppState;

/// Reject blank chat messages.
pub fn require_message(message: &str) -> Result<&str, ApiError> {
    if message.trim().is_empty() {
        return Err(ApiError::Validation("message is empty".into()));
    }
    Ok(message)
}

/// Run one exchange and return the model's reply.
///
/// The exchange is recorded only after the model succeeds. A failure to
/// record is logged and does not fail the exchange.
pub async fn run_chat(
    state: &AppState,
    message: &str,
    credential: &Credential,
) -> Result<String, ApiError> {
    let message = require_message(message)?;

    let history = state.turns.list_ascending().await?;
    let (context, report) = state.assembler.assemble(&history);
    report.emit();

    let messages =
        ContextAssembler::chat_messages(&state.config.assistant.system_prompt, &context, message);
    let reply = state.gateway.generate(messages, credential).await.into_result()?;

    if let Err(e) = recorder::record_exchange(state.turns.as_ref(), message, &reply).await {
        tracing::error!(error = %e, "failed to record chat exchange");
    }

    Ok(reply)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_messages_are_rejected() {
        assert!(matches!(require_message(""), Err(ApiError::Validation(_))));
        assert!(matches!(require_message("  \n"), Err(ApiError::Validation(_))));
        assert_eq!(require_message("hi").unwrap(), "hi");
    }
}
