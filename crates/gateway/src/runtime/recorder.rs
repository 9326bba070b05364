//! Persists completed exchanges and client-saved chats as turns.

use ag_contextpack::prompts;
use ag_domain::error::Result;
use ag_domain::turn::Turn;
use ag_turns::TurnStore;

/// Store a successful chat exchange as `"User: …\nAI: …"`.
pub async fn record_exchange(turns: &dyn TurnStore, user_message: &str, reply: &str) -> Result<Turn> {
    turns
        .append(prompts::exchange_record(user_message, reply))
        .await
}

/// Store a client-supplied chat blob verbatim.
pub async fn record_raw(turns: &dyn TurnStore, blob: String) -> Result<Turn> {
    turns.append(blob).await
}
