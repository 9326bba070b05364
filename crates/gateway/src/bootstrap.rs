//! AppState construction shared by `serve` and the one-shot CLI commands.

use std::sync::Arc;

use anyhow::Context;

use ag_domain::config::{Config, ConfigSeverity};
use ag_providers::{ModelGateway, ProviderRegistry};
use ag_turns::{JsonlTurnStore, MemoryTurnStore, TurnStore};

use crate::state::AppState;

/// Validate config, initialize every subsystem and return a fully-wired
/// [`AppState`].
///
/// With `ephemeral` set, history lives in memory and is lost on exit.
pub fn build_app_state(config: Arc<Config>, ephemeral: bool) -> anyhow::Result<AppState> {
    // ── Config validation ────────────────────────────────────────────
    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            ConfigSeverity::Warning => tracing::warn!("config: {issue}"),
            ConfigSeverity::Error => tracing::error!("config: {issue}"),
        }
    }
    let error_count = issues
        .iter()
        .filter(|i| i.severity == ConfigSeverity::Error)
        .count();
    if error_count > 0 {
        anyhow::bail!("config validation failed with {error_count} error(s)");
    }

    // ── LLM providers ────────────────────────────────────────────────
    let llm = Arc::new(
        ProviderRegistry::from_config(&config.llm).context("initializing LLM providers")?,
    );
    tracing::info!(providers = llm.len(), "LLM provider registry ready");

    let gateway = Arc::new(ModelGateway::from_config(&llm, &config.llm, &config.assistant));
    tracing::info!(
        provider = gateway.provider_id().unwrap_or("none"),
        "model gateway ready"
    );

    // ── Turn store ───────────────────────────────────────────────────
    let turns: Arc<dyn TurnStore> = if ephemeral {
        tracing::warn!("ephemeral mode: history is kept in memory only");
        Arc::new(MemoryTurnStore::new())
    } else {
        Arc::new(
            JsonlTurnStore::open(&config.store.path)
                .with_context(|| format!("opening turn store at {}", config.store.path.display()))?,
        )
    };

    let state = AppState::new(config.clone(), llm, gateway, turns)
        .context("resolving store.timezone")?;
    tracing::info!(
        timezone = %state.tz,
        window = ?config.context.window,
        "app state ready"
    );
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn builds_with_defaults_on_disk() {
        let tmp = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.store.path = tmp.path().join("data");

        let state = build_app_state(Arc::new(config), false).unwrap();
        assert!(tmp.path().join("data").is_dir());
        assert_eq!(state.turns.len().await.unwrap(), 0);
        assert_eq!(state.llm.list_providers(), vec!["openai".to_string()]);
    }

    #[test]
    fn invalid_config_aborts() {
        let mut config = Config::default();
        config.store.timezone = "Mars/Olympus_Mons".into();
        assert!(build_app_state(Arc::new(config), true).is_err());
    }
}
