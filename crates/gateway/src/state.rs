use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;

use ag_contextpack::ContextAssembler;
use ag_domain::config::Config;
use ag_providers::{ModelGateway, ProviderRegistry};
use ag_turns::TurnStore;

/// Shared application state passed to all API handlers and CLI commands.
#[derive(Clone)]
pub struct AppState {
    // ── Core services ─────────────────────────────────────────────────
    pub config: Arc<Config>,
    pub llm: Arc<ProviderRegistry>,
    pub gateway: Arc<ModelGateway>,

    // ── History ───────────────────────────────────────────────────────
    pub turns: Arc<dyn TurnStore>,
    pub assembler: ContextAssembler,
    /// Zone used for "today" and for grouping the chat listing.
    pub tz: Tz,
}

impl AppState {
    /// Wire already-built services together. Fails only on an invalid
    /// `store.timezone`.
    pub fn new(
        config: Arc<Config>,
        llm: Arc<ProviderRegistry>,
        gateway: Arc<ModelGateway>,
        turns: Arc<dyn TurnStore>,
    ) -> ag_domain::Result<Self> {
        let tz = config.store.tz()?;
        let assembler = ContextAssembler::new(config.context.window);
        Ok(Self {
            config,
            llm,
            gateway,
            turns,
            assembler,
            tz,
        })
    }

    /// The current calendar date in the configured zone.
    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.tz).date_naive()
    }
}
