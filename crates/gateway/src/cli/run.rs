//! One-shot commands: `ask`, `appointments` and `summary`.
//!
//! These boot the same runtime as `serve` without an HTTP listener and use
//! the key configured for the selected provider.

use std::sync::Arc;

use ag_domain::config::Config;
use ag_providers::Credential;

use crate::bootstrap;
use crate::runtime::{self, AppointmentList};
use crate::state::AppState;

fn configured_credential(state: &AppState) -> anyhow::Result<Credential> {
    state.gateway.fallback_credential().ok_or_else(|| {
        anyhow::anyhow!(
            "no API key configured: set the env var named in [llm.providers.auth].env \
             (OPENAI_API_KEY by default)"
        )
    })
}

/// `agendum ask <message>`: one recorded chat exchange.
pub async fn ask(config: Arc<Config>, ephemeral: bool, message: String) -> anyhow::Result<()> {
    let state = bootstrap::build_app_state(config, ephemeral)?;
    let credential = configured_credential(&state)?;
    let reply = runtime::run_chat(&state, &message, &credential).await?;
    println!("{reply}");
    Ok(())
}

/// `agendum appointments`
pub async fn appointments(config: Arc<Config>, ephemeral: bool) -> anyhow::Result<()> {
    let state = bootstrap::build_app_state(config, ephemeral)?;
    let credential = configured_credential(&state)?;
    match runtime::find_appointments(&state, &credential, state.today()).await? {
        AppointmentList::NoneFound => println!("{}", runtime::appointments::NO_APPOINTMENTS),
        AppointmentList::Found(items) => {
            for item in items {
                println!("{item}");
            }
        }
    }
    Ok(())
}

/// `agendum summary`
pub async fn summary(config: Arc<Config>, ephemeral: bool) -> anyhow::Result<()> {
    let state = bootstrap::build_app_state(config, ephemeral)?;
    let credential = configured_credential(&state)?;
    let summary = runtime::generate_summary(&state, &credential, state.today()).await?;
    println!("{summary}");
    Ok(())
}
