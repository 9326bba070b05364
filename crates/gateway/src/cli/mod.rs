pub mod config;
pub mod run;

use clap::{Parser, Subcommand};

/// Agendum: a chat assistant that keeps track of your appointments.
#[derive(Debug, Parser)]
#[command(name = "agendum", version, about)]
pub struct Cli {
    /// Keep history in memory only (nothing is written to `store.path`).
    #[arg(long, global = true)]
    pub ephemeral: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start the HTTP server (default when no subcommand is given).
    Serve,
    /// Configuration utilities.
    #[command(subcommand)]
    Config(ConfigCommand),
    /// Send one message through the chat pipeline and print the reply.
    Ask {
        /// The message to send.
        message: String,
    },
    /// Print the appointments found in the stored history.
    Appointments,
    /// Print a summary of today's conversations.
    Summary,
    /// Print version information.
    Version,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Parse the config file and report any errors.
    Validate,
    /// Dump the resolved configuration (with defaults) as TOML.
    Show,
}

// ── Config loading helper ─────────────────────────────────────────────

/// Load the configuration from the path specified by `AGENDUM_CONFIG` (or
/// `config.toml` by default). A missing file means all defaults. Returns the
/// parsed [`Config`] and the path that was used.
///
/// [`Config`]: ag_domain::config::Config
pub fn load_config() -> anyhow::Result<(ag_domain::config::Config, String)> {
    let config_path =
        std::env::var("AGENDUM_CONFIG").unwrap_or_else(|_| "config.toml".into());
    let config = load_config_from(&config_path)?;
    Ok((config, config_path))
}

pub fn load_config_from(config_path: &str) -> anyhow::Result<ag_domain::config::Config> {
    if !std::path::Path::new(config_path).exists() {
        return Ok(ag_domain::config::Config::default());
    }
    let raw = std::fs::read_to_string(config_path)
        .map_err(|e| anyhow::anyhow!("reading {config_path}: {e}"))?;
    toml::from_str(&raw).map_err(|e| anyhow::anyhow!("parsing {config_path}: {e}"))
}
