mod assistant;
mod context;
mod llm;
mod observability;
mod server;
mod store;

pub use assistant::*;
pub use context::*;
pub use llm::*;
pub use observability::*;
pub use server::*;
pub use store::*;

use serde::{Deserialize, Serialize};
use std::fmt;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Top-level config
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub assistant: AssistantConfig,
    #[serde(default)]
    pub context: ContextConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Config validation
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Severity level for a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSeverity {
    Error,
    Warning,
}

/// A single configuration validation issue.
#[derive(Debug, Clone)]
pub struct ConfigError {
    pub severity: ConfigSeverity,
    pub field: String,
    pub message: String,
}

impl ConfigError {
    fn error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: ConfigSeverity::Error,
            field: field.into(),
            message: message.into(),
        }
    }

    fn warning(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: ConfigSeverity::Warning,
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.severity {
            ConfigSeverity::Error => "ERROR",
            ConfigSeverity::Warning => "WARN",
        };
        write!(f, "[{tag}] {}: {}", self.field, self.message)
    }
}

impl Config {
    /// Validate the configuration and return a list of issues.
    ///
    /// Returns an empty vec when everything looks good.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.server.port == 0 {
            errors.push(ConfigError::error("server.port", "port must be greater than 0"));
        }
        if self.server.host.is_empty() {
            errors.push(ConfigError::error("server.host", "host must not be empty"));
        }

        if self.llm.providers.is_empty() {
            errors.push(ConfigError::warning(
                "llm.providers",
                "no LLM providers configured",
            ));
        }
        for (i, provider) in self.llm.providers.iter().enumerate() {
            if provider.id.is_empty() {
                errors.push(ConfigError::error(
                    format!("llm.providers[{i}].id"),
                    "provider id must not be empty",
                ));
            }
            if provider.base_url.is_empty() {
                errors.push(ConfigError::error(
                    format!("llm.providers[{i}].base_url"),
                    "provider base_url must not be empty",
                ));
            }
        }
        if let Some(ref id) = self.llm.default_provider {
            if !self.llm.providers.iter().any(|p| &p.id == id) {
                errors.push(ConfigError::error(
                    "llm.default_provider",
                    format!("no provider with id \"{id}\""),
                ));
            }
        }
        if self.llm.timeout_ms == 0 {
            errors.push(ConfigError::error("llm.timeout_ms", "timeout must be greater than 0"));
        }

        if self.assistant.system_prompt.trim().is_empty() {
            errors.push(ConfigError::warning(
                "assistant.system_prompt",
                "empty system prompt; the model gets no framing",
            ));
        }

        match self.context.window {
            ContextWindow::LastTurns { count: 0 } => errors.push(ConfigError::error(
                "context.window.count",
                "last_turns window must keep at least one turn",
            )),
            ContextWindow::MaxChars { chars: 0 } => errors.push(ConfigError::error(
                "context.window.chars",
                "max_chars window must be greater than 0",
            )),
            _ => {}
        }

        if self.store.tz().is_err() {
            errors.push(ConfigError::error(
                "store.timezone",
                format!("unknown IANA timezone \"{}\"", self.store.timezone),
            ));
        }

        if self.server.cors.allowed_origins.len() == 1
            && self.server.cors.allowed_origins[0] == "*"
        {
            errors.push(ConfigError::warning(
                "server.cors.allowed_origins",
                "wildcard \"*\" allows all origins (not recommended for production)",
            ));
        }

        errors
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[cfg(test)]
mod tests {
    use super::*;

    fn errors_only(cfg: &Config) -> Vec<ConfigError> {
        cfg.validate()
            .into_iter()
            .filter(|e| e.severity == ConfigSeverity::Error)
            .collect()
    }

    #[test]
    fn default_config_has_no_errors() {
        assert!(errors_only(&Config::default()).is_empty());
    }

    #[test]
    fn zero_port_is_an_error() {
        let mut cfg = Config::default();
        cfg.server.port = 0;
        let errs = errors_only(&cfg);
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].field, "server.port");
    }

    #[test]
    fn unknown_default_provider_is_an_error() {
        let mut cfg = Config::default();
        cfg.llm.default_provider = Some("nope".into());
        let errs = errors_only(&cfg);
        assert!(errs.iter().any(|e| e.field == "llm.default_provider"));
    }

    #[test]
    fn bad_timezone_is_an_error() {
        let mut cfg = Config::default();
        cfg.store.timezone = "Mars/Olympus".into();
        let errs = errors_only(&cfg);
        assert!(errs.iter().any(|e| e.field == "store.timezone"));
    }

    #[test]
    fn empty_window_is_an_error() {
        let mut cfg = Config::default();
        cfg.context.window = ContextWindow::LastTurns { count: 0 };
        assert!(errors_only(&cfg)
            .iter()
            .any(|e| e.field == "context.window.count"));
    }

    #[test]
    fn missing_providers_is_only_a_warning() {
        let mut cfg = Config::default();
        cfg.llm.providers.clear();
        let issues = cfg.validate();
        assert!(issues
            .iter()
            .any(|e| e.field == "llm.providers" && e.severity == ConfigSeverity::Warning));
        assert!(errors_only(&cfg).is_empty());
    }

    #[test]
    fn config_error_display_has_tag() {
        let e = ConfigError::warning("a.b", "careful");
        assert_eq!(e.to_string(), "[WARN] a.b: careful");
    }
}
