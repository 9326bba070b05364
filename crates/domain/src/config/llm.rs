use serde::{Deserialize, Serialize};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// LLM provider system
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Outbound HTTP timeout for a single model call.
    #[serde(default = "d_120000u")]
    pub timeout_ms: u64,
    /// Provider used for every model call. When `None`, the first entry in
    /// `providers` is used.
    #[serde(default)]
    pub default_provider: Option<String>,
    /// Registered LLM providers (data-driven: adding a provider = adding config).
    #[serde(default = "d_providers")]
    pub providers: Vec<ProviderConfig>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 120_000,
            default_provider: None,
            providers: d_providers(),
        }
    }
}

impl LlmConfig {
    /// The provider config selected by `default_provider` (or the first one).
    pub fn selected_provider(&self) -> Option<&ProviderConfig> {
        match self.default_provider {
            Some(ref id) => self.providers.iter().find(|p| &p.id == id),
            None => self.providers.first(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub id: String,
    pub kind: ProviderKind,
    pub base_url: String,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub default_model: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    OpenaiCompat,
    AzureOpenai,
}

/// How a provider expects its key, and where a fallback key lives when the
/// caller does not supply one.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AuthConfig {
    /// Header name (e.g. "Authorization", "api-key").
    #[serde(default)]
    pub header: Option<String>,
    /// Header value prefix (e.g. "Bearer ").
    #[serde(default)]
    pub prefix: Option<String>,
    /// Env var containing a fallback key.
    #[serde(default)]
    pub env: Option<String>,
    /// Direct fallback key (for config-only setups; prefer env).
    #[serde(default)]
    pub key: Option<String>,
}

// ── serde default helpers ───────────────────────────────────────────

fn d_120000u() -> u64 {
    120_000
}

fn d_providers() -> Vec<ProviderConfig> {
    vec![ProviderConfig {
        id: "openai".into(),
        kind: ProviderKind::OpenaiCompat,
        base_url: "https://api.openai.com/v1".into(),
        auth: AuthConfig {
            env: Some("OPENAI_API_KEY".into()),
            ..Default::default()
        },
        default_model: Some("gpt-4".into()),
    }]
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_openai_provider() {
        let cfg = LlmConfig::default();
        let p = cfg.selected_provider().unwrap();
        assert_eq!(p.id, "openai");
        assert_eq!(p.kind, ProviderKind::OpenaiCompat);
        assert_eq!(p.default_model.as_deref(), Some("gpt-4"));
        assert_eq!(p.auth.env.as_deref(), Some("OPENAI_API_KEY"));
    }

    #[test]
    fn default_provider_selects_by_id() {
        let toml_str = r#"
            default_provider = "local"

            [[providers]]
            id = "openai"
            kind = "openai_compat"
            base_url = "https://api.openai.com/v1"

            [[providers]]
            id = "local"
            kind = "openai_compat"
            base_url = "http://localhost:11434/v1"
            default_model = "llama3"
        "#;
        let cfg: LlmConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(cfg.providers.len(), 2);
        assert_eq!(cfg.selected_provider().unwrap().id, "local");
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let cfg: LlmConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.timeout_ms, 120_000);
        assert_eq!(cfg.providers.len(), 1);
    }

    #[test]
    fn azure_kind_deserializes() {
        let kind: ProviderKind = serde_json::from_str(r#""azure_openai""#).unwrap();
        assert_eq!(kind, ProviderKind::AzureOpenai);
    }
}
