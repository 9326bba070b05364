use serde::{Deserialize, Serialize};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Assistant persona / request shaping
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// First message of every chat request.
    #[serde(default = "d_system_prompt")]
    pub system_prompt: String,
    /// Model override; when `None` the provider's `default_model` is used.
    #[serde(default)]
    pub model: Option<String>,
    /// Sampling temperature. `None` lets the provider choose.
    #[serde(default)]
    pub temperature: Option<f32>,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            system_prompt: d_system_prompt(),
            model: None,
            temperature: None,
        }
    }
}

fn d_system_prompt() -> String {
    "You are an assistant that helps manage appointments and commitments.".into()
}
