//! The Model Gateway: the single boundary through which every model call
//! passes.
//!
//! [`ModelGateway::generate`] never returns a bare string on failure. The
//! outcome is a [`Generation`], so callers have to branch on success vs.
//! failure before they can touch the text.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use ag_domain::config::{AssistantConfig, AuthConfig, LlmConfig};
use ag_domain::error::Error;
use ag_domain::message::Message;
use ag_domain::trace::TraceEvent;
use serde::Serialize;

use crate::credential::{self, Credential};
use crate::registry::ProviderRegistry;
use crate::traits::{ChatRequest, LlmProvider};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Outcome types
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Why a model call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The provider rejected the credential (401/403).
    Authentication,
    /// The provider throttled the call (429).
    RateLimited,
    /// The call exceeded the configured timeout.
    Timeout,
    /// The provider could not be reached.
    Network,
    /// The provider answered 2xx but the body was not a usable completion.
    MalformedResponse,
    /// Any other non-success answer from the provider.
    Upstream,
    /// No provider is configured.
    Unavailable,
}

impl FailureKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FailureKind::Authentication => "authentication",
            FailureKind::RateLimited => "rate_limited",
            FailureKind::Timeout => "timeout",
            FailureKind::Network => "network",
            FailureKind::MalformedResponse => "malformed_response",
            FailureKind::Upstream => "upstream",
            FailureKind::Unavailable => "unavailable",
        }
    }

    /// Classify a provider error.
    pub fn classify(err: &Error) -> Self {
        match err {
            Error::Provider { status: Some(401 | 403), .. } => FailureKind::Authentication,
            Error::Provider { status: Some(429), .. } => FailureKind::RateLimited,
            Error::Provider { status: Some(_), .. } => FailureKind::Upstream,
            Error::Provider { status: None, .. } | Error::Json(_) => {
                FailureKind::MalformedResponse
            }
            Error::Timeout(_) => FailureKind::Timeout,
            Error::Http(_) | Error::Io(_) => FailureKind::Network,
            Error::Auth(_) => FailureKind::Authentication,
            Error::Config(_) => FailureKind::Unavailable,
            Error::Other(_) => FailureKind::Upstream,
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified model-call failure. `detail` never contains the credential.
#[derive(Debug, Clone, thiserror::Error)]
#[error("generation failed ({kind}): {detail}")]
pub struct GenerationFailure {
    pub kind: FailureKind,
    pub detail: String,
}

/// Outcome of a model call.
#[must_use = "a Generation may be a Failure and must be checked"]
#[derive(Debug, Clone)]
pub enum Generation {
    Success(String),
    Failure(GenerationFailure),
}

impl Generation {
    /// Convert into a `Result` so callers can use `?`.
    pub fn into_result(self) -> Result<String, GenerationFailure> {
        match self {
            Generation::Success(text) => Ok(text),
            Generation::Failure(failure) => Err(failure),
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// ModelGateway
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Sends a message sequence to the selected provider with a per-call
/// credential.
pub struct ModelGateway {
    provider: Option<Arc<dyn LlmProvider>>,
    /// Where to find a key when the caller supplies none.
    fallback_auth: AuthConfig,
    model: Option<String>,
    temperature: Option<f32>,
}

impl ModelGateway {
    /// Gateway over a single provider with no configured fallback key.
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            provider: Some(provider),
            fallback_auth: AuthConfig::default(),
            model: None,
            temperature: None,
        }
    }

    /// Select the provider named by `llm.default_provider` (or the first one)
    /// and apply the assistant's model/temperature settings.
    pub fn from_config(
        registry: &ProviderRegistry,
        llm: &LlmConfig,
        assistant: &AssistantConfig,
    ) -> Self {
        let selected = llm.selected_provider();
        let provider = selected.and_then(|pc| registry.get(&pc.id));
        if provider.is_none() {
            tracing::warn!("model gateway has no provider; every generation will fail");
        }
        Self {
            provider,
            fallback_auth: selected.map(|pc| pc.auth.clone()).unwrap_or_default(),
            model: assistant.model.clone(),
            temperature: assistant.temperature,
        }
    }

    pub fn with_fallback_auth(mut self, auth: AuthConfig) -> Self {
        self.fallback_auth = auth;
        self
    }

    pub fn provider_id(&self) -> Option<&str> {
        self.provider.as_ref().map(|p| p.provider_id())
    }

    /// Resolve the key configured for the selected provider, if any.
    pub fn fallback_credential(&self) -> Option<Credential> {
        match credential::resolve_configured(&self.fallback_auth) {
            Ok(c) => Some(c),
            Err(e) => {
                tracing::debug!(error = %e, "no configured fallback credential");
                None
            }
        }
    }

    /// Replay `messages` to the provider and classify the outcome.
    ///
    /// Failures are logged here with the credential scrubbed from the detail.
    pub async fn generate(&self, messages: Vec<Message>, credential: &Credential) -> Generation {
        let Some(provider) = self.provider.as_ref() else {
            return Generation::Failure(GenerationFailure {
                kind: FailureKind::Unavailable,
                detail: "no LLM provider is configured".into(),
            });
        };

        let message_count = messages.len();
        let req = ChatRequest {
            messages,
            temperature: self.temperature,
            max_tokens: None,
            model: self.model.clone(),
        };

        let start = Instant::now();
        let result = provider.chat(&req, credential).await;
        let duration_ms = start.elapsed().as_millis() as u64;

        match result {
            Ok(resp) => {
                TraceEvent::LlmRequest {
                    provider: provider.provider_id().to_owned(),
                    model: resp.model.clone(),
                    messages: message_count,
                    duration_ms,
                    prompt_tokens: resp.usage.map(|u| u.prompt_tokens),
                    completion_tokens: resp.usage.map(|u| u.completion_tokens),
                }
                .emit();
                Generation::Success(resp.content)
            }
            Err(e) => {
                let kind = FailureKind::classify(&e);
                let detail = credential.scrub(&e.to_string());
                tracing::warn!(
                    provider = %provider.provider_id(),
                    kind = %kind,
                    error = %detail,
                    "model call failed"
                );
                TraceEvent::LlmFailure {
                    provider: provider.provider_id().to_owned(),
                    kind: kind.as_str().to_owned(),
                    duration_ms,
                }
                .emit();
                Generation::Failure(GenerationFailure { kind, detail })
            }
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
