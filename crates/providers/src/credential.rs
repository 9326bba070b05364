//! Request-scoped provider credentials.
//!
//! A [`Credential`] wraps the raw API key. Its `Debug` and `Display` output
//! are redacted so that a credential can sit inside structs that get logged
//! without leaking.

use std::fmt;

use ag_domain::config::AuthConfig;
use ag_domain::error::{Error, Result};

const REDACTED: &str = "***";

/// An API key supplied for a single model call.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a raw key. Blank keys are rejected.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_owned()))
        }
    }

    /// Parse an `Authorization` header value (`Bearer <key>`).
    ///
    /// A bare key without any scheme is accepted too. Any other scheme
    /// (`Basic ...`) is rejected.
    pub fn from_authorization(header_value: &str) -> Option<Self> {
        let value = header_value.trim();
        match value.split_once(char::is_whitespace) {
            Some((scheme, rest)) if scheme.eq_ignore_ascii_case("bearer") => Self::new(rest),
            Some(_) => None,
            None if value.eq_ignore_ascii_case("bearer") => None,
            None => Self::new(value),
        }
    }

    /// The raw key. Only adapters building the outbound request should call this.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Replace every occurrence of the key in `text` with a redaction marker.
    pub fn scrub(&self, text: &str) -> String {
        text.replace(&self.0, REDACTED)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credential({REDACTED})")
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

/// Resolve the fallback key configured for a provider.
///
/// Precedence:
/// 1. `key` field (plaintext, logs a warning)
/// 2. `env` field (reads environment variable)
/// 3. Error
///
/// Resolved on every call; nothing is cached.
pub fn resolve_configured(auth: &AuthConfig) -> Result<Credential> {
    if let Some(ref key) = auth.key {
        tracing::warn!(
            "API key loaded from plaintext config field 'key' (prefer 'env' instead)"
        );
        return Credential::new(key.as_str())
            .ok_or_else(|| Error::Auth("configured 'key' is empty".into()));
    }

    if let Some(ref env_var) = auth.env {
        let value = std::env::var(env_var).map_err(|_| {
            Error::Auth(format!(
                "environment variable '{env_var}' not set or not valid UTF-8"
            ))
        })?;
        return Credential::new(value)
            .ok_or_else(|| Error::Auth(format!("environment variable '{env_var}' is empty")));
    }

    Err(Error::Auth(
        "no API key configured: set 'key' or 'env' in the provider auth config".into(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_header_is_stripped() {
        let c = Credential::from_authorization("Bearer sk-abc").unwrap();
        assert_eq!(c.expose(), "sk-abc");
    }

    #[test]
    fn bearer_scheme_is_case_insensitive() {
        let c = Credential::from_authorization("bearer   sk-abc ").unwrap();
        assert_eq!(c.expose(), "sk-abc");
    }

    #[test]
    fn bare_key_is_accepted() {
        let c = Credential::from_authorization("sk-abc").unwrap();
        assert_eq!(c.expose(), "sk-abc");
    }

    #[test]
    fn other_schemes_are_rejected() {
        assert!(Credential::from_authorization("Basic abc").is_none());
        assert!(Credential::from_authorization("Token sk-abc").is_none());
        assert!(Credential::from_authorization("sk abc").is_none());
    }

    #[test]
    fn empty_bearer_is_rejected() {
        assert!(Credential::from_authorization("Bearer ").is_none());
        assert!(Credential::from_authorization("").is_none());
    }

    #[test]
    fn debug_and_display_are_redacted() {
        let c = Credential::new("sk-secret").unwrap();
        assert_eq!(format!("{c:?}"), "Credential(***)");
        assert_eq!(c.to_string(), "***");
    }

    #[test]
    fn scrub_removes_every_occurrence() {
        let c = Credential::new("sk-secret").unwrap();
        let text = "Incorrect API key provided: sk-secret (sk-secret)";
        assert_eq!(c.scrub(text), "Incorrect API key provided: *** (***)");
    }

    #[test]
    fn resolve_plaintext_key() {
        let auth = AuthConfig {
            key: Some("sk-test-123".into()),
            ..Default::default()
        };
        assert_eq!(resolve_configured(&auth).unwrap().expose(), "sk-test-123");
    }

    #[test]
    fn resolve_env_key() {
        let var_name = "AG_TEST_RESOLVE_ENV_KEY_1234";
        std::env::set_var(var_name, "env-secret-value");
        let auth = AuthConfig {
            env: Some(var_name.into()),
            ..Default::default()
        };
        assert_eq!(resolve_configured(&auth).unwrap().expose(), "env-secret-value");
        std::env::remove_var(var_name);
    }

    #[test]
    fn resolve_missing_env_names_the_variable() {
        let auth = AuthConfig {
            env: Some("AG_TEST_NONEXISTENT_VAR_8888".into()),
            ..Default::default()
        };
        let err = resolve_configured(&auth).unwrap_err();
        assert!(err.to_string().contains("AG_TEST_NONEXISTENT_VAR_8888"));
    }

    #[test]
    fn resolve_without_config_fails() {
        let err = resolve_configured(&AuthConfig::default()).unwrap_err();
        assert!(err.to_string().contains("no API key configured"));
    }
}
