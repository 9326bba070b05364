//! Credential extraction for routes that call the model.
//!
//! The caller's `Authorization: Bearer <key>` header wins. Without one, the
//! key configured for the selected provider is used. Neither means 401.

use axum::http::{header, HeaderMap};

use ag_providers::Credential;

use crate::error::ApiError;
use crate::state::AppState;

/// The credential supplied in the request headers, if any.
///
/// A header that is present but blank (`"Bearer "`) counts as absent. A
/// scheme other than Bearer is rejected.
pub fn bearer_credential(headers: &HeaderMap) -> Result<Option<Credential>, ApiError> {
    let Some(value) = headers.get(header::AUTHORIZATION) else {
        return Ok(None);
    };
    let value = value
        .to_str()
        .map_err(|_| ApiError::Unauthorized("malformed Authorization header".into()))?;
    match Credential::from_authorization(value) {
        Some(credential) => Ok(Some(credential)),
        None if is_blank_bearer(value) => Ok(None),
        None => Err(ApiError::Unauthorized(
            "unsupported Authorization scheme: send 'Bearer <key>'".into(),
        )),
    }
}

fn is_blank_bearer(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value.eq_ignore_ascii_case("bearer")
}

/// Resolve the credential for one model call.
pub fn resolve_credential(state: &AppState, headers: &HeaderMap) -> Result<Credential, ApiError> {
    if let Some(credential) = bearer_credential(headers)? {
        return Ok(credential);
    }
    state.gateway.fallback_credential().ok_or_else(|| {
        ApiError::Unauthorized(
            "missing API key: send 'Authorization: Bearer <key>' or configure one for the provider"
                .into(),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn bearer_header_is_parsed() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer sk-abc"));
        let cred = bearer_credential(&headers).unwrap().unwrap();
        assert_eq!(cred.expose(), "sk-abc");
    }

    #[test]
    fn missing_or_blank_header_is_none() {
        assert!(bearer_credential(&HeaderMap::new()).unwrap().is_none());

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer "));
        assert!(bearer_credential(&headers).unwrap().is_none());
    }

    #[test]
    fn non_bearer_scheme_is_unauthorized() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        assert!(matches!(
            bearer_credential(&headers),
            Err(ApiError::Unauthorized(_))
        ));
    }
}
