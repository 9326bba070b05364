//! HTTP error mapping. Every failure is rendered as `{"error": "<message>"}`.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

use ag_providers::{FailureKind, GenerationFailure};

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    /// The request was well-formed HTTP but its content is unusable.
    #[error("{0}")]
    Validation(String),

    /// No credential could be found for a model call.
    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Generation(#[from] GenerationFailure),

    #[error("storage error: {0}")]
    Storage(#[from] ag_domain::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Generation(f) => match f.kind {
                FailureKind::Authentication
                | FailureKind::RateLimited
                | FailureKind::MalformedResponse
                | FailureKind::Upstream => StatusCode::BAD_GATEWAY,
                FailureKind::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
                FailureKind::Timeout | FailureKind::Network => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generation(kind: FailureKind) -> ApiError {
        ApiError::Generation(GenerationFailure {
            kind,
            detail: "x".into(),
        })
    }

    #[test]
    fn status_mapping() {
        assert_eq!(ApiError::Validation("v".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::Unauthorized("u".into()).status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::NotFound("n".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(generation(FailureKind::Upstream).status(), StatusCode::BAD_GATEWAY);
        assert_eq!(generation(FailureKind::Authentication).status(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            generation(FailureKind::Unavailable).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            generation(FailureKind::Timeout).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Storage(ag_domain::Error::Other("disk".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn generation_message_is_the_failure_display() {
        let err = generation(FailureKind::RateLimited);
        assert_eq!(err.to_string(), "generation failed (rate_limited): x");
    }
}
