use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Everything that can end a `/send` request early. Each variant turns into
/// exactly one plain-text response.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("invalid request body: {0}")]
    InvalidBody(#[source] serde_json::Error),

    #[error("upstream request failed: {0}")]
    UpstreamUnreachable(#[source] reqwest::Error),

    #[error("upstream answered with status {0}")]
    UpstreamStatus(reqwest::StatusCode),

    #[error("upstream response could not be parsed: {0}")]
    UpstreamMalformed(#[source] reqwest::Error),

    #[error("failed to encode response: {0}")]
    Encode(#[source] serde_json::Error),
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            RelayError::UpstreamUnreachable(_)
            | RelayError::UpstreamStatus(_)
            | RelayError::UpstreamMalformed(_) => StatusCode::SERVICE_UNAVAILABLE,
            RelayError::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn public_message(&self) -> &'static str {
        match self {
            RelayError::InvalidBody(_) => "error: Invalid JSON",
            RelayError::UpstreamUnreachable(_)
            | RelayError::UpstreamStatus(_)
            | RelayError::UpstreamMalformed(_) => "AI service unavailable",
            RelayError::Encode(_) => "Internal server error",
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "AI proxy error");
        } else {
            tracing::warn!(error = %self, "Rejected request");
        }

        (status, self.public_message()).into_response()
    }
}
