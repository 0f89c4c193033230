//! Relay error type and its HTTP mapping.

use axum::Json;
use axum::extract::rejection::BytesRejection;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use crate::slack::{ApiError, HttpError};

/// Error type for one relayed request.
///
/// Each variant maps to a status via [`RelayError::status`] and is rendered
/// as `{"ok": false, "error": "<message>"}`, the same shape as a relayed
/// `chat.postMessage` result.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The inbound body could not be read (too large, aborted upload).
    #[error("invalid request body: {0}")]
    UnreadableBody(#[source] BytesRejection),

    /// The inbound body was not a valid request payload.
    #[error("invalid request payload: {0}")]
    InvalidPayload(#[source] serde_json::Error),

    /// The payload named no recipient.
    #[error("display_name must not be empty")]
    EmptyDisplayName,

    /// The path is not served by the relay.
    #[error("not found")]
    NotFound,

    /// The relay path only accepts POST.
    #[error("bad method")]
    MethodNotAllowed,

    /// The handler panicked; details are only logged.
    #[error("internal error")]
    Internal,

    /// Resolving the recipient or posting the message failed.
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl RelayError {
    /// HTTP status reported to the caller for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::UnreadableBody(rejection) => rejection.status(),
            Self::InvalidPayload(_)
            | Self::EmptyDisplayName
            | Self::Api(ApiError::InvalidToken(_)) => StatusCode::BAD_REQUEST,
            Self::NotFound | Self::Api(ApiError::DisplayNameNotFound(_)) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Api(ApiError::PaginationRequired) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Api(ApiError::Http(HttpError::Timeout)) => StatusCode::GATEWAY_TIMEOUT,
            Self::Internal | Self::Api(ApiError::Http(HttpError::InvalidUrl(_))) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::Api(
                ApiError::Http(HttpError::Connection(_))
                | ApiError::Status { .. }
                | ApiError::Slack { .. }
                | ApiError::Decode { .. },
            ) => StatusCode::BAD_GATEWAY,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    ok: bool,
    error: String,
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::warn!(%status, error = %self, "Relay request failed");
        } else {
            tracing::info!(%status, error = %self, "Relay request rejected");
        }

        let body = Json(ErrorBody {
            ok: false,
            error: self.to_string(),
        });

        if matches!(self, Self::MethodNotAllowed) {
            return (
                status,
                [(header::ALLOW, HeaderValue::from_static("POST"))],
                body,
            )
                .into_response();
        }

        (status, body).into_response()
    }
}
