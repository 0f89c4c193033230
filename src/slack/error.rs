//! Error types for Slack API calls.

use thiserror::Error;

/// Error type for the HTTP transport.
///
/// Describes what went wrong on the wire. Non-2xx responses are not
/// transport errors; see [`ApiError::Status`].
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed or the response body could not be read.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// and connections dropped mid-body.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The transport gave up waiting for the server.
    #[error("Request timed out")]
    Timeout,

    /// The endpoint URL could not be built or used.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Error type for Slack API calls and user resolution.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// Slack answered with a status outside `[200, 300)`.
    ///
    /// The body of such a response is never decoded.
    #[error("failed request: {status}")]
    Status {
        /// Status code and reason phrase returned by Slack
        status: http::StatusCode,
    },

    /// A 2xx response body was not the JSON shape expected for `method`.
    #[error("Failed to decode {method} response: {source}")]
    Decode {
        /// Web API method that was called
        method: String,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// The caller's token cannot be carried in an `Authorization` header.
    #[error("Invalid bearer token: {0}")]
    InvalidToken(#[source] http::header::InvalidHeaderValue),

    /// Slack answered 2xx but refused the call (`"ok": false`).
    #[error("{method} failed: {error}")]
    Slack {
        /// Web API method that was called
        method: &'static str,
        /// Slack error code, e.g. `invalid_auth`
        error: String,
    },

    /// `users.list` reported more pages than the first one.
    #[error("requires paginated response")]
    PaginationRequired,

    /// No workspace member has the requested display name.
    #[error("display_name '{0}' not found")]
    DisplayNameNotFound(String),
}
