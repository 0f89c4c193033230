//! HTTP surface of the relay.
//!
//! Lifecycle of `POST /`: decode payload, resolve the display name, post the
//! message, return Slack's result. Each stage returns a [`RelayError`] on
//! failure, which ends that request only.

use std::any::Any;
use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::response::{IntoResponse, Response};
use axum::routing::{any, post};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use url::Url;

use super::{ClientRequest, RelayError};
use crate::slack::{HttpClient, PostResult, SlackClient, find_user_id};

/// Path accepting relay requests.
pub const RELAY_PATH: &str = "/";

/// Hosting platform startup probe, answered without touching Slack.
pub const LIVENESS_PATH: &str = "/_ah/start";

/// State shared by every request: the transport and the API base URL.
///
/// Holds no credentials; tokens arrive with each request.
pub struct RelayState<H> {
    http: Arc<H>,
    api_base_url: Arc<Url>,
}

impl<H> RelayState<H> {
    /// Creates state around an explicitly constructed transport.
    #[must_use]
    pub fn new(http: H, api_base_url: Url) -> Self {
        Self {
            http: Arc::new(http),
            api_base_url: Arc::new(api_base_url),
        }
    }
}

impl<H> Clone for RelayState<H> {
    fn clone(&self) -> Self {
        Self {
            http: Arc::clone(&self.http),
            api_base_url: Arc::clone(&self.api_base_url),
        }
    }
}

/// Builds the relay router.
///
/// - `LIVENESS_PATH`, any method: 200 with an empty body
/// - `POST /`: relay a message
/// - other methods on `/`: 405
/// - anything else: 404
///
/// A panic while handling one request becomes a 500 for that request.
pub fn router<H: HttpClient + 'static>(http: H, api_base_url: Url) -> Router {
    Router::new()
        .route(LIVENESS_PATH, any(liveness))
        .route(RELAY_PATH, post(relay_message::<H>).fallback(method_not_allowed))
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .with_state(RelayState::new(http, api_base_url))
}

async fn relay_message<H: HttpClient>(
    State(state): State<RelayState<H>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<PostResult>, RelayError> {
    let body = body.map_err(RelayError::UnreadableBody)?;
    let request = ClientRequest::from_slice(&body)?;
    let client = SlackClient::new(state.http.as_ref(), &state.api_base_url, &request.token)?;

    let user_id = find_user_id(&client, &request.display_name).await?;
    tracing::debug!(display_name = %request.display_name, %user_id, "Resolved recipient");

    let result = client.post_message(&user_id, &request.text).await?;
    tracing::info!(%user_id, ok = result.ok, error = %result.error, "Message relayed");

    Ok(Json(result))
}

async fn liveness() {}

async fn method_not_allowed() -> RelayError {
    RelayError::MethodNotAllowed
}

async fn not_found() -> RelayError {
    RelayError::NotFound
}

fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(detail, "Relay handler panicked");

    RelayError::Internal.into_response()
}
