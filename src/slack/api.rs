//! Authenticated Slack Web API client.

use std::fmt;

use http::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use serde::de::DeserializeOwned;
use url::Url;

use super::{ApiError, HttpClient, HttpError, HttpRequest, PostResult, UserList};

/// Default base URL of the Slack Web API.
pub const DEFAULT_BASE_URL: &str = "https://slack.com/api/";

/// Page size requested from `users.list`.
pub const USERS_PAGE_LIMIT: &str = "100";

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Slack Web API client bound to one caller's token.
///
/// Built per relayed request and dropped with it; the token is never stored
/// anywhere else. The transport `H` is borrowed so the connection pool can be
/// shared across requests without sharing credentials.
///
/// # Calling convention
///
/// [`call`](Self::call) sends a GET when there are no arguments and a
/// form-encoded POST otherwise. Callers pick the method shape by choosing
/// whether to pass arguments.
pub struct SlackClient<'a, H> {
    http: &'a H,
    base_url: &'a Url,
    authorization: HeaderValue,
}

impl<H> fmt::Debug for SlackClient<'_, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlackClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl<'a, H: HttpClient> SlackClient<'a, H> {
    /// Creates a client that authenticates every call with `token`.
    ///
    /// `base_url` must end with `/` so method names join beneath it.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidToken`] if the token contains bytes that
    /// cannot appear in an HTTP header.
    pub fn new(http: &'a H, base_url: &'a Url, token: &str) -> Result<Self, ApiError> {
        let mut authorization =
            HeaderValue::from_str(&format!("Bearer {token}")).map_err(ApiError::InvalidToken)?;
        authorization.set_sensitive(true);

        Ok(Self {
            http,
            base_url,
            authorization,
        })
    }

    /// Calls a Web API method and decodes the JSON response into `T`.
    ///
    /// Only the HTTP layer is validated: a 200 carrying `"ok": false` decodes
    /// successfully and is returned as-is.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Http`] if the request could not be sent
    /// - [`ApiError::Status`] if Slack answered outside `[200, 300)`; the
    ///   body is not decoded
    /// - [`ApiError::Decode`] if the body is not valid JSON for `T`
    pub async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        arguments: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let request = self.build_request(method, arguments)?;
        tracing::debug!(method, http_method = %request.method, "Calling Slack API");

        let response = self.http.request(request).await?;

        if !response.is_success() {
            tracing::debug!(
                method,
                status = %response.status,
                body = response.body_text().unwrap_or("<non-UTF-8 body>"),
                "Slack API returned failure status"
            );
            return Err(ApiError::Status {
                status: response.status,
            });
        }

        serde_json::from_slice(&response.body).map_err(|source| ApiError::Decode {
            method: method.to_string(),
            source,
        })
    }

    /// Fetches the first page of workspace members.
    ///
    /// # Errors
    ///
    /// Propagates any [`call`](Self::call) error.
    pub async fn list_users(&self) -> Result<UserList, ApiError> {
        self.call("users.list", &[("limit", USERS_PAGE_LIMIT)]).await
    }

    /// Posts `text` to `channel` as the token's user rather than a bot.
    ///
    /// # Errors
    ///
    /// Propagates any [`call`](Self::call) error. Slack-level failures are
    /// reported inside the returned [`PostResult`].
    pub async fn post_message(&self, channel: &str, text: &str) -> Result<PostResult, ApiError> {
        self.call(
            "chat.postMessage",
            &[("channel", channel), ("text", text), ("as_user", "true")],
        )
        .await
    }

    fn build_request(
        &self,
        method: &str,
        arguments: &[(&str, &str)],
    ) -> Result<HttpRequest, HttpError> {
        let url = self
            .base_url
            .join(method)
            .map_err(|e| HttpError::InvalidUrl(format!("{method}: {e}")))?;

        let request = if arguments.is_empty() {
            HttpRequest::get(url)
        } else {
            let body = url::form_urlencoded::Serializer::new(String::new())
                .extend_pairs(arguments)
                .finish();
            HttpRequest::post(url)
                .with_header(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE))
                .with_body(body.into_bytes())
        };

        Ok(request.with_header(AUTHORIZATION, self.authorization.clone()))
    }
}
