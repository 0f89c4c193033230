//! Inbound request payload.

use serde::Deserialize;

use super::RelayError;
use crate::slack::strip_mention;

/// Body of `POST /`.
///
/// Lives for one request. The token is handed to a per-request
/// [`SlackClient`](crate::slack::SlackClient) and never kept.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct ClientRequest {
    /// Slack token the message is posted with
    pub token: String,
    /// Recipient display name, optionally in `@name` form
    pub display_name: String,
    /// Message body
    pub text: String,
}

impl ClientRequest {
    /// Decodes a payload from raw body bytes.
    ///
    /// The content type is not checked; any body that parses as the
    /// payload object is accepted. All three fields are required.
    ///
    /// # Errors
    ///
    /// - [`RelayError::InvalidPayload`] if the body is not a JSON object of
    ///   the expected shape
    /// - [`RelayError::EmptyDisplayName`] if the display name is empty once
    ///   the mention prefix is removed, which would otherwise match every
    ///   member without a display name
    pub fn from_slice(body: &[u8]) -> Result<Self, RelayError> {
        let request: Self = serde_json::from_slice(body).map_err(RelayError::InvalidPayload)?;
        if strip_mention(&request.display_name).is_empty() {
            return Err(RelayError::EmptyDisplayName);
        }
        Ok(request)
    }
}

impl std::fmt::Debug for ClientRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientRequest")
            .field("token", &"<redacted>")
            .field("display_name", &self.display_name)
            .field("text", &self.text)
            .finish()
    }
}
