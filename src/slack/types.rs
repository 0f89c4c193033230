//! Wire types for the two Web API methods the relay uses.
//!
//! Every field defaults when absent: Slack omits keys freely (`error` on
//! success, `response_metadata` on small workspaces) and a missing key must
//! not turn into a decode error.

use serde::{Deserialize, Serialize};

/// A workspace member as returned by `users.list`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SlackUser {
    /// Stable user identifier (e.g. `U024BE7LH`)
    pub id: String,
    /// Profile block holding the display name
    pub profile: UserProfile,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub display_name: String,
}

/// One page of `users.list`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UserList {
    /// Slack's own success flag
    pub ok: bool,
    /// Slack error code when `ok` is false (e.g. `invalid_auth`)
    pub error: String,
    /// Members in the order Slack returned them
    pub members: Vec<SlackUser>,
    /// Pagination information
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResponseMetadata {
    /// Cursor for the next page; empty when this is the last page
    pub next_cursor: String,
}

impl UserList {
    /// Returns true if Slack has more members beyond this page.
    #[must_use]
    pub fn has_more(&self) -> bool {
        !self.response_metadata.next_cursor.is_empty()
    }
}

/// Result of `chat.postMessage`, relayed to the caller verbatim.
///
/// `ok: false` is Slack's own failure signal and is passed through, not
/// interpreted. Both fields are always serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostResult {
    pub ok: bool,
    pub error: String,
}
