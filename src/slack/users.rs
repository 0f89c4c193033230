//! Display name to user ID resolution.

use super::{ApiError, HttpClient, SlackClient, UserList};

/// Resolves a display name to the ID of the first member carrying it.
///
/// A single leading `@` is stripped, so `@alice` and `alice` resolve the
/// same. Matching is exact and case-sensitive. Only the first page of
/// `users.list` is consulted.
///
/// # Errors
///
/// - Any error from [`SlackClient::list_users`]
/// - [`ApiError::Slack`] if Slack refused the listing (bad token, missing
///   scope); an empty member list is never mistaken for "not found"
/// - [`ApiError::PaginationRequired`] if the workspace has more members than
///   one page holds, even when the name is on the first page
/// - [`ApiError::DisplayNameNotFound`] if nobody on the page matches
pub async fn find_user_id<H: HttpClient>(
    client: &SlackClient<'_, H>,
    display_name: &str,
) -> Result<String, ApiError> {
    let display_name = strip_mention(display_name);
    let users = client.list_users().await?;
    match_display_name(&users, display_name)
}

/// Removes one leading `@` from a mention-style name.
#[must_use]
pub fn strip_mention(display_name: &str) -> &str {
    display_name.strip_prefix('@').unwrap_or(display_name)
}

fn match_display_name(users: &UserList, display_name: &str) -> Result<String, ApiError> {
    if !users.ok {
        return Err(ApiError::Slack {
            method: "users.list",
            error: users.error.clone(),
        });
    }

    if users.has_more() {
        return Err(ApiError::PaginationRequired);
    }

    users
        .members
        .iter()
        .find(|user| user.profile.display_name == display_name)
        .map(|user| user.id.clone())
        .ok_or_else(|| ApiError::DisplayNameNotFound(display_name.to_string()))
}
