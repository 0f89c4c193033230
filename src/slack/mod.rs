//! Slack Web API layer.
//!
//! This module provides:
//! - Transport-level request/response values ([`HttpRequest`], [`HttpResponse`])
//! - The transport seam ([`HttpClient`]) and its reqwest implementation ([`ReqwestClient`])
//! - A token-bound Web API client ([`SlackClient`])
//! - Display name resolution ([`find_user_id`])
//! - Wire types for `users.list` and `chat.postMessage`

mod api;
mod client;
mod error;
mod transport;
mod types;
mod users;

#[cfg(test)]
pub(crate) mod test_fixtures;


pub use api::{DEFAULT_BASE_URL, SlackClient, USERS_PAGE_LIMIT};
pub use client::ReqwestClient;
pub use error::{ApiError, HttpError};
pub use transport::{HttpClient, HttpRequest, HttpResponse};
pub use types::{PostResult, ResponseMetadata, SlackUser, UserList, UserProfile};
pub use users::{find_user_id, strip_mention};
