//! slackpost: Slack direct-message relay
//!
//! A small HTTP service that accepts `{"token", "display_name", "text"}`,
//! resolves the display name to a Slack user ID and posts the text to that
//! user with the caller's token, returning Slack's result.

pub mod config;
pub mod relay;
pub mod slack;
