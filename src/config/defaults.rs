//! Default values for configuration options.
//!
//! Centralized constants to avoid magic values scattered across the codebase.

/// Default listen address (all interfaces).
pub const HOST: &str = "0.0.0.0";

/// Default listen port.
pub const PORT: u16 = 8080;

/// Environment variable hosting platforms use to assign the listen port.
pub const PORT_ENV: &str = "PORT";

/// Default Slack Web API base URL.
pub const API_BASE_URL: &str = crate::slack::DEFAULT_BASE_URL;

/// Default output path for `slackpost init`.
pub const CONFIG_FILE: &str = "slackpost.toml";
