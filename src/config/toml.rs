//! TOML configuration file parsing.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional so a file can set only what differs from the
/// defaults; CLI arguments still override it.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Listener configuration
    #[serde(default)]
    pub server: ServerSection,

    /// Slack Web API configuration
    #[serde(default)]
    pub slack: SlackSection,
}

/// Listener configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    /// IP address to listen on
    pub host: Option<String>,

    /// Port to listen on
    pub port: Option<u16>,
}

/// Slack Web API configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SlackSection {
    /// Base URL that Web API method names are appended to
    pub api_base_url: Option<String>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# slackpost configuration file
#
# Precedence: command-line flags > PORT environment variable (port only)
# > this file > built-in defaults.

[server]
# IP address to listen on (default: 0.0.0.0)
# host = "0.0.0.0"

# Port to listen on (default: 8080)
# Hosting platforms usually assign this through the PORT environment
# variable, which takes precedence over this setting.
# port = 8080

[slack]
# Base URL of the Slack Web API (default: https://slack.com/api/)
# Point this at a proxy or a local stub for testing.
# api_base_url = "https://slack.com/api/"
"#
    .to_string()
}
