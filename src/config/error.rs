//! Error types for configuration parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration operations.
///
/// Covers errors from parsing, validation, and file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to write configuration file (for init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The listen host is not an IP address.
    #[error("Invalid host '{value}': {reason}")]
    InvalidHost {
        /// The invalid host string
        value: String,
        /// Reason for invalidity
        reason: String,
    },

    /// The listen port is not a valid TCP port.
    #[error("Invalid port '{value}' from {source_name}: expected a number between 0 and 65535")]
    InvalidPort {
        /// The invalid port string
        value: String,
        /// Where the value came from
        source_name: &'static str,
    },

    /// The Slack API base URL is unusable.
    #[error("Invalid API base URL '{url}': {reason}")]
    InvalidUrl {
        /// The invalid URL string
        url: String,
        /// Reason for invalidity
        reason: String,
    },
}
