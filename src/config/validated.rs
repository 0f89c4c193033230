//! Validated configuration after merging CLI, environment and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::Path;

use url::Url;

use super::cli::Cli;
use super::defaults;
use super::error::ConfigError;
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::load`] in the binary, or [`ValidatedConfig::from_raw`]
/// to build from already-collected sources (tests, embedding).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedConfig {
    /// Address the relay listens on
    pub listen: SocketAddr,

    /// Slack Web API base URL, always ending with `/`
    pub api_base_url: Url,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ listen: {}, api_base_url: {}, verbose: {} }}",
            self.listen, self.api_base_url, self.verbose,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from its raw sources.
    ///
    /// `env_port` is the value of the `PORT` environment variable, if set.
    ///
    /// Priority per field: CLI explicit > `env_port` (port only) > TOML > default.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The host is not an IP address
    /// - `env_port` is not a valid port number
    /// - The API base URL is not an absolute http(s) URL
    pub fn from_raw(
        cli: &Cli,
        toml: Option<&TomlConfig>,
        env_port: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let host = Self::resolve_host(cli, toml)?;
        let port = Self::resolve_port(cli, toml, env_port)?;
        let api_base_url = Self::resolve_api_base_url(cli, toml)?;

        Ok(Self {
            listen: SocketAddr::new(host, port),
            api_base_url,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI, the environment and an
    /// optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        let env_port = std::env::var(defaults::PORT_ENV).ok();

        Self::from_raw(cli, toml.as_ref(), env_port.as_deref())
    }

    fn resolve_host(cli: &Cli, toml: Option<&TomlConfig>) -> Result<IpAddr, ConfigError> {
        let host = cli
            .host
            .as_deref()
            .or_else(|| toml.and_then(|t| t.server.host.as_deref()))
            .unwrap_or(defaults::HOST);

        host.parse::<IpAddr>().map_err(|e| ConfigError::InvalidHost {
            value: host.to_string(),
            reason: e.to_string(),
        })
    }

    fn resolve_port(
        cli: &Cli,
        toml: Option<&TomlConfig>,
        env_port: Option<&str>,
    ) -> Result<u16, ConfigError> {
        if let Some(port) = cli.port {
            return Ok(port);
        }

        // The hosting platform's assignment beats the file
        if let Some(value) = env_port.map(str::trim).filter(|v| !v.is_empty()) {
            return value.parse::<u16>().map_err(|_| ConfigError::InvalidPort {
                value: value.to_string(),
                source_name: defaults::PORT_ENV,
            });
        }

        Ok(toml.and_then(|t| t.server.port).unwrap_or(defaults::PORT))
    }

    fn resolve_api_base_url(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Url, ConfigError> {
        let url_str = cli
            .api_base_url
            .as_deref()
            .or_else(|| toml.and_then(|t| t.slack.api_base_url.as_deref()))
            .unwrap_or(defaults::API_BASE_URL);

        parse_api_base_url(url_str)
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// Helper functions

fn parse_api_base_url(url_str: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidUrl {
        url: url_str.to_string(),
        reason: reason.to_string(),
    };

    let mut url = Url::parse(url_str).map_err(|e| invalid(&e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("scheme must be http or https"));
    }
    if url.cannot_be_a_base() {
        return Err(invalid("URL cannot be used as a base"));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("URL must not contain a query or fragment"));
    }

    // Method names are joined onto the base, which only nests under a
    // path that ends with '/'.
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}
