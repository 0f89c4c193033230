//! Configuration layer for slackpost.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments**
//! 2. **`PORT` environment variable** - port only; set by most hosting platforms
//! 3. **TOML config file** - loaded from `--config`
//! 4. **Built-in defaults**
//!
//! # Not Configurable
//!
//! The relay and liveness paths, the `users.list` page size and the
//! `as_user` flag are fixed parts of the relay contract. There are no
//! credentials in the configuration: every request carries its own token.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;


pub use cli::{Cli, Command};
pub use error::ConfigError;
pub use self::toml::{ServerSection, SlackSection, TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
