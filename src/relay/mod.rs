//! Relay request handling.
//!
//! This module provides:
//! - The inbound payload ([`ClientRequest`])
//! - The axum router serving the relay and the liveness probe ([`router`])
//! - The error type mapping each failure to an HTTP status ([`RelayError`])

mod error;
mod handler;
mod payload;

#[cfg(test)]
mod error_tests;
#[cfg(test)]
mod payload_tests;

pub use error::RelayError;
pub use handler::{LIVENESS_PATH, RELAY_PATH, RelayState, router};
pub use payload::ClientRequest;
