//! Core shared types and identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies which part of the workspace emitted a log line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentId {
    /// The configuration builder library
    Connector,
    /// The command line front end
    Cli,
}

impl ComponentId {
    /// Crate target the component logs under, used to build tracing filters
    pub fn target(&self) -> &'static str {
        match self {
            ComponentId::Connector | ComponentId::Cli => "connector",
        }
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentId::Connector => write!(f, "connector"),
            ComponentId::Cli => write!(f, "cli"),
        }
    }
}

/// Log levels accepted by `--log-level`
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
