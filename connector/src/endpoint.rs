//! Endpoint parsing and normalization
//!
//! Endpoints arrive as `host:port` strings. The host must be non-empty. A port
//! that is not an unsigned integer is accepted and becomes [`FALLBACK_PORT`],
//! matching how existing deployments have always been parsed.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use shared::{component_debug, ComponentId};

use crate::error::{ConnectorError, ConnectorResult};

/// Port substituted when the port text does not parse
pub const FALLBACK_PORT: u64 = 0;

/// A discovery backend server address
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Endpoint {
    pub host: String,
    pub port: u64,
}

impl Endpoint {
    pub fn new(host: impl Into<String>, port: u64) -> Self {
        Self { host: host.into(), port }
    }
}

impl FromStr for Endpoint {
    type Err = ConnectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let (host, port) = raw
            .rsplit_once(':')
            .ok_or_else(|| ConnectorError::malformed(s, "missing port in address"))?;

        if host.is_empty() {
            return Err(ConnectorError::malformed(s, "missing host in address"));
        }

        let port = port.parse::<u64>().unwrap_or(FALLBACK_PORT);
        Ok(Endpoint::new(host, port))
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Parse every endpoint and render the normalized `host:port` list.
///
/// Duplicates are dropped, keeping the first occurrence. Any malformed entry
/// fails the whole list.
pub fn normalize_endpoints<S: AsRef<str>>(endpoints: &[S]) -> ConnectorResult<Vec<String>> {
    if endpoints.is_empty() {
        return Err(ConnectorError::EmptyInput);
    }

    let mut seen = HashSet::with_capacity(endpoints.len());
    let mut addresses = Vec::with_capacity(endpoints.len());
    for raw in endpoints {
        let endpoint: Endpoint = raw.as_ref().parse()?;
        let address = endpoint.to_string();
        component_debug!(ComponentId::Connector, "Normalized endpoint {} -> {}", raw.as_ref(), address);
        if seen.insert(address.clone()) {
            addresses.push(address);
        }
    }
    Ok(addresses)
}
