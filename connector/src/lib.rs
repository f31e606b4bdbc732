//! Discovery connector configuration
//!
//! Turns a list of `host:port` endpoints into the configuration the discovery
//! SDK is initialized with, merging in a discovery config file when one is
//! present.

pub mod builder;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod instance;
pub mod traits;

// Re-export commonly used types
pub use builder::{build_config, merge_addresses, ConfigBuilder, DEFAULT_CONFIG_PATH};
pub use config::{Configuration, GlobalConfig, ServerConnectorConfig};
pub use endpoint::{normalize_endpoints, Endpoint, FALLBACK_PORT};
pub use error::{BoxError, ConnectorError, ConnectorResult};
pub use instance::InstanceInfo;
pub use traits::{ContextInitializer, DryRunInitializer};
