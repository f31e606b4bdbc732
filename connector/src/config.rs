//! Discovery SDK configuration document
//!
//! Mirrors the YAML layout the discovery SDK reads (`global.serverConnector`
//! and friends). Only the sections the connector touches are typed; anything
//! else in a file is carried through in the flattened `extra` maps.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use shared::SharedResult;

use crate::error::{ConnectorError, ConnectorResult};

/// Untyped keys preserved from a loaded document
pub type ExtraFields = BTreeMap<String, serde_yaml::Value>;

/// Server connector settings: where and how to reach the discovery backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerConnectorConfig {
    pub protocol: String,
    pub addresses: Vec<String>,
    pub connect_timeout: String,
    pub message_timeout: String,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl Default for ServerConnectorConfig {
    fn default() -> Self {
        Self {
            protocol: "grpc".to_string(),
            addresses: Vec::new(),
            connect_timeout: "500ms".to_string(),
            message_timeout: "1500ms".to_string(),
            extra: ExtraFields::new(),
        }
    }
}

/// API call settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiConfig {
    pub timeout: String,
    pub max_retry_times: u32,
    pub retry_interval: String,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            timeout: "1s".to_string(),
            max_retry_times: 5,
            retry_interval: "1s".to_string(),
            extra: ExtraFields::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatReporterConfig {
    pub enable: bool,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// The `global` section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GlobalConfig {
    pub api: ApiConfig,
    pub server_connector: ServerConnectorConfig,
    pub stat_reporter: StatReporterConfig,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Connection parameters handed to the discovery SDK
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Configuration {
    pub global: GlobalConfig,
    /// `consumer`, `provider` and any other top-level sections
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl Configuration {
    /// Default configuration seeded with a server address list
    pub fn with_addresses(addresses: Vec<String>) -> Self {
        let mut config = Self::default();
        config.set_addresses(addresses);
        config
    }

    /// Load a configuration document from a YAML file
    pub fn load_from_file(path: impl AsRef<Path>) -> ConnectorResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| ConnectorError::config_load(path.display().to_string(), e))?;
        Self::from_yaml(&content)
            .map_err(|e| ConnectorError::config_load(path.display().to_string(), e))
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes to unit, not an empty map.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    pub fn to_yaml(&self) -> SharedResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn to_json(&self) -> SharedResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn global(&self) -> &GlobalConfig {
        &self.global
    }

    pub fn global_mut(&mut self) -> &mut GlobalConfig {
        &mut self.global
    }

    pub fn server_connector(&self) -> &ServerConnectorConfig {
        &self.global.server_connector
    }

    pub fn addresses(&self) -> &[String] {
        &self.global.server_connector.addresses
    }

    pub fn set_addresses(&mut self, addresses: Vec<String>) {
        self.global.server_connector.addresses = addresses;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
global:
  serverConnector:
    addresses:
      - 10.0.0.1:8091
      - 10.0.0.2:8091
    connectTimeout: 2s
  statReporter:
    enable: true
    chain:
      - prometheus
consumer:
  localCache:
    persistDir: ./polaris/backup
"#;

    #[test]
    fn test_default_values() {
        let config = Configuration::default();
        assert_eq!(config.server_connector().protocol, "grpc");
        assert_eq!(config.server_connector().connect_timeout, "500ms");
        assert_eq!(config.global().api.max_retry_times, 5);
        assert!(config.addresses().is_empty());
        assert!(!config.global().stat_reporter.enable);
    }

    #[test]
    fn test_with_addresses_seeds_server_connector() {
        let config = Configuration::with_addresses(vec!["a:1".to_string()]);
        assert_eq!(config.addresses(), ["a:1".to_string()]);
    }

    #[test]
    fn test_from_yaml_reads_typed_and_extra_fields() {
        let config = Configuration::from_yaml(SAMPLE).unwrap();
        assert_eq!(config.addresses(), ["10.0.0.1:8091".to_string(), "10.0.0.2:8091".to_string()]);
        assert_eq!(config.server_connector().connect_timeout, "2s");
        // Untouched keys keep their defaults
        assert_eq!(config.server_connector().protocol, "grpc");
        assert!(config.global().stat_reporter.enable);
        assert!(config.global().stat_reporter.extra.contains_key("chain"));
        assert!(config.extra.contains_key("consumer"));
    }

    #[test]
    fn test_extra_sections_survive_serialization() {
        let config = Configuration::from_yaml(SAMPLE).unwrap();
        let rendered = config.to_yaml().unwrap();
        assert!(rendered.contains("persistDir"));
        assert!(rendered.contains("serverConnector"));

        let json = config.to_json().unwrap();
        assert!(json.contains("\"localCache\""));
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(Configuration::from_yaml("  \n").unwrap(), Configuration::default());
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        assert!(Configuration::from_yaml("global: [unterminated").is_err());
        assert!(Configuration::from_yaml("global:\n  serverConnector:\n    addresses: 5\n").is_err());
    }

    #[test]
    fn test_set_addresses_through_global_mut() {
        let mut config = Configuration::default();
        config.global_mut().server_connector.addresses.push("x:9".to_string());
        assert_eq!(config.addresses(), ["x:9".to_string()]);
    }
}
