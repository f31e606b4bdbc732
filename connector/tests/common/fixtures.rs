//! Test fixtures and data for connector tests

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    pub const REGISTRY_1: &'static str = "10.0.0.1:8091";
    pub const REGISTRY_2: &'static str = "10.0.0.2:8091";
    pub const REGISTRY_3: &'static str = "10.0.0.3:8091";

    /// Discovery config listing the first two registries
    pub const FULL_CONFIG: &'static str = r#"
global:
  api:
    timeout: 3s
  serverConnector:
    protocol: grpc
    addresses:
      - 10.0.0.1:8091
      - 10.0.0.2:8091
consumer:
  localCache:
    type: inmemory
"#;

    /// Discovery config without a serverConnector section
    pub const NO_ADDRESSES_CONFIG: &'static str = r#"
global:
  statReporter:
    enable: true
"#;

    pub const BROKEN_CONFIG: &'static str = "global: [serverConnector";

    /// Endpoints overlapping the config file on one registry
    pub fn overlapping_endpoints() -> Vec<String> {
        vec![Self::REGISTRY_2.to_string(), Self::REGISTRY_3.to_string()]
    }
}
