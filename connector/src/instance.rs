//! Service instance record as stored in the registry

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Basic description of a registered service instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceInfo {
    pub network: String,
    pub address: String,
    pub weight: i32,
    pub tags: HashMap<String, String>,
}

impl InstanceInfo {
    pub fn new(network: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            network: network.into(),
            address: address.into(),
            weight: 0,
            tags: HashMap::new(),
        }
    }

    pub fn with_weight(mut self, weight: i32) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }
}
