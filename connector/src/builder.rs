//! Configuration builder
//!
//! Produces the configuration handed to the discovery SDK. Endpoints given by
//! the caller seed a default configuration. When a discovery config file is
//! present it wins: its address list is kept and the caller's endpoints are
//! added to it.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use shared::{component_debug, component_info, component_warn, ComponentId};

use crate::config::Configuration;
use crate::endpoint::normalize_endpoints;
use crate::error::{ConnectorError, ConnectorResult};
use crate::traits::ContextInitializer;

/// Conventional location of the discovery config file, relative to the
/// working directory
pub const DEFAULT_CONFIG_PATH: &str = "polaris.yaml";

/// Builds discovery configurations from endpoints and an optional config file
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    config_path: PathBuf,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Use a different discovery config file
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = path.into();
        self
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Build the final configuration without initializing anything
    pub fn build<S: AsRef<str>>(&self, endpoints: &[S]) -> ConnectorResult<Configuration> {
        let addresses = normalize_endpoints(endpoints)?;
        let easy = Configuration::with_addresses(addresses);

        if !self.config_path.is_file() {
            component_debug!(
                ComponentId::Connector,
                "No discovery config at {}, using endpoint defaults",
                self.config_path.display()
            );
            return Ok(easy);
        }

        let mut complex = Configuration::load_from_file(&self.config_path)?;
        if complex.addresses().is_empty() {
            component_warn!(
                ComponentId::Connector,
                "Discovery config {} lists no server addresses",
                self.config_path.display()
            );
        }
        merge_addresses(&mut complex, &easy);
        component_info!(
            ComponentId::Connector,
            "Merged discovery config {} ({} server addresses)",
            self.config_path.display(),
            complex.addresses().len()
        );
        Ok(complex)
    }

    /// Build the final configuration and hand it to the SDK initializer
    pub fn init_context<S, I>(&self, endpoints: &[S], initializer: &I) -> ConnectorResult<I::Context>
    where
        S: AsRef<str>,
        I: ContextInitializer + ?Sized,
    {
        let config = self.build(endpoints)?;
        initializer
            .init_context(config)
            .map_err(|source| ConnectorError::SdkInit { source })
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a configuration using the default discovery config path
pub fn build_config<S: AsRef<str>>(endpoints: &[S]) -> ConnectorResult<Configuration> {
    ConfigBuilder::new().build(endpoints)
}

/// Fold `secondary`'s server addresses into `primary`.
///
/// `primary` keeps every address it already had; addresses only present in
/// `secondary` are added. The resulting list holds each address once.
pub fn merge_addresses(primary: &mut Configuration, secondary: &Configuration) {
    let mut merged: BTreeSet<String> = primary.addresses().iter().cloned().collect();
    merged.extend(secondary.addresses().iter().cloned());
    primary.set_addresses(merged.into_iter().collect());
}
