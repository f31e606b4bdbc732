//! Test helpers for building configurations against temporary files

use std::collections::BTreeSet;
use std::path::PathBuf;

use connector::{ConfigBuilder, Configuration};
use tempfile::TempDir;

pub struct TestHelpers;

impl TestHelpers {
    /// Write `content` as the discovery config inside a fresh temp dir.
    /// The returned `TempDir` must be kept alive for the file to exist.
    pub fn write_config(content: &str) -> (TempDir, PathBuf) {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("polaris.yaml");
        std::fs::write(&path, content).expect("write discovery config");
        (dir, path)
    }

    /// Builder pointed at a path that does not exist
    pub fn builder_without_file() -> (TempDir, ConfigBuilder) {
        let dir = tempfile::tempdir().expect("create temp dir");
        let builder = ConfigBuilder::new().with_config_path(dir.path().join("missing.yaml"));
        (dir, builder)
    }

    pub fn address_set(config: &Configuration) -> BTreeSet<String> {
        config.addresses().iter().cloned().collect()
    }

    pub fn set_of(addresses: &[&str]) -> BTreeSet<String> {
        addresses.iter().map(|a| a.to_string()).collect()
    }
}
