//! Trait definitions with mockall annotations for testing
//!
//! The discovery SDK is an external collaborator. The builder only needs a
//! way to hand it the finished configuration, which is captured here so the
//! SDK can be swapped for a mock in tests.

use crate::config::Configuration;
use crate::error::BoxError;

/// Turns a finished configuration into an SDK context
#[mockall::automock(type Context = String;)]
pub trait ContextInitializer {
    /// Context object produced by the SDK
    type Context;

    /// Initialize the SDK context. Ownership of the configuration passes to
    /// the implementation.
    fn init_context(&self, config: Configuration) -> Result<Self::Context, BoxError>;
}

/// Initializer that performs no SDK work and returns the configuration itself
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunInitializer;

impl ContextInitializer for DryRunInitializer {
    type Context = Configuration;

    fn init_context(&self, config: Configuration) -> Result<Self::Context, BoxError> {
        Ok(config)
    }
}
