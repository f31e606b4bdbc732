//! Shared types for the discovery connector workspace
//!
//! Holds the pieces every crate needs: component identifiers, the shared
//! error type and tracing setup.

pub mod types;
pub mod errors;
pub mod logging;

pub use types::*;
pub use errors::*;
