//! Connector error types

use thiserror::Error;
use shared::SharedError;

/// Boxed error produced by collaborators outside this crate
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum ConnectorError {
    #[error("No endpoints supplied")]
    EmptyInput,

    #[error("Malformed endpoint [{endpoint}]: {reason}")]
    MalformedEndpoint { endpoint: String, reason: String },

    #[error("Failed to load discovery config {path}: {source}")]
    ConfigLoad {
        path: String,
        #[source]
        source: BoxError,
    },

    #[error("SDK context initialization failed: {source}")]
    SdkInit {
        #[source]
        source: BoxError,
    },

    #[error("Shared component error: {0}")]
    Shared(#[from] SharedError),
}

impl ConnectorError {
    pub fn malformed(endpoint: impl Into<String>, reason: impl Into<String>) -> Self {
        ConnectorError::MalformedEndpoint {
            endpoint: endpoint.into(),
            reason: reason.into(),
        }
    }

    pub fn config_load(path: impl Into<String>, source: impl Into<BoxError>) -> Self {
        ConnectorError::ConfigLoad {
            path: path.into(),
            source: source.into(),
        }
    }
}

pub type ConnectorResult<T> = Result<T, ConnectorError>;
