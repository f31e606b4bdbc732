//! Shared error types for the discovery connector

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Serialization failed: {message}")]
    SerializationError { message: String },

    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },

    #[error("Tracing initialization failed: {message}")]
    TracingError { message: String },
}

impl SharedError {
    pub fn invalid_config(field: impl Into<String>, value: impl Into<String>) -> Self {
        SharedError::InvalidConfig {
            field: field.into(),
            value: value.into(),
        }
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        SharedError::SerializationError { message: err.to_string() }
    }
}

impl From<serde_yaml::Error> for SharedError {
    fn from(err: serde_yaml::Error) -> Self {
        SharedError::SerializationError { message: err.to_string() }
    }
}

pub type SharedResult<T> = Result<T, SharedError>;
