use thiserror::Error;

use crate::entity::Id;

#[derive(Error, Debug)]
pub enum ArvoreError {
    #[error("Data format error in {collection}: {message}")]
    DataFormat { collection: String, message: String },
    #[error("Person not found: {0}")]
    PersonNotFound(Id),
    #[error("Could not read {path}: {message}")]
    Io { path: String, message: String },
    #[error("Config error: {0}")]
    Config(String),
    #[error("Lock poisoned: {0}")]
    Lock(String),
}

impl ArvoreError {
    pub fn data_format(collection: &str, message: impl Into<String>) -> Self {
        Self::DataFormat { collection: collection.to_string(), message: message.into() }
    }
}

pub type Result<T> = std::result::Result<T, ArvoreError>;

// Helper conversions
impl From<serde_json::Error> for ArvoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::DataFormat { collection: "json".to_string(), message: e.to_string() }
    }
}
impl From<config::ConfigError> for ArvoreError {
    fn from(e: config::ConfigError) -> Self { Self::Config(e.to_string()) }
}
