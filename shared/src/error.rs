//! Error types for the garden calculator core
//!
//! Nothing in the valuation or filtering path fails; these errors cover
//! catalog loading, configuration and the persisted history store.

use thiserror::Error;

/// A season or category code outside the known enumeration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind} code: {code}")]
pub struct UnknownCode {
    pub kind: &'static str,
    pub code: String,
}

impl UnknownCode {
    pub fn new(kind: &'static str, code: &str) -> Self {
        Self {
            kind,
            code: code.to_string(),
        }
    }
}

/// Catalog construction errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Invalid plant {id}: {reason}")]
    InvalidPlant { id: u32, reason: &'static str },

    #[error("Duplicate plant id: {0}")]
    DuplicateId(u32),

    #[error("Invalid catalog JSON: {0}")]
    Parse(String),
}

/// Key-value store errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Storage read failed: {0}")]
    Read(String),

    #[error("Storage write failed: {0}")]
    Write(String),
}

/// History log errors
#[derive(Error, Debug)]
pub enum HistoryError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Malformed history data: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration load failed: {0}")]
    Load(String),
}

#[cfg(feature = "env-config")]
impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::Load(err.to_string())
    }
}
