//! Error types for civilact

use thiserror::Error;

/// Result type alias for civilact operations
pub type Result<T> = std::result::Result<T, CivilactError>;

/// Unified error type for all civilact operations
#[derive(Error, Debug, Clone)]
pub enum CivilactError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Query error: {0}")]
    Query(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl From<mongodb::error::Error> for CivilactError {
    fn from(err: mongodb::error::Error) -> Self {
        CivilactError::Database(err.to_string())
    }
}

impl From<bson::ser::Error> for CivilactError {
    fn from(err: bson::ser::Error) -> Self {
        CivilactError::Serialization(format!("BSON serialization error: {}", err))
    }
}

impl From<bson::de::Error> for CivilactError {
    fn from(err: bson::de::Error) -> Self {
        CivilactError::Deserialization(format!("BSON deserialization error: {}", err))
    }
}
