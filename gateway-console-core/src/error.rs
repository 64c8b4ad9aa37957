//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

use crate::types::ResourceKind;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Named resource not found in the configuration
    #[error("{kind} not found: {name}")]
    ResourceNotFound { kind: ResourceKind, name: String },

    /// Operation requires a named selection but the new-entry sentinel is active
    #[error("No resource selected")]
    NoResourceSelected,

    /// Validation error (illegal name, bad field value, malformed PEM)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Storage layer error
    #[error("Storage error: {0}")]
    StorageError(String),
}

impl CoreError {
    /// Whether it is expected behavior (user input, resource does not exist, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::ResourceNotFound { .. } | Self::NoResourceSelected | Self::ValidationError(_) => {
                true
            }
            Self::SerializationError(_) | Self::StorageError(_) => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
