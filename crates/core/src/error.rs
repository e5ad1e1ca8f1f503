//! Domain error model.

use thiserror::Error;

/// Result type used across the model layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Model-level error.
///
/// Building and reading models cannot fail; only parsing external
/// representations (identifiers, kind labels) can.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. an unknown label).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
