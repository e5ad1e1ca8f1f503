//! Numeric model identity.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a persisted model row.
///
/// Uniqueness within an entity type is owned by the storage layer; this type
/// accepts any value it is given.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelId(i32);

impl ModelId {
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    pub const fn get(self) -> i32 {
        self.0
    }
}

impl core::fmt::Display for ModelId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i32> for ModelId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<ModelId> for i32 {
    fn from(value: ModelId) -> Self {
        value.0
    }
}

impl FromStr for ModelId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<i32>()
            .map_err(|e| DomainError::invalid_id(format!("ModelId: {e}")))?;
        Ok(Self(value))
    }
}
