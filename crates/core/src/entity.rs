//! Identity capability shared by every model.

use serde::{Deserialize, Serialize};

use crate::id::ModelId;

/// Anything carrying a numeric model identity.
pub trait Identifiable {
    /// Returns the identity fixed at construction.
    fn id(&self) -> ModelId;
}

/// Base identity value embedded by concrete models.
///
/// Contributes the `id` to equality and hashing through the embedding type's
/// derives, and renders as `IdentifiableModel[id=N]` after the model's own
/// fields.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdentifiableModel {
    id: ModelId,
}

impl IdentifiableModel {
    pub const fn new(id: ModelId) -> Self {
        Self { id }
    }
}

impl Identifiable for IdentifiableModel {
    fn id(&self) -> ModelId {
        self.id
    }
}

impl From<ModelId> for IdentifiableModel {
    fn from(id: ModelId) -> Self {
        Self::new(id)
    }
}

impl core::fmt::Display for IdentifiableModel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "IdentifiableModel[id={}]", self.id)
    }
}
