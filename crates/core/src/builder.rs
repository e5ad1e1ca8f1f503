//! Generic builder contract for identifiable models.

use crate::entity::Identifiable;
use crate::id::ModelId;

/// Mutable scaffold that assembles an immutable model.
///
/// - The identity is fixed when the builder is created and exposed through
///   `id()` so `build` can hand it to the produced model.
/// - `build(&self)` reads the current field state without consuming or
///   resetting it, so one builder can produce any number of equal models.
///
/// Builders are meant to be owned by a single caller while being mutated;
/// the models they produce are plain immutable values.
pub trait Builder {
    /// The model this builder produces.
    type Output: Identifiable;

    /// Returns the identity every built model will carry.
    fn id(&self) -> ModelId;

    /// Assemble a new model from the current field values.
    fn build(&self) -> Self::Output;
}
