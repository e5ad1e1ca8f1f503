//! `northwind-core` — model foundation building blocks.
//!
//! Identity, the generic builder contract and the error type shared by the
//! concrete model crates. No persistence or IO lives here.

pub mod builder;
pub mod entity;
pub mod error;
pub mod id;

pub use builder::Builder;
pub use entity::{Identifiable, IdentifiableModel};
pub use error::{DomainError, DomainResult};
pub use id::ModelId;
