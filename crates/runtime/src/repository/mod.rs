//! Repository layer for persisted collections.
//!
//! Each entity type lives in its own JSON document:
//! - [`codec`] reads and writes raw record arrays, degrading instead of failing
//! - [`CollectionRepository`] converts records to validated entities
//!
//! Mutations always follow load-full-collection, mutate in memory,
//! save-full-collection.

pub mod codec;
mod collection;
mod diagnostic;
mod error;

pub use codec::{Loaded, load_collection, save_collection};
pub use collection::{CollectionRepository, NO_ID};
pub use diagnostic::{Diagnostic, Severity};
pub use error::RepositoryError;
