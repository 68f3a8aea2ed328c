//! Language-agnostic intermediate representation of a collection schema.
//!
//! Frontends (JSON export, SQLite database, remote API) produce this IR and the
//! code generators consume it. The IR is never mutated by generation.

mod collection;
mod field;

pub use collection::{CollectionDefinition, CollectionKind};
pub use field::{Cardinality, FieldConstraints, FieldDefinition, FieldKind};
