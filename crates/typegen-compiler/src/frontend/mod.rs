//! Schema frontends for loading collections into IR.
//!
//! Each frontend is responsible for:
//! 1. Reading the collection schema from its source
//! 2. Converting the backend's raw format to the common IR
//!
//! This keeps the generators independent of where the schema came from.

pub mod json;
pub mod raw;
pub mod remote;
pub mod sqlite;

use crate::config::SchemaSourceConfig;
use crate::diagnostic::CompilerError;
use crate::ir::CollectionDefinition;

pub use json::JsonFileSource;
pub use remote::RemoteSource;
pub use sqlite::SqliteSource;

/// Trait for schema sources.
pub trait SchemaSource {
    /// Returns the source kind (e.g., "json", "sqlite").
    fn kind(&self) -> &str;

    /// Returns where the schema is read from, for messages.
    fn location(&self) -> String;

    /// Loads every collection of the schema.
    fn load(&mut self) -> Result<Vec<CollectionDefinition>, CompilerError>;
}

/// Creates a schema source for the given configuration.
pub fn create_source(config: &SchemaSourceConfig) -> Box<dyn SchemaSource> {
    match config {
        SchemaSourceConfig::Json(path) => Box::new(JsonFileSource::new(path.clone())),
        SchemaSourceConfig::Database(path) => Box::new(SqliteSource::new(path.clone())),
        SchemaSourceConfig::Remote { url, auth } => {
            Box::new(RemoteSource::new(url.clone(), auth.clone()))
        }
    }
}
