//! Generator configuration.

use std::path::PathBuf;

/// Default output file name for the type declarations.
pub const DEFAULT_OUT_FILE: &str = "pocketbase-types.ts";

/// How a remote backend authenticates the schema request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteAuth {
    /// A ready-made superuser token, sent as the `Authorization` header.
    Token(String),

    /// Superuser credentials, exchanged for a token first.
    Password { email: String, password: String },
}

/// Where the collection schema comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaSourceConfig {
    /// A JSON export of the collections.
    Json(PathBuf),

    /// The backend's SQLite database file.
    Database(PathBuf),

    /// A running backend, queried over HTTP.
    Remote { url: String, auth: RemoteAuth },
}

/// Configuration for a generation run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Schema source.
    pub source: SchemaSourceConfig,

    /// File to write the type declarations to.
    pub out: PathBuf,

    /// Optional file for the field constraints side-table.
    pub metadata_out: Option<PathBuf>,

    /// Emit SDK imports and the `TypedPocketBase` client type.
    pub sdk: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            source: SchemaSourceConfig::Json(PathBuf::from("pb_schema.json")),
            out: PathBuf::from(DEFAULT_OUT_FILE),
            metadata_out: None,
            sdk: true,
        }
    }
}
