//! Compiler error types.
#![allow(unused_assignments)]

use std::path::PathBuf;
use miette::Diagnostic;
use thiserror::Error;

/// Errors that abort a generation run.
///
/// Partial output is never written when one of these is returned.
#[allow(unused_assignments)]
#[derive(Error, Diagnostic, Debug)]
pub enum CompilerError {
    // =========================================================================
    // IO Errors
    // =========================================================================
    #[error("Failed to access file '{}': {message}", path.display())]
    #[diagnostic(code(typegen::io::access_failed))]
    IoError {
        path: PathBuf,
        message: String,
    },

    // =========================================================================
    // Schema Source Errors
    // =========================================================================
    #[error("Invalid JSON schema in '{}': {message}", path.display())]
    #[diagnostic(
        code(typegen::source::invalid_json),
        help("Export the schema from the admin UI (Settings > Export collections) and pass that file.")
    )]
    InvalidJson {
        path: PathBuf,
        message: String,
    },

    #[error("Failed to read collections from database '{}': {message}", path.display())]
    #[diagnostic(
        code(typegen::source::database),
        help("Point --db at the backend's data.db file. It is opened read-only.")
    )]
    Database {
        path: PathBuf,
        message: String,
    },

    #[error("Request to '{url}' failed: {message}")]
    #[diagnostic(code(typegen::source::http))]
    Http {
        url: String,
        message: String,
    },

    #[error("Authentication against '{url}' failed: {message}")]
    #[diagnostic(
        code(typegen::source::authentication),
        help("Check the superuser email/password, or pass a valid token with --token.")
    )]
    Authentication {
        url: String,
        message: String,
    },

    #[error("No schema source given")]
    #[diagnostic(
        code(typegen::source::missing),
        help("Pass one of --db, --json or --url.")
    )]
    MissingSchemaSource,

    // =========================================================================
    // Structure Errors
    // =========================================================================
    #[error("Malformed schema at {location}: {message}")]
    #[diagnostic(code(typegen::structure::malformed_schema))]
    MalformedSchema {
        location: String,
        message: String,
    },

    #[error("Duplicate collection name: {name}")]
    #[diagnostic(
        code(typegen::structure::duplicate_collection),
        help("Collection names must be unique across the schema.")
    )]
    DuplicateCollection {
        name: String,
    },

    #[error("Generated type name {type_name} is claimed by both {first} and {second}")]
    #[diagnostic(
        code(typegen::structure::type_name_clash),
        help("Rename one of them; names differing only in case or separators map to the same TypeScript name.")
    )]
    TypeNameClash {
        type_name: String,
        first: String,
        second: String,
    },
}

impl CompilerError {
    /// Creates an IO error.
    pub fn io(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::IoError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a malformed-schema error.
    pub fn malformed(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedSchema {
            location: location.into(),
            message: message.into(),
        }
    }
}
