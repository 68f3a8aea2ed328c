//! JSON export frontend.

use std::path::PathBuf;

use super::{raw, SchemaSource};
use crate::diagnostic::CompilerError;
use crate::ir::CollectionDefinition;

/// Reads a collection export written by the admin UI.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SchemaSource for JsonFileSource {
    fn kind(&self) -> &str {
        "json"
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&mut self) -> Result<Vec<CollectionDefinition>, CompilerError> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| CompilerError::IoError {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        let collections = raw::collections_from_str(&content).map_err(|e| CompilerError::InvalidJson {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        raw::into_ir(collections)
    }
}
