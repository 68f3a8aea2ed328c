//! SQLite database frontend.
//!
//! Reads the backend's `_collections` table directly. The database is opened
//! read-only so a running backend is never disturbed.

use std::path::PathBuf;

use rusqlite::{Connection, OpenFlags};

use super::raw::{RawCollection, RawField};
use super::SchemaSource;
use crate::diagnostic::CompilerError;
use crate::ir::CollectionDefinition;

/// Reads collections from a backend data file.
pub struct SqliteSource {
    path: PathBuf,
}

impl SqliteSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn error(&self, message: impl ToString) -> CompilerError {
        CompilerError::Database {
            path: self.path.clone(),
            message: message.to_string(),
        }
    }

    fn read_rows(&self) -> Result<Vec<RawCollection>, CompilerError> {
        let conn = Connection::open_with_flags(
            &self.path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| self.error(e))?;

        let mut stmt = conn
            .prepare("SELECT * FROM _collections")
            .map_err(|e| self.error(e))?;

        let id_col = stmt.column_index("id").map_err(|e| self.error(e))?;
        let name_col = stmt.column_index("name").map_err(|e| self.error(e))?;
        let type_col = stmt.column_index("type").map_err(|e| self.error(e))?;
        // Older backends keep fields in a `schema` column.
        let fields_col = stmt
            .column_index("fields")
            .or_else(|_| stmt.column_index("schema"))
            .map_err(|_| self.error("_collections has neither a fields nor a schema column"))?;

        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, Option<String>>(id_col)?,
                    row.get::<_, Option<String>>(name_col)?,
                    row.get::<_, Option<String>>(type_col)?,
                    row.get::<_, Option<String>>(fields_col)?,
                ))
            })
            .map_err(|e| self.error(e))?;

        let mut collections = Vec::new();
        for row in rows {
            let (id, name, kind, fields_json) = row.map_err(|e| self.error(e))?;

            let fields: Vec<RawField> = match fields_json.as_deref() {
                None | Some("") => Vec::new(),
                Some(text) => serde_json::from_str(text).map_err(|e| {
                    self.error(format!(
                        "invalid fields JSON for collection {}: {}",
                        name.as_deref().unwrap_or("<unnamed>"),
                        e
                    ))
                })?,
            };

            collections.push(RawCollection {
                id,
                name,
                kind,
                fields: Some(fields),
                schema: None,
            });
        }

        Ok(collections)
    }
}

impl SchemaSource for SqliteSource {
    fn kind(&self) -> &str {
        "sqlite"
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&mut self) -> Result<Vec<CollectionDefinition>, CompilerError> {
        if !self.path.exists() {
            return Err(CompilerError::io(&self.path, "database file not found"));
        }

        let collections = self.read_rows()?;
        tracing::debug!(count = collections.len(), path = %self.path.display(), "read _collections");
        super::raw::into_ir(collections)
    }
}
