//! Validation of schema IR.

mod structure;

use crate::diagnostic::CompilerError;
use crate::ir::CollectionDefinition;

/// Validates the entire schema before any output is produced.
pub fn validate_schema(collections: &[CollectionDefinition]) -> Result<(), CompilerError> {
    structure::validate_structure(collections)
}
