//! TypeScript declaration generation from collection IR.
//!
//! The document is assembled in a fixed order:
//! - Preamble (generated-file comment, optional SDK imports)
//! - `Collections` enum, alias types, system field shapes
//! - One block per collection: select enums, expansion, record, response
//! - `CollectionRecords` / `CollectionResponses` maps
//! - Create/update payload shapes and utility types
//! - SDK client types (optional): expand helpers, `GetResponseType`,
//!   `EnhancedRecordService`, `TypedPocketBase`
//!
//! Collections are sorted by name first, so the output is byte-identical for
//! the same schema regardless of input order.

pub mod collections;
pub mod constants;
pub mod enums;
pub mod expand;
pub mod expand_helpers;
pub mod fields;
pub mod generics;
pub mod metadata;
pub mod records;
pub mod ts_types;

use crate::diagnostic::{CompilerError, Warning, Warnings};
use crate::graph::RelationGraph;
use crate::ir::CollectionDefinition;
use crate::validate::validate_schema;

use constants::{
    ALIAS_TYPE_DEFINITIONS, ALL_RECORD_RESPONSE_COMMENT, AUTH_SYSTEM_FIELDS_DEFINITION,
    BASE_SYSTEM_FIELDS_DEFINITION, COLLECTION_TYPES_COMMENT, ENHANCED_RECORD_SERVICE_DEFINITION, EXPORT_COMMENT,
    IMPORTS, SYSTEM_CREATE_UPDATE_DEFINITIONS, UTILITY_TYPES,
};

/// Output switches for one generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Emit SDK imports and the client types built on them.
    pub sdk: bool,

    /// Also produce the field constraints side-table.
    pub metadata: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            sdk: true,
            metadata: false,
        }
    }
}

/// Generated TypeScript code.
#[derive(Debug, Clone)]
pub struct GeneratedCode {
    /// The type declarations document.
    pub types: String,

    /// The constraints side-table, when requested.
    pub metadata: Option<String>,

    /// Non-fatal problems found while generating.
    pub warnings: Vec<Warning>,

    /// Number of resolved relation fields.
    pub relations: usize,
}

/// Generates the declarations document for a schema.
///
/// The schema is validated first; a malformed schema produces no output.
pub fn generate(
    schema: &[CollectionDefinition],
    options: GenerateOptions,
) -> Result<GeneratedCode, CompilerError> {
    validate_schema(schema)?;

    let mut sorted = schema.to_vec();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));

    let graph = RelationGraph::build(&sorted);
    let mut warnings = Warnings::new();

    let mut parts: Vec<String> = vec![EXPORT_COMMENT.to_string()];
    if options.sdk {
        parts.push(IMPORTS.to_string());
    }

    parts.push(collections::generate_collections_enum(&sorted));
    parts.push(ALIAS_TYPE_DEFINITIONS.to_string());
    parts.push(BASE_SYSTEM_FIELDS_DEFINITION.to_string());
    parts.push(AUTH_SYSTEM_FIELDS_DEFINITION.to_string());
    parts.push(COLLECTION_TYPES_COMMENT.to_string());

    for collection in &sorted {
        let declarations = records::assemble(collection, &graph, &mut warnings);
        parts.push(declarations.render());
    }

    parts.push(ALL_RECORD_RESPONSE_COMMENT.to_string());
    parts.push(collections::generate_records_map(&sorted));
    parts.push(collections::generate_responses_map(&sorted));
    parts.push(SYSTEM_CREATE_UPDATE_DEFINITIONS.to_string());
    parts.push(UTILITY_TYPES.to_string());

    if options.sdk {
        parts.extend(
            sorted
                .iter()
                .filter_map(|c| expand_helpers::generate_expand_helpers(c, &graph)),
        );
        parts.push(expand_helpers::generate_response_selector(&sorted, &graph));
        parts.push(ENHANCED_RECORD_SERVICE_DEFINITION.to_string());
        parts.push(collections::generate_typed_pocketbase(&sorted));
    }

    let types = format!("{}\n", parts.join("\n\n"));
    tracing::debug!(
        collections = sorted.len(),
        bytes = types.len(),
        "generated type declarations"
    );

    let metadata = options
        .metadata
        .then(|| metadata::generate_metadata(&sorted));

    Ok(GeneratedCode {
        types,
        metadata,
        warnings: warnings.into_vec(),
        relations: graph.edge_count(),
    })
}
