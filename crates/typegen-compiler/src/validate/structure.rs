//! Structure validation for collection schemas.
//!
//! Frontends already reject missing properties in raw input, but IR can also
//! be built by hand, so the same checks run again here.

use std::collections::{HashMap, HashSet};

use crate::codegen::enums::{has_options, option_enum_name};
use crate::codegen::ts_types::to_pascal_case;
use crate::diagnostic::CompilerError;
use crate::ir::CollectionDefinition;

/// Validates identifiers and name uniqueness across the schema.
pub fn validate_structure(collections: &[CollectionDefinition]) -> Result<(), CompilerError> {
    let mut names = HashSet::new();
    for (index, collection) in collections.iter().enumerate() {
        validate_collection_structure(index, collection)?;
        if !names.insert(collection.name.as_str()) {
            return Err(CompilerError::DuplicateCollection {
                name: collection.name.clone(),
            });
        }
    }
    validate_type_names(collections)
}

/// Rejects schemas where two sources map to one generated type name.
///
/// Collection names share the `Collections` enum and the `<Name>Record` family;
/// select fields share the `<Collection><Field>Options` enum namespace.
fn validate_type_names(collections: &[CollectionDefinition]) -> Result<(), CompilerError> {
    let mut claimed: HashMap<String, String> = HashMap::new();
    let mut claim = |type_name: String, owner: String| match claimed.get(&type_name) {
        Some(first) => Err(CompilerError::TypeNameClash {
            type_name,
            first: first.clone(),
            second: owner,
        }),
        None => {
            claimed.insert(type_name, owner);
            Ok(())
        }
    };

    for collection in collections {
        claim(to_pascal_case(&collection.name), format!("collection \"{}\"", collection.name))?;
    }
    for collection in collections {
        for field in collection.fields.iter().filter(|f| has_options(f)) {
            claim(
                option_enum_name(&collection.name, &field.name),
                format!("field {}.{}", collection.name, field.name),
            )?;
        }
    }
    Ok(())
}

/// Validates a collection has identifiers and unique field names.
fn validate_collection_structure(index: usize, collection: &CollectionDefinition) -> Result<(), CompilerError> {
    if collection.id.is_empty() {
        return Err(CompilerError::malformed(format!("collections[{}]", index), "empty id"));
    }
    if collection.name.is_empty() {
        return Err(CompilerError::malformed(format!("collections[{}]", index), "empty name"));
    }

    let location = format!("collection \"{}\"", collection.name);
    let mut field_names = HashSet::new();
    for (i, field) in collection.fields.iter().enumerate() {
        if field.id.is_empty() || field.name.is_empty() {
            return Err(CompilerError::malformed(
                format!("{} fields[{}]", location, i),
                "empty field id or name",
            ));
        }
        if !field_names.insert(field.name.as_str()) {
            return Err(CompilerError::malformed(
                location,
                format!("duplicate field name \"{}\"", field.name),
            ));
        }
    }

    Ok(())
}
