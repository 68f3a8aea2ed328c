//! Schema-wide declarations: the collection name enum and the summary maps.
//!
//! Callers pass collections already sorted by name; iteration order here is
//! output order.

use crate::ir::CollectionDefinition;

use super::constants::{GENERIC_COLLECTION_OVERLOAD, TYPED_POCKETBASE_COMMENT};
use super::expand_helpers::collections_member_type;
use super::ts_types::{
    generate_object_type, property_key, record_type_name, response_type_name, string_literal,
    to_pascal_case, Property, TsType,
};

/// `export enum Collections { Books = "books", ... }`.
pub fn generate_collections_enum(collections: &[CollectionDefinition]) -> String {
    if collections.is_empty() {
        return "export enum Collections {}".to_string();
    }

    let members: Vec<String> = collections
        .iter()
        .map(|c| {
            format!(
                "\t{} = {},",
                property_key(&to_pascal_case(&c.name)),
                string_literal(&c.name)
            )
        })
        .collect();
    format!("export enum Collections {{\n{}\n}}", members.join("\n"))
}

/// `export type CollectionRecords = { books: BooksRecord, ... }`.
pub fn generate_records_map(collections: &[CollectionDefinition]) -> String {
    summary_map("CollectionRecords", collections, record_type_name)
}

/// `export type CollectionResponses = { books: BooksResponse, ... }`.
pub fn generate_responses_map(collections: &[CollectionDefinition]) -> String {
    summary_map("CollectionResponses", collections, response_type_name)
}

fn summary_map(
    type_name: &str,
    collections: &[CollectionDefinition],
    value_type: fn(&str) -> String,
) -> String {
    let properties: Vec<Property> = collections
        .iter()
        .map(|c| Property {
            name: c.name.clone(),
            typ: TsType::named(value_type(&c.name)),
            optional: false,
        })
        .collect();
    format!("export type {} = {}", type_name, generate_object_type(&properties))
}

/// The client type whose `collection()` returns a typed record service.
///
/// Each `Collections` member gets an overload returning an
/// `EnhancedRecordService`; a generic overload keyed by collection name
/// comes last.
pub fn generate_typed_pocketbase(collections: &[CollectionDefinition]) -> String {
    let mut overloads: Vec<String> = collections
        .iter()
        .map(|c| {
            let member = collections_member_type(&c.name);
            format!(
                "\tcollection(idOrName: {m}): EnhancedRecordService<{m}> & RecordService<{r}>",
                m = member,
                r = response_type_name(&c.name)
            )
        })
        .collect();
    overloads.push(GENERIC_COLLECTION_OVERLOAD.to_string());

    format!(
        "{}\nexport type TypedPocketBase = {{\n{}\n}} & PocketBase",
        TYPED_POCKETBASE_COMMENT,
        overloads.join("\n")
    )
}
