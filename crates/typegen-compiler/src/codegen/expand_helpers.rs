//! String-driven expansion helpers for the SDK client types.
//!
//! For every collection with relations two types are emitted:
//!
//! ```text
//!   BooksRelationMappings<Trest>   one property per expandable relation,
//!                                  the target response expanded by Trest
//!   BooksExpandQuery<T>            parses an expand string ("a,b", "a.b")
//!                                  into the matching expand object
//! ```
//!
//! `GetResponseType` then picks a collection's response type for an expand
//! string, which is what `EnhancedRecordService` returns from its read methods.

use crate::graph::RelationGraph;
use crate::ir::CollectionDefinition;

use super::expand::{describe, ExpandProperty, ExpansionDescriptor};
use super::generics::json_generic_params;
use super::ts_types::{
    generate_object_type, is_identifier, response_type_name, string_literal, to_pascal_case, Property, TsType,
};

/// `BooksRelationMappings` for `books`.
pub fn relation_mappings_name(collection_name: &str) -> String {
    format!("{}RelationMappings", to_pascal_case(collection_name))
}

/// `BooksExpandQuery` for `books`.
pub fn expand_query_name(collection_name: &str) -> String {
    format!("{}ExpandQuery", to_pascal_case(collection_name))
}

/// Whether helpers are emitted for this collection.
pub fn has_expand_helpers(collection: &CollectionDefinition, graph: &RelationGraph<'_>) -> bool {
    matches!(describe(&collection.id, graph), ExpansionDescriptor::Typed(_))
}

/// The response type of `collection_name` with every json parameter
/// `unknown` and the expansion parameter set to `expand`.
fn response_with_expand(graph: &RelationGraph<'_>, collection_name: &str, expand: &str) -> String {
    let json_params = graph
        .collection_named(collection_name)
        .map(|c| json_generic_params(&c.fields).len())
        .unwrap_or(0);

    let mut args = vec!["unknown"; json_params];
    args.push(expand);
    format!("{}<{}>", response_type_name(collection_name), args.join(", "))
}

fn mapping_property(graph: &RelationGraph<'_>, property: &ExpandProperty) -> Property {
    let nested = format!("{}<Trest>", expand_query_name(&property.target));
    Property {
        name: property.name.clone(),
        typ: TsType::named(response_with_expand(graph, &property.target, &nested)).many_if(property.multiple),
        optional: !property.required,
    }
}

/// Generates the mappings and query types of one collection, or nothing when
/// it has no relations in either direction.
pub fn generate_expand_helpers(collection: &CollectionDefinition, graph: &RelationGraph<'_>) -> Option<String> {
    let ExpansionDescriptor::Typed(expand_properties) = describe(&collection.id, graph) else {
        return None;
    };

    let properties: Vec<Property> = expand_properties
        .iter()
        .map(|p| mapping_property(graph, p))
        .collect();

    let mappings = relation_mappings_name(&collection.name);
    let query = expand_query_name(&collection.name);

    Some(format!(
        "// Expand helpers for {name}\n\
         export type {m}<Trest extends string = \"\"> = {body}\n\
         \n\
         export type {q}<T extends string> =\n\
         \tT extends `${{infer F}},${{infer R}}`\n\
         \t\t? {q}<F> & {q}<R>\n\
         \t: T extends `${{infer K extends keyof {m}}}.${{infer Rest}}`\n\
         \t\t? {{ [P in K]: {m}<Rest>[P] }}\n\
         \t: T extends keyof {m}\n\
         \t\t? {{ [K in T]: {m}[K] }}\n\
         \t: T extends \"\"\n\
         \t\t? undefined\n\
         \t\t: never",
        name = string_literal(&collection.name),
        m = mappings,
        q = query,
        body = generate_object_type(&properties),
    ))
}

/// Generates `GetResponseType<TCollection, TExpand>`, one conditional branch
/// per collection.
///
/// Collections with helpers get their expansion parameter from the expand
/// string; the others keep their default response type.
pub fn generate_response_selector(collections: &[CollectionDefinition], graph: &RelationGraph<'_>) -> String {
    let branches: Vec<String> = collections
        .iter()
        .map(|c| {
            let response = if has_expand_helpers(c, graph) {
                let query = format!("{}<TExpand>", expand_query_name(&c.name));
                response_with_expand(graph, &c.name, &query)
            } else {
                response_type_name(&c.name)
            };
            format!("TCollection extends {}\n\t\t? {}", collections_member_type(&c.name), response)
        })
        .collect();

    let body = if branches.is_empty() {
        " never".to_string()
    } else {
        format!("\n\t{}\n\t: never", branches.join("\n\t: "))
    };

    format!(
        "// Response type of a collection for an expand string\n\
         export type GetResponseType<\n\
         \tTCollection extends Collections,\n\
         \tTExpand extends string,\n\
         > ={}",
        body
    )
}

/// The type of one `Collections` member, e.g. `Collections.Books`.
pub fn collections_member_type(collection_name: &str) -> String {
    let member = to_pascal_case(collection_name);
    if is_identifier(&member) {
        format!("Collections.{}", member)
    } else {
        format!("(typeof Collections)[{}]", string_literal(&member))
    }
}
