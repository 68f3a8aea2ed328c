//! Expansion types: what an `expand` query may populate on a record.
//!
//! Only a node's direct edges are read, so cycles in the graph are harmless.
//!
//! ```text
//!   owner edge  books.author -> authors   author?: AuthorsResponse
//!   child edge  authors <- books.author   books_via_author?: BooksResponse[]
//! ```

use std::collections::HashSet;

use crate::graph::RelationGraph;

use super::ts_types::{expand_type_name, generate_object_type, response_type_name, Property, TsType};

/// Which side of a relation an expansion property comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RelationDirection {
    /// The collection holds the relation field.
    Owner,
    /// Another collection (or this one) holds a relation field pointing here.
    Child,
}

/// One property of an expansion type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandProperty {
    pub name: String,
    /// Name of the collection whose response type the property holds.
    pub target: String,
    pub multiple: bool,
    /// Set for owner edges whose field is required.
    pub required: bool,
    pub direction: RelationDirection,
}

/// The expansion shape of one collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpansionDescriptor {
    /// No relations in either direction.
    Untyped,
    /// Properties sorted by name. Names are unique.
    Typed(Vec<ExpandProperty>),
}

/// Property name for a child edge (`books`, `author` -> `books_via_author`).
pub fn child_property_name(referencing_collection: &str, field_name: &str) -> String {
    format!("{}_via_{}", referencing_collection, field_name)
}

/// Describes the expansion of the collection with this id.
///
/// Owner edges are arrays when the owning field is plural. Child edges are
/// always arrays. A child name already taken by an owner field gets `_`
/// appended until it is free.
pub fn describe(collection_id: &str, graph: &RelationGraph<'_>) -> ExpansionDescriptor {
    let Some(node) = graph.node(collection_id) else {
        return ExpansionDescriptor::Untyped;
    };
    if node.is_isolated() {
        return ExpansionDescriptor::Untyped;
    }

    let mut properties: Vec<ExpandProperty> = node
        .owners
        .iter()
        .map(|(&key, &target)| {
            let field = graph.field(key);
            ExpandProperty {
                name: field.name.clone(),
                target: graph.collection(target).name.clone(),
                multiple: field.kind.cardinality().is_multiple(),
                required: field.required,
                direction: RelationDirection::Owner,
            }
        })
        .collect();

    let mut taken: HashSet<String> = properties.iter().map(|p| p.name.clone()).collect();
    for (&key, &owner) in &node.children {
        let referencing = &graph.collection(owner).name;
        let mut name = child_property_name(referencing, &graph.field(key).name);
        while taken.contains(&name) {
            name.push('_');
        }
        taken.insert(name.clone());
        properties.push(ExpandProperty {
            name,
            target: referencing.clone(),
            multiple: true,
            required: false,
            direction: RelationDirection::Child,
        });
    }

    properties.sort_by(|a, b| a.name.cmp(&b.name).then(a.direction.cmp(&b.direction)));

    ExpansionDescriptor::Typed(properties)
}

/// Generates `export type <Name>Expand = { ... }`, or nothing for an untyped expansion.
pub fn generate_expand_type(collection_name: &str, descriptor: &ExpansionDescriptor) -> Option<String> {
    let ExpansionDescriptor::Typed(expand_properties) = descriptor else {
        return None;
    };

    let properties: Vec<Property> = expand_properties
        .iter()
        .map(|p| Property {
            name: p.name.clone(),
            typ: TsType::named(response_type_name(&p.target)).many_if(p.multiple),
            optional: true,
        })
        .collect();

    Some(format!(
        "export type {} = {}",
        expand_type_name(collection_name),
        generate_object_type(&properties)
    ))
}
