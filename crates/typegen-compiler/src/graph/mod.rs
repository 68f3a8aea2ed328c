//! Relation graph between collections.
//!
//! Every collection becomes a node. A relation field `f` on collection `C`
//! whose target `T` is a known collection adds two edges:
//!
//! ```text
//!   C.owners[f]   = T     (C holds the reference)
//!   T.children[f] = C     (T is referenced from C)
//! ```
//!
//! Edges are keyed by field position, never by name, so two relation fields
//! pointing at the same target stay distinct. Self-references put the node in
//! both maps of itself. Unresolvable targets add nothing.
//!
//! Cycles are left alone: consumers only read a node's direct edges.

use std::collections::{BTreeMap, HashMap};

use crate::ir::{CollectionDefinition, FieldDefinition, FieldKind};

/// Position of a field: `collections[collection].fields[field]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldRef {
    pub collection: usize,
    pub field: usize,
}

/// One collection and its direct relation edges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationNode {
    /// Index of this node's collection.
    pub collection: usize,

    /// Relation fields on this collection, mapped to the target collection.
    pub owners: BTreeMap<FieldRef, usize>,

    /// Relation fields on other collections (or this one) that point here,
    /// mapped to the collection holding the field.
    pub children: BTreeMap<FieldRef, usize>,
}

impl RelationNode {
    fn new(collection: usize) -> Self {
        Self {
            collection,
            ..Self::default()
        }
    }

    pub fn is_isolated(&self) -> bool {
        self.owners.is_empty() && self.children.is_empty()
    }
}

/// The relation graph for one generation run.
///
/// Borrows the collections it was built from; node `i` wraps `collections[i]`.
#[derive(Debug)]
pub struct RelationGraph<'a> {
    collections: &'a [CollectionDefinition],
    nodes: Vec<RelationNode>,
    by_id: HashMap<&'a str, usize>,
}

impl<'a> RelationGraph<'a> {
    /// Builds the graph in one pass over every field.
    pub fn build(collections: &'a [CollectionDefinition]) -> Self {
        let mut nodes: Vec<RelationNode> = (0..collections.len()).map(RelationNode::new).collect();

        let mut by_id = HashMap::with_capacity(collections.len());
        for (index, collection) in collections.iter().enumerate() {
            by_id.entry(collection.id.as_str()).or_insert(index);
        }

        for (owner, collection) in collections.iter().enumerate() {
            for (field_index, field) in collection.fields.iter().enumerate() {
                let FieldKind::Relation { collection_id, .. } = &field.kind else {
                    continue;
                };
                let Some(&target) = by_id.get(collection_id.as_str()) else {
                    continue;
                };

                let key = FieldRef {
                    collection: owner,
                    field: field_index,
                };
                nodes[owner].owners.insert(key, target);
                nodes[target].children.insert(key, owner);
            }
        }

        let graph = Self {
            collections,
            nodes,
            by_id,
        };
        tracing::debug!(
            collections = collections.len(),
            relations = graph.edge_count(),
            "built relation graph"
        );
        graph
    }

    /// All nodes, in the order of the collections.
    pub fn nodes(&self) -> &[RelationNode] {
        &self.nodes
    }

    /// The node of the collection with this id.
    pub fn node(&self, collection_id: &str) -> Option<&RelationNode> {
        self.by_id.get(collection_id).map(|&index| &self.nodes[index])
    }

    pub fn collection(&self, index: usize) -> &'a CollectionDefinition {
        &self.collections[index]
    }

    /// The collection with this name, if any.
    pub fn collection_named(&self, name: &str) -> Option<&'a CollectionDefinition> {
        self.collections.iter().find(|c| c.name == name)
    }

    pub fn field(&self, key: FieldRef) -> &'a FieldDefinition {
        &self.collections[key.collection].fields[key.field]
    }

    /// Number of resolved relation fields.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.owners.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::CollectionKind;

    fn relation(id: &str, name: &str, target: &str) -> FieldDefinition {
        FieldDefinition::new(
            id,
            name,
            FieldKind::Relation {
                collection_id: target.to_string(),
                max_select: Some(1),
            },
        )
    }

    fn schema() -> Vec<CollectionDefinition> {
        vec![
            CollectionDefinition::new("c_authors", "authors", CollectionKind::Base)
                .with_fields(vec![FieldDefinition::new("f0", "name", FieldKind::Text)]),
            CollectionDefinition::new("c_books", "books", CollectionKind::Base).with_fields(vec![
                FieldDefinition::new("f1", "title", FieldKind::Text),
                relation("f2", "author", "c_authors"),
                relation("f3", "editor", "c_authors"),
                relation("f4", "publisher", "c_missing"),
            ]),
            CollectionDefinition::new("c_people", "people", CollectionKind::Base)
                .with_fields(vec![relation("f5", "parent", "c_people")]),
        ]
    }

    #[test]
    fn test_owner_and_child_edges() {
        let collections = schema();
        let graph = RelationGraph::build(&collections);

        let books = graph.node("c_books").unwrap();
        let author = FieldRef { collection: 1, field: 1 };
        let editor = FieldRef { collection: 1, field: 2 };
        assert_eq!(books.owners.get(&author), Some(&0));
        assert_eq!(books.owners.get(&editor), Some(&0));
        assert!(books.children.is_empty());

        let authors = graph.node("c_authors").unwrap();
        assert!(authors.owners.is_empty());
        assert_eq!(authors.children.len(), 2);
        assert_eq!(authors.children.get(&author), Some(&1));
        assert_eq!(graph.field(author).name, "author");
    }

    #[test]
    fn test_symmetry() {
        let collections = schema();
        let graph = RelationGraph::build(&collections);

        for node in graph.nodes() {
            for (field, target) in &node.owners {
                assert_eq!(graph.nodes()[*target].children.get(field), Some(&node.collection));
            }
            for (field, owner) in &node.children {
                assert_eq!(graph.nodes()[*owner].owners.get(field), Some(&node.collection));
            }
        }
    }

    #[test]
    fn test_self_relation() {
        let collections = schema();
        let graph = RelationGraph::build(&collections);

        let people = graph.node("c_people").unwrap();
        let parent = FieldRef { collection: 2, field: 0 };
        assert_eq!(people.owners.get(&parent), Some(&2));
        assert_eq!(people.children.get(&parent), Some(&2));
    }

    #[test]
    fn test_broken_reference_adds_no_edges() {
        let collections = schema();
        let graph = RelationGraph::build(&collections);

        let publisher = FieldRef { collection: 1, field: 3 };
        assert!(graph.nodes().iter().all(|n| !n.owners.contains_key(&publisher)));
        assert!(graph.nodes().iter().all(|n| !n.children.contains_key(&publisher)));
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_isolated_node() {
        let collections = vec![CollectionDefinition::new("c1", "notes", CollectionKind::Base)];
        let graph = RelationGraph::build(&collections);
        assert!(graph.node("c1").unwrap().is_isolated());
        assert!(graph.node("nope").is_none());
        assert_eq!(graph.collection_named("notes").map(|c| c.id.as_str()), Some("c1"));
        assert!(graph.collection_named("c1").is_none());
    }
}
