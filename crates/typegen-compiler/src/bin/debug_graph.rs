//! Debug script to see what relation graph a schema export produces.

use std::path::PathBuf;

use typegen_compiler::frontend::{JsonFileSource, SchemaSource};
use typegen_compiler::graph::RelationGraph;

fn main() {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("pb_schema.json"));

    let mut source = JsonFileSource::new(path);
    let collections = match source.load() {
        Ok(collections) => collections,
        Err(e) => {
            println!("Error: {:?}", e);
            return;
        }
    };

    let graph = RelationGraph::build(&collections);
    println!("Loaded {} collections, {} relations", collections.len(), graph.edge_count());

    for node in graph.nodes() {
        let collection = graph.collection(node.collection);
        println!("\n{} [{}] ({})", collection.name, collection.kind.as_str(), collection.id);
        for (field, target) in &node.owners {
            println!("  owns    {} -> {}", graph.field(*field).name, graph.collection(*target).name);
        }
        for (field, owner) in &node.children {
            println!(
                "  child   {}.{} -> {}",
                graph.collection(*owner).name,
                graph.field(*field).name,
                collection.name
            );
        }
    }
}
