//! # PocketBase TypeGen Compiler
//!
//! This crate turns a PocketBase collection schema into TypeScript type
//! declarations: one record and one response type per collection, enums for
//! select fields, expansion helper types for relations, and summary maps.
//!
//! ## Architecture
//!
//! ```text
//! Schema source (JSON export, SQLite file, running backend)
//!        │
//!        ▼
//! ┌──────────────┐
//! │   Frontend   │  Raw backend format → IR
//! └──────┬───────┘
//!        │
//!        ▼
//! ┌──────────────┐
//! │   Validate   │  Identifiers & name uniqueness
//! └──────┬───────┘
//!        │
//!        ▼
//! ┌──────────────┐
//! │    Graph     │  Owner / child relation edges
//! └──────┬───────┘
//!        │
//!        ▼
//! ┌──────────────┐
//! │   Codegen    │  IR + graph → TypeScript text
//! └──────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use typegen_compiler::{GeneratorConfig, SchemaSourceConfig, TypeGenerator};
//!
//! let config = GeneratorConfig {
//!     source: SchemaSourceConfig::Json("pb_schema.json".into()),
//!     ..GeneratorConfig::default()
//! };
//!
//! let summary = TypeGenerator::new(config).run()?;
//! println!("{} collections", summary.collections);
//! ```

pub mod codegen;
pub mod config;
pub mod diagnostic;
pub mod frontend;
pub mod graph;
pub mod ir;
pub mod validate;

use std::path::Path;

pub use codegen::{generate, GenerateOptions, GeneratedCode};
pub use config::{GeneratorConfig, RemoteAuth, SchemaSourceConfig};
pub use diagnostic::{CompilerError, Warning};
pub use ir::CollectionDefinition;

/// Runs the generation pipeline for one configuration.
pub struct TypeGenerator {
    config: GeneratorConfig,
}

/// Result of a generation run that wrote its output.
#[derive(Debug, Clone)]
pub struct GenerateSummary {
    /// Number of collections in the schema.
    pub collections: usize,
    /// Number of resolved relation fields.
    pub relations: usize,
    /// Non-fatal problems found while generating.
    pub warnings: Vec<Warning>,
}

impl TypeGenerator {
    /// Creates a generator with the given configuration.
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Loads and validates the schema from the configured source.
    pub fn load(&self) -> Result<Vec<CollectionDefinition>, CompilerError> {
        let mut source = frontend::create_source(&self.config.source);
        tracing::debug!(kind = source.kind(), location = %source.location(), "loading schema");

        let collections = source.load()?;
        validate::validate_schema(&collections)?;

        tracing::debug!(collections = collections.len(), "schema loaded");
        Ok(collections)
    }

    /// Generates the declarations for an already loaded schema.
    pub fn generate(&self, collections: &[CollectionDefinition]) -> Result<GeneratedCode, CompilerError> {
        let options = GenerateOptions {
            sdk: self.config.sdk,
            metadata: self.config.metadata_out.is_some(),
        };
        codegen::generate(collections, options)
    }

    /// Loads the schema, generates the declarations and writes the output files.
    ///
    /// This runs the full pipeline:
    /// 1. Load the schema through the configured frontend
    /// 2. Validate it
    /// 3. Generate the declarations (and the metadata side-table if configured)
    /// 4. Write output files, creating parent directories
    ///
    /// Nothing is written when any earlier step fails.
    pub fn run(&self) -> Result<GenerateSummary, CompilerError> {
        let collections = self.load()?;
        let generated = self.generate(&collections)?;

        write_file(&self.config.out, &generated.types)?;
        if let (Some(path), Some(metadata)) = (&self.config.metadata_out, &generated.metadata) {
            write_file(path, metadata)?;
        }

        Ok(GenerateSummary {
            collections: collections.len(),
            relations: generated.relations,
            warnings: generated.warnings,
        })
    }
}

/// Writes a file, creating its parent directory first.
fn write_file(path: &Path, content: &str) -> Result<(), CompilerError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| CompilerError::io(parent, e.to_string()))?;
    }
    std::fs::write(path, content).map_err(|e| CompilerError::io(path, e.to_string()))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote output");
    Ok(())
}
