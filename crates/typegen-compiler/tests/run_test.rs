use tempfile::TempDir;

use typegen_compiler::{CompilerError, GeneratorConfig, SchemaSourceConfig, TypeGenerator};

const SCHEMA: &str = r#"{
    "page": 1,
    "totalPages": 1,
    "items": [
        {
            "id": "c_notes",
            "name": "notes",
            "type": "base",
            "schema": [
                {
                    "id": "f1",
                    "name": "body",
                    "type": "editor",
                    "required": true,
                    "options": {}
                },
                {
                    "id": "f2",
                    "name": "attachments",
                    "type": "file",
                    "required": false,
                    "options": { "maxSelect": 3, "maxSize": 1024 }
                }
            ]
        }
    ]
}"#;

fn write_schema(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("pb_schema.json");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn run_writes_types_and_metadata() {
    let dir = TempDir::new().unwrap();
    let schema = write_schema(&dir, SCHEMA);

    let config = GeneratorConfig {
        source: SchemaSourceConfig::Json(schema),
        out: dir.path().join("out/pocketbase-types.ts"),
        metadata_out: Some(dir.path().join("out/pocketbase-metadata.ts")),
        sdk: false,
    };
    let summary = TypeGenerator::new(config).run().unwrap();

    assert_eq!(summary.collections, 1);
    assert_eq!(summary.relations, 0);
    assert!(summary.warnings.is_empty());

    let types = std::fs::read_to_string(dir.path().join("out/pocketbase-types.ts")).unwrap();
    assert!(types.starts_with("/**\n* This file was @generated using typegen\n*/\n"));
    assert!(types.contains("export type NotesRecord = {\n\tattachments?: string[]\n\tbody: HTMLString\n}"));
    assert!(!types.contains("TypedPocketBase"));

    let metadata = std::fs::read_to_string(dir.path().join("out/pocketbase-metadata.ts")).unwrap();
    assert!(metadata.contains("export const NotesFieldMetadata = {"));
    assert!(metadata.contains("\t\tmaxSelect: 3,\n\t\tmaxSize: 1024,\n"));
}

#[test]
fn run_reports_warnings() {
    let dir = TempDir::new().unwrap();
    let schema = write_schema(
        &dir,
        r#"[{ "id": "c1", "name": "docs", "type": "base",
             "fields": [{ "id": "f1", "name": "embedding", "type": "vector" }] }]"#,
    );

    let config = GeneratorConfig {
        source: SchemaSourceConfig::Json(schema),
        out: dir.path().join("types.ts"),
        ..GeneratorConfig::default()
    };
    let summary = TypeGenerator::new(config).run().unwrap();

    assert_eq!(summary.warnings.len(), 1);
    assert_eq!(
        summary.warnings[0].to_string(),
        "unknown field type \"vector\" on docs.embedding, typed as unknown"
    );
}

#[test]
fn run_rejects_invalid_json_without_writing() {
    let dir = TempDir::new().unwrap();
    let schema = write_schema(&dir, "{ not json");
    let out = dir.path().join("types.ts");

    let config = GeneratorConfig {
        source: SchemaSourceConfig::Json(schema),
        out: out.clone(),
        ..GeneratorConfig::default()
    };

    let result = TypeGenerator::new(config).run();
    assert!(matches!(result, Err(CompilerError::InvalidJson { .. })));
    assert!(!out.exists());
}

#[test]
fn run_rejects_duplicate_collections() {
    let dir = TempDir::new().unwrap();
    let schema = write_schema(
        &dir,
        r#"[{ "id": "c1", "name": "posts", "type": "base", "fields": [] },
            { "id": "c2", "name": "posts", "type": "base", "fields": [] }]"#,
    );

    let config = GeneratorConfig {
        source: SchemaSourceConfig::Json(schema),
        out: dir.path().join("types.ts"),
        ..GeneratorConfig::default()
    };

    let result = TypeGenerator::new(config).run();
    assert!(matches!(result, Err(CompilerError::DuplicateCollection { name }) if name == "posts"));
}
