//! Field constraints side-table.
//!
//! A second, independent document listing the informational limits of each
//! field. It never influences the type declarations.

use serde_json::Value;

use crate::ir::{CollectionDefinition, FieldDefinition, FieldKind};

use super::constants::EXPORT_COMMENT;
use super::ts_types::{property_key, to_pascal_case};

/// Generates the side-table for collections already sorted by name.
pub fn generate_metadata(collections: &[CollectionDefinition]) -> String {
    let mut parts = vec![EXPORT_COMMENT.to_string()];
    parts.extend(collections.iter().filter_map(collection_metadata));
    format!("{}\n", parts.join("\n\n"))
}

/// `export const <Name>FieldMetadata = { ... } as const`, or `None` when no
/// field carries anything worth listing.
pub fn collection_metadata(collection: &CollectionDefinition) -> Option<String> {
    let mut fields: Vec<&FieldDefinition> = collection.fields.iter().collect();
    fields.sort_by(|a, b| a.name.cmp(&b.name));

    let entries: Vec<String> = fields.into_iter().filter_map(field_metadata).collect();
    if entries.is_empty() {
        return None;
    }

    Some(format!(
        "export const {}FieldMetadata = {{\n{}\n}} as const",
        to_pascal_case(&collection.name),
        entries.join("\n")
    ))
}

fn field_metadata(field: &FieldDefinition) -> Option<String> {
    let constraints = &field.constraints;
    let mut parts = Vec::new();

    if let Some(min) = constraints.min.filter(|n| *n != 0.0) {
        parts.push(("min", format_number(min)));
    }
    if let Some(max) = constraints.max.filter(|n| *n != 0.0) {
        parts.push(("max", format_number(max)));
    }
    if let Some(max_select) = field.kind.max_select().filter(|n| *n != 0) {
        parts.push(("maxSelect", max_select.to_string()));
    }
    if let Some(max_size) = constraints.max_size.filter(|n| *n != 0) {
        parts.push(("maxSize", max_size.to_string()));
    }
    if !constraints.mime_types.is_empty() {
        parts.push(("mimeTypes", Value::from(constraints.mime_types.clone()).to_string()));
    }

    parts.push(("required", field.required.to_string()));
    if let Some(unique) = constraints.unique {
        parts.push(("unique", unique.to_string()));
    }

    if let Some(pattern) = constraints.pattern.as_deref().filter(|p| !p.is_empty()) {
        parts.push(("pattern", Value::from(pattern).to_string()));
    }
    if let FieldKind::Select { values: Some(values), .. } = &field.kind {
        if !values.is_empty() {
            parts.push(("values", Value::from(values.clone()).to_string()));
        }
    }
    if let FieldKind::Autodate { on_create, on_update } = field.kind {
        parts.push(("onCreate", on_create.to_string()));
        parts.push(("onUpdate", on_update.to_string()));
    }

    let lines: Vec<String> = parts
        .into_iter()
        .map(|(key, value)| format!("\t\t{}: {},", key, value))
        .collect();
    Some(format!("\t{}: {{\n{}\n\t}},", property_key(&field.name), lines.join("\n")))
}

/// Whole numbers print without a fraction (`15.0` -> `15`).
fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{CollectionKind, FieldConstraints};

    #[test]
    fn test_min_max() {
        let users = CollectionDefinition::new("c1", "users", CollectionKind::Auth).with_fields(vec![
            FieldDefinition::new("text3208210256", "id", FieldKind::Text)
                .required(true)
                .with_constraints(FieldConstraints {
                    min: Some(15.0),
                    max: Some(15.0),
                    unique: Some(false),
                    ..FieldConstraints::default()
                }),
        ]);

        assert_eq!(
            collection_metadata(&users).unwrap(),
            "export const UsersFieldMetadata = {\n\
             \tid: {\n\
             \t\tmin: 15,\n\
             \t\tmax: 15,\n\
             \t\trequired: true,\n\
             \t\tunique: false,\n\
             \t},\n\
             } as const"
        );
    }

    #[test]
    fn test_all_entries() {
        let media = CollectionDefinition::new("c1", "media", CollectionKind::Base).with_fields(vec![
            FieldDefinition::new("file1", "avatar", FieldKind::File { max_select: Some(1) })
                .with_constraints(FieldConstraints {
                    max_size: Some(1024),
                    mime_types: vec!["image/png".to_string()],
                    unique: Some(true),
                    pattern: Some("^abc$".to_string()),
                    ..FieldConstraints::default()
                }),
            FieldDefinition::new(
                "autodate1",
                "created",
                FieldKind::Autodate { on_create: true, on_update: false },
            ),
            FieldDefinition::new(
                "select1",
                "kind",
                FieldKind::Select { values: Some(vec!["a".to_string(), "b".to_string()]), max_select: None },
            ),
        ]);

        let code = collection_metadata(&media).unwrap();
        assert!(code.contains(
            "\tavatar: {\n\
             \t\tmaxSelect: 1,\n\
             \t\tmaxSize: 1024,\n\
             \t\tmimeTypes: [\"image/png\"],\n\
             \t\trequired: false,\n\
             \t\tunique: true,\n\
             \t\tpattern: \"^abc$\",\n\
             \t},"
        ));
        assert!(code.contains("\t\tonCreate: true,\n\t\tonUpdate: false,\n"));
        assert!(code.contains("\t\tvalues: [\"a\",\"b\"],\n"));

        let avatar = code.find("avatar").unwrap();
        let created = code.find("created").unwrap();
        let kind = code.find("kind:").unwrap();
        assert!(avatar < created && created < kind);
    }

    #[test]
    fn test_collections_without_fields_are_skipped() {
        let collections = vec![
            CollectionDefinition::new("c1", "empty", CollectionKind::Base),
            CollectionDefinition::new("c2", "notes", CollectionKind::Base)
                .with_fields(vec![FieldDefinition::new("f1", "body", FieldKind::Editor)]),
        ];

        let doc = generate_metadata(&collections);
        assert!(doc.starts_with(EXPORT_COMMENT));
        assert!(!doc.contains("EmptyFieldMetadata"));
        assert!(doc.contains("export const NotesFieldMetadata = {\n\tbody: {\n\t\trequired: false,\n\t},\n} as const\n"));
    }

    #[test]
    fn test_number_formatting() {
        assert_eq!(format_number(15.0), "15");
        assert_eq!(format_number(-2.0), "-2");
        assert_eq!(format_number(0.5), "0.5");
    }
}
