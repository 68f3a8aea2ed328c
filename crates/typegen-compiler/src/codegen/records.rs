//! Record and response declarations for one collection.

use crate::diagnostic::Warnings;
use crate::graph::RelationGraph;
use crate::ir::{CollectionDefinition, CollectionKind, FieldDefinition};

use super::constants::{AUTH_SYSTEM_FIELDS_NAME, BASE_SYSTEM_FIELDS_NAME};
use super::enums::{build_enumerations, generate_enum, EnumDeclaration};
use super::expand::{describe, generate_expand_type, ExpansionDescriptor};
use super::fields::field_property;
use super::generics::{
    expand_generic_name, generic_args, generic_params_with_defaults, json_generic_params, GenericParam,
};
use super::ts_types::{expand_type_name, generate_object_type, record_type_name, response_type_name};

/// Every declaration emitted for one collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionDeclarations {
    pub enums: Vec<EnumDeclaration>,
    pub expand: Option<String>,
    pub record: String,
    pub response: String,
}

impl CollectionDeclarations {
    /// Enums, expansion, record and response, separated by blank lines.
    pub fn render(&self) -> String {
        let mut parts: Vec<String> = self.enums.iter().map(generate_enum).collect();
        parts.extend(self.expand.clone());
        parts.push(self.record.clone());
        parts.push(self.response.clone());
        parts.join("\n\n")
    }
}

/// Assembles the declarations of one collection.
///
/// Properties are emitted in field name order so the output does not depend
/// on the order fields were declared in.
pub fn assemble(
    collection: &CollectionDefinition,
    graph: &RelationGraph<'_>,
    warnings: &mut Warnings,
) -> CollectionDeclarations {
    let mut fields: Vec<&FieldDefinition> = collection.fields.iter().collect();
    fields.sort_by(|a, b| a.name.cmp(&b.name));

    let properties: Vec<_> = fields
        .iter()
        .map(|field| field_property(field, &collection.name, warnings))
        .collect();

    let json_params = json_generic_params(&collection.fields);
    let record_name = record_type_name(&collection.name);

    let record = format!(
        "export type {}{} = {}",
        record_name,
        generic_params_with_defaults(&json_params),
        generate_object_type(&properties)
    );

    let descriptor = describe(&collection.id, graph);
    let expand = generate_expand_type(&collection.name, &descriptor);
    let response = response_declaration(collection, &record_name, &json_params, &descriptor);

    CollectionDeclarations {
        enums: build_enumerations(&collection.name, &collection.fields),
        expand,
        record,
        response,
    }
}

fn response_declaration(
    collection: &CollectionDefinition,
    record_name: &str,
    json_params: &[GenericParam],
    descriptor: &ExpansionDescriptor,
) -> String {
    let expand_default = match descriptor {
        ExpansionDescriptor::Typed(_) => expand_type_name(&collection.name),
        ExpansionDescriptor::Untyped => "unknown".to_string(),
    };
    let expand_param = GenericParam::new(expand_generic_name(json_params), expand_default);

    let mut params = json_params.to_vec();
    params.push(expand_param.clone());

    let system_fields = match collection.kind {
        CollectionKind::Auth => AUTH_SYSTEM_FIELDS_NAME,
        CollectionKind::Base | CollectionKind::View => BASE_SYSTEM_FIELDS_NAME,
    };

    format!(
        "export type {}{} = Required<{}{}> & {}<{}>",
        response_type_name(&collection.name),
        generic_params_with_defaults(&params),
        record_name,
        generic_args(json_params),
        system_fields,
        expand_param.name
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::Warning;
    use crate::ir::FieldKind;

    fn assemble_one(collections: &[CollectionDefinition], index: usize) -> (CollectionDeclarations, Vec<Warning>) {
        let graph = RelationGraph::build(collections);
        let mut warnings = Warnings::new();
        let decls = assemble(&collections[index], &graph, &mut warnings);
        (decls, warnings.into_vec())
    }

    #[test]
    fn test_books_record_and_response() {
        let collections = vec![CollectionDefinition::new("c_books", "books", CollectionKind::Base)
            .with_fields(vec![FieldDefinition::new("f1", "title", FieldKind::Text)])];
        let (decls, warnings) = assemble_one(&collections, 0);

        assert!(warnings.is_empty());
        assert!(decls.enums.is_empty());
        assert_eq!(decls.expand, None);
        assert_eq!(decls.record, "export type BooksRecord = {\n\ttitle?: string\n}");
        assert_eq!(
            decls.response,
            "export type BooksResponse<Texpand = unknown> = Required<BooksRecord> & BaseSystemFields<Texpand>"
        );
    }

    #[test]
    fn test_fields_sorted_and_json_generics() {
        let collections = vec![CollectionDefinition::new("c_users", "users", CollectionKind::Auth)
            .with_fields(vec![
                FieldDefinition::new("f1", "settings", FieldKind::Json),
                FieldDefinition::new("f2", "avatar", FieldKind::File { max_select: Some(1) }).required(true),
                FieldDefinition::new("f3", "extra", FieldKind::Json),
            ])];
        let (decls, _) = assemble_one(&collections, 0);

        assert_eq!(
            decls.record,
            "export type UsersRecord<Textra = unknown, Tsettings = unknown> = {\n\
             \tavatar: string\n\
             \textra?: null | Textra\n\
             \tsettings?: null | Tsettings\n\
             }"
        );
        assert_eq!(
            decls.response,
            "export type UsersResponse<Textra = unknown, Tsettings = unknown, Texpand = unknown> = \
             Required<UsersRecord<Textra, Tsettings>> & AuthSystemFields<Texpand>"
        );
    }

    #[test]
    fn test_expand_default_and_name_clash() {
        let collections = vec![
            CollectionDefinition::new("c_authors", "authors", CollectionKind::Base),
            CollectionDefinition::new("c_books", "books", CollectionKind::Base).with_fields(vec![
                FieldDefinition::new("f1", "expand", FieldKind::Json),
                FieldDefinition::new(
                    "f2",
                    "author",
                    FieldKind::Relation { collection_id: "c_authors".to_string(), max_select: Some(1) },
                ),
            ]),
        ];
        let (decls, _) = assemble_one(&collections, 1);

        assert_eq!(
            decls.expand.as_deref(),
            Some("export type BooksExpand = {\n\tauthor?: AuthorsResponse\n}")
        );
        assert_eq!(
            decls.response,
            "export type BooksResponse<Texpand = unknown, Texpand_ = BooksExpand> = \
             Required<BooksRecord<Texpand>> & BaseSystemFields<Texpand_>"
        );
    }

    #[test]
    fn test_empty_collection() {
        let collections = vec![CollectionDefinition::new("c_empty", "empty", CollectionKind::View)];
        let (decls, _) = assemble_one(&collections, 0);

        assert_eq!(decls.record, "export type EmptyRecord = {}");
        assert_eq!(
            decls.render(),
            "export type EmptyRecord = {}\n\n\
             export type EmptyResponse<Texpand = unknown> = Required<EmptyRecord> & BaseSystemFields<Texpand>"
        );
    }

    #[test]
    fn test_render_puts_enums_first() {
        let collections = vec![CollectionDefinition::new("c_orders", "orders", CollectionKind::Base)
            .with_fields(vec![FieldDefinition::new(
                "f1",
                "status",
                FieldKind::Select { values: Some(vec!["open".to_string()]), max_select: None },
            )
            .required(true)])];
        let (decls, _) = assemble_one(&collections, 0);

        let rendered = decls.render();
        assert!(rendered.starts_with("export enum OrdersStatusOptions {\n\t\"open\" = \"open\",\n}\n\n"));
        assert!(rendered.contains("\tstatus: OrdersStatusOptions\n"));
    }
}
