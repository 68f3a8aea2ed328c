use std::path::PathBuf;

use typegen_compiler::frontend::{JsonFileSource, SchemaSource};
use typegen_compiler::graph::RelationGraph;
use typegen_compiler::ir::{CollectionDefinition, CollectionKind, FieldDefinition, FieldKind};
use typegen_compiler::{generate, CompilerError, GenerateOptions, Warning};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/pb_schema.json")
}

fn load_fixture() -> Vec<CollectionDefinition> {
    JsonFileSource::new(fixture_path()).load().unwrap()
}

fn types_for(collections: &[CollectionDefinition]) -> String {
    generate(collections, GenerateOptions::default()).unwrap().types
}

#[test]
fn output_is_identical_for_shuffled_input() {
    let collections = load_fixture();
    let expected = types_for(&collections);

    let mut reversed = collections.clone();
    reversed.reverse();
    for collection in &mut reversed {
        collection.fields.reverse();
    }
    assert_eq!(types_for(&reversed), expected);

    let mut rotated = collections.clone();
    rotated.rotate_left(2);
    for collection in &mut rotated {
        let n = collection.fields.len();
        collection.fields.rotate_left(n / 2);
    }
    assert_eq!(types_for(&rotated), expected);
}

#[test]
fn books_end_to_end() {
    let collections = vec![CollectionDefinition::new("c_books", "books", CollectionKind::Base)
        .with_fields(vec![FieldDefinition::new("f_title", "title", FieldKind::Text)])];
    let types = types_for(&collections);

    assert!(types.contains("\tBooks = \"books\",\n"));
    assert!(types.contains("export type BooksRecord = {\n\ttitle?: string\n}"));
    assert!(types.contains(
        "export type BooksResponse<Texpand = unknown> = Required<BooksRecord> & BaseSystemFields<Texpand>"
    ));
}

#[test]
fn authors_and_books_expand_both_ways() {
    let collections = vec![
        CollectionDefinition::new("c_authors", "authors", CollectionKind::Base),
        CollectionDefinition::new("c_books", "books", CollectionKind::Base).with_fields(vec![
            FieldDefinition::new(
                "f_author",
                "author",
                FieldKind::Relation {
                    collection_id: "c_authors".to_string(),
                    max_select: Some(1),
                },
            )
            .required(true),
        ]),
    ];
    let types = types_for(&collections);

    assert!(types.contains("export type BooksExpand = {\n\tauthor?: AuthorsResponse\n}"));
    assert!(types.contains("export type AuthorsExpand = {\n\tbooks_via_author?: BooksResponse[]\n}"));
    assert!(types.contains("export type BooksRecord = {\n\tauthor: RecordIdString\n}"));
    assert!(types.contains("export type AuthorsRecord = {}"));
}

#[test]
fn fixture_declarations() {
    let types = types_for(&load_fixture());

    assert!(types.contains(
        "export enum Collections {\n\
         \tAuthors = \"authors\",\n\
         \tBookStats = \"book_stats\",\n\
         \tBooks = \"books\",\n\
         \tUsers = \"users\",\n\
         }"
    ));

    assert!(types.contains(
        "export enum BooksGenreOptions {\n\
         \t\"fiction\" = \"fiction\",\n\
         \t\"poetry\" = \"poetry\",\n\
         \t\"E1984\" = \"1984\",\n\
         }"
    ));

    assert!(types.contains(
        "export type BooksRecord<Tdetails = unknown> = {\n\
         \tauthor: RecordIdString\n\
         \tdetails?: null | Tdetails\n\
         \tgenre?: BooksGenreOptions[]\n\
         \tpages?: number\n\
         \tprinted_at?: GeoPoint\n\
         \tpublished?: IsoDateString\n\
         \tpublisher?: RecordIdString\n\
         \tsummary?: HTMLString\n\
         \ttitle: string\n\
         }"
    ));
    assert!(types.contains(
        "export type BooksResponse<Tdetails = unknown, Texpand = BooksExpand> = \
         Required<BooksRecord<Tdetails>> & BaseSystemFields<Texpand>"
    ));

    assert!(types.contains(
        "export type AuthorsExpand = {\n\
         \tauthors_via_mentor?: AuthorsResponse[]\n\
         \tbooks_via_author?: BooksResponse[]\n\
         \tfans?: UsersResponse[]\n\
         \tmentor?: AuthorsResponse\n\
         }"
    ));
    assert!(types.contains("export type UsersExpand = {\n\tauthors_via_fans?: AuthorsResponse[]\n}"));
    assert!(types.contains(
        "export type UsersResponse<Texpand = UsersExpand> = Required<UsersRecord> & AuthSystemFields<Texpand>"
    ));
    assert!(types.contains("\tcreated?: IsoAutoDateString\n"));

    assert!(types.contains(
        "export type BookStatsResponse<Texpand = unknown> = Required<BookStatsRecord> & BaseSystemFields<Texpand>"
    ));
}

#[test]
fn broken_reference_only_drops_the_edge() {
    let collections = load_fixture();
    let graph = RelationGraph::build(&collections);

    // author, mentor and fans resolve; publisher points at a missing collection
    assert_eq!(graph.edge_count(), 3);

    let types = types_for(&collections);
    assert!(types.contains("\tpublisher?: RecordIdString\n"));
    assert!(types.contains("export type BooksExpand = {\n\tauthor?: AuthorsResponse\n}"));
}

#[test]
fn unknown_field_kind_degrades() {
    let collections = vec![CollectionDefinition::new("c_docs", "docs", CollectionKind::Base).with_fields(vec![
        FieldDefinition::new("f1", "body", FieldKind::Text),
        FieldDefinition::new("f2", "embedding", FieldKind::Unknown("vector".to_string())),
    ])];
    let code = generate(&collections, GenerateOptions::default()).unwrap();

    assert!(code.types.contains("\tembedding?: unknown\n"));
    assert!(code.types.contains("\tbody?: string\n"));
    assert_eq!(
        code.warnings,
        vec![Warning::UnknownFieldKind {
            collection: "docs".to_string(),
            field: "embedding".to_string(),
            kind: "vector".to_string(),
        }]
    );
}

#[test]
fn malformed_input_fails_before_output() {
    let collections = vec![CollectionDefinition::new("", "books", CollectionKind::Base)];
    let result = generate(&collections, GenerateOptions::default());
    assert!(matches!(result, Err(CompilerError::MalformedSchema { .. })));
}

#[test]
fn metadata_side_table() {
    let options = GenerateOptions {
        sdk: true,
        metadata: true,
    };
    let code = generate(&load_fixture(), options).unwrap();
    let metadata = code.metadata.unwrap();

    assert!(metadata.contains(
        "\ttitle: {\n\
         \t\tmin: 1,\n\
         \t\tmax: 200,\n\
         \t\trequired: true,\n\
         \t},"
    ));
    assert!(metadata.contains("\t\tmimeTypes: [\"image/png\",\"image/jpeg\"],\n"));
    assert!(metadata.contains("\t\tvalues: [\"fiction\",\"poetry\",\"fiction\",\"1984\"],\n"));
    assert!(metadata.contains("\t\tonCreate: true,\n\t\tonUpdate: true,\n"));

    let authors = metadata.find("AuthorsFieldMetadata").unwrap();
    let users = metadata.find("UsersFieldMetadata").unwrap();
    assert!(authors < users);
    assert!(!code.types.contains("FieldMetadata"));
}

#[test]
fn fixture_sdk_client_types() {
    let types = types_for(&load_fixture());

    assert!(types.contains(
        "export type BooksRelationMappings<Trest extends string = \"\"> = {\n\
         \tauthor: AuthorsResponse<AuthorsExpandQuery<Trest>>\n\
         }"
    ));
    assert!(types.contains("\tfans?: UsersResponse<UsersExpandQuery<Trest>>[]\n"));
    assert!(!types.contains("BookStatsRelationMappings"));

    assert!(types.contains(
        "\t: TCollection extends Collections.Books\n\
         \t\t? BooksResponse<unknown, BooksExpandQuery<TExpand>>\n"
    ));
    assert!(types.contains("\t\t? BookStatsResponse\n"));
    assert!(types.contains(
        "\tcollection(idOrName: Collections.Users): EnhancedRecordService<Collections.Users> & RecordService<UsersResponse>\n"
    ));
}
