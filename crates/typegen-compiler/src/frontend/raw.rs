//! Raw schema format as exported by the backend, and its conversion to IR.
//!
//! Two layouts are accepted:
//! - current: `fields: [...]` with kind options inline on each field
//! - legacy: `schema: [...]` with kind options nested under `options`

use serde::Deserialize;
use serde_json::Value;

use crate::diagnostic::CompilerError;
use crate::ir::{CollectionDefinition, CollectionKind, FieldConstraints, FieldDefinition, FieldKind};

/// A schema document: a bare collection list, or one page of the list API.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawSchemaDocument {
    List(Vec<RawCollection>),
    Page(RawCollectionPage),
}

impl RawSchemaDocument {
    pub fn into_collections(self) -> Vec<RawCollection> {
        match self {
            Self::List(collections) => collections,
            Self::Page(page) => page.items,
        }
    }
}

/// One page of `GET /api/collections`.
#[derive(Debug, Deserialize)]
pub struct RawCollectionPage {
    #[serde(default = "first_page")]
    pub page: u32,

    #[serde(rename = "totalPages", default = "first_page")]
    pub total_pages: u32,

    pub items: Vec<RawCollection>,
}

fn first_page() -> u32 {
    1
}

/// A collection exactly as the backend stores it.
#[derive(Debug, Default, Deserialize)]
pub struct RawCollection {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    #[serde(default)]
    pub fields: Option<Vec<RawField>>,

    /// Legacy name of `fields`.
    #[serde(default)]
    pub schema: Option<Vec<RawField>>,
}

/// A field exactly as the backend stores it.
#[derive(Debug, Default, Deserialize)]
pub struct RawField {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    #[serde(default)]
    pub required: Option<bool>,

    #[serde(default)]
    pub unique: Option<bool>,

    #[serde(flatten)]
    pub inline: RawFieldOptions,

    /// Legacy nested options.
    #[serde(default)]
    pub options: Option<RawFieldOptions>,
}

/// Kind-specific options. Every member is optional because each kind uses a few.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct RawFieldOptions {
    #[serde(rename = "maxSelect", default)]
    pub max_select: Option<u64>,

    #[serde(default)]
    pub values: Option<Vec<String>>,

    #[serde(rename = "collectionId", default)]
    pub collection_id: Option<String>,

    /// Numbers for numeric/text kinds, date strings for dates.
    #[serde(default)]
    pub min: Option<Value>,

    #[serde(default)]
    pub max: Option<Value>,

    #[serde(default)]
    pub pattern: Option<String>,

    #[serde(rename = "maxSize", default)]
    pub max_size: Option<u64>,

    #[serde(rename = "mimeTypes", default)]
    pub mime_types: Option<Vec<String>>,

    #[serde(rename = "onCreate", default)]
    pub on_create: Option<bool>,

    #[serde(rename = "onUpdate", default)]
    pub on_update: Option<bool>,
}

impl RawFieldOptions {
    /// Fills every missing inline option from the legacy nested options.
    fn merged_with(self, legacy: Option<RawFieldOptions>) -> Self {
        let Some(legacy) = legacy else {
            return self;
        };
        Self {
            max_select: self.max_select.or(legacy.max_select),
            values: self.values.or(legacy.values),
            collection_id: self.collection_id.or(legacy.collection_id),
            min: self.min.or(legacy.min),
            max: self.max.or(legacy.max),
            pattern: self.pattern.or(legacy.pattern),
            max_size: self.max_size.or(legacy.max_size),
            mime_types: self.mime_types.or(legacy.mime_types),
            on_create: self.on_create.or(legacy.on_create),
            on_update: self.on_update.or(legacy.on_update),
        }
    }
}

/// Parses a schema document from JSON text.
pub fn collections_from_str(json: &str) -> Result<Vec<RawCollection>, serde_json::Error> {
    let document: RawSchemaDocument = serde_json::from_str(json)?;
    Ok(document.into_collections())
}

/// Converts raw collections to IR, failing on the first malformed entry.
pub fn into_ir(raw: Vec<RawCollection>) -> Result<Vec<CollectionDefinition>, CompilerError> {
    raw.into_iter()
        .enumerate()
        .map(|(index, collection)| collection.into_ir(index))
        .collect()
}

impl RawCollection {
    /// Converts to IR. `index` is the position in the source, used in errors.
    pub fn into_ir(self, index: usize) -> Result<CollectionDefinition, CompilerError> {
        let location = format!("collections[{}]", index);
        let id = required_string(self.id, &location, "id")?;
        let name = required_string(self.name, &location, "name")?;
        let location = format!("collection \"{}\"", name);

        let kind_name = required_string(self.kind, &location, "type")?;
        let kind = CollectionKind::parse(&kind_name).ok_or_else(|| {
            CompilerError::malformed(
                &location,
                format!("unknown collection type \"{}\" (expected base, auth or view)", kind_name),
            )
        })?;

        let fields = self
            .fields
            .or(self.schema)
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(i, field)| field.into_ir(&format!("{} fields[{}]", location, i)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CollectionDefinition {
            id,
            name,
            kind,
            fields,
        })
    }
}

impl RawField {
    /// Converts to IR. `location` names the field in errors.
    pub fn into_ir(self, location: &str) -> Result<FieldDefinition, CompilerError> {
        let id = required_string(self.id, location, "id")?;
        let name = required_string(self.name, location, "name")?;
        let kind_name = required_string(self.kind, location, "type")?;
        let options = self.inline.merged_with(self.options);

        let constraints = FieldConstraints {
            min: options.min.as_ref().and_then(Value::as_f64),
            max: options.max.as_ref().and_then(Value::as_f64),
            pattern: options.pattern.clone(),
            max_size: options.max_size,
            mime_types: options.mime_types.clone().unwrap_or_default(),
            unique: self.unique,
        };

        Ok(FieldDefinition {
            id,
            name,
            kind: build_kind(&kind_name, options),
            required: self.required.unwrap_or(false),
            constraints,
        })
    }
}

fn build_kind(kind: &str, options: RawFieldOptions) -> FieldKind {
    match kind {
        "select" => FieldKind::Select {
            values: options.values,
            max_select: options.max_select,
        },
        "file" => FieldKind::File {
            max_select: options.max_select,
        },
        // Pre-0.8 "user" fields are relations to the users collection.
        "relation" | "user" => FieldKind::Relation {
            collection_id: options.collection_id.unwrap_or_default(),
            max_select: options.max_select,
        },
        "autodate" => FieldKind::Autodate {
            on_create: options.on_create.unwrap_or(false),
            on_update: options.on_update.unwrap_or(false),
        },
        other => FieldKind::simple(other).unwrap_or_else(|| FieldKind::Unknown(other.to_string())),
    }
}

fn required_string(value: Option<String>, location: &str, property: &str) -> Result<String, CompilerError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(CompilerError::malformed(
            location,
            format!("missing required property \"{}\"", property),
        )),
    }
}
