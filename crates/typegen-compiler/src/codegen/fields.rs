//! Field type resolution.
//!
//! One exhaustive match over `FieldKind`. The resulting type depends only on
//! the kind and its options; the field name is used only to name the enum or
//! generic parameter a field refers to.

use crate::diagnostic::{Warning, Warnings};
use crate::ir::{FieldDefinition, FieldKind};

use super::constants::{
    AUTODATE_STRING_TYPE_NAME, DATE_STRING_TYPE_NAME, GEO_POINT_TYPE_NAME, HTML_STRING_NAME,
    RECORD_ID_STRING_NAME,
};
use super::enums::{has_options, option_enum_name};
use super::generics::field_generic_name;
use super::ts_types::{Property, TsType};

/// Resolves the TypeScript type of one field.
///
/// An unknown kind resolves to `unknown` and records a warning.
pub fn resolve(field: &FieldDefinition, collection_name: &str, warnings: &mut Warnings) -> TsType {
    let multiple = field.kind.cardinality().is_multiple();

    match &field.kind {
        FieldKind::Text | FieldKind::Email | FieldKind::Url | FieldKind::Password => TsType::String,
        FieldKind::Number => TsType::Number,
        FieldKind::Bool => TsType::Boolean,
        FieldKind::Date => TsType::named(DATE_STRING_TYPE_NAME),
        FieldKind::Autodate { .. } => TsType::named(AUTODATE_STRING_TYPE_NAME),
        FieldKind::Editor => TsType::named(HTML_STRING_NAME),
        FieldKind::GeoPoint => TsType::named(GEO_POINT_TYPE_NAME),
        FieldKind::Select { .. } => {
            let base = if has_options(field) {
                TsType::named(option_enum_name(collection_name, &field.name))
            } else {
                TsType::String
            };
            base.many_if(multiple)
        }
        FieldKind::Json => TsType::nullable(TsType::named(field_generic_name(&field.name))),
        FieldKind::File { .. } => TsType::String.many_if(multiple),
        FieldKind::Relation { .. } => TsType::named(RECORD_ID_STRING_NAME).many_if(multiple),
        FieldKind::Unknown(_) => {
            warnings.push(Warning::UnknownFieldKind {
                collection: collection_name.to_string(),
                field: field.name.clone(),
                kind: field.kind.name().to_string(),
            });
            TsType::Unknown
        }
    }
}

/// The record property for a field. Fields that are not required are optional.
pub fn field_property(field: &FieldDefinition, collection_name: &str, warnings: &mut Warnings) -> Property {
    Property {
        name: field.name.clone(),
        typ: resolve(field, collection_name, warnings),
        optional: !field.required,
    }
}
