//! Enumeration declarations for select fields with a fixed value set.

use crate::ir::{FieldDefinition, FieldKind};

use super::ts_types::{string_literal, to_pascal_case};

/// A TypeScript string enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDeclaration {
    pub name: String,
    pub members: Vec<EnumMember>,
}

/// One enum member. `value` is always the original literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumMember {
    pub name: String,
    pub value: String,
}

/// Enum name for a select field, scoped by its collection
/// (`orders`, `type_underscore` -> `OrdersTypeUnderscoreOptions`).
pub fn option_enum_name(collection_name: &str, field_name: &str) -> String {
    format!("{}{}Options", to_pascal_case(collection_name), to_pascal_case(field_name))
}

/// Declared values of a select field, deduplicated in first-seen order.
///
/// Empty for fields that are not selects or declare no values.
pub fn option_values(field: &FieldDefinition) -> Vec<String> {
    let FieldKind::Select { values: Some(values), .. } = &field.kind else {
        return Vec::new();
    };

    let mut seen = std::collections::HashSet::new();
    values
        .iter()
        .filter(|v| seen.insert(v.as_str()))
        .cloned()
        .collect()
}

/// Whether a field resolves to an enum rather than a plain string.
pub fn has_options(field: &FieldDefinition) -> bool {
    matches!(&field.kind, FieldKind::Select { values: Some(values), .. } if !values.is_empty())
}

/// Member name for a value. Numeric values get an `E` prefix.
pub fn member_name(value: &str) -> String {
    if is_numeric(value) {
        format!("E{}", value)
    } else {
        value.to_string()
    }
}

fn is_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed.parse::<f64>().map(|n| !n.is_nan()).unwrap_or(false)
}

/// Builds one enum per select field with values, in field name order.
pub fn build_enumerations(collection_name: &str, fields: &[FieldDefinition]) -> Vec<EnumDeclaration> {
    let mut selects: Vec<&FieldDefinition> = fields.iter().filter(|f| has_options(f)).collect();
    selects.sort_by(|a, b| a.name.cmp(&b.name));

    selects
        .into_iter()
        .map(|field| EnumDeclaration {
            name: option_enum_name(collection_name, &field.name),
            members: option_values(field)
                .into_iter()
                .map(|value| EnumMember {
                    name: member_name(&value),
                    value,
                })
                .collect(),
        })
        .collect()
}

/// Generates TypeScript code for an enum declaration.
pub fn generate_enum(declaration: &EnumDeclaration) -> String {
    let mut output = format!("export enum {} {{\n", declaration.name);
    for member in &declaration.members {
        output.push_str(&format!(
            "\t{} = {},\n",
            string_literal(&member.name),
            string_literal(&member.value)
        ));
    }
    output.push('}');
    output
}
