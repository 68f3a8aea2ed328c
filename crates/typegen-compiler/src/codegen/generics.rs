//! Generic type parameters of record and response declarations.
//!
//! Parameters are an explicit ordered list of `(name, default)` pairs. Json
//! fields contribute one parameter each, sorted by name so the declaration
//! does not depend on field order in the schema.

use crate::ir::{FieldDefinition, FieldKind};

use super::constants::EXPAND_GENERIC_NAME;

/// A generic parameter with its default type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericParam {
    pub name: String,
    pub default: String,
}

impl GenericParam {
    pub fn new(name: impl Into<String>, default: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: default.into(),
        }
    }
}

/// Generic parameter name for a field (`data` -> `Tdata`).
pub fn field_generic_name(field_name: &str) -> String {
    format!("T{}", field_name)
}

/// One `unknown`-defaulted parameter per json field, sorted by name.
pub fn json_generic_params(fields: &[FieldDefinition]) -> Vec<GenericParam> {
    let mut names: Vec<String> = fields
        .iter()
        .filter(|f| matches!(f.kind, FieldKind::Json))
        .map(|f| field_generic_name(&f.name))
        .collect();
    names.sort();
    names.dedup();

    names
        .into_iter()
        .map(|name| GenericParam::new(name, "unknown"))
        .collect()
}

/// Name for the expansion parameter that does not clash with `taken`.
pub fn expand_generic_name(taken: &[GenericParam]) -> String {
    let mut name = field_generic_name(EXPAND_GENERIC_NAME);
    while taken.iter().any(|p| p.name == name) {
        name.push('_');
    }
    name
}

/// `<A = unknown, B = X>`, or nothing when there are no parameters.
pub fn generic_params_with_defaults(params: &[GenericParam]) -> String {
    if params.is_empty() {
        return String::new();
    }
    let list: Vec<String> = params
        .iter()
        .map(|p| format!("{} = {}", p.name, p.default))
        .collect();
    format!("<{}>", list.join(", "))
}

/// `<A, B>`, or nothing when there are no parameters.
pub fn generic_args(params: &[GenericParam]) -> String {
    if params.is_empty() {
        return String::new();
    }
    let list: Vec<&str> = params.iter().map(|p| p.name.as_str()).collect();
    format!("<{}>", list.join(", "))
}
