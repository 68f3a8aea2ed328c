//! TypeScript type expressions and naming helpers.

/// A TypeScript type expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TsType {
    String,
    Number,
    Boolean,
    /// Placeholder for a field kind this generator does not know.
    Unknown,
    /// A reference to a named declaration (alias, enum, generic parameter, response).
    Named(String),
    Array(Box<TsType>),
    /// `null | T`.
    Nullable(Box<TsType>),
}

impl TsType {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn array(inner: TsType) -> Self {
        Self::Array(Box::new(inner))
    }

    pub fn nullable(inner: TsType) -> Self {
        Self::Nullable(Box::new(inner))
    }

    /// Wraps in an array when `multiple` is set.
    pub fn many_if(self, multiple: bool) -> Self {
        if multiple {
            Self::array(self)
        } else {
            self
        }
    }
}

/// Converts a TsType to TypeScript source.
pub fn to_ts_type(typ: &TsType) -> String {
    match typ {
        TsType::String => "string".to_string(),
        TsType::Number => "number".to_string(),
        TsType::Boolean => "boolean".to_string(),
        TsType::Unknown => "unknown".to_string(),
        TsType::Named(name) => name.clone(),
        TsType::Array(inner) => match inner.as_ref() {
            TsType::Nullable(_) => format!("({})[]", to_ts_type(inner)),
            _ => format!("{}[]", to_ts_type(inner)),
        },
        TsType::Nullable(inner) => format!("null | {}", to_ts_type(inner)),
    }
}

/// One property of an object type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub typ: TsType,
    pub optional: bool,
}

/// Generates a multi-line TypeScript object type, one tab-indented property per line.
///
/// No properties yields `{}` so the type stays neutral inside an intersection.
pub fn generate_object_type(properties: &[Property]) -> String {
    if properties.is_empty() {
        return "{}".to_string();
    }

    let fields: Vec<String> = properties.iter().map(format_property).collect();
    format!("{{\n{}\n}}", fields.join("\n"))
}

/// Formats a single property line.
fn format_property(property: &Property) -> String {
    let optional_marker = if property.optional { "?" } else { "" };
    format!(
        "\t{}{}: {}",
        property_key(&property.name),
        optional_marker,
        to_ts_type(&property.typ)
    )
}

/// Name of a collection's record declaration (`books` -> `BooksRecord`).
pub fn record_type_name(collection_name: &str) -> String {
    format!("{}Record", to_pascal_case(collection_name))
}

/// Name of a collection's response declaration (`books` -> `BooksResponse`).
pub fn response_type_name(collection_name: &str) -> String {
    format!("{}Response", to_pascal_case(collection_name))
}

/// Name of a collection's expansion declaration (`books` -> `BooksExpand`).
pub fn expand_type_name(collection_name: &str) -> String {
    format!("{}Expand", to_pascal_case(collection_name))
}

/// Converts a name to PascalCase.
///
/// A name made only of letters and digits keeps its inner casing
/// (`fooBar` -> `FooBar`). Anything else is split on non-alphanumeric
/// characters and each word is capitalized (`__FOO_BAR__` -> `FooBar`).
pub fn to_pascal_case(s: &str) -> String {
    if !s.is_empty() && s.chars().all(char::is_alphanumeric) {
        return capitalize(s.chars(), false);
    }

    s.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| capitalize(word.chars(), true))
        .collect()
}

fn capitalize(mut chars: std::str::Chars<'_>, lower_rest: bool) -> String {
    match chars.next() {
        None => String::new(),
        Some(first) if lower_rest => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Whether `name` can be used as a bare TypeScript identifier.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

/// A property key, quoted when it is not a bare identifier (`4number` -> `"4number"`).
pub fn property_key(name: &str) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        string_literal(name)
    }
}

/// A double-quoted TypeScript string literal.
pub fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
