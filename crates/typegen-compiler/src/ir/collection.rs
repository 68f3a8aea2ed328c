//! Collection intermediate representation.

use super::FieldDefinition;

/// The flavour of a collection, which decides its system fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    Base,
    Auth,
    View,
}

impl CollectionKind {
    /// Parses the backend's collection type name.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "base" => Some(Self::Base),
            "auth" => Some(Self::Auth),
            "view" => Some(Self::View),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Auth => "auth",
            Self::View => "view",
        }
    }
}

/// One named schema entity with its ordered fields.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionDefinition {
    /// Opaque identifier, the target of relation fields.
    pub id: String,

    /// Name, unique across the schema.
    pub name: String,

    pub kind: CollectionKind,

    /// Fields in source order.
    pub fields: Vec<FieldDefinition>,
}

impl CollectionDefinition {
    /// Creates a collection without fields.
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: CollectionKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            fields: Vec::new(),
        }
    }

    /// Replaces the field list.
    pub fn with_fields(mut self, fields: Vec<FieldDefinition>) -> Self {
        self.fields = fields;
        self
    }

    /// Looks up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.name == name)
    }
}
