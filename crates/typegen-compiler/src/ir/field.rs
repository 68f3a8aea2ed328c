//! Field intermediate representation.

/// How many values a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    Single,
    Multiple,
}

impl Cardinality {
    /// `maxSelect` absent, `0` or `1` is single; anything above is multiple.
    pub fn from_max_select(max_select: Option<u64>) -> Self {
        match max_select {
            Some(n) if n > 1 => Self::Multiple,
            _ => Self::Single,
        }
    }

    pub fn is_multiple(self) -> bool {
        self == Self::Multiple
    }
}

/// The kind of a field, carrying only the options that shape its type.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Text,
    Number,
    Bool,
    Email,
    Url,
    Password,
    Editor,
    Date,
    GeoPoint,
    Autodate {
        on_create: bool,
        on_update: bool,
    },
    Select {
        /// Allowed literals in declaration order, duplicates included.
        values: Option<Vec<String>>,
        max_select: Option<u64>,
    },
    Json,
    File {
        max_select: Option<u64>,
    },
    Relation {
        /// Identifier of the referenced collection. May not resolve.
        collection_id: String,
        max_select: Option<u64>,
    },
    /// A kind newer than this generator. Carries the raw kind name.
    Unknown(String),
}

impl FieldKind {
    /// Maps a backend kind name to a kind without options.
    ///
    /// Kinds that need options (select, file, relation, autodate) are built
    /// by the frontend, so they come back as `None` here.
    pub fn simple(name: &str) -> Option<Self> {
        let kind = match name {
            "text" => Self::Text,
            "number" => Self::Number,
            "bool" => Self::Bool,
            "email" => Self::Email,
            "url" => Self::Url,
            "password" => Self::Password,
            "editor" => Self::Editor,
            "date" => Self::Date,
            "geoPoint" | "geo-point" | "geo_point" => Self::GeoPoint,
            "json" => Self::Json,
            _ => return None,
        };
        Some(kind)
    }

    /// The backend's name for this kind.
    pub fn name(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Bool => "bool",
            Self::Email => "email",
            Self::Url => "url",
            Self::Password => "password",
            Self::Editor => "editor",
            Self::Date => "date",
            Self::GeoPoint => "geoPoint",
            Self::Autodate { .. } => "autodate",
            Self::Select { .. } => "select",
            Self::Json => "json",
            Self::File { .. } => "file",
            Self::Relation { .. } => "relation",
            Self::Unknown(name) => name,
        }
    }

    /// The `maxSelect` option, for kinds that have one.
    pub fn max_select(&self) -> Option<u64> {
        match self {
            Self::Select { max_select, .. }
            | Self::File { max_select }
            | Self::Relation { max_select, .. } => *max_select,
            _ => None,
        }
    }

    pub fn cardinality(&self) -> Cardinality {
        Cardinality::from_max_select(self.max_select())
    }
}

/// Informational limits. They never change the generated type shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldConstraints {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub pattern: Option<String>,
    pub max_size: Option<u64>,
    pub mime_types: Vec<String>,
    pub unique: Option<bool>,
}

/// One field of a collection.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDefinition {
    pub id: String,

    /// Unique within its collection. May start with a digit.
    pub name: String,

    pub kind: FieldKind,

    /// A field that is not required is optional in the record declaration.
    pub required: bool,

    pub constraints: FieldConstraints,
}

impl FieldDefinition {
    /// Creates an optional field without constraints.
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            required: false,
            constraints: FieldConstraints::default(),
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_constraints(mut self, constraints: FieldConstraints) -> Self {
        self.constraints = constraints;
        self
    }
}
