//! Non-fatal diagnostics collected during generation.

use std::fmt;

/// A problem that does not stop generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A field kind this generator does not know. The field was typed `unknown`.
    UnknownFieldKind {
        collection: String,
        field: String,
        kind: String,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownFieldKind { collection, field, kind } => write!(
                f,
                "unknown field type \"{}\" on {}.{}, typed as unknown",
                kind, collection, field
            ),
        }
    }
}

/// Collects warnings and logs each one as it arrives.
#[derive(Debug, Default)]
pub struct Warnings {
    items: Vec<Warning>,
}

impl Warnings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, warning: Warning) {
        tracing::warn!("{}", warning);
        self.items.push(warning);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_vec(self) -> Vec<Warning> {
        self.items
    }
}
