//! Document identifiers and field maps.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use uuid::Uuid;

/// Field map of a stored document.
pub type Fields = Map<String, Value>;

/// Identifier of a document within its collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    /// Creates a document identifier, returning `None` when the value is
    /// blank.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_owned()))
    }

    /// Generates a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// Wraps an identifier that was already validated by a domain newtype.
    pub(crate) fn from_validated(value: &str) -> Self {
        Self(value.to_owned())
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DocumentId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A document read from the store: its identifier and its fields.
///
/// The identifier is not part of the field map; codecs inject it as an
/// `id` field when decoding into domain records.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    id: DocumentId,
    fields: Fields,
}

impl Document {
    /// Creates a document from its parts.
    #[must_use]
    pub const fn new(id: DocumentId, fields: Fields) -> Self {
        Self { id, fields }
    }

    /// Returns the document identifier.
    #[must_use]
    pub const fn id(&self) -> &DocumentId {
        &self.id
    }

    /// Returns the document fields.
    #[must_use]
    pub const fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Resolves a dotted field path such as `employee.email`.
    #[must_use]
    pub fn field(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let first = segments.next()?;
        segments.try_fold(self.fields.get(first)?, |value, segment| {
            value.as_object().and_then(|object| object.get(segment))
        })
    }

    /// Splits the document into identifier and fields.
    #[must_use]
    pub fn into_parts(self) -> (DocumentId, Fields) {
        (self.id, self.fields)
    }
}
