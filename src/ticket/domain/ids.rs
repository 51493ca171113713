//! Identifier types for the ticket domain.

use super::TicketDomainError;
use crate::store::domain::DocumentId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a ticket document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(String);

impl TicketId {
    /// Creates a ticket identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TicketDomainError::EmptyTicketId`] when the value is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, TicketDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TicketDomainError::EmptyTicketId);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&TicketId> for DocumentId {
    fn from(id: &TicketId) -> Self {
        Self::from_validated(id.as_str())
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Human-facing ticket code such as `TK-1001`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Folio(String);

impl Folio {
    /// Creates a folio.
    ///
    /// # Errors
    ///
    /// Returns [`TicketDomainError::EmptyFolio`] when the value is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, TicketDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TicketDomainError::EmptyFolio);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the folio as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Folio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
