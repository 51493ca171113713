//! Identifier type for feedback documents.

use super::FeedbackDomainError;
use crate::store::domain::DocumentId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a feedback document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeedbackId(String);

impl FeedbackId {
    /// Creates a feedback identifier.
    ///
    /// # Errors
    ///
    /// Returns [`FeedbackDomainError::EmptyFeedbackId`] when the value is
    /// blank.
    pub fn new(value: impl Into<String>) -> Result<Self, FeedbackDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(FeedbackDomainError::EmptyFeedbackId);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&DocumentId> for FeedbackId {
    fn from(id: &DocumentId) -> Self {
        Self(id.as_str().to_owned())
    }
}

impl From<&FeedbackId> for DocumentId {
    fn from(id: &FeedbackId) -> Self {
        Self::from_validated(id.as_str())
    }
}

impl fmt::Display for FeedbackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
