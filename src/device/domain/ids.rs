//! Identifier types for the device domain.

use super::DeviceDomainError;
use crate::store::domain::DocumentId;
use serde::{Deserialize, Serialize};
use std::fmt;

fn non_blank(value: String, err: DeviceDomainError) -> Result<String, DeviceDomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(err);
    }
    Ok(trimmed.to_owned())
}

/// Identifier of a deployed or catalog device document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EquipmentId(String);

impl EquipmentId {
    /// Creates an equipment identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceDomainError::EmptyEquipmentId`] when the value is
    /// blank.
    pub fn new(value: impl Into<String>) -> Result<Self, DeviceDomainError> {
        non_blank(value.into(), DeviceDomainError::EmptyEquipmentId).map(Self)
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&EquipmentId> for DocumentId {
    fn from(id: &EquipmentId) -> Self {
        Self::from_validated(id.as_str())
    }
}

impl fmt::Display for EquipmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a catalog part document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentId(String);

impl ComponentId {
    /// Creates a component identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceDomainError::EmptyComponentId`] when the value is
    /// blank.
    pub fn new(value: impl Into<String>) -> Result<Self, DeviceDomainError> {
        non_blank(value.into(), DeviceDomainError::EmptyComponentId).map(Self)
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&ComponentId> for DocumentId {
    fn from(id: &ComponentId) -> Self {
        Self::from_validated(id.as_str())
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Part category, such as `ram` or `ssd`, shared by interchangeable parts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeId(String);

impl TypeId {
    /// Creates a type identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceDomainError::EmptyTypeId`] when the value is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, DeviceDomainError> {
        non_blank(value.into(), DeviceDomainError::EmptyTypeId).map(Self)
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
