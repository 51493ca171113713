//! Error types for device value validation.

use thiserror::Error;

/// Errors returned while constructing device values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DeviceDomainError {
    /// The equipment identifier is blank.
    #[error("equipment id must not be empty")]
    EmptyEquipmentId,

    /// The component identifier is blank.
    #[error("component id must not be empty")]
    EmptyComponentId,

    /// The component type identifier is blank.
    #[error("component type id must not be empty")]
    EmptyTypeId,
}
