//! Repository port for deployed devices, catalog devices, and parts.

use crate::device::domain::{
    Component, ComponentId, DevicePatch, Equipment, EquipmentActive, EquipmentId, TypeId,
};
use crate::error::ErrorKind;
use crate::store::ports::DocumentStoreError;
use async_trait::async_trait;
use thiserror::Error;

/// Result type for device repository operations.
pub type DeviceRepositoryResult<T> = Result<T, DeviceRepositoryError>;

/// Filter for catalog device listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceFilter {
    equipment_type: Option<String>,
}

impl DeviceFilter {
    /// Matches every catalog device.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Matches catalog devices of exactly `equipment_type`.
    #[must_use]
    pub fn by_type(equipment_type: impl Into<String>) -> Self {
        Self {
            equipment_type: Some(equipment_type.into()),
        }
    }

    /// Returns the required device type, if any.
    #[must_use]
    pub fn equipment_type(&self) -> Option<&str> {
        self.equipment_type.as_deref()
    }
}

/// Device and catalog persistence contract.
#[async_trait]
pub trait DeviceRepository: Send + Sync {
    /// Loads the deployed device a ticket refers to.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceRepositoryError::DeviceNotFound`] when the device
    /// does not exist.
    async fn get_device_by_ticket(
        &self,
        equipment_id: &EquipmentId,
    ) -> DeviceRepositoryResult<EquipmentActive>;

    /// Loads a catalog device.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceRepositoryError::EquipmentNotFound`] when the catalog
    /// entry does not exist.
    async fn get_equipment(&self, id: &EquipmentId) -> DeviceRepositoryResult<Equipment>;

    /// Lists catalog devices matching `filter`.
    async fn get_all_devices(&self, filter: &DeviceFilter) -> DeviceRepositoryResult<Vec<Equipment>>;

    /// Loads a catalog part.
    ///
    /// Returns `None` when the part does not exist.
    async fn get_component(&self, id: &ComponentId) -> DeviceRepositoryResult<Option<Component>>;

    /// Lists catalog parts of a type.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceRepositoryError::InvalidArgument`] when `type_id` is
    /// blank.
    async fn get_components_by_type_id(
        &self,
        type_id: &str,
    ) -> DeviceRepositoryResult<Vec<Component>>;

    /// Returns the type of the catalog part named `name`.
    ///
    /// Returns `None` when no part has that name.
    async fn get_type_id_by_component_name(
        &self,
        name: &str,
    ) -> DeviceRepositoryResult<Option<TypeId>>;

    /// Writes the set fields of `patch` to a deployed device.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceRepositoryError::DeviceNotFound`] when the device
    /// does not exist.
    async fn update_active_device(
        &self,
        id: &EquipmentId,
        patch: &DevicePatch,
    ) -> DeviceRepositoryResult<()>;
}

/// Errors returned by device repository implementations.
#[derive(Debug, Clone, Error)]
pub enum DeviceRepositoryError {
    /// The deployed device was not found.
    #[error("deployed device not found: {0}")]
    DeviceNotFound(EquipmentId),

    /// The catalog device was not found.
    #[error("catalog device not found: {0}")]
    EquipmentNotFound(EquipmentId),

    /// The catalog part was not found.
    #[error("catalog component not found: {0}")]
    ComponentNotFound(ComponentId),

    /// A call parameter was malformed.
    #[error("invalid device argument: {0}")]
    InvalidArgument(String),

    /// The document store failed.
    #[error(transparent)]
    Store(#[from] DocumentStoreError),
}

impl DeviceRepositoryError {
    /// Returns the failure category.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::DeviceNotFound(_) | Self::EquipmentNotFound(_) | Self::ComponentNotFound(_) => {
                ErrorKind::NotFound
            }
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::Store(_) => ErrorKind::Store,
        }
    }
}
