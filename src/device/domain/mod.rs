//! Domain model for devices and parts.

mod component;
mod equipment;
mod error;
mod ids;

pub use component::{Component, ItemKind};
pub use equipment::{
    DevicePatch, DeviceStatus, Equipment, EquipmentActive, InstalledItem, Maintenance, SlotMap,
};
pub use error::DeviceDomainError;
pub use ids::{ComponentId, EquipmentId, TypeId};
