//! Deployed devices and catalog devices.

use super::{EquipmentId, ItemKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Part or accessory installed in a device slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InstalledItem {
    /// Display name of the installed item.
    pub name: String,
    /// Manufacturer serial number.
    pub serial_number: String,
    /// When the item was fitted, if recorded.
    pub installation_date: Option<DateTime<Utc>>,
}

/// Slot key to installed item. Keys are stable identifiers such as `cpu`.
pub type SlotMap = BTreeMap<String, InstalledItem>;

/// Latest service performed on a device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Maintenance {
    /// When the service happened.
    pub date: DateTime<Utc>,
    /// Technician notes.
    #[serde(default)]
    pub notes: String,
    /// Problem category of the ticket that triggered the service.
    #[serde(default)]
    pub problem_type: String,
}

/// Operational status of a deployed device.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceStatus {
    /// In service.
    #[default]
    Active,
    /// Out for repair.
    Maintenance,
    /// Retired from service.
    Inactive,
}

/// Device deployed to an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentActive {
    /// Document identifier.
    pub id: EquipmentId,
    /// Device category, such as `Desktop` or `Laptop`.
    #[serde(rename = "type", default)]
    pub equipment_type: String,
    /// Manufacturer.
    #[serde(default)]
    pub brand: String,
    /// Manufacturer model.
    #[serde(default)]
    pub model: String,
    /// Chassis serial number.
    #[serde(default)]
    pub serial_number: String,
    /// Operational status.
    #[serde(default)]
    pub status: DeviceStatus,
    /// Internal parts by slot.
    #[serde(default)]
    pub components: SlotMap,
    /// External accessories by slot.
    #[serde(default)]
    pub peripherals: SlotMap,
    /// Latest service record.
    #[serde(default)]
    pub last_maintenance: Option<Maintenance>,
    /// Last write to the record.
    #[serde(default)]
    pub date_modified: Option<DateTime<Utc>>,
}

impl EquipmentActive {
    /// Returns the slot map holding items of `kind`.
    #[must_use]
    pub const fn slots(&self, kind: ItemKind) -> &SlotMap {
        match kind {
            ItemKind::Component => &self.components,
            ItemKind::Peripheral => &self.peripherals,
        }
    }

    /// Finds the slot key of the item named `name` within the map for
    /// `kind`.
    #[must_use]
    pub fn find_slot(&self, kind: ItemKind, name: &str) -> Option<&str> {
        let wanted = name.trim();
        self.slots(kind)
            .iter()
            .find(|(_, item)| item.name.trim() == wanted)
            .map(|(slot, _)| slot.as_str())
    }
}

/// Catalog device that may replace a deployed one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    /// Document identifier.
    pub id: EquipmentId,
    /// Device category.
    #[serde(rename = "type", default)]
    pub equipment_type: String,
    /// Manufacturer.
    #[serde(default)]
    pub brand: String,
    /// Manufacturer model.
    #[serde(default)]
    pub model: String,
    /// Parts the catalog device ships with.
    #[serde(default)]
    pub components: SlotMap,
}

/// Partial write to a deployed device; unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DevicePatch {
    /// New device category.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub equipment_type: Option<String>,
    /// New manufacturer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// New model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// New chassis serial number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    /// New status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DeviceStatus>,
    /// Replacement component map.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<SlotMap>,
    /// Replacement peripheral map.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peripherals: Option<SlotMap>,
    /// New service record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_maintenance: Option<Maintenance>,
    /// New modification timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<DateTime<Utc>>,
}

impl DevicePatch {
    /// Applies the patch to an in-memory copy of a device.
    pub fn apply_to(&self, device: &mut EquipmentActive) {
        if let Some(equipment_type) = &self.equipment_type {
            device.equipment_type.clone_from(equipment_type);
        }
        if let Some(brand) = &self.brand {
            device.brand.clone_from(brand);
        }
        if let Some(model) = &self.model {
            device.model.clone_from(model);
        }
        if let Some(serial_number) = &self.serial_number {
            device.serial_number.clone_from(serial_number);
        }
        if let Some(status) = self.status {
            device.status = status;
        }
        if let Some(components) = &self.components {
            device.components.clone_from(components);
        }
        if let Some(peripherals) = &self.peripherals {
            device.peripherals.clone_from(peripherals);
        }
        if let Some(maintenance) = &self.last_maintenance {
            device.last_maintenance = Some(maintenance.clone());
        }
        if let Some(date_modified) = self.date_modified {
            device.date_modified = Some(date_modified);
        }
    }
}
