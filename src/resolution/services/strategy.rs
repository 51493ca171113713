//! Device patches produced by each resolution strategy.
//!
//! These functions are pure: every lookup has already happened and every
//! rule has already been checked, so building the patch cannot fail.

use chrono::{DateTime, Utc};

use super::AppliedChanges;
use crate::device::domain::{
    Component, DevicePatch, DeviceStatus, Equipment, EquipmentActive, InstalledItem, ItemKind,
    Maintenance, SlotMap,
};
use crate::resolution::domain::{DeviceSerials, SerialSlot};

/// A patch ready to write and the changes it represents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PreparedChange {
    pub(crate) patch: DevicePatch,
    pub(crate) changes: AppliedChanges,
}

/// Component-change row resolved against the device and the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SlotReplacement {
    pub(crate) kind: ItemKind,
    pub(crate) slot: String,
    pub(crate) component: Component,
    pub(crate) serial_number: String,
}

fn stamped(maintenance: Maintenance, now: DateTime<Utc>) -> DevicePatch {
    DevicePatch {
        last_maintenance: Some(maintenance),
        date_modified: Some(now),
        ..DevicePatch::default()
    }
}

/// Swaps the device for `replacement`, keeping its peripherals.
pub(crate) fn full_replacement(
    device: &EquipmentActive,
    replacement: &Equipment,
    serials: &DeviceSerials,
    maintenance: Maintenance,
    now: DateTime<Utc>,
) -> PreparedChange {
    let mut components: SlotMap = if replacement.components.is_empty() {
        device.components.clone()
    } else {
        replacement.components.clone()
    };
    let mut components_updated = 0;
    for slot in SerialSlot::ALL {
        let Some(key) = slot.component_key() else {
            continue;
        };
        if let Some(item) = components.get_mut(key) {
            item.serial_number = serials.get(slot).to_owned();
            item.installation_date = Some(now);
            components_updated += 1;
        }
    }

    PreparedChange {
        patch: DevicePatch {
            equipment_type: Some(replacement.equipment_type.clone()),
            brand: Some(replacement.brand.clone()),
            model: Some(replacement.model.clone()),
            serial_number: Some(serials.device.clone()),
            components: Some(components),
            ..stamped(maintenance, now)
        },
        changes: AppliedChanges {
            components_updated,
            peripherals_updated: 0,
            device_replaced: true,
        },
    }
}

/// Rewrites the listed slots; maps without a change are left out of the
/// patch.
pub(crate) fn component_change(
    device: &EquipmentActive,
    replacements: &[SlotReplacement],
    maintenance: Maintenance,
    now: DateTime<Utc>,
) -> PreparedChange {
    let mut components = device.components.clone();
    let mut peripherals = device.peripherals.clone();
    let mut changes = AppliedChanges::default();

    for replacement in replacements {
        let (slots, counter) = match replacement.kind {
            ItemKind::Component => (&mut components, &mut changes.components_updated),
            ItemKind::Peripheral => (&mut peripherals, &mut changes.peripherals_updated),
        };
        slots.insert(
            replacement.slot.clone(),
            InstalledItem {
                name: replacement.component.name.clone(),
                serial_number: replacement.serial_number.clone(),
                installation_date: Some(now),
            },
        );
        *counter += 1;
    }

    PreparedChange {
        patch: DevicePatch {
            components: (changes.components_updated > 0).then_some(components),
            peripherals: (changes.peripherals_updated > 0).then_some(peripherals),
            ..stamped(maintenance, now)
        },
        changes,
    }
}

/// Returns the device to service without touching hardware.
pub(crate) fn no_change(maintenance: Maintenance, now: DateTime<Utc>) -> PreparedChange {
    PreparedChange {
        patch: DevicePatch {
            status: Some(DeviceStatus::Active),
            ..stamped(maintenance, now)
        },
        changes: AppliedChanges::default(),
    }
}
