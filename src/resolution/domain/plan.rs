//! Resolution plans as submitted by the technician, and their validated form.

use super::{PlanError, RowField};
use crate::device::domain::{ComponentId, EquipmentId, ItemKind};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// Strategy chosen to resolve a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionChoice {
    /// Replace the whole device.
    Full,
    /// Swap individual parts.
    Component,
    /// Record the visit without changing hardware.
    None,
}

impl ResolutionChoice {
    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Component => "component",
            Self::None => "none",
        }
    }
}

impl fmt::Display for ResolutionChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown resolution choice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown resolution choice: {0}")]
pub struct ParseResolutionChoiceError(pub String);

impl TryFrom<&str> for ResolutionChoice {
    type Error = ParseResolutionChoiceError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "full" => Ok(Self::Full),
            "component" => Ok(Self::Component),
            "none" => Ok(Self::None),
            _ => Err(ParseResolutionChoiceError(value.to_owned())),
        }
    }
}

/// Serial number captured during a full replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SerialSlot {
    /// Chassis serial.
    Device,
    /// Processor.
    Cpu,
    /// Motherboard.
    Mobo,
    /// Memory.
    Ram,
    /// Storage drive.
    Storage,
    /// Power supply.
    Psu,
}

impl SerialSlot {
    /// Every slot in capture order.
    pub const ALL: [Self; 6] = [
        Self::Device,
        Self::Cpu,
        Self::Mobo,
        Self::Ram,
        Self::Storage,
        Self::Psu,
    ];

    /// Returns the component slot key this serial belongs to.
    ///
    /// The chassis serial lives on the device record, not in a slot.
    #[must_use]
    pub const fn component_key(self) -> Option<&'static str> {
        match self {
            Self::Device => None,
            Self::Cpu => Some("cpu"),
            Self::Mobo => Some("mobo"),
            Self::Ram => Some("ram"),
            Self::Storage => Some("sto"),
            Self::Psu => Some("psu"),
        }
    }

    /// Returns a human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Device => "device",
            Self::Cpu => "cpu",
            Self::Mobo => "motherboard",
            Self::Ram => "ram",
            Self::Storage => "storage",
            Self::Psu => "power supply",
        }
    }
}

impl fmt::Display for SerialSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The six serial numbers recorded for a replacement device.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceSerials {
    /// Chassis serial.
    pub device: String,
    /// Processor serial.
    pub cpu: String,
    /// Motherboard serial.
    pub mobo: String,
    /// Memory serial.
    pub ram: String,
    /// Storage drive serial.
    pub storage: String,
    /// Power supply serial.
    pub psu: String,
}

impl DeviceSerials {
    /// Returns the serial captured for `slot`.
    #[must_use]
    pub fn get(&self, slot: SerialSlot) -> &str {
        match slot {
            SerialSlot::Device => &self.device,
            SerialSlot::Cpu => &self.cpu,
            SerialSlot::Mobo => &self.mobo,
            SerialSlot::Ram => &self.ram,
            SerialSlot::Storage => &self.storage,
            SerialSlot::Psu => &self.psu,
        }
    }

    /// Returns a copy with every serial trimmed.
    #[must_use]
    fn trimmed(&self) -> Self {
        Self {
            device: self.device.trim().to_owned(),
            cpu: self.cpu.trim().to_owned(),
            mobo: self.mobo.trim().to_owned(),
            ram: self.ram.trim().to_owned(),
            storage: self.storage.trim().to_owned(),
            psu: self.psu.trim().to_owned(),
        }
    }
}

/// Replace the deployed device with a catalog device.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FullReplacement {
    /// Catalog device fitted instead.
    pub replacement: Option<EquipmentId>,
    /// Serials of the fitted device.
    pub serials: DeviceSerials,
    /// Technician notes.
    pub notes: String,
}

/// Installed item selected for replacement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstalledItemRef {
    /// Item name as recorded on the device.
    pub name: String,
    /// Which slot map the item is recorded in.
    pub kind: ItemKind,
}

impl InstalledItemRef {
    /// Creates a reference to an installed item.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// One line of a component change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentChangeRow {
    /// Item being replaced.
    pub current: Option<InstalledItemRef>,
    /// Catalog part fitted instead.
    pub replacement: Option<ComponentId>,
    /// Serial of the fitted part.
    pub serial_number: String,
}

impl ComponentChangeRow {
    /// Creates a fully populated row.
    #[must_use]
    pub fn new(
        current: InstalledItemRef,
        replacement: ComponentId,
        serial_number: impl Into<String>,
    ) -> Self {
        Self {
            current: Some(current),
            replacement: Some(replacement),
            serial_number: serial_number.into(),
        }
    }

    fn current_name(&self) -> Option<&str> {
        self.current
            .as_ref()
            .map(|item| item.name.trim())
            .filter(|name| !name.is_empty())
    }

    fn is_blank(&self) -> bool {
        self.current_name().is_none()
            && self.replacement.is_none()
            && self.serial_number.trim().is_empty()
    }

    fn missing_field(&self) -> Option<RowField> {
        if self.current_name().is_none() {
            Some(RowField::CurrentItem)
        } else if self.replacement.is_none() {
            Some(RowField::Replacement)
        } else if self.serial_number.trim().is_empty() {
            Some(RowField::SerialNumber)
        } else {
            None
        }
    }
}

/// Swap individual parts of the deployed device.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentChange {
    /// Rows as submitted, blanks included.
    pub rows: Vec<ComponentChangeRow>,
    /// Technician notes.
    pub notes: String,
}

/// Record the visit without changing hardware.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoChange {
    /// Technician notes.
    pub notes: String,
}

/// Plan chosen by the technician.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionPlan {
    /// Replace the whole device.
    Full(FullReplacement),
    /// Swap individual parts.
    Component(ComponentChange),
    /// Change nothing.
    NoChange(NoChange),
}

impl ResolutionPlan {
    /// Returns the strategy this plan uses.
    #[must_use]
    pub const fn choice(&self) -> ResolutionChoice {
        match self {
            Self::Full(_) => ResolutionChoice::Full,
            Self::Component(_) => ResolutionChoice::Component,
            Self::NoChange(_) => ResolutionChoice::None,
        }
    }

    /// Checks every rule that needs only the plan itself.
    ///
    /// Blank component rows are dropped first. Serial duplicates are
    /// reported before repeated item selections.
    ///
    /// # Errors
    ///
    /// Returns the first [`PlanError`] found.
    pub fn validate(&self) -> Result<ValidatedPlan, PlanError> {
        match self {
            Self::Full(full) => validate_full(full).map(ValidatedPlan::Full),
            Self::Component(change) => validate_rows(&change.rows).map(|rows| {
                ValidatedPlan::Component {
                    rows,
                    notes: change.notes.trim().to_owned(),
                }
            }),
            Self::NoChange(no_change) => Ok(ValidatedPlan::NoChange {
                notes: no_change.notes.trim().to_owned(),
            }),
        }
    }
}

fn validate_full(full: &FullReplacement) -> Result<ValidatedFull, PlanError> {
    let replacement = full
        .replacement
        .clone()
        .ok_or(PlanError::MissingReplacementDevice)?;
    let serials = full.serials.trimmed();
    if let Some(slot) = SerialSlot::ALL
        .into_iter()
        .find(|slot| serials.get(*slot).is_empty())
    {
        return Err(PlanError::MissingSerial(slot));
    }
    if let Some(serial) = first_duplicate(SerialSlot::ALL.into_iter().map(|slot| serials.get(slot)))
    {
        return Err(PlanError::DuplicateSerial(serial.to_owned()));
    }
    Ok(ValidatedFull {
        replacement,
        serials,
        notes: full.notes.trim().to_owned(),
    })
}

fn validate_rows(rows: &[ComponentChangeRow]) -> Result<Vec<ValidatedRow>, PlanError> {
    let mut validated = Vec::new();
    for (index, row) in rows.iter().enumerate() {
        if row.is_blank() {
            continue;
        }
        if let Some(missing) = row.missing_field() {
            return Err(PlanError::IncompleteRow { index, missing });
        }
        let (Some(current), Some(replacement)) = (row.current.as_ref(), row.replacement.as_ref())
        else {
            return Err(PlanError::IncompleteRow {
                index,
                missing: RowField::CurrentItem,
            });
        };
        validated.push(ValidatedRow {
            current: InstalledItemRef::new(current.name.trim(), current.kind),
            replacement: replacement.clone(),
            serial_number: row.serial_number.trim().to_owned(),
        });
    }
    if validated.is_empty() {
        return Err(PlanError::NoComponentChanges);
    }

    if let Some(serial) = first_duplicate(validated.iter().map(|row| row.serial_number.as_str())) {
        return Err(PlanError::DuplicateSerial(serial.to_owned()));
    }
    let mut selected = HashSet::new();
    for row in &validated {
        if !selected.insert(&row.current) {
            return Err(PlanError::DuplicateSelection {
                name: row.current.name.clone(),
                kind: row.current.kind,
            });
        }
    }
    Ok(validated)
}

fn first_duplicate<'a>(values: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    let mut seen = HashSet::new();
    values.into_iter().find(|value| !seen.insert(*value))
}

/// Full replacement that passed plan validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedFull {
    replacement: EquipmentId,
    serials: DeviceSerials,
    notes: String,
}

impl ValidatedFull {
    /// Returns the catalog device fitted instead.
    #[must_use]
    pub const fn replacement(&self) -> &EquipmentId {
        &self.replacement
    }

    /// Returns the trimmed, distinct serials.
    #[must_use]
    pub const fn serials(&self) -> &DeviceSerials {
        &self.serials
    }

    /// Returns the trimmed notes.
    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
    }
}

/// Component-change row that passed plan validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRow {
    current: InstalledItemRef,
    replacement: ComponentId,
    serial_number: String,
}

impl ValidatedRow {
    /// Returns the item being replaced, name trimmed.
    #[must_use]
    pub const fn current(&self) -> &InstalledItemRef {
        &self.current
    }

    /// Returns the catalog part fitted instead.
    #[must_use]
    pub const fn replacement(&self) -> &ComponentId {
        &self.replacement
    }

    /// Returns the trimmed serial of the fitted part.
    #[must_use]
    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }
}

/// Plan that passed every rule checkable without stored data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatedPlan {
    /// Replace the whole device.
    Full(ValidatedFull),
    /// Swap the listed parts.
    Component {
        /// Non-blank rows in submission order.
        rows: Vec<ValidatedRow>,
        /// Trimmed notes.
        notes: String,
    },
    /// Change nothing.
    NoChange {
        /// Trimmed notes.
        notes: String,
    },
}

impl ValidatedPlan {
    /// Returns the strategy this plan uses.
    #[must_use]
    pub const fn choice(&self) -> ResolutionChoice {
        match self {
            Self::Full(_) => ResolutionChoice::Full,
            Self::Component { .. } => ResolutionChoice::Component,
            Self::NoChange { .. } => ResolutionChoice::None,
        }
    }

    /// Returns the technician notes.
    #[must_use]
    pub fn notes(&self) -> &str {
        match self {
            Self::Full(full) => full.notes(),
            Self::Component { notes, .. } | Self::NoChange { notes } => notes,
        }
    }
}
