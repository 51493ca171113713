//! Business-rule violations in a resolution plan.

use super::SerialSlot;
use crate::device::domain::ItemKind;
use std::fmt;
use thiserror::Error;

/// Field of a component-change row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowField {
    /// The installed item being replaced.
    CurrentItem,
    /// The catalog part fitted instead.
    Replacement,
    /// Serial number of the fitted part.
    SerialNumber,
}

impl RowField {
    /// Returns a human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CurrentItem => "current item",
            Self::Replacement => "replacement component",
            Self::SerialNumber => "serial number",
        }
    }
}

impl fmt::Display for RowField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A resolution plan breaks a business rule.
///
/// Most variants are detected from the plan alone. `ReplacementTypeMismatch`,
/// `UnknownInstalledItem` and `MissingEmployeeEmail` need the stored ticket
/// and device, but are still raised before anything is written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// A full replacement names no catalog device.
    #[error("no replacement device selected")]
    MissingReplacementDevice,

    /// A full replacement leaves a serial number blank.
    #[error("serial number for {0} is required")]
    MissingSerial(SerialSlot),

    /// The same serial number appears twice in one plan.
    #[error("serial number {0} is used more than once")]
    DuplicateSerial(String),

    /// A component change has no non-empty rows.
    #[error("no component changes selected")]
    NoComponentChanges,

    /// A component-change row is partly filled in.
    #[error("row {} is missing its {missing}", .index + 1)]
    IncompleteRow {
        /// Zero-based position of the row as submitted.
        index: usize,
        /// First missing field.
        missing: RowField,
    },

    /// The same installed item is replaced by two rows.
    #[error("{} {name} is selected more than once", .kind.as_str())]
    DuplicateSelection {
        /// Installed item name.
        name: String,
        /// Slot map the item lives in.
        kind: ItemKind,
    },

    /// The catalog device is of a different type from the deployed one.
    #[error("replacement device type {found} does not match {expected}")]
    ReplacementTypeMismatch {
        /// Type of the deployed device.
        expected: String,
        /// Type of the selected catalog device.
        found: String,
    },

    /// A row names an item the device does not have.
    #[error("device has no {} named {name}", .kind.as_str())]
    UnknownInstalledItem {
        /// Installed item name.
        name: String,
        /// Slot map searched.
        kind: ItemKind,
    },

    /// The ticket records no usable employee email to ask for feedback.
    #[error("ticket has no employee email")]
    MissingEmployeeEmail,
}
