//! Logical collection names.

use std::fmt;

/// A named collection in the document store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Collection {
    /// Support tickets raised by employees.
    Ticket,
    /// Catalog of replacement devices.
    Equipment,
    /// Devices currently deployed to employees.
    EquipmentActive,
    /// Catalog of replacement parts.
    Component,
    /// Post-resolution rating requests.
    Feedback,
    /// Directory of known users.
    User,
}

impl Collection {
    /// Returns the collection name used by the remote database.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ticket => "Ticket",
            Self::Equipment => "Equipment",
            Self::EquipmentActive => "EquipmentActive",
            Self::Component => "Component",
            Self::Feedback => "Feedback",
            Self::User => "User",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
