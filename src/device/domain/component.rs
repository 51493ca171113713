//! Catalog parts.

use super::{ComponentId, TypeId};
use serde::{Deserialize, Serialize};

/// Which slot map of a deployed device an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// Internal part such as CPU or RAM.
    Component,
    /// External accessory such as monitor or keyboard.
    Peripheral,
}

impl ItemKind {
    /// Returns the storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Component => "component",
            Self::Peripheral => "peripheral",
        }
    }
}

/// Replacement part listed in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    /// Document identifier.
    pub id: ComponentId,
    /// Display name written into device slots.
    pub name: String,
    /// Part category.
    pub type_id: TypeId,
    /// Manufacturer.
    #[serde(default)]
    pub brand: String,
    /// Manufacturer model.
    #[serde(default)]
    pub model: String,
}
