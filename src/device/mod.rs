//! Deployed devices, the replacement catalog, and parts.
//!
//! A deployed device (`EquipmentActive`) carries component and peripheral
//! slots. The catalog (`Equipment`) lists devices a technician may swap in,
//! and `Component` lists individual replacement parts grouped by type.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
