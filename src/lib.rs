//! Service desk: ticket resolution and equipment tracking core.
//!
//! Employees report problems with their deployed devices; technicians
//! resolve the tickets by replacing the device, swapping parts, or recording
//! that nothing needed changing; employees then rate the service. This crate
//! holds the rules and workflow for that cycle over an abstract document
//! store.
//!
//! # Architecture
//!
//! Each module follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory store,
//!   document-backed repositories)
//!
//! # Modules
//!
//! - [`store`]: Document store port, in-memory adapter, and record codec
//! - [`identity`]: Technician identity from the session or user directory
//! - [`ticket`]: Ticket lookup and single-shot closure
//! - [`device`]: Deployed devices, catalog devices, and parts
//! - [`feedback`]: Post-resolution rating requests
//! - [`resolution`]: The ticket resolution workflow
//! - [`config`]: Shared tunables
//! - [`error`]: Cross-module error classification

pub mod config;
pub mod device;
pub mod error;
pub mod feedback;
pub mod identity;
pub mod resolution;
pub mod store;
pub mod ticket;
