//! Ticket lookup and closure.
//!
//! Tickets are raised elsewhere; this module reads them by folio or
//! technician, patches their details, and closes them exactly once when a
//! resolution completes. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
