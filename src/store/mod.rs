//! Document store boundary for the service desk.
//!
//! Records live in a remote document database that offers get-by-id,
//! equality queries, creation, and partial updates, each atomic per
//! document. This module models that database as a port so the
//! repositories in [`crate::ticket`], [`crate::device`], and
//! [`crate::feedback`] stay independent of any concrete client:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Encoding helpers in [`codec`]

pub mod adapters;
pub mod codec;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
