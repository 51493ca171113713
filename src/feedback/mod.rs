//! Post-resolution feedback.
//!
//! Closing a ticket seeds a pending rating request for the employee who
//! reported it. The employee later submits a rating and comment exactly
//! once.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
