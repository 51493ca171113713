//! Identity boundary for technicians and employees.
//!
//! Authentication itself lives outside the crate. This module validates the
//! identifiers it yields, looks users up in the `User` collection when the
//! live session does not match the expected person, and produces the
//! explicit [`domain::Identity`] values passed into each resolution.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
