//! Step definitions for ticket resolution scenarios.

pub mod given;
pub mod world;
