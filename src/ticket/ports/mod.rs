//! Port contracts for ticket persistence.

pub mod repository;

pub use repository::{TicketPatch, TicketRepository, TicketRepositoryError, TicketRepositoryResult};
