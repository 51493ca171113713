//! Domain model for tickets.

mod error;
mod ids;
mod ticket;

pub use error::{ParseTicketStatusError, TicketDomainError};
pub use ids::{Folio, TicketId};
pub use ticket::{Ticket, TicketClosure, TicketStatus};
