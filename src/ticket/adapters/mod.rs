//! Ticket repository adapters.

pub mod document;

pub use document::DocumentTicketRepository;
