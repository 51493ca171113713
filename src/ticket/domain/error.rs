//! Error types for ticket value validation and parsing.

use thiserror::Error;

/// Errors returned while constructing ticket values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TicketDomainError {
    /// The ticket identifier is blank.
    #[error("ticket id must not be empty")]
    EmptyTicketId,

    /// The folio is blank.
    #[error("ticket folio must not be empty")]
    EmptyFolio,
}

/// Error returned while parsing ticket statuses from storage.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown ticket status: {0}")]
pub struct ParseTicketStatusError(pub String);
