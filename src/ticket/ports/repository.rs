//! Repository port for ticket lookup and closure.

use crate::error::ErrorKind;
use crate::identity::domain::Email;
use crate::store::{domain::Fields, ports::DocumentStoreError};
use crate::ticket::domain::{Folio, Ticket, TicketClosure, TicketId};
use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Result type for ticket repository operations.
pub type TicketRepositoryResult<T> = Result<T, TicketRepositoryError>;

/// Ticket persistence contract.
#[async_trait]
pub trait TicketRepository: Send + Sync {
    /// Finds a ticket by identifier.
    ///
    /// Returns `None` when the ticket does not exist.
    async fn get_ticket(&self, id: &TicketId) -> TicketRepositoryResult<Option<Ticket>>;

    /// Finds a ticket by folio.
    ///
    /// Returns `None` when no ticket carries the folio.
    async fn get_ticket_by_folio(&self, folio: &Folio) -> TicketRepositoryResult<Option<Ticket>>;

    /// Returns the unfinished tickets assigned to a technician.
    async fn get_all_tickets_pending_for_tech(
        &self,
        email: &Email,
    ) -> TicketRepositoryResult<Vec<Ticket>>;

    /// Resolves a ticket and stamps its finish time.
    ///
    /// Closing an already-resolved ticket writes nothing and returns
    /// [`TicketClosure::AlreadyResolved`].
    ///
    /// # Errors
    ///
    /// Returns [`TicketRepositoryError::NotFound`] when the ticket does not
    /// exist.
    async fn update_ticket_finished(&self, id: &TicketId) -> TicketRepositoryResult<TicketClosure>;

    /// Patches ticket fields other than identity and resolution state.
    ///
    /// # Errors
    ///
    /// Returns [`TicketRepositoryError::InvalidArgument`] when the patch is
    /// empty or touches a reserved field, and
    /// [`TicketRepositoryError::NotFound`] when the ticket does not exist.
    async fn update_ticket_details(
        &self,
        id: &TicketId,
        patch: TicketPatch,
    ) -> TicketRepositoryResult<()>;
}

/// Field patch applied by [`TicketRepository::update_ticket_details`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TicketPatch {
    fields: Fields,
}

impl TicketPatch {
    /// Fields only the resolution workflow may write.
    pub const RESERVED_FIELDS: [&'static str; 3] = ["id", "status", "dateFinished"];

    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field.
    #[must_use]
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Returns the first reserved field the patch touches.
    #[must_use]
    pub fn reserved_field(&self) -> Option<&'static str> {
        Self::RESERVED_FIELDS
            .into_iter()
            .find(|field| self.fields.contains_key(*field))
    }

    /// Returns whether the patch sets nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the patch fields.
    #[must_use]
    pub fn into_fields(self) -> Fields {
        self.fields
    }
}

impl From<Fields> for TicketPatch {
    fn from(fields: Fields) -> Self {
        Self { fields }
    }
}

/// Errors returned by ticket repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TicketRepositoryError {
    /// The ticket was not found.
    #[error("ticket not found: {0}")]
    NotFound(TicketId),

    /// A call parameter was malformed.
    #[error("invalid ticket argument: {0}")]
    InvalidArgument(String),

    /// The document store failed.
    #[error(transparent)]
    Store(#[from] DocumentStoreError),
}

impl TicketRepositoryError {
    /// Returns the failure category.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::Store(_) => ErrorKind::Store,
        }
    }
}
