//! Ticket repository backed by the `Ticket` collection.

use async_trait::async_trait;
use mockable::Clock;
use std::sync::Arc;

use crate::identity::domain::Email;
use crate::store::{
    codec::{decode_document, encode_value},
    domain::{Collection, Document, DocumentId, Fields, Query},
    ports::DocumentStore,
};
use crate::ticket::{
    domain::{Folio, Ticket, TicketClosure, TicketId},
    ports::{TicketPatch, TicketRepository, TicketRepositoryError, TicketRepositoryResult},
};

/// [`TicketRepository`] over any [`DocumentStore`].
#[derive(Debug)]
pub struct DocumentTicketRepository<S, C> {
    store: Arc<S>,
    clock: Arc<C>,
}

impl<S, C> Clone for DocumentTicketRepository<S, C> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<S, C> DocumentTicketRepository<S, C>
where
    S: DocumentStore,
    C: Clock + Send + Sync,
{
    /// Creates a repository over `store`.
    #[must_use]
    pub const fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self { store, clock }
    }
}

#[async_trait]
impl<S, C> TicketRepository for DocumentTicketRepository<S, C>
where
    S: DocumentStore,
    C: Clock + Send + Sync,
{
    async fn get_ticket(&self, id: &TicketId) -> TicketRepositoryResult<Option<Ticket>> {
        let document = self
            .store
            .get(Collection::Ticket, &DocumentId::from(id))
            .await?;
        Ok(document.as_ref().map(decode_document).transpose()?)
    }

    async fn get_ticket_by_folio(&self, folio: &Folio) -> TicketRepositoryResult<Option<Ticket>> {
        let query = Query::new().where_eq("folio", folio.as_str()).with_limit(1);
        let documents = self.store.query(Collection::Ticket, &query).await?;
        Ok(documents.first().map(decode_document).transpose()?)
    }

    async fn get_all_tickets_pending_for_tech(
        &self,
        email: &Email,
    ) -> TicketRepositoryResult<Vec<Ticket>> {
        // Assignment emails are stored as entered, so match after reading.
        let documents = self.store.query(Collection::Ticket, &Query::new()).await?;
        let mut pending = Vec::new();
        for document in documents
            .iter()
            .filter(|document| has_email(document, "assignedToEmail", email))
        {
            let ticket: Ticket = decode_document(document)?;
            if ticket.date_finished().is_none() {
                pending.push(ticket);
            }
        }
        Ok(pending)
    }

    async fn update_ticket_finished(&self, id: &TicketId) -> TicketRepositoryResult<TicketClosure> {
        let mut ticket = self
            .get_ticket(id)
            .await?
            .ok_or_else(|| TicketRepositoryError::NotFound(id.clone()))?;

        let closure = ticket.resolve(&*self.clock);
        if !closure.is_new() {
            tracing::debug!(ticket_id = %id, "ticket already resolved; close skipped");
            return Ok(closure);
        }

        let mut patch = Fields::new();
        patch.insert("status".to_owned(), encode_value(&ticket.status())?);
        patch.insert("dateFinished".to_owned(), encode_value(&ticket.date_finished())?);
        self.store
            .update(Collection::Ticket, &DocumentId::from(id), patch)
            .await?;
        tracing::info!(ticket_id = %id, folio = %ticket.folio(), "ticket resolved");
        Ok(closure)
    }

    async fn update_ticket_details(
        &self,
        id: &TicketId,
        patch: TicketPatch,
    ) -> TicketRepositoryResult<()> {
        if patch.is_empty() {
            return Err(TicketRepositoryError::InvalidArgument(
                "ticket patch must set at least one field".to_owned(),
            ));
        }
        if let Some(field) = patch.reserved_field() {
            return Err(TicketRepositoryError::InvalidArgument(format!(
                "field '{field}' cannot be patched directly"
            )));
        }

        let document_id = DocumentId::from(id);
        if self
            .store
            .get(Collection::Ticket, &document_id)
            .await?
            .is_none()
        {
            return Err(TicketRepositoryError::NotFound(id.clone()));
        }
        self.store
            .update(Collection::Ticket, &document_id, patch.into_fields())
            .await?;
        Ok(())
    }
}

fn has_email(document: &Document, path: &str, email: &Email) -> bool {
    document
        .field(path)
        .and_then(serde_json::Value::as_str)
        .is_some_and(|raw| email.matches(raw))
}
