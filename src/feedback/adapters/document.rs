//! Feedback repository backed by the `Feedback` collection.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use crate::config::ServiceDeskConfig;
use crate::feedback::{
    domain::{
        EmployeeRef, Feedback, FeedbackId, FeedbackStatus, FeedbackSubmission, NewFeedback,
        Rating, TechnicianRef, TicketSnapshot,
    },
    ports::{FeedbackRepository, FeedbackRepositoryError, FeedbackRepositoryResult},
};
use crate::identity::domain::Email;
use crate::store::{
    codec::{decode_document, encode_fields, encode_value, parse_timestamp},
    domain::{Collection, Document, DocumentId, Fields, Query},
    ports::DocumentStore,
};
use crate::ticket::domain::TicketId;

/// Field layout written when seeding a request.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SeedRecord<'a> {
    employee: &'a EmployeeRef,
    technician: &'a TechnicianRef,
    ticket: &'a TicketSnapshot,
    rating: Rating,
    comment: &'a str,
    status: FeedbackStatus,
    created_at: DateTime<Utc>,
}

/// Field layout read back; timestamps stay raw until normalized.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredRecord {
    id: FeedbackId,
    employee: EmployeeRef,
    technician: TechnicianRef,
    ticket: TicketSnapshot,
    #[serde(default)]
    rating: Rating,
    #[serde(default)]
    comment: String,
    #[serde(default)]
    status: FeedbackStatus,
    #[serde(default)]
    created_at: Option<Value>,
    #[serde(default)]
    completed_at: Option<Value>,
}

impl StoredRecord {
    /// Converts into a [`Feedback`], substituting `now` for a missing or
    /// unreadable creation time.
    fn into_feedback(self, now: DateTime<Utc>) -> Feedback {
        let created_at = match self.created_at.as_ref().and_then(parse_timestamp) {
            Some(created_at) => created_at,
            None => {
                tracing::warn!(
                    feedback_id = %self.id,
                    raw = ?self.created_at,
                    "feedback createdAt unreadable; substituting current time"
                );
                now
            }
        };
        Feedback {
            id: self.id,
            employee: self.employee,
            technician: self.technician,
            ticket: self.ticket,
            rating: self.rating,
            comment: self.comment,
            status: self.status,
            created_at,
            completed_at: self.completed_at.as_ref().and_then(parse_timestamp),
        }
    }
}

/// [`FeedbackRepository`] over any [`DocumentStore`].
#[derive(Debug)]
pub struct DocumentFeedbackRepository<S, C> {
    store: Arc<S>,
    clock: Arc<C>,
    pending_limit: usize,
}

impl<S, C> Clone for DocumentFeedbackRepository<S, C> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            clock: Arc::clone(&self.clock),
            pending_limit: self.pending_limit,
        }
    }
}

impl<S, C> DocumentFeedbackRepository<S, C>
where
    S: DocumentStore,
    C: Clock + Send + Sync,
{
    /// Creates a repository over `store` with the default pending cap.
    #[must_use]
    pub const fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            store,
            clock,
            pending_limit: ServiceDeskConfig::DEFAULT_PENDING_FEEDBACK_LIMIT,
        }
    }

    /// Applies the pending cap from `config`.
    #[must_use]
    pub const fn with_config(mut self, config: &ServiceDeskConfig) -> Self {
        self.pending_limit = config.pending_feedback_limit();
        self
    }

    fn decode(&self, document: &Document) -> FeedbackRepositoryResult<Feedback> {
        let record: StoredRecord = decode_document(document)?;
        Ok(record.into_feedback(self.clock.utc()))
    }

}

#[async_trait]
impl<S, C> FeedbackRepository for DocumentFeedbackRepository<S, C>
where
    S: DocumentStore,
    C: Clock + Send + Sync,
{
    async fn create_initial_feedback(&self, data: NewFeedback) -> FeedbackRepositoryResult<Feedback> {
        data.validate()
            .map_err(FeedbackRepositoryError::Validation)?;

        let created_at = self.clock.utc();
        let record = SeedRecord {
            employee: &data.employee,
            technician: &data.technician,
            ticket: &data.ticket,
            rating: Rating::UNRATED,
            comment: "",
            status: FeedbackStatus::Pending,
            created_at,
        };
        let fields = encode_fields(&record)?;
        let document_id = self.store.create(Collection::Feedback, None, fields).await?;
        tracing::info!(
            feedback_id = %document_id,
            ticket_id = %data.ticket.id,
            "pending feedback seeded"
        );

        Ok(Feedback {
            id: FeedbackId::from(&document_id),
            employee: data.employee,
            technician: data.technician,
            ticket: data.ticket,
            rating: Rating::UNRATED,
            comment: String::new(),
            status: FeedbackStatus::Pending,
            created_at,
            completed_at: None,
        })
    }

    async fn get_feedback(&self, id: &FeedbackId) -> FeedbackRepositoryResult<Option<Feedback>> {
        let document = self
            .store
            .get(Collection::Feedback, &DocumentId::from(id))
            .await?;
        document.as_ref().map(|doc| self.decode(doc)).transpose()
    }

    async fn find_by_ticket(
        &self,
        ticket_id: &TicketId,
    ) -> FeedbackRepositoryResult<Option<Feedback>> {
        let query = Query::new()
            .where_eq("ticket.id", ticket_id.as_str())
            .with_limit(1);
        let documents = self.store.query(Collection::Feedback, &query).await?;
        documents.first().map(|doc| self.decode(doc)).transpose()
    }

    async fn get_pending_feedback_by_email(
        &self,
        email: &str,
    ) -> FeedbackRepositoryResult<Vec<Feedback>> {
        if email.trim().is_empty() {
            return Err(FeedbackRepositoryError::InvalidArgument(
                "email must not be blank".to_owned(),
            ));
        }
        let employee_email = Email::new(email)
            .map_err(|err| FeedbackRepositoryError::InvalidArgument(err.to_string()))?;

        // Other writers store the address as entered, so match after reading.
        let query = Query::new().where_eq("status", FeedbackStatus::Pending.as_str());
        let documents = self.store.query(Collection::Feedback, &query).await?;
        documents
            .iter()
            .filter(|document| {
                document
                    .field("employee.email")
                    .and_then(Value::as_str)
                    .is_some_and(|raw| employee_email.matches(raw))
            })
            .take(self.pending_limit)
            .map(|document| self.decode(document))
            .collect()
    }

    async fn submit_feedback(
        &self,
        submission: FeedbackSubmission,
    ) -> FeedbackRepositoryResult<Feedback> {
        let rating = Rating::from_input(submission.rating())
            .map_err(|err| FeedbackRepositoryError::InvalidArgument(err.to_string()))?;

        let id = submission.id();
        let mut feedback = self
            .get_feedback(id)
            .await?
            .ok_or_else(|| FeedbackRepositoryError::NotFound(id.clone()))?;

        if !feedback.employee.email.matches(submission.user_email()) {
            tracing::warn!(feedback_id = %id, "feedback submitted by another user");
            return Err(FeedbackRepositoryError::PermissionDenied(id.clone()));
        }
        if feedback.status == FeedbackStatus::Completed {
            return Err(FeedbackRepositoryError::AlreadyCompleted(id.clone()));
        }

        let completed_at = self.clock.utc();
        let comment = submission.comment().to_owned();
        let mut patch = Fields::new();
        patch.insert("rating".to_owned(), encode_value(&rating)?);
        patch.insert("comment".to_owned(), Value::String(comment.clone()));
        patch.insert(
            "status".to_owned(),
            encode_value(&FeedbackStatus::Completed)?,
        );
        patch.insert("completedAt".to_owned(), encode_value(&completed_at)?);
        self.store
            .update(Collection::Feedback, &DocumentId::from(id), patch)
            .await?;
        tracing::info!(feedback_id = %id, rating = rating.value(), "feedback submitted");

        feedback.rating = rating;
        feedback.comment = comment;
        feedback.status = FeedbackStatus::Completed;
        feedback.completed_at = Some(completed_at);
        Ok(feedback)
    }
}
