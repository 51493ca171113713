//! Repository port for feedback records.

use crate::error::ErrorKind;
use crate::feedback::domain::{
    Feedback, FeedbackDomainError, FeedbackId, FeedbackSubmission, NewFeedback,
};
use crate::store::ports::DocumentStoreError;
use crate::ticket::domain::TicketId;
use async_trait::async_trait;
use thiserror::Error;

/// Result type for feedback repository operations.
pub type FeedbackRepositoryResult<T> = Result<T, FeedbackRepositoryError>;

/// Feedback persistence contract.
#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    /// Seeds a pending, unrated feedback record.
    ///
    /// # Errors
    ///
    /// Returns [`FeedbackRepositoryError::Validation`] when the employee and
    /// technician share an email address.
    async fn create_initial_feedback(&self, data: NewFeedback) -> FeedbackRepositoryResult<Feedback>;

    /// Loads a feedback record.
    ///
    /// Returns `None` when the record does not exist.
    async fn get_feedback(&self, id: &FeedbackId) -> FeedbackRepositoryResult<Option<Feedback>>;

    /// Finds the feedback record seeded for a ticket.
    ///
    /// Returns `None` when the ticket has no feedback yet.
    async fn find_by_ticket(&self, ticket_id: &TicketId)
    -> FeedbackRepositoryResult<Option<Feedback>>;

    /// Lists the pending requests addressed to an employee, in store order
    /// and capped by the configured limit.
    ///
    /// # Errors
    ///
    /// Returns [`FeedbackRepositoryError::InvalidArgument`] when `email` is
    /// blank or malformed.
    async fn get_pending_feedback_by_email(
        &self,
        email: &str,
    ) -> FeedbackRepositoryResult<Vec<Feedback>>;

    /// Records the employee's rating and comment.
    ///
    /// # Errors
    ///
    /// Returns [`FeedbackRepositoryError::InvalidArgument`] for a rating
    /// outside 1 to 5, [`FeedbackRepositoryError::NotFound`] for an unknown
    /// record, [`FeedbackRepositoryError::PermissionDenied`] when the
    /// submitter is not the addressed employee, and
    /// [`FeedbackRepositoryError::AlreadyCompleted`] for a second
    /// submission.
    async fn submit_feedback(
        &self,
        submission: FeedbackSubmission,
    ) -> FeedbackRepositoryResult<Feedback>;
}

/// Errors returned by feedback repository implementations.
#[derive(Debug, Clone, Error)]
pub enum FeedbackRepositoryError {
    /// A business rule rejected the record.
    #[error(transparent)]
    Validation(FeedbackDomainError),

    /// A call parameter was malformed.
    #[error("invalid feedback argument: {0}")]
    InvalidArgument(String),

    /// The feedback record was not found.
    #[error("feedback not found: {0}")]
    NotFound(FeedbackId),

    /// The submitter is not the employee the request is addressed to.
    #[error("feedback {0} belongs to another employee")]
    PermissionDenied(FeedbackId),

    /// The feedback was already submitted.
    #[error("feedback {0} was already submitted")]
    AlreadyCompleted(FeedbackId),

    /// The document store failed.
    #[error(transparent)]
    Store(#[from] DocumentStoreError),
}

impl FeedbackRepositoryError {
    /// Returns the failure category.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) | Self::AlreadyCompleted(_) => ErrorKind::Validation,
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::PermissionDenied(_) => ErrorKind::PermissionDenied,
            Self::Store(_) => ErrorKind::Store,
        }
    }
}
