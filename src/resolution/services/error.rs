//! Errors raised by the resolution workflow.

use crate::device::ports::DeviceRepositoryError;
use crate::error::ErrorKind;
use crate::feedback::ports::FeedbackRepositoryError;
use crate::identity::domain::UserId;
use crate::resolution::domain::{PlanError, ResolutionPhase};
use crate::ticket::domain::TicketId;
use crate::ticket::ports::TicketRepositoryError;
use thiserror::Error;

/// Result type for resolution operations.
pub type ResolutionResult<T> = Result<T, ResolutionError>;

/// Repository failure inside a workflow step.
#[derive(Debug, Clone, Error)]
pub enum StepError {
    /// Device or catalog repository failed.
    #[error(transparent)]
    Device(#[from] DeviceRepositoryError),
    /// Ticket repository failed.
    #[error(transparent)]
    Ticket(#[from] TicketRepositoryError),
    /// Feedback repository failed.
    #[error(transparent)]
    Feedback(#[from] FeedbackRepositoryError),
}

impl StepError {
    /// Returns the failure category of the underlying repository error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Device(err) => err.kind(),
            Self::Ticket(err) => err.kind(),
            Self::Feedback(err) => err.kind(),
        }
    }
}

/// Errors returned by [`TicketResolutionService`](super::TicketResolutionService).
#[derive(Debug, Clone, Error)]
pub enum ResolutionError {
    /// The plan or the stored records break a business rule. Nothing was
    /// written.
    #[error(transparent)]
    Validation(#[from] PlanError),

    /// The ticket does not exist.
    #[error("ticket not found: {0}")]
    TicketNotFound(TicketId),

    /// The ticket was resolved earlier. Nothing was written.
    #[error("ticket already resolved: {0}")]
    AlreadyResolved(TicketId),

    /// The technician is the employee who reported the ticket.
    #[error("technician {0} reported this ticket")]
    IdentityConflict(UserId),

    /// A read needed to prepare the change failed. Nothing was written.
    #[error("failed to load resolution data: {0}")]
    Lookup(#[source] StepError),

    /// Only `Closing` and `Seeding` can be resumed.
    #[error("cannot resume a resolution at {0}")]
    CannotResume(ResolutionPhase),

    /// A write phase failed after validation.
    #[error("resolution failed while {failed_at}: {source}")]
    Failed {
        /// Phase that failed.
        failed_at: ResolutionPhase,
        /// Furthest write phase that completed, if any.
        completed: Option<ResolutionPhase>,
        /// Underlying repository failure.
        #[source]
        source: StepError,
    },
}

impl ResolutionError {
    /// Returns the failure category.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) | Self::AlreadyResolved(_) => ErrorKind::Validation,
            Self::TicketNotFound(_) => ErrorKind::NotFound,
            Self::IdentityConflict(_) => ErrorKind::IdentityConflict,
            Self::CannotResume(_) => ErrorKind::InvalidArgument,
            Self::Lookup(source) | Self::Failed { source, .. } => source.kind(),
        }
    }

    /// Returns the phase a caller should pass to `resume`, if the failure
    /// left work that can be retried.
    #[must_use]
    pub fn resume_from(&self) -> Option<ResolutionPhase> {
        match self {
            Self::Failed { failed_at, .. } if failed_at.is_resumable() => Some(*failed_at),
            _ => None,
        }
    }

    /// Returns a message suitable for showing to the technician.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(err) => format!("Please check the resolution form: {err}."),
            Self::TicketNotFound(_) => "This ticket no longer exists.".to_owned(),
            Self::AlreadyResolved(_) => "This ticket has already been resolved.".to_owned(),
            Self::IdentityConflict(_) => {
                "You cannot resolve a ticket you reported yourself.".to_owned()
            }
            Self::Lookup(source) => match source.kind() {
                ErrorKind::NotFound => {
                    "A device or part in this resolution could not be found.".to_owned()
                }
                _ => "The resolution data could not be loaded. Please try again.".to_owned(),
            },
            Self::CannotResume(_) => "This resolution cannot be resumed.".to_owned(),
            Self::Failed {
                failed_at,
                completed,
                ..
            } => match completed {
                None => format!(
                    "The equipment could not be updated while {failed_at}. No changes were saved."
                ),
                Some(done) => format!(
                    "The resolution stopped while {failed_at} after {done} completed. Retry to finish it."
                ),
            },
        }
    }
}
