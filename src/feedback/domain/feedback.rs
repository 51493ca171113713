//! Feedback records and the requests that create and complete them.

use super::{FeedbackDomainError, FeedbackId, Rating};
use crate::identity::domain::{Email, UserId};
use crate::ticket::domain::TicketId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Feedback lifecycle status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackStatus {
    /// Awaiting the employee's rating.
    #[default]
    Pending,
    /// Rated by the employee.
    Completed,
}

impl FeedbackStatus {
    /// Returns the storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }
}

/// Employee who reported the ticket and is asked for a rating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRef {
    /// Employee email address.
    pub email: Email,
    /// Employee display name.
    #[serde(default)]
    pub name: String,
}

/// Technician who resolved the ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnicianRef {
    /// Technician user identifier.
    pub uid: UserId,
    /// Technician display name.
    #[serde(default)]
    pub name: String,
    /// Technician email address.
    pub email: Email,
}

/// Ticket details copied into the feedback record at seeding time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketSnapshot {
    /// Source ticket identifier.
    pub id: TicketId,
    /// Human-readable ticket number.
    pub number: String,
    /// Description of the affected device.
    #[serde(default)]
    pub equipment: String,
    /// Problem category.
    #[serde(default)]
    pub problem_type: String,
}

/// Stored feedback record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    /// Document identifier.
    pub id: FeedbackId,
    /// Employee asked for the rating.
    pub employee: EmployeeRef,
    /// Technician being rated.
    pub technician: TechnicianRef,
    /// Ticket being rated.
    pub ticket: TicketSnapshot,
    /// Rating; [`Rating::UNRATED`] while pending.
    pub rating: Rating,
    /// Employee comment; empty until submitted.
    #[serde(default)]
    pub comment: String,
    /// Lifecycle status.
    pub status: FeedbackStatus,
    /// When the request was seeded.
    pub created_at: DateTime<Utc>,
    /// When the employee submitted the rating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Data needed to seed a pending feedback record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFeedback {
    /// Employee asked for the rating.
    pub employee: EmployeeRef,
    /// Technician being rated.
    pub technician: TechnicianRef,
    /// Ticket being rated.
    pub ticket: TicketSnapshot,
}

impl NewFeedback {
    /// Checks that employee and technician are different people.
    ///
    /// # Errors
    ///
    /// Returns [`FeedbackDomainError::SameParticipant`] when both share an
    /// email address.
    pub fn validate(&self) -> Result<(), FeedbackDomainError> {
        if self.employee.email == self.technician.email {
            return Err(FeedbackDomainError::SameParticipant(
                self.employee.email.clone(),
            ));
        }
        Ok(())
    }
}

/// Employee's rating submission.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackSubmission {
    id: FeedbackId,
    rating: Value,
    comment: Option<String>,
    user_email: String,
}

impl FeedbackSubmission {
    /// Creates a submission; `rating` is the raw form value.
    #[must_use]
    pub fn new(id: FeedbackId, rating: impl Into<Value>, user_email: impl Into<String>) -> Self {
        Self {
            id,
            rating: rating.into(),
            comment: None,
            user_email: user_email.into(),
        }
    }

    /// Sets the comment.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Returns the target feedback identifier.
    #[must_use]
    pub const fn id(&self) -> &FeedbackId {
        &self.id
    }

    /// Returns the raw rating value.
    #[must_use]
    pub const fn rating(&self) -> &Value {
        &self.rating
    }

    /// Returns the trimmed comment, empty when absent.
    #[must_use]
    pub fn comment(&self) -> &str {
        self.comment.as_deref().map(str::trim).unwrap_or_default()
    }

    /// Returns the submitting user's email as given.
    #[must_use]
    pub fn user_email(&self) -> &str {
        &self.user_email
    }
}
