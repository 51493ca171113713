//! Error types for feedback validation.

use crate::identity::domain::Email;
use thiserror::Error;

/// Errors returned while validating feedback values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FeedbackDomainError {
    /// The employee and technician share an email address.
    #[error("employee and technician must differ, both are {0}")]
    SameParticipant(Email),

    /// The rating is not an integer from 1 to 5.
    #[error("rating must be an integer from 1 to 5, got {0}")]
    InvalidRating(String),

    /// The feedback identifier is blank.
    #[error("feedback id must not be empty")]
    EmptyFeedbackId,
}
