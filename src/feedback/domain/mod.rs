//! Domain model for feedback records.

mod error;
mod feedback;
mod ids;
mod rating;

pub use error::FeedbackDomainError;
pub use feedback::{
    EmployeeRef, Feedback, FeedbackStatus, FeedbackSubmission, NewFeedback, TechnicianRef,
    TicketSnapshot,
};
pub use ids::FeedbackId;
pub use rating::Rating;
